use crate::cli::OutputFormat;
use crate::commands::Outcome;
use crate::envelope::Envelope;
use crate::error::CliError;

pub fn render(outcome: &Outcome, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => println!("{}", to_json(&outcome.envelope, pretty)?),
        OutputFormat::Table => println!("{}", to_table(outcome)),
    }

    Ok(())
}

pub fn to_json(envelope: &Envelope, pretty: bool) -> Result<String, CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    Ok(payload)
}

/// Screen text followed by any warnings. Errors are already part of the text.
pub fn to_table(outcome: &Outcome) -> String {
    let mut lines = vec![outcome.text.trim_end().to_owned()];

    let warnings = &outcome.envelope.meta.warnings;
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push(String::from("warnings:"));
        lines.extend(warnings.iter().map(|warning| format!("  - {warning}")));
    }

    lines.join("\n")
}
