use profitgrid_core::{Analyzer, ChartPeriod, Dashboard, Symbol};
use serde_json::json;

use crate::cli::AnalyzeArgs;
use crate::envelope::EnvelopeError;
use crate::error::CliError;
use crate::views;

use super::CommandResult;

pub async fn stock(args: &AnalyzeArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let period = ChartPeriod::parse(&args.period)?;
    Symbol::parse(&args.symbol)?;

    board.analyzer_mut().set_period(period);
    board.search(&args.symbol).await;
    screen_result(board.analyzer()).map(|result| result.with_view(board.view()))
}

pub async fn crypto(args: &AnalyzeArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let period = ChartPeriod::parse(&args.period)?;
    Symbol::parse_crypto_pair(&args.symbol)?;

    board.show_crypto();
    board.crypto_mut().set_period(period);
    board.search_crypto(&args.symbol).await;
    screen_result(board.crypto()).map(|result| result.with_view(board.view()))
}

/// Analyzer state as envelope data; a quote failure becomes the envelope error.
pub fn screen_result(analyzer: &Analyzer) -> Result<CommandResult, CliError> {
    let data = json!({
        "analyzer": serde_json::to_value(analyzer)?,
        "chart": serde_json::to_value(analyzer.chart())?,
    });

    let mut result = CommandResult::ok(data, views::analyzer(analyzer));
    if let Some(message) = analyzer.error() {
        result = result.with_error(EnvelopeError::new("quote_unavailable", message));
    }
    if analyzer.quote().is_some() && analyzer.history().is_empty() {
        result = result.with_warning("price history unavailable");
    }
    Ok(result)
}
