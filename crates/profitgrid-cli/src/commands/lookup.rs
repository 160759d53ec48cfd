use profitgrid_core::{ApiClient, ChartPeriod, ChartSeries, PriceHistory, Symbol};
use serde::Serialize;

use crate::cli::{AnalyzeArgs, SymbolArgs};
use crate::envelope::EnvelopeError;
use crate::error::CliError;
use crate::views;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct HistoryData {
    period: ChartPeriod,
    days: u32,
    history: PriceHistory,
    chart: ChartSeries,
}

pub async fn quote(args: &SymbolArgs, api: &ApiClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    Ok(match api.quote(&symbol).await {
        Ok(quote) => {
            let text = views::quote(&quote);
            CommandResult::ok(serde_json::to_value(quote)?, text)
        }
        Err(error) => CommandResult::failed(EnvelopeError::from(&error)),
    })
}

pub async fn history(args: &AnalyzeArgs, api: &ApiClient) -> Result<CommandResult, CliError> {
    let period = ChartPeriod::parse(&args.period)?;
    let symbol = Symbol::parse(&args.symbol)?;

    Ok(match api.price_history(&symbol, period.days()).await {
        Ok(history) => {
            let history = history.sorted();
            let chart = ChartSeries::from_history(symbol.as_str(), &history, period);
            let text = chart.render_text();
            let data = HistoryData {
                period,
                days: period.days(),
                history,
                chart,
            };
            CommandResult::ok(serde_json::to_value(data)?, text)
        }
        Err(error) => CommandResult::failed(EnvelopeError::from(&error)),
    })
}

pub async fn profile(args: &SymbolArgs, api: &ApiClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    Ok(match api.company_profile(&symbol).await {
        Ok(profile) => {
            let text = views::profile(&profile);
            CommandResult::ok(serde_json::to_value(profile)?, text)
        }
        Err(error) => CommandResult::failed(EnvelopeError::from(&error)),
    })
}

pub async fn metrics(args: &SymbolArgs, api: &ApiClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    Ok(match api.key_metrics(&symbol).await {
        Ok(metrics) => {
            let text = views::metrics(&metrics);
            CommandResult::ok(serde_json::to_value(metrics)?, text)
        }
        Err(error) => CommandResult::failed(EnvelopeError::from(&error)),
    })
}
