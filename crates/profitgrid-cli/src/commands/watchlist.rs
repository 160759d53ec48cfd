use profitgrid_core::{Dashboard, Symbol};
use serde_json::json;

use crate::cli::SymbolArgs;
use crate::error::CliError;
use crate::views;

use super::analyze::screen_result;
use super::{surface, CommandResult};

pub async fn list(board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let result = match board.open_watchlist().await {
        Ok(items) => {
            let text = views::watchlist(items);
            CommandResult::ok(json!({ "items": serde_json::to_value(items)? }), text)
        }
        Err(error) => CommandResult::failed(surface(error)?),
    };
    Ok(result.with_view(board.view()))
}

pub async fn add(args: &SymbolArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    Symbol::parse(&args.symbol)?;

    let result = match board.add_to_watchlist(&args.symbol).await {
        Ok(item) => {
            let text = format!("Added {} to your watchlist.", item.symbol);
            CommandResult::ok(serde_json::to_value(item)?, text)
        }
        Err(error) => CommandResult::failed(surface(error)?),
    };
    Ok(result.with_view(board.view()))
}

/// Load the watchlist first so the row's stored spelling is the one deleted.
pub async fn remove(args: &SymbolArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    Symbol::parse(&args.symbol)?;

    if let Err(error) = board.open_watchlist().await.map(|_| ()) {
        let result = CommandResult::failed(surface(error)?);
        return Ok(result.with_view(board.view()));
    }

    let result = match board.remove_from_watchlist(&args.symbol).await {
        Ok(symbol) => {
            let text = format!("Removed {symbol} from your watchlist.");
            CommandResult::ok(json!({ "removed": symbol }), text)
        }
        Err(error) => CommandResult::failed(surface(error)?),
    };
    Ok(result.with_view(board.view()))
}

/// Load the watchlist, then pick one of its symbols into the analyzer.
pub async fn open(args: &SymbolArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let loaded = board
        .open_watchlist()
        .await
        .map(|items| items.iter().any(|item| item.symbol == symbol.as_str()));
    let listed = match loaded {
        Ok(listed) => listed,
        Err(error) => {
            let result = CommandResult::failed(surface(error)?);
            return Ok(result.with_view(board.view()));
        }
    };

    board.select_watchlist_symbol(symbol.as_str()).await;
    let mut result = screen_result(board.analyzer())?.with_view(board.view());
    if !listed {
        result = result.with_warning(format!("{symbol} is not on your watchlist"));
    }
    Ok(result)
}
