//! CLI argument definitions for Profit Grid.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `login` / `register` / `logout` / `whoami` | Account and session |
//! | `analyze` | Quote, fundamentals and price chart for a stock |
//! | `crypto` | Quote and price chart for a crypto pair |
//! | `quote` / `history` / `profile` / `metrics` | Single endpoint lookups |
//! | `watchlist` | List, add, remove or open watchlist symbols |
//!
//! # Examples
//!
//! ```bash
//! PROFITGRID_PASSWORD=secret1 profitgrid login --username ada
//! profitgrid analyze AAPL --period 1y --format table
//! profitgrid watchlist add MSFT
//! profitgrid watchlist open MSFT
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Profit Grid - market dashboard in the terminal
#[derive(Debug, Parser)]
#[command(
    name = "profitgrid",
    author,
    version,
    about = "Stock and crypto dashboard backed by the Profit Grid API",
    long_about = "Look up quotes, closing-price history and company fundamentals, \
and manage a personal watchlist stored on the Profit Grid backend.\n\
\n\
The login session is kept in a local file between runs."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Backend base URL (overrides PROFITGRID_API_BASE_URL).
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Request timeout in milliseconds (overrides PROFITGRID_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Session file location (overrides PROFITGRID_SESSION_FILE).
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dashboard text.
    Table,
    /// Single JSON envelope.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),

    /// Create an account. Passwords need 6+ characters, usernames 3+.
    Register(RegisterArgs),

    /// Forget the stored session.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Quote, company profile, key metrics and price chart for a stock.
    ///
    ///   profitgrid analyze AAPL
    ///   profitgrid analyze TSLA --period 5y --format table
    Analyze(AnalyzeArgs),

    /// Quote and price chart for a crypto pair (BTC is read as BTCUSD).
    Crypto(AnalyzeArgs),

    /// Latest quote for a symbol.
    Quote(SymbolArgs),

    /// Daily closes for a symbol over a window.
    History(AnalyzeArgs),

    /// Company profile for a symbol.
    Profile(SymbolArgs),

    /// Key financial metrics for a symbol.
    Metrics(SymbolArgs),

    /// Manage the watchlist (requires login).
    Watchlist(WatchlistArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    /// Prefer PROFITGRID_PASSWORD so the password stays out of shell history.
    #[arg(long, env = "PROFITGRID_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long, env = "PROFITGRID_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Must match --password.
    #[arg(long, env = "PROFITGRID_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Ticker symbol (e.g. AAPL, BTCUSD).
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol (e.g. AAPL, BTCUSD).
    pub symbol: String,

    /// Chart window: 1m, 3m, 1y or 5y.
    #[arg(long, default_value = "1m")]
    pub period: String,
}

#[derive(Debug, Args)]
pub struct WatchlistArgs {
    #[command(subcommand)]
    pub command: WatchlistCommand,
}

#[derive(Debug, Subcommand)]
pub enum WatchlistCommand {
    /// Show every symbol on the watchlist.
    List,
    /// Add a symbol.
    Add(SymbolArgs),
    /// Remove a symbol.
    Remove(SymbolArgs),
    /// Open a watchlist symbol in the analyzer.
    Open(SymbolArgs),
}
