//! # Profit Grid Core
//!
//! Client-side core of the Profit Grid market dashboard: look up a stock or
//! crypto ticker, view its quote, closing-price history and fundamentals,
//! and keep a per-user watchlist on the Profit Grid backend.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | REST client for `/api/v1` endpoints |
//! | [`chart`] | Closing-price series with per-window labels and trend colour |
//! | [`config`] | Base URL, timeout and session path resolution |
//! | [`domain`] | Wire models (Quote, PriceHistory, CompanyProfile, KeyMetrics) |
//! | [`error`] | Validation, API and session errors |
//! | [`format`] | Currency, percentage and thousands formatting |
//! | [`forms`] | Login / registration input checks |
//! | [`http_client`] | Transport trait with reqwest and scripted implementations |
//! | [`screens`] | View switch, analyzer and watchlist state |
//! | [`session`] | Persisted login session |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use profitgrid_core::{ApiClient, ClientConfig, Dashboard, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env();
//!     let api = ApiClient::from_config(&config);
//!     let mut dashboard = Dashboard::open(api, SessionStore::new(&config.session_path))?;
//!
//!     dashboard.search("AAPL").await;
//!     if let Some(quote) = dashboard.analyzer().quote() {
//!         println!("AAPL price: {}", profitgrid_core::format::currency(quote.price));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Screens keep the user-facing message in their own state (the backend's
//! `detail` text when it sent one) and also return the typed error:
//!
//! ```rust
//! use profitgrid_core::ApiError;
//!
//! fn describe(error: &ApiError) -> String {
//!     match error {
//!         ApiError::Status { status: 404, .. } => String::from("unknown symbol"),
//!         other => other.user_message(),
//!     }
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod forms;
pub mod http_client;
pub mod screens;
pub mod session;

pub use api::ApiClient;
pub use chart::ChartSeries;
pub use config::ClientConfig;
pub use domain::{
    ChartPeriod, CompanyProfile, KeyMetrics, LoginResponse, LooseNumber, MetricValue,
    PriceHistory, PricePoint, Quote, RegisteredUser, Symbol, Trend, WatchlistItem,
};
pub use error::{ApiError, CoreError, SessionError, ValidationError};
pub use forms::{LoginForm, RegisterForm};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ScriptedHttpClient,
};
pub use screens::{Analyzer, Dashboard, Market, View};
pub use session::{Session, SessionStore};
