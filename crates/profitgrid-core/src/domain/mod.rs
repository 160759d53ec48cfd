//! # Domain Models
//!
//! Wire shapes returned by the Profit Grid backend, plus the few client-side
//! types the screens derive from them.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized ticker or crypto pair |
//! | [`ChartPeriod`] | 1M / 3M / 1Y / 5Y price-history window |
//! | [`Quote`] | Point-in-time price/volume snapshot |
//! | [`PriceHistory`] | Daily closes for a window |
//! | [`CompanyProfile`] | Company fundamentals |
//! | [`KeyMetrics`] | Annual fundamental ratios |
//! | [`WatchlistItem`] | A symbol on a user's watchlist |
//!
//! The backend is loosely typed: numeric fields sometimes arrive as strings
//! and ratios may be `"N/A"`. [`LooseNumber`] and [`MetricValue`] absorb that
//! so decoding never fails on a display-only field.

mod loose;
mod models;
mod period;
mod symbol;

pub use loose::{LooseNumber, MetricValue};
pub use models::{
    CompanyProfile, KeyMetrics, LoginResponse, PriceHistory, PricePoint, Quote, RegisteredUser,
    Trend, WatchlistItem,
};
pub use period::ChartPeriod;
pub use symbol::Symbol;
