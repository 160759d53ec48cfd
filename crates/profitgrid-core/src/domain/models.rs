use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::{LooseNumber, MetricValue, ValidationError};

/// Point-in-time quote returned by `GET /api/v1/stock/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub change: LooseNumber,
    #[serde(default)]
    pub change_percent: String,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub open_price: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub previous_close: LooseNumber,
    #[serde(default)]
    pub last_updated: String,
}

impl Quote {
    /// Today's move is shown as a gain when the change is zero or positive.
    pub fn change_trend(&self) -> Trend {
        if self.change.value_or_zero() >= 0.0 {
            Trend::Gain
        } else {
            Trend::Loss
        }
    }
}

/// Direction of a price move, rendered green or red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Gain,
    Loss,
}

impl Trend {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Gain => "green",
            Self::Loss => "red",
        }
    }
}

/// Single daily close from the price-history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

impl PricePoint {
    /// Calendar day of this point. Only the leading `YYYY-MM-DD` part is read.
    pub fn day(&self) -> Result<Date, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            value: self.date.clone(),
        };
        let prefix = self.date.get(..10).ok_or_else(invalid)?;
        Date::parse(prefix, format_description!("[year]-[month]-[day]")).map_err(|_| invalid())
    }
}

/// Response of `GET /api/v1/price/{symbol}?days=N`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_requested: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_returned: Option<u32>,
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(prices: Vec<PricePoint>) -> Self {
        Self {
            prices,
            ..Self::default()
        }
    }

    /// Copy with points in ascending date order; undated points sort first.
    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.prices.sort_by_key(|point| point.day().ok());
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.prices.first().map(|point| point.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.prices.last().map(|point| point.close)
    }

    /// True when the period nets a loss: the last close is below the first.
    pub fn is_loss(&self) -> bool {
        match (self.first_close(), self.last_close()) {
            (Some(first), Some(last)) if self.prices.len() > 1 => last < first,
            _ => false,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.is_loss() {
            Trend::Loss
        } else {
            Trend::Gain
        }
    }
}

/// Response of `GET /api/v1/profile/{symbol}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    pub exchange: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub ceo: Option<String>,
    pub website: Option<String>,
    pub full_time_employees: Option<LooseNumber>,
    pub country: Option<String>,
    pub ipo_date: Option<String>,
    pub market_cap: Option<LooseNumber>,
}

/// Response of `GET /api/v1/key-metrics/{symbol}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMetrics {
    pub date: Option<String>,
    pub eps: MetricValue,
    pub pe_ratio: MetricValue,
    pub revenue_per_share: MetricValue,
    pub net_income_per_share: MetricValue,
    pub current_ratio: MetricValue,
    pub debt_to_equity: MetricValue,
    pub dividend_yield: MetricValue,
}

/// Watchlist row owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: i64,
    pub symbol: String,
    pub user_id: i64,
}

/// Response of `POST /api/v1/users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub username: String,
}

/// Public user returned by `POST /api/v1/users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint {
            date: date.to_owned(),
            close,
            volume: None,
            high: None,
            low: None,
        }
    }

    #[test]
    fn decodes_backend_quote_with_string_fields() {
        let body = r#"{
            "symbol": "AAPL", "price": 189.98, "change": "-1.2300",
            "change_percent": "-0.6433%", "last_updated": "2024-05-10",
            "open_price": 190.5, "high": 191.2, "low": 188.9,
            "volume": 51234567, "previous_close": "191.2100"
        }"#;
        let quote: Quote = serde_json::from_str(body).expect("decodes");

        assert_eq!(quote.change.value(), Some(-1.23));
        assert_eq!(quote.previous_close.value(), Some(191.21));
        assert_eq!(quote.change_trend(), Trend::Loss);
    }

    #[test]
    fn sorting_orders_points_by_date() {
        let history = PriceHistory::new(vec![
            point("2024-03-01", 12.0),
            point("2024-01-01", 10.0),
            point("2024-02-01", 11.0),
        ]);
        let sorted = history.sorted();
        let dates: Vec<&str> = sorted.prices.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn loss_compares_last_close_with_first() {
        let falling = PriceHistory::new(vec![point("2024-01-01", 10.0), point("2024-01-02", 9.5)]);
        let flat = PriceHistory::new(vec![point("2024-01-01", 10.0), point("2024-01-02", 10.0)]);
        assert!(falling.is_loss());
        assert_eq!(falling.trend(), Trend::Loss);
        assert!(!flat.is_loss());
        assert_eq!(flat.trend(), Trend::Gain);
    }

    #[test]
    fn short_histories_never_report_a_loss() {
        assert!(!PriceHistory::default().is_loss());
        assert!(!PriceHistory::new(vec![point("2024-01-01", 10.0)]).is_loss());
    }

    #[test]
    fn point_day_reads_date_prefix() {
        let day = point("2024-01-05 16:00:00", 1.0).day().expect("parses");
        assert_eq!(day.to_string(), "2024-01-05");
        assert!(point("yesterday", 1.0).day().is_err());
    }

    #[test]
    fn key_metrics_tolerate_missing_fields() {
        let metrics: KeyMetrics =
            serde_json::from_str(r#"{"date": "2023-09-30", "eps": "6.13"}"#).expect("decodes");
        assert_eq!(metrics.eps, MetricValue::Value(6.13));
        assert_eq!(metrics.pe_ratio, MetricValue::NotAvailable);
    }
}
