use serde::Serialize;
use tracing::{debug, warn};

use crate::chart::ChartSeries;
use crate::{
    ApiClient, ApiError, ChartPeriod, CompanyProfile, KeyMetrics, PriceHistory, Quote, Symbol,
};

/// Which market an analyzer screen searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    Stock,
    Crypto,
}

/// State of one search screen: the quote plus whatever secondary data loaded.
///
/// Only the quote can fail the screen. Profile, key metrics and price history
/// fall back to empty when their fetch fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analyzer {
    market: Market,
    symbol: Option<Symbol>,
    period: ChartPeriod,
    error: Option<String>,
    quote: Option<Quote>,
    profile: Option<CompanyProfile>,
    metrics: Option<KeyMetrics>,
    history: PriceHistory,
}

impl Analyzer {
    pub fn new(market: Market) -> Self {
        Self {
            market,
            symbol: None,
            period: ChartPeriod::default(),
            error: None,
            quote: None,
            profile: None,
            metrics: None,
            history: PriceHistory::default(),
        }
    }

    pub fn stock() -> Self {
        Self::new(Market::Stock)
    }

    pub fn crypto() -> Self {
        Self::new(Market::Crypto)
    }

    pub fn market(&self) -> Market {
        self.market
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn period(&self) -> ChartPeriod {
        self.period
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn profile(&self) -> Option<&CompanyProfile> {
        self.profile.as_ref()
    }

    pub fn metrics(&self) -> Option<&KeyMetrics> {
        self.metrics.as_ref()
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn chart(&self) -> Option<ChartSeries> {
        let symbol = self.symbol.as_ref()?;
        self.quote.as_ref()?;
        Some(ChartSeries::from_history(
            symbol.as_str(),
            &self.history,
            self.period,
        ))
    }

    /// Select the window used by the next search without fetching.
    pub fn set_period(&mut self, period: ChartPeriod) {
        self.period = period;
    }

    /// Look up `input` and load everything the screen shows.
    pub async fn search(&mut self, api: &ApiClient, input: &str) {
        self.clear_results();

        let parsed = match self.market {
            Market::Stock => Symbol::parse(input),
            Market::Crypto => Symbol::parse_crypto_pair(input),
        };
        let symbol = match parsed {
            Ok(symbol) => symbol,
            Err(error) => {
                self.error = Some(error.to_string());
                return;
            }
        };
        self.symbol = Some(symbol.clone());

        match api.quote(&symbol).await {
            Ok(quote) => self.quote = Some(quote),
            Err(error) => {
                debug!(symbol = %symbol, error = %error, "quote lookup failed");
                self.error = Some(error.user_message());
                return;
            }
        }

        if self.market == Market::Stock {
            self.profile = optional(api.company_profile(&symbol).await, &symbol, "company profile");
            self.metrics = optional(api.key_metrics(&symbol).await, &symbol, "key metrics");
        }
        self.load_history(api, &symbol).await;
    }

    /// Switch the chart window and refetch only the price history.
    pub async fn change_period(&mut self, api: &ApiClient, period: ChartPeriod) {
        self.period = period;
        if let Some(symbol) = self.symbol.clone() {
            if self.quote.is_some() {
                self.load_history(api, &symbol).await;
            }
        }
    }

    async fn load_history(&mut self, api: &ApiClient, symbol: &Symbol) {
        self.history = optional(
            api.price_history(symbol, self.period.days()).await,
            symbol,
            "price history",
        )
        .map(|history| history.sorted())
        .unwrap_or_default();
    }

    fn clear_results(&mut self) {
        self.symbol = None;
        self.error = None;
        self.quote = None;
        self.profile = None;
        self.metrics = None;
        self.history = PriceHistory::default();
    }
}

fn optional<T>(result: Result<T, ApiError>, symbol: &Symbol, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(symbol = %symbol, error = %error, "{what} unavailable");
            None
        }
    }
}
