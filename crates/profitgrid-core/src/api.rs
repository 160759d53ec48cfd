//! REST client for the Profit Grid backend (`/api/v1/...`).

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{
    ApiError, CompanyProfile, KeyMetrics, LoginResponse, PriceHistory, Quote, RegisteredUser,
    Symbol, WatchlistItem,
};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct NewWatchlistItem<'a> {
    symbol: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Thin client over the backend endpoints. Every call is a single request; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Client using the reqwest transport.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = encode(&Credentials { username, password })?;
        let request = HttpRequest::post(self.url("/api/v1/users/login")).with_json_body(body);
        let response = self.send(request).await?;
        decode(ensure_success(response, "Login failed.")?)
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let body = encode(&Credentials { username, password })?;
        let request = HttpRequest::post(self.url("/api/v1/users/register")).with_json_body(body);
        let response = self.send(request).await?;
        decode(ensure_success(response, "Registration failed.")?)
    }

    pub async fn quote(&self, symbol: &Symbol) -> Result<Quote, ApiError> {
        let url = self.url(&format!("/api/v1/stock/{}", segment(symbol.as_str())));
        let response = self.send(HttpRequest::get(url)).await?;
        decode(ensure_success(response, "Failed to fetch stock data.")?)
    }

    pub async fn price_history(&self, symbol: &Symbol, days: u32) -> Result<PriceHistory, ApiError> {
        let url = self.url(&format!("/api/v1/price/{}?days={days}", segment(symbol.as_str())));
        let response = self.send(HttpRequest::get(url)).await?;
        decode(ensure_success(response, "Failed to fetch price history.")?)
    }

    pub async fn company_profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ApiError> {
        let url = self.url(&format!("/api/v1/profile/{}", segment(symbol.as_str())));
        let response = self.send(HttpRequest::get(url)).await?;
        decode(ensure_success(response, "Failed to fetch company profile.")?)
    }

    pub async fn key_metrics(&self, symbol: &Symbol) -> Result<KeyMetrics, ApiError> {
        let url = self.url(&format!("/api/v1/key-metrics/{}", segment(symbol.as_str())));
        let response = self.send(HttpRequest::get(url)).await?;
        decode(ensure_success(response, "Failed to fetch key metrics.")?)
    }

    pub async fn watchlist(&self, token: &str) -> Result<Vec<WatchlistItem>, ApiError> {
        let request = HttpRequest::get(self.url("/api/v1/watchlists"))
            .with_header("content-type", "application/json")
            .with_auth(&bearer(token)?);
        let response = self.send(request).await?;
        decode(ensure_success(response, "Failed to fetch watchlist.")?)
    }

    pub async fn add_to_watchlist(
        &self,
        token: &str,
        symbol: &Symbol,
    ) -> Result<WatchlistItem, ApiError> {
        let body = encode(&NewWatchlistItem {
            symbol: symbol.as_str(),
        })?;
        let request = HttpRequest::post(self.url("/api/v1/watchlists"))
            .with_json_body(body)
            .with_auth(&bearer(token)?);
        let response = self.send(request).await?;
        decode(ensure_success(response, &format!("Failed to add {symbol}."))?)
    }

    /// `symbol` is sent exactly as the backend stored it.
    pub async fn remove_from_watchlist(&self, token: &str, symbol: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/v1/watchlists/{}", segment(symbol)));
        let request = HttpRequest::delete(url).with_auth(&bearer(token)?);
        let response = self.send(request).await?;
        ensure_success(response, &format!("Failed to remove {symbol}."))?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = request.with_timeout_ms(self.timeout_ms);
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, url = %url, "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.message().to_owned()))?;

        debug!(method, url = %url, status = response.status, "received response");
        Ok(response)
    }
}

fn bearer(token: &str) -> Result<HttpAuth, ApiError> {
    if token.trim().is_empty() {
        return Err(ApiError::NotAuthenticated);
    }
    Ok(HttpAuth::BearerToken(token.to_owned()))
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pass a 2xx response through; otherwise surface the body's `detail` string
/// or the operation's generic message.
fn ensure_success(response: HttpResponse, fallback: &str) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    Err(ApiError::Status {
        status: response.status,
        detail: error_detail(&response.body).unwrap_or_else(|| fallback.to_owned()),
    })
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}
