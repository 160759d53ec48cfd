use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const CRYPTO_QUOTE_CURRENCY: &str = "USD";

/// Normalized stock ticker or crypto pair (e.g. `AAPL`, `BTCUSD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trim and upper-case. Anything non-empty is passed on; the backend
    /// decides whether the ticker exists.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Parse a crypto ticker, expanding a bare coin (`BTC`) to its USD pair.
    pub fn parse_crypto_pair(input: &str) -> Result<Self, ValidationError> {
        let symbol = Self::parse(input)?;
        if symbol.0.ends_with(CRYPTO_QUOTE_CURRENCY) || symbol.0.contains(':') {
            return Ok(symbol);
        }

        Self::parse(&format!("{}{CRYPTO_QUOTE_CURRENCY}", symbol.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" aapl ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "AAPL");
    }

    #[test]
    fn empty_input_asks_for_a_symbol() {
        let err = Symbol::parse("   ").expect_err("must fail");
        assert_eq!(err.to_string(), "Please enter a stock symbol.");
    }

    #[test]
    fn exchange_suffixed_and_index_tickers_pass_through() {
        for (input, expected) in [
            ("0700.hk", "0700.HK"),
            ("600519.SS", "600519.SS"),
            ("^gspc", "^GSPC"),
            ("brk-b", "BRK-B"),
        ] {
            let parsed = Symbol::parse(input).expect("non-empty input parses");
            assert_eq!(parsed.as_str(), expected);
        }
    }

    #[test]
    fn digit_leading_coin_still_expands() {
        let parsed = Symbol::parse_crypto_pair("1inch").expect("parses");
        assert_eq!(parsed.as_str(), "1INCHUSD");
    }

    #[test]
    fn accepts_exchange_prefixed_symbols() {
        let parsed = Symbol::parse("nasdaq:aapl").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "NASDAQ:AAPL");
    }

    #[test]
    fn bare_coin_expands_to_usd_pair() {
        assert_eq!(Symbol::parse_crypto_pair("btc").unwrap().as_str(), "BTCUSD");
        assert_eq!(
            Symbol::parse_crypto_pair("ETHUSD").unwrap().as_str(),
            "ETHUSD"
        );
    }
}
