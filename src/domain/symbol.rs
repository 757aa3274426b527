use std::fmt;

use serde::Serialize;

use super::DomainError;

/// A validated ticker symbol: 1-5 uppercase ASCII letters.
///
/// Input is trimmed and uppercased before validation, so `" aapl "` parses
/// to `AAPL`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StockSymbol(String);

impl StockSymbol {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let ticker = raw.trim().to_uppercase();
        if ticker.is_empty()
            || ticker.len() > 5
            || !ticker.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(DomainError::InvalidSymbol(raw.to_string()));
        }
        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
