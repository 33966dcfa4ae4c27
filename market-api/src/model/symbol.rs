//! Ticker symbol identifying one listed security.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ticker symbol of a listed security (e.g. "AAPL").
///
/// Both per-trader collections (position, pending orders) are keyed by this
/// type, so "at most one entry per symbol" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
