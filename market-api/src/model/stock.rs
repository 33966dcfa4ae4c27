//! Quoted instrument model.

use crate::model::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A listed security together with its current market price.
///
/// This is what a quote lookup hands back; the price is a snapshot, not a
/// subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    symbol: Symbol,
    price: f64,
}

impl Stock {
    /// Creates a new Stock.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol.
    /// * `price` - The current market price, non-negative.
    pub fn new(symbol: Symbol, price: f64) -> Self {
        Self { symbol, price }
    }

    pub fn get_symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn get_price(&self) -> f64 {
        self.price
    }
}
