//! Paper trading venue: a quote table plus a resting-order store.
//!
//! Stands in for the real market in demos and tests. There is no matching
//! logic here: fills are triggered explicitly at a caller-chosen price, and
//! the notification is delivered straight back to the owning trader.

use log::{info, warn};
use market::{MarketOrderBook, MarketQuote, Order, Result, Stock, Symbol};
use std::collections::HashMap;

use crate::ledger::Trader;

/// In-process stand-in for the market.
#[derive(Debug)]
pub struct PaperMarket {
    quotes: HashMap<Symbol, Stock>,
    resting: Vec<Order>,
}

impl PaperMarket {
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
            resting: Vec::new(),
        }
    }

    /// Publishes or updates the quote for `symbol`.
    pub fn set_quote(&mut self, symbol: Symbol, price: f64) {
        self.quotes.insert(symbol.clone(), Stock::new(symbol, price));
    }

    /// Orders currently resting in the book.
    pub fn resting(&self) -> &[Order] {
        &self.resting
    }

    /// Executes the resting order for `symbol` at `match_price`, delivering
    /// the notification to the owning trader.
    ///
    /// Returns whether a resting order was found; settlement failures
    /// surface from the trader's ledger.
    pub fn execute(
        &mut self,
        symbol: &Symbol,
        match_price: f64,
        trader: &mut Trader,
    ) -> Result<bool> {
        let Some(idx) = self.resting.iter().position(|o| o.get_symbol() == symbol) else {
            warn!("no resting order for {}", symbol);
            return Ok(false);
        };

        let order = self.resting.remove(idx);
        info!(
            "executing {} x{} @ {:.2}",
            symbol,
            order.get_size(),
            match_price
        );
        trader.trade_performed(&order, match_price)?;
        Ok(true)
    }
}

impl Default for PaperMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketQuote for PaperMarket {
    fn get_stock_for_symbol(&self, symbol: &Symbol) -> Option<Stock> {
        self.quotes.get(symbol).cloned()
    }
}

impl MarketOrderBook for PaperMarket {
    fn add_order(&mut self, order: Order) {
        info!(
            "order book accepts {:?} {} x{}",
            order.get_side(),
            order.get_symbol(),
            order.get_size()
        );
        self.resting.push(order);
    }
}
