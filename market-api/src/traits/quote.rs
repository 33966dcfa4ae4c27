use crate::model::stock::Stock;
use crate::model::symbol::Symbol;

/// Read side of the market: current quotes.
pub trait MarketQuote {
    /// Returns the current quote for `symbol`, or `None` when the symbol is
    /// not listed.
    fn get_stock_for_symbol(&self, symbol: &Symbol) -> Option<Stock>;
}
