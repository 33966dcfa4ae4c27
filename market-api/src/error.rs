use crate::model::symbol::Symbol;
use thiserror::Error;

/// Failures raised by trader-side bookkeeping.
///
/// All of these are synchronous and caller-visible; nothing is retried
/// internally. Retry or backoff, if any, belongs to the market layer.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Direct acquisition cost exceeds the cash in hand.
    #[error("not enough cash for {size} x {symbol}: cost {cost:.2} exceeds {cash:.2}")]
    InsufficientFunds {
        symbol: Symbol,
        size: u32,
        cost: f64,
        cash: f64,
    },

    /// A pending order for this symbol is already outstanding.
    #[error("an order for {symbol} has already been placed")]
    DuplicateOrder { symbol: Symbol },

    /// Sell size exceeds the owned size.
    #[error("cannot sell {requested} of {symbol}: only {held} held")]
    InsufficientHoldings {
        symbol: Symbol,
        held: u32,
        requested: u32,
    },

    /// Sell requested for a symbol the trader does not hold.
    #[error("no holding of {symbol} to sell")]
    NoSuchHolding { symbol: Symbol },

    /// Settlement could not resolve the order's symbol against the ledger.
    #[error("settlement cannot resolve {symbol} against the ledger")]
    UnknownOrder { symbol: Symbol },
}

/// A specialized Result type for ledger operations.
pub type Result<T> = std::result::Result<T, MarketError>;
