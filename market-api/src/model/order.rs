//! Order model.
//!
//! An `Order` is both a request resident in the market's book and, reused
//! buy-side, a position entry in the owning trader's ledger.

use crate::model::identity::TraderId;
use crate::model::symbol::Symbol;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Pricing of an order.
///
/// `Market` doubles as the "price not yet resolved" sentinel: the effective
/// price is only known once the market reports an execution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit(f64),
}

/// A request to buy or sell a quantity of one symbol.
///
/// Size and price are mutable: fills and partial settlements shrink or grow
/// the size, and settlement overwrites the price with the match price. An
/// order whose size would drop to zero is removed from its owning
/// collection, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    trader: TraderId,
    symbol: Symbol,
    side: OrderSide,
    size: u32,
    order_type: OrderType,
    timestamp: i64,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique order id.
    /// * `trader` - Id of the trader placing the order.
    /// * `symbol` - The security to trade.
    /// * `side` - Buy or sell.
    /// * `size` - Number of units; positive while the order is live.
    /// * `order_type` - Limit price, or `Market` for resolve-at-match.
    /// * `timestamp` - Creation time (unix millis).
    pub fn new(
        id: Uuid,
        trader: TraderId,
        symbol: Symbol,
        side: OrderSide,
        size: u32,
        order_type: OrderType,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            trader,
            symbol,
            side,
            size,
            order_type,
            timestamp,
        }
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_trader(&self) -> TraderId {
        self.trader
    }

    pub fn get_symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn get_side(&self) -> OrderSide {
        self.side
    }

    pub fn get_size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    pub fn get_order_type(&self) -> OrderType {
        self.order_type
    }

    /// The resolved price, or `None` for a market order that has not matched
    /// yet.
    pub fn get_price(&self) -> Option<f64> {
        match self.order_type {
            OrderType::Limit(price) => Some(price),
            OrderType::Market => None,
        }
    }

    /// Overwrites the price with the latest trade price, resolving a market
    /// order in the process.
    pub fn set_price(&mut self, price: f64) {
        self.order_type = OrderType::Limit(price);
    }

    pub fn is_market(&self) -> bool {
        matches!(self.order_type, OrderType::Market)
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }
}
