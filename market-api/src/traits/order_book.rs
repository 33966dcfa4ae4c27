use crate::model::order::Order;

/// Write side of the market: accepts pending orders for routing.
pub trait MarketOrderBook: Send {
    /// Called when a trader admits a new pending order.
    ///
    /// Routing is assumed to succeed. Fills are reported back to the owning
    /// trader through its `trade_performed` entry point, once per execution.
    fn add_order(&mut self, order: Order);
}

impl MarketOrderBook for Box<dyn MarketOrderBook> {
    fn add_order(&mut self, order: Order) {
        (**self).add_order(order)
    }
}
