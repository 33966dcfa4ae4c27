use chrono::Utc;
use log::warn;
use market::{
    MarketError, MarketOrderBook, MarketQuote, Order, OrderSide, OrderType, Result, Symbol,
    TraderId,
};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A market participant's books: cash, owned positions and pending orders.
///
/// Positions and pending orders are keyed by symbol, so at most one entry of
/// each kind exists per symbol. Every operation is a synchronous state
/// transition over `&mut self`; embedding the ledger in a concurrent system
/// means one exclusive writer per trader, which the borrow rules already
/// enforce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trader {
    name: String,
    id: TraderId,
    cash_in_hand: f64,
    position: HashMap<Symbol, Order>,
    orders_placed: HashMap<Symbol, Order>,
}

impl Trader {
    pub fn new(name: impl Into<String>, cash_in_hand: f64) -> Self {
        Self {
            name: name.into(),
            id: TraderId::new(),
            cash_in_hand,
            position: HashMap::new(),
            orders_placed: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> TraderId {
        self.id
    }

    pub fn cash_in_hand(&self) -> f64 {
        self.cash_in_hand
    }

    /// Owned size of `symbol`, zero when not held.
    pub fn held_size(&self, symbol: &Symbol) -> u32 {
        self.position.get(symbol).map(Order::get_size).unwrap_or(0)
    }

    pub fn position(&self) -> &HashMap<Symbol, Order> {
        &self.position
    }

    pub fn orders_placed(&self) -> &HashMap<Symbol, Order> {
        &self.orders_placed
    }

    /// Buys `volume` units of `symbol` at the current quote, bypassing the
    /// order book.
    ///
    /// An unlisted symbol is a no-op: absence of a quote means there is
    /// nothing to price the purchase against, and no state changes.
    pub fn acquire_direct(
        &mut self,
        market: &dyn MarketQuote,
        symbol: &Symbol,
        volume: u32,
    ) -> Result<()> {
        let Some(stock) = market.get_stock_for_symbol(symbol) else {
            warn!(
                "{}: no quote for {}, direct acquisition skipped",
                self.name, symbol
            );
            return Ok(());
        };

        let price = stock.get_price();
        let cost = price * f64::from(volume);
        if cost > self.cash_in_hand {
            return Err(MarketError::InsufficientFunds {
                symbol: symbol.clone(),
                size: volume,
                cost,
                cash: self.cash_in_hand,
            });
        }

        self.cash_in_hand -= cost;
        let lot = Order::new(
            Uuid::new_v4(),
            self.id,
            symbol.clone(),
            OrderSide::Buy,
            volume,
            OrderType::Limit(price),
            Utc::now().timestamp_millis(),
        );
        self.merge_into_position(lot, price);
        Ok(())
    }

    /// Places a limit order and hands it to the market for routing.
    ///
    /// No cash or position changes here: settlement happens only when the
    /// market reports an execution via [`Trader::trade_performed`].
    pub fn place_order(
        &mut self,
        book: &mut dyn MarketOrderBook,
        symbol: &Symbol,
        volume: u32,
        price: f64,
        side: OrderSide,
    ) -> Result<()> {
        self.admit_order(book, symbol, volume, OrderType::Limit(price), side)
    }

    /// Places a market order; the price is resolved at match time.
    ///
    /// Same validation and admission path as [`Trader::place_order`].
    pub fn place_market_order(
        &mut self,
        book: &mut dyn MarketOrderBook,
        symbol: &Symbol,
        volume: u32,
        side: OrderSide,
    ) -> Result<()> {
        self.admit_order(book, symbol, volume, OrderType::Market, side)
    }

    fn admit_order(
        &mut self,
        book: &mut dyn MarketOrderBook,
        symbol: &Symbol,
        volume: u32,
        order_type: OrderType,
        side: OrderSide,
    ) -> Result<()> {
        self.validate_admission(symbol, volume, side)?;

        let order = Order::new(
            Uuid::new_v4(),
            self.id,
            symbol.clone(),
            side,
            volume,
            order_type,
            Utc::now().timestamp_millis(),
        );
        self.orders_placed.insert(symbol.clone(), order.clone());
        book.add_order(order);
        Ok(())
    }

    /// Precedence when several conditions hold at once: a held-but-too-small
    /// position wins over a duplicate pending order, and a duplicate wins
    /// over a missing holding.
    fn validate_admission(&self, symbol: &Symbol, volume: u32, side: OrderSide) -> Result<()> {
        let held = self.position.get(symbol);

        if side == OrderSide::Sell {
            if let Some(entry) = held {
                if volume > entry.get_size() {
                    return Err(MarketError::InsufficientHoldings {
                        symbol: symbol.clone(),
                        held: entry.get_size(),
                        requested: volume,
                    });
                }
            }
        }

        if self.orders_placed.contains_key(symbol) {
            return Err(MarketError::DuplicateOrder {
                symbol: symbol.clone(),
            });
        }

        if side == OrderSide::Sell && held.is_none() {
            return Err(MarketError::NoSuchHolding {
                symbol: symbol.clone(),
            });
        }

        Ok(())
    }

    /// Applies an execution notification from the market.
    ///
    /// The pending entry for the order's symbol leaves the book on any
    /// notification, full or partial fill alike. Settlement then moves cash
    /// and position. The removal is not atomic with the settlement: a sell
    /// against a vanished holding reports `UnknownOrder` after the cash
    /// credit has already landed.
    pub fn trade_performed(&mut self, order: &Order, match_price: f64) -> Result<()> {
        let symbol = order.get_symbol();
        if self.orders_placed.remove(symbol).is_none() {
            warn!(
                "{}: execution for {} did not match a pending order",
                self.name, symbol
            );
        }

        let filled = order.get_size();
        let notional = f64::from(filled) * match_price;

        match order.get_side() {
            OrderSide::Buy => {
                self.cash_in_hand -= notional;
                self.merge_into_position(order.clone(), match_price);
            }
            OrderSide::Sell => {
                self.cash_in_hand += notional;
                let Some(mut entry) = self.position.remove(symbol) else {
                    return Err(MarketError::UnknownOrder {
                        symbol: symbol.clone(),
                    });
                };
                if entry.get_size() > filled {
                    entry.set_size(entry.get_size() - filled);
                    self.position.insert(symbol.clone(), entry);
                }
                // An exhausted lot stays out of the map rather than
                // lingering at size zero.
            }
        }
        Ok(())
    }

    /// Folds a bought lot into the position map. The latest trade price is
    /// authoritative for the held lot; when the symbol is new the order
    /// itself becomes the entry.
    fn merge_into_position(&mut self, order: Order, price: f64) {
        match self.position.entry(order.get_symbol().clone()) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.set_size(entry.get_size() + order.get_size());
                entry.set_price(price);
            }
            Entry::Vacant(slot) => {
                let mut entry = order;
                entry.set_price(price);
                slot.insert(entry);
            }
        }
    }

    /// Human-readable dump of the books. Diagnostic only; symbols are sorted
    /// so the output is stable.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trader Name: {}", self.name)?;
        writeln!(f, "=====================")?;
        writeln!(f, "Cash: {:.2}", self.cash_in_hand)?;
        writeln!(f, "Stocks Owned:")?;
        for entry in by_symbol(&self.position) {
            writeln!(
                f,
                "  {} x{} @ {:.2}",
                entry.get_symbol(),
                entry.get_size(),
                entry.get_price().unwrap_or(0.0)
            )?;
        }
        writeln!(f, "Stocks Desired:")?;
        for order in by_symbol(&self.orders_placed) {
            let side = match order.get_side() {
                OrderSide::Buy => "BUY",
                OrderSide::Sell => "SELL",
            };
            match order.get_price() {
                Some(price) => writeln!(
                    f,
                    "  {} {} x{} @ {:.2}",
                    side,
                    order.get_symbol(),
                    order.get_size(),
                    price
                )?,
                None => writeln!(
                    f,
                    "  {} {} x{} @ market",
                    side,
                    order.get_symbol(),
                    order.get_size()
                )?,
            }
        }
        Ok(())
    }
}

fn by_symbol(orders: &HashMap<Symbol, Order>) -> Vec<&Order> {
    let mut entries: Vec<&Order> = orders.values().collect();
    entries.sort_by(|a, b| a.get_symbol().as_str().cmp(b.get_symbol().as_str()));
    entries
}
