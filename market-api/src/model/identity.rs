//! Identity of a trader in the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a trader.
///
/// Every order carries one of these as a back-reference to the trader that
/// placed it. The market never owns the trader; it only hands the id back
/// alongside fill notifications. Trader names are display labels and are not
/// required to be unique, the id is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraderId(Uuid);

impl TraderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
