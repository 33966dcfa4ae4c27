pub mod ledger;
pub mod paper;

pub use ledger::Trader;
pub use paper::PaperMarket;
