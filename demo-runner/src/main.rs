use anyhow::Result;
use clap::Parser;
use log::info;
use market::{OrderSide, Symbol};
use trader_ledger::{PaperMarket, Trader};

/// Walks one trader through a direct acquisition, a resting sell order and
/// its settlement against a paper market.
#[derive(Parser)]
struct Args {
    /// Display name of the trader.
    #[arg(long, default_value = "Alice")]
    name: String,

    /// Starting cash.
    #[arg(long, default_value_t = 1000.0)]
    cash: f64,

    /// Dump the final ledger state as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut market = PaperMarket::new();
    let abc = Symbol::new("ABC");
    market.set_quote(abc.clone(), 5.0);

    let mut trader = Trader::new(args.name.as_str(), args.cash);

    trader.acquire_direct(&market, &abc, 10)?;
    info!("{} acquired 10 ABC at the quoted price", trader.name());

    trader.place_order(&mut market, &abc, 5, 6.0, OrderSide::Sell)?;
    info!("sell order resting in the book");

    market.execute(&abc, 6.0, &mut trader)?;
    info!("sell order settled at 6.00");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trader)?);
    } else {
        print!("{}", trader.report());
    }

    Ok(())
}
