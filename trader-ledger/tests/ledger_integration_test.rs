use market::{OrderSide, Symbol};
use trader_ledger::{PaperMarket, Trader};

#[test]
fn full_round_trip_through_the_paper_market() {
    let mut market = PaperMarket::new();
    let abc = Symbol::new("ABC");
    market.set_quote(abc.clone(), 5.0);

    let mut alice = Trader::new("Alice", 1000.0);
    alice.acquire_direct(&market, &abc, 10).unwrap();
    assert!((alice.cash_in_hand() - 950.0).abs() < 1e-9);

    alice
        .place_order(&mut market, &abc, 5, 6.0, OrderSide::Sell)
        .unwrap();
    assert_eq!(market.resting().len(), 1);

    let executed = market.execute(&abc, 6.0, &mut alice).unwrap();
    assert!(executed);

    assert!((alice.cash_in_hand() - 980.0).abs() < 1e-9);
    assert_eq!(alice.held_size(&abc), 5);
    assert!(alice.orders_placed().is_empty());
    assert!(market.resting().is_empty());
}

#[test]
fn market_order_resolves_price_at_match() {
    let mut market = PaperMarket::new();
    let xyz = Symbol::new("XYZ");
    market.set_quote(xyz.clone(), 2.0);

    let mut bob = Trader::new("Bob", 50.0);
    bob.place_market_order(&mut market, &xyz, 10, OrderSide::Buy)
        .unwrap();
    assert!(market.resting()[0].is_market());

    market.execute(&xyz, 2.5, &mut bob).unwrap();

    assert!((bob.cash_in_hand() - 25.0).abs() < 1e-9);
    let entry = bob.position().get(&xyz).unwrap();
    assert_eq!(entry.get_size(), 10);
    assert_eq!(entry.get_price(), Some(2.5));
}

#[test]
fn executing_a_symbol_with_no_resting_order_reports_no_fill() {
    let mut market = PaperMarket::new();
    let mut bob = Trader::new("Bob", 50.0);

    let executed = market
        .execute(&Symbol::new("NOPE"), 1.0, &mut bob)
        .unwrap();

    assert!(!executed);
    assert_eq!(bob.cash_in_hand(), 50.0);
}
