use crate::model::identity::TraderId;
use crate::model::order::{Order, OrderSide, OrderType};
use crate::model::symbol::Symbol;
use uuid::Uuid;

fn sample_order(order_type: OrderType) -> Order {
    Order::new(
        Uuid::new_v4(),
        TraderId::new(),
        Symbol::new("AAPL"),
        OrderSide::Buy,
        10,
        order_type,
        0,
    )
}

#[test]
fn test_market_order_price_resolves_at_match() {
    let mut order = sample_order(OrderType::Market);
    assert!(order.is_market());
    assert_eq!(order.get_price(), None);

    order.set_price(151.25);
    assert!(!order.is_market());
    assert_eq!(order.get_price(), Some(151.25));
}

#[test]
fn test_limit_order_carries_its_price() {
    let order = sample_order(OrderType::Limit(150.0));
    assert_eq!(order.get_price(), Some(150.0));
}

#[test]
fn test_order_serialization() {
    let order = sample_order(OrderType::Limit(150.0));
    let json = serde_json::to_string(&order).unwrap();
    println!("Serialized Order: {}", json);
    assert!(json.contains("\"symbol\":\"AAPL\""));
    assert!(json.contains("\"side\":\"Buy\""));
}
