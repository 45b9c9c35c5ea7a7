use super::*;
use crate::catalog::seed::seed_catalog;
use crate::orders::error::{LedgerError, Machine, Resource, ValidationError};
use shared::order::{
    Courier, DeliveryInput, Discount, KitchenItemStatus, LedgerEventType, LineItemInput,
    PaymentInput, PaymentMethod, Station, TicketPriority,
};
use shared::util::MINUTE_MILLIS;

// Demo menu IDs
const BURGER: i64 = 1; // 35.90, Hambúrgueres, 15 min
const PIZZA: i64 = 2; // 45.00, Pizzas, 20 min
const COKE: i64 = 4; // 5.00, Bebidas, 2 min
const SALAD: i64 = 5; // 28.90, Saladas, 10 min

fn create_test_ledger() -> OrderLedger {
    create_test_ledger_with(LedgerSettings::default())
}

fn create_test_ledger_with(settings: LedgerSettings) -> OrderLedger {
    let catalog = CatalogService::new();
    seed_catalog(&catalog).unwrap();
    let ledger = OrderLedger::new(catalog, settings);
    ledger.seed_tables(12).unwrap();
    ledger
}

fn auto_occupy_ledger() -> OrderLedger {
    create_test_ledger_with(LedgerSettings {
        auto_occupy_tables: true,
        ..Default::default()
    })
}

fn line(menu_item_id: i64, quantity: u32) -> LineItemInput {
    LineItemInput {
        menu_item_id,
        quantity,
        notes: None,
        modifications: vec![],
    }
}

fn takeaway(items: Vec<LineItemInput>) -> OrderDraft {
    OrderDraft {
        order_type: OrderType::Takeaway,
        table_id: None,
        customer_id: None,
        items,
        notes: None,
        discount: None,
        tip: None,
        delivery: None,
    }
}

fn dine_in(table_id: i64, items: Vec<LineItemInput>) -> OrderDraft {
    OrderDraft {
        order_type: OrderType::DineIn,
        table_id: Some(table_id),
        ..takeaway(items)
    }
}

fn delivery_draft(address: &str, fee: f64, items: Vec<LineItemInput>) -> OrderDraft {
    OrderDraft {
        order_type: OrderType::Delivery,
        delivery: Some(DeliveryInput {
            address: address.to_string(),
            fee,
            estimated_minutes: None,
        }),
        ..takeaway(items)
    }
}

/// 2 × burger + 1 × coke: subtotal 76.80, tax 7.68, total 84.48
fn burger_and_coke() -> Vec<LineItemInput> {
    vec![line(BURGER, 2), line(COKE, 1)]
}

fn cash(amount: f64) -> PaymentInput {
    PaymentInput {
        method: PaymentMethod::Cash,
        amount,
        discount: None,
        tip: None,
        split_count: None,
    }
}

/// Walk the happy path up to `target`
fn advance_to(ledger: &OrderLedger, order_id: &str, target: OrderStatus) -> Order {
    let mut order = ledger.get_order(order_id).unwrap();
    while order.status != target {
        let next = order.status.successor().expect("target not reachable");
        order = ledger.update_order_status(order_id, next).unwrap();
    }
    order
}

fn event_types(ledger: &OrderLedger) -> Vec<LedgerEventType> {
    ledger
        .events_since(0)
        .into_iter()
        .map(|e| e.event_type)
        .collect()
}

mod test_core;
mod test_tables;
