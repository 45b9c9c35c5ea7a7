use super::*;

#[test]
fn test_create_order_totals() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.subtotal, 76.80);
    assert_eq!(order.discount, 0.0);
    assert_eq!(order.tax, 7.68);
    assert_eq!(order.tip, 0.0);
    assert_eq!(order.total, 84.48);
    assert_eq!(order.created_at, order.updated_at);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].unit_price, 35.90);
    assert!(order.items.iter().all(|i| i.status == LineItemStatus::Pending));

    assert_eq!(ledger.get_order(&order.id).unwrap(), order);
}

#[test]
fn test_create_order_with_discount_and_tip() {
    let ledger = create_test_ledger();
    let mut draft = takeaway(burger_and_coke());
    draft.discount = Some(Discount::percentage(10.0));
    draft.tip = Some(5.0);

    let order = ledger.create_order(draft).unwrap();
    // 76.80 - 7.68 = 69.12; tax 6.912 → 6.91; tip untaxed
    assert_eq!(order.discount, 7.68);
    assert_eq!(order.tax, 6.91);
    assert_eq!(order.tip, 5.0);
    assert_eq!(order.total, 81.03);
}

#[test]
fn test_fixed_discount_larger_than_subtotal() {
    let ledger = create_test_ledger();
    let mut draft = takeaway(vec![line(COKE, 1)]);
    draft.discount = Some(Discount::fixed(50.0));

    let order = ledger.create_order(draft).unwrap();
    assert_eq!(order.discount, 5.0);
    assert_eq!(order.tax, 0.0);
    assert_eq!(order.total, 0.0);
}

#[test]
fn test_empty_order_rejected_without_side_effects() {
    let ledger = create_test_ledger();
    let result = ledger.create_order(takeaway(vec![]));

    assert_eq!(result, Err(LedgerError::Validation(ValidationError::EmptyOrder)));
    assert!(ledger.all_orders().is_empty());
    assert!(ledger.events_since(0).is_empty());
}

#[test]
fn test_dine_in_requires_existing_table() {
    let ledger = create_test_ledger();

    let mut draft = dine_in(1, burger_and_coke());
    draft.table_id = None;
    assert_eq!(
        ledger.create_order(draft),
        Err(LedgerError::Validation(ValidationError::TableRequired))
    );

    assert_eq!(
        ledger.create_order(dine_in(99, burger_and_coke())),
        Err(LedgerError::not_found(Resource::Table, 99))
    );

    let order = ledger.create_order(dine_in(3, burger_and_coke())).unwrap();
    assert_eq!(order.table_id, Some(3));
    assert_eq!(order.table_number, Some(3));
}

#[test]
fn test_unknown_and_unavailable_menu_items() {
    let ledger = create_test_ledger();

    assert_eq!(
        ledger.create_order(takeaway(vec![line(BURGER, 1), line(999, 1)])),
        Err(LedgerError::not_found(Resource::MenuItem, 999))
    );

    ledger.catalog().set_menu_item_availability(PIZZA, false).unwrap();
    assert_eq!(
        ledger.create_order(takeaway(vec![line(PIZZA, 1)])),
        Err(LedgerError::Validation(ValidationError::MenuItemUnavailable(
            "Pizza Margherita".to_string()
        )))
    );
    assert!(ledger.all_orders().is_empty());
}

#[test]
fn test_unknown_customer_rejected() {
    let ledger = create_test_ledger();
    let mut draft = takeaway(burger_and_coke());
    draft.customer_id = Some(42);
    assert_eq!(
        ledger.create_order(draft),
        Err(LedgerError::not_found(Resource::Customer, 42))
    );

    let mut draft = takeaway(burger_and_coke());
    draft.customer_id = Some(1);
    assert_eq!(ledger.create_order(draft).unwrap().customer_id, Some(1));
}

#[test]
fn test_menu_edits_do_not_change_history() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(vec![line(BURGER, 1)])).unwrap();

    ledger
        .catalog()
        .update_menu_item(
            BURGER,
            shared::models::MenuItemUpdate {
                price: Some(99.0),
                name: Some("Novo Burger".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = ledger.get_order(&order.id).unwrap();
    assert_eq!(stored.items[0].unit_price, 35.90);
    assert_eq!(stored.items[0].menu_item.name, "Hambúrguer Artesanal");
    assert_eq!(stored.subtotal, 35.90);
}

#[test]
fn test_status_moves_forward_only() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();

    // Skipping is rejected
    assert_eq!(
        ledger.update_order_status(&order.id, OrderStatus::Ready),
        Err(LedgerError::transition(Machine::Order, "pending", "ready"))
    );

    let order = advance_to(&ledger, &order.id, OrderStatus::Ready);
    assert_eq!(order.status, OrderStatus::Ready);

    // Regression is rejected and leaves the order untouched
    assert_eq!(
        ledger.update_order_status(&order.id, OrderStatus::Pending),
        Err(LedgerError::transition(Machine::Order, "ready", "pending"))
    );
    assert_eq!(ledger.get_order(&order.id).unwrap(), order);
}

#[test]
fn test_cancel_only_from_non_terminal() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();
    advance_to(&ledger, &order.id, OrderStatus::Served);

    let cancelled = ledger
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(cancelled.updated_at >= order.updated_at);

    for next in [OrderStatus::Cancelled, OrderStatus::Paid, OrderStatus::Pending] {
        assert!(matches!(
            ledger.update_order_status(&order.id, next),
            Err(LedgerError::InvalidTransition { .. })
        ));
    }
}

#[test]
fn test_paid_is_terminal() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();
    advance_to(&ledger, &order.id, OrderStatus::Paid);

    assert!(matches!(
        ledger.update_order_status(&order.id, OrderStatus::Cancelled),
        Err(LedgerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_unknown_order() {
    let ledger = create_test_ledger();
    assert_eq!(
        ledger.update_order_status("order-404", OrderStatus::Preparing),
        Err(LedgerError::not_found(Resource::Order, "order-404"))
    );
    assert!(ledger.get_order("order-404").is_err());
}

#[test]
fn test_line_item_status() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();
    let item_id = order.items[0].id.clone();

    let order = ledger
        .update_line_item_status(&order.id, &item_id, LineItemStatus::Preparing)
        .unwrap();
    assert_eq!(order.items[0].status, LineItemStatus::Preparing);
    assert_eq!(order.items[1].status, LineItemStatus::Pending);
    // Order status is independent
    assert_eq!(order.status, OrderStatus::Pending);

    assert!(matches!(
        ledger.update_line_item_status(&order.id, &item_id, LineItemStatus::Served),
        Err(LedgerError::InvalidTransition {
            machine: Machine::LineItem,
            ..
        })
    ));
    assert_eq!(
        ledger.update_line_item_status(&order.id, "item-99", LineItemStatus::Preparing),
        Err(LedgerError::not_found(Resource::LineItem, "item-99"))
    );

    ledger
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();
    assert_eq!(
        ledger.update_line_item_status(&order.id, &item_id, LineItemStatus::Ready),
        Err(LedgerError::Cancelled(order.id.clone()))
    );
}

#[test]
fn test_list_orders_filter_and_order() {
    let ledger = create_test_ledger();
    let base = 1_700_000_000_000;

    let first = ledger
        .create_order_at(dine_in(4, burger_and_coke()), base)
        .unwrap();
    let second = ledger
        .create_order_at(takeaway(vec![line(SALAD, 1)]), base + MINUTE_MILLIS)
        .unwrap();
    let third = ledger
        .create_order_at(dine_in(12, vec![line(PIZZA, 1)]), base + 2 * MINUTE_MILLIS)
        .unwrap();
    ledger
        .update_order_status(&second.id, OrderStatus::Preparing)
        .unwrap();

    let all: Vec<String> = ledger.all_orders().into_iter().map(|o| o.id).collect();
    assert_eq!(all, vec![third.id.clone(), second.id.clone(), first.id.clone()]);

    let preparing = ledger.list_orders(&OrderFilter::with_status(OrderStatus::Preparing));
    assert_eq!(preparing.len(), 1);
    assert_eq!(preparing[0].id, second.id);

    let by_table = ledger.list_orders(&OrderFilter {
        search: Some("12".to_string()),
        ..Default::default()
    });
    assert!(by_table.iter().any(|o| o.id == third.id));
    assert!(by_table.iter().all(|o| o.table_number == Some(12) || o.id.contains("12")));

    let by_id = ledger.list_orders(&OrderFilter {
        search: Some(first.id.to_uppercase()),
        ..Default::default()
    });
    assert_eq!(by_id.len(), 1);

    let window = ledger.list_orders(&OrderFilter {
        from: Some(base + MINUTE_MILLIS),
        to: Some(base + 2 * MINUTE_MILLIS),
        ..Default::default()
    });
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, second.id);

    let dine_in_only = ledger.list_orders(&OrderFilter {
        order_type: Some(OrderType::DineIn),
        ..Default::default()
    });
    assert_eq!(dine_in_only.len(), 2);
}

#[test]
fn test_events_are_sequenced_and_broadcast() {
    let ledger = create_test_ledger();
    let mut rx = ledger.subscribe();

    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();
    ledger
        .update_order_status(&order.id, OrderStatus::Preparing)
        .unwrap();

    assert_eq!(
        event_types(&ledger),
        vec![
            LedgerEventType::OrderCreated,
            LedgerEventType::KitchenTicketCreated,
            LedgerEventType::OrderStatusChanged,
        ]
    );

    let events = ledger.events_since(0);
    assert!(events.windows(2).all(|w| w[0].sequence < w[1].sequence));
    assert!(events.iter().all(|e| e.order_id.as_deref() == Some(order.id.as_str())));

    let since = ledger.events_since(events[1].sequence);
    assert_eq!(since.len(), 1);
    assert_eq!(since[0].event_type, LedgerEventType::OrderStatusChanged);

    let received = rx.try_recv().unwrap();
    assert_eq!(received.sequence, events[0].sequence);
}

#[test]
fn test_rejected_status_change_emits_nothing() {
    let ledger = create_test_ledger();
    let order = ledger.create_order(takeaway(burger_and_coke())).unwrap();
    let before = ledger.events_since(0).len();

    let _ = ledger.update_order_status(&order.id, OrderStatus::Served);
    assert_eq!(ledger.events_since(0).len(), before);
}
