use super::*;
use shared::models::TableStatus;

#[test]
fn test_seeded_floor() {
    let ledger = create_test_ledger();
    let tables = ledger.list_tables();

    assert_eq!(tables.len(), 12);
    assert_eq!(tables[0].number, 1);
    assert_eq!(tables[0].capacity, 2);
    assert_eq!(tables[3].capacity, 8);
    assert_eq!(tables[5].section, "Salão Principal");
    assert_eq!(tables[6].section, "Varanda");
    assert_eq!(tables[6].qr_code, "https://restaurant.com/menu?table=7");
    assert!(tables.iter().all(|t| t.status == TableStatus::Available));
}

#[test]
fn test_add_table_rejects_duplicates() {
    let ledger = create_test_ledger();
    assert!(matches!(
        ledger.add_table(3, 4, "Varanda"),
        Err(LedgerError::Validation(_))
    ));
    assert!(ledger.add_table(0, 4, "Varanda").is_err());

    let table = ledger.add_table(13, 10, "Terraço").unwrap();
    assert_eq!(table.id, 13);
    assert_eq!(ledger.get_table(13).unwrap(), table);
}

#[test]
fn test_dine_in_does_not_occupy_by_default() {
    let ledger = create_test_ledger();
    ledger.create_order(dine_in(2, burger_and_coke())).unwrap();

    let table = ledger.get_table(2).unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert!(table.current_order.is_none());
}

#[test]
fn test_auto_occupy_and_release_on_payment() {
    let ledger = auto_occupy_ledger();
    let order = ledger.create_order(dine_in(2, burger_and_coke())).unwrap();

    let table = ledger.get_table(2).unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert_eq!(table.current_order.as_deref(), Some(order.id.as_str()));

    advance_to(&ledger, &order.id, OrderStatus::Served);
    ledger.record_payment(&order.id, cash(84.48)).unwrap();

    let table = ledger.get_table(2).unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert!(table.current_order.is_none());
}

#[test]
fn test_auto_occupy_release_on_cancel() {
    let ledger = auto_occupy_ledger();
    let order = ledger.create_order(dine_in(8, burger_and_coke())).unwrap();
    ledger
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();

    assert_eq!(ledger.get_table(8).unwrap().status, TableStatus::Available);
    assert!(event_types(&ledger).contains(&LedgerEventType::TableStatusChanged));
}

#[test]
fn test_release_only_for_current_order() {
    let ledger = auto_occupy_ledger();
    let first = ledger.create_order(dine_in(1, burger_and_coke())).unwrap();
    let second = ledger.create_order(dine_in(1, vec![line(SALAD, 1)])).unwrap();

    // Table now points at the second order
    ledger
        .update_order_status(&first.id, OrderStatus::Cancelled)
        .unwrap();
    let table = ledger.get_table(1).unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert_eq!(table.current_order.as_deref(), Some(second.id.as_str()));
}

#[test]
fn test_manual_status_and_summary() {
    let ledger = create_test_ledger();
    ledger.update_table_status(1, TableStatus::Reserved).unwrap();
    ledger.update_table_status(2, TableStatus::Maintenance).unwrap();
    ledger.update_table_status(3, TableStatus::Occupied).unwrap();

    let summary = ledger.table_summary();
    assert_eq!(summary.total, 12);
    assert_eq!(summary.available, 9);
    assert_eq!(summary.reserved, 1);
    assert_eq!(summary.maintenance, 1);
    assert_eq!(summary.occupied, 1);

    assert_eq!(
        ledger.update_table_status(77, TableStatus::Reserved),
        Err(LedgerError::not_found(Resource::Table, 77))
    );
}
