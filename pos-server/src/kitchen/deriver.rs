//! Station routing and ticket derivation

use shared::order::{KitchenItemStatus, KitchenTicket, KitchenTicketItem, Order, Station};

/// Route a menu category to its preparation station
///
/// Matching is case-insensitive and accepts both the Portuguese menu
/// categories and their English equivalents. Anything unknown goes to the
/// beverages station.
pub fn station_for_category(category: &str) -> Station {
    match category.trim().to_lowercase().as_str() {
        "hambúrgueres" | "hamburgueres" | "burgers" | "carnes" | "meat" | "meats" => {
            Station::Grill
        }
        "pizzas" | "pizza" | "fritos" | "fried" => Station::Fryer,
        "saladas" | "salads" | "salad" => Station::Salad,
        "sobremesas" | "desserts" | "dessert" => Station::Desserts,
        _ => Station::Beverages,
    }
}

/// Categories that never need the kitchen on their own
pub fn is_beverage_category(category: &str) -> bool {
    matches!(
        category.trim().to_lowercase().as_str(),
        "bebidas" | "beverages" | "drinks"
    )
}

/// A ticket is needed as soon as one item is not a beverage
pub fn needs_ticket(order: &Order) -> bool {
    order
        .items
        .iter()
        .any(|item| !is_beverage_category(&item.menu_item.category))
}

/// Build the kitchen ticket for an order, or `None` for all-beverage orders
///
/// Every line item becomes one ticket item (beverages included, routed to
/// their station). The ticket shares the order's creation instant.
pub fn derive_ticket(order: &Order) -> Option<KitchenTicket> {
    if !needs_ticket(order) {
        return None;
    }

    let items: Vec<KitchenTicketItem> = order
        .items
        .iter()
        .map(|line| KitchenTicketItem {
            id: line.id.clone(),
            menu_item_id: line.menu_item.id,
            name: line.menu_item.name.clone(),
            quantity: line.quantity,
            modifications: line.modifications.clone(),
            notes: line.notes.clone(),
            station: station_for_category(&line.menu_item.category),
            preparation_time: line.menu_item.preparation_time,
            status: KitchenItemStatus::Pending,
        })
        .collect();

    let estimated_time = items.iter().map(|i| i.preparation_time).max().unwrap_or(0);

    Some(KitchenTicket {
        id: KitchenTicket::ticket_id_for(&order.id),
        order_id: order.id.clone(),
        table_number: order.table_number,
        items,
        estimated_time,
        created_at: order.created_at,
        started_at: None,
        completed_at: None,
    })
}
