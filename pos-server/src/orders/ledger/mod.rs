//! OrderLedger - order lifecycle, kitchen tickets, tables and delivery tracking
//!
//! All aggregates live in one [`LedgerState`] behind a single mutex. Every
//! mutating call follows the same shape:
//!
//! ```text
//! mutate(args)
//!     ├─ 1. Validate input (no lock)
//!     ├─ 2. Snapshot catalog data (catalog lock only)
//!     ├─ 3. Lock ledger state
//!     ├─ 4. Check current state, compute the new values
//!     ├─ 5. Commit (nothing is written before this point)
//!     ├─ 6. Append + broadcast ledger event(s)
//!     └─ 7. Return the updated aggregate
//! ```
//!
//! A failed call returns before step 5, so state is never half-updated.

mod delivery;
mod kitchen;
mod payment;
mod tables;

#[cfg(test)]
mod tests;

pub use kitchen::KitchenQuery;
pub use payment::PaymentReservation;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::models::{DiningTable, MenuItem, TableStatus};
use shared::order::{
    DeliveryDetails, DeliveryStatus, EventPayload, KitchenTicket, LedgerEvent, LineItemStatus,
    Order, OrderDraft, OrderLineItem, OrderStatus, OrderType, StatusDisplay, StatusFlow,
};
use shared::util::{now_millis, snowflake_id};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use tokio::sync::broadcast;

use super::error::{LedgerError, LedgerResult, Machine, Resource, ValidationError};
use super::filter::OrderFilter;
use super::validation::validate_draft;
use crate::catalog::CatalogService;
use crate::delivery::generate_tracking_code;
use crate::kitchen::derive_ticket;
use crate::pricing::{compute_totals, tax_rate_from_percent, to_decimal, to_f64};

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 4096;

/// In-memory audit log size; older events are dropped first
const EVENT_LOG_CAPACITY: usize = 10_000;

/// Minutes added to the kitchen time for the default delivery estimate
const DELIVERY_TRAVEL_MINUTES: u32 = 30;

/// Ledger behaviour knobs
#[derive(Debug, Clone)]
pub struct LedgerSettings {
    /// Service tax as a fraction (0.10 = 10%)
    pub tax_rate: Decimal,
    /// Occupy the table on dine-in creation, release it on paid/cancelled
    pub auto_occupy_tables: bool,
    /// Base URL for table QR codes
    pub menu_base_url: String,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            tax_rate: tax_rate_from_percent(10.0),
            auto_occupy_tables: false,
            menu_base_url: "https://restaurant.com/menu".to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    orders: HashMap<String, Order>,
    /// ticket id -> ticket
    tickets: HashMap<String, KitchenTicket>,
    tables: HashMap<i64, DiningTable>,
    tracking_codes: HashSet<String>,
    events: VecDeque<LedgerEvent>,
    next_sequence: u64,
    /// Orders with a gateway call in flight
    payments_in_flight: HashSet<String>,
}

impl LedgerState {
    fn order(&self, order_id: &str) -> LedgerResult<&Order> {
        self.orders
            .get(order_id)
            .ok_or_else(|| LedgerError::not_found(Resource::Order, order_id))
    }

    fn order_mut(&mut self, order_id: &str) -> LedgerResult<&mut Order> {
        self.orders
            .get_mut(order_id)
            .ok_or_else(|| LedgerError::not_found(Resource::Order, order_id))
    }

    fn table(&self, table_id: i64) -> LedgerResult<&DiningTable> {
        self.tables
            .get(&table_id)
            .ok_or_else(|| LedgerError::not_found(Resource::Table, table_id))
    }

    fn new_order_id(&self) -> String {
        loop {
            let id = format!("order-{}", snowflake_id());
            if !self.orders.contains_key(&id) {
                return id;
            }
        }
    }

    /// Append an event to the audit log and assign its sequence number
    fn append_event(&mut self, order_id: Option<&str>, now: i64, payload: EventPayload) -> LedgerEvent {
        self.next_sequence += 1;
        let event = LedgerEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence: self.next_sequence,
            order_id: order_id.map(str::to_string),
            timestamp: now,
            event_type: payload.event_type(),
            payload,
        };
        if self.events.len() >= EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
        event
    }

    /// Release a table held by `order_id` (auto-occupancy only)
    fn release_table(&mut self, order: &Order, now: i64) -> Option<EventPayload> {
        let table = self.tables.get_mut(&order.table_id?)?;
        if table.current_order.as_deref() != Some(order.id.as_str()) {
            return None;
        }
        let from = table.status;
        table.status = TableStatus::Available;
        table.current_order = None;
        tracing::debug!(table_id = table.id, order_id = %order.id, now, "Table released");
        Some(EventPayload::TableStatusChanged {
            table_id: table.id,
            table_number: table.number,
            from,
            to: TableStatus::Available,
        })
    }
}

/// The restaurant order ledger
pub struct OrderLedger {
    state: Mutex<LedgerState>,
    catalog: CatalogService,
    event_tx: broadcast::Sender<LedgerEvent>,
    settings: LedgerSettings,
}

impl std::fmt::Debug for OrderLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("OrderLedger")
            .field("orders", &state.orders.len())
            .field("tickets", &state.tickets.len())
            .field("tables", &state.tables.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl OrderLedger {
    pub fn new(catalog: CatalogService, settings: LedgerSettings) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        tracing::info!(
            tax_rate = %settings.tax_rate,
            auto_occupy_tables = settings.auto_occupy_tables,
            "OrderLedger started"
        );
        Self {
            state: Mutex::new(LedgerState::default()),
            catalog,
            event_tx,
            settings,
        }
    }

    pub fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Subscribe to ledger events
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.event_tx.subscribe()
    }

    /// Events with `sequence > since`, oldest first
    pub fn events_since(&self, since: u64) -> Vec<LedgerEvent> {
        self.state
            .lock()
            .events
            .iter()
            .filter(|e| e.sequence > since)
            .cloned()
            .collect()
    }

    /// Append + broadcast. Caller holds the state lock, so subscribers
    /// observe events in sequence order.
    fn emit(&self, state: &mut LedgerState, order_id: Option<&str>, now: i64, payload: EventPayload) {
        let event = state.append_event(order_id, now, payload);
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }

    // ========== Orders ==========

    /// Create an order from a draft
    pub fn create_order(&self, draft: OrderDraft) -> LedgerResult<Order> {
        self.create_order_at(draft, now_millis())
    }

    /// Create an order with an explicit creation instant (Unix millis)
    pub fn create_order_at(&self, draft: OrderDraft, now: i64) -> LedgerResult<Order> {
        let result = self.try_create_order(draft, now);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Order creation rejected");
        }
        result
    }

    fn try_create_order(&self, draft: OrderDraft, now: i64) -> LedgerResult<Order> {
        validate_draft(&draft)?;

        // 菜单快照: 下单时按值复制, 之后的菜单修改不影响历史订单
        let ids: Vec<i64> = draft.items.iter().map(|i| i.menu_item_id).collect();
        let menu: HashMap<i64, MenuItem> = self.catalog.menu_items_by_id(&ids)?;
        if let Some(item) = menu.values().find(|m| !m.is_available) {
            return Err(ValidationError::MenuItemUnavailable(item.name.clone()).into());
        }
        if let Some(customer_id) = draft.customer_id {
            self.catalog.get_customer(customer_id)?;
        }

        let mut state = self.state.lock();

        let table_number = match draft.table_id {
            Some(table_id) => Some(state.table(table_id)?.number),
            None => None,
        };

        let order_id = state.new_order_id();
        let mut items = Vec::with_capacity(draft.items.len());
        for (idx, input) in draft.items.into_iter().enumerate() {
            let Some(menu_item) = menu.get(&input.menu_item_id).cloned() else {
                return Err(LedgerError::not_found(Resource::MenuItem, input.menu_item_id));
            };
            items.push(OrderLineItem {
                id: format!("item-{}", idx + 1),
                unit_price: menu_item.price,
                menu_item,
                quantity: input.quantity,
                notes: input.notes.filter(|n| !n.trim().is_empty()),
                modifications: input.modifications,
                status: LineItemStatus::initial(),
            });
        }

        let totals = compute_totals(
            &items,
            draft.discount,
            self.settings.tax_rate,
            draft.tip.unwrap_or(0.0),
        );

        let delivery = match (draft.order_type, draft.delivery) {
            (OrderType::Delivery, Some(input)) => {
                let tracking_code = generate_tracking_code(now, &state.tracking_codes)
                    .ok_or_else(|| {
                        LedgerError::Validation(ValidationError::Invalid(
                            "No tracking code available".to_string(),
                        ))
                    })?;
                let kitchen_minutes = items
                    .iter()
                    .map(|i| i.menu_item.preparation_time)
                    .max()
                    .unwrap_or(0);
                Some(DeliveryDetails {
                    address: input.address.trim().to_string(),
                    fee: to_f64(to_decimal(input.fee)),
                    estimated_minutes: input
                        .estimated_minutes
                        .unwrap_or(kitchen_minutes + DELIVERY_TRAVEL_MINUTES),
                    delivery_status: DeliveryStatus::initial(),
                    courier: None,
                    tracking_code,
                })
            }
            (OrderType::Delivery, None) => return Err(ValidationError::AddressRequired.into()),
            _ => None,
        };

        let mut order = Order {
            id: order_id.clone(),
            order_type: draft.order_type,
            table_id: draft.table_id,
            table_number,
            customer_id: draft.customer_id,
            items,
            status: OrderStatus::initial(),
            subtotal: 0.0,
            discount: 0.0,
            tax: 0.0,
            tip: 0.0,
            total: 0.0,
            notes: draft.notes.filter(|n| !n.trim().is_empty()),
            delivery,
            payment: None,
            created_at: now,
            updated_at: now,
        };
        order.apply_totals(totals);

        let ticket = derive_ticket(&order);

        // ---- commit ----
        if let Some(d) = &order.delivery {
            state.tracking_codes.insert(d.tracking_code.clone());
        }
        state.orders.insert(order_id.clone(), order.clone());

        if self.settings.auto_occupy_tables && order.order_type == OrderType::DineIn {
            if let Some(table) = order.table_id.and_then(|id| state.tables.get_mut(&id)) {
                let from = table.status;
                table.status = TableStatus::Occupied;
                table.current_order = Some(order_id.clone());
                let payload = EventPayload::TableStatusChanged {
                    table_id: table.id,
                    table_number: table.number,
                    from,
                    to: TableStatus::Occupied,
                };
                self.emit(&mut state, Some(&order_id), now, payload);
            }
        }

        self.emit(
            &mut state,
            Some(&order_id),
            now,
            EventPayload::OrderCreated {
                order_type: order.order_type,
                table_id: order.table_id,
                item_count: order.item_count(),
                total: order.total,
            },
        );

        if let Some(ticket) = ticket {
            let stations: BTreeSet<_> = ticket.items.iter().map(|i| i.station).collect();
            let payload = EventPayload::KitchenTicketCreated {
                ticket_id: ticket.id.clone(),
                stations: stations.into_iter().collect(),
                estimated_time: ticket.estimated_time,
            };
            state.tickets.insert(ticket.id.clone(), ticket);
            self.emit(&mut state, Some(&order_id), now, payload);
        }

        tracing::info!(
            order_id = %order.id,
            order_type = order.order_type.as_str(),
            items = order.items.len(),
            total = order.total,
            "Order created"
        );
        Ok(order)
    }

    pub fn get_order(&self, order_id: &str) -> LedgerResult<Order> {
        self.state.lock().order(order_id).cloned()
    }

    /// Orders matching the filter, newest first
    pub fn list_orders(&self, filter: &OrderFilter) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .state
            .lock()
            .orders
            .values()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect();
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        orders
    }

    pub fn all_orders(&self) -> Vec<Order> {
        self.list_orders(&OrderFilter::default())
    }

    pub fn order_count(&self) -> usize {
        self.state.lock().orders.len()
    }

    /// Advance or cancel an order
    ///
    /// Only the immediate successor or `cancelled` (from a non-terminal
    /// state) is accepted. The order is frozen while a checkout holds it.
    pub fn update_order_status(&self, order_id: &str, status: OrderStatus) -> LedgerResult<Order> {
        let now = now_millis();
        let mut state = self.state.lock();

        if state.payments_in_flight.contains(order_id) {
            let err = LedgerError::PaymentInProgress(order_id.to_string());
            tracing::warn!(order_id = %order_id, error = %err, "Order status change rejected");
            return Err(err);
        }
        let order = state.order_mut(order_id)?;
        let from = order.status;
        if !from.can_transition_to(status) {
            let err = LedgerError::transition(Machine::Order, from.as_str(), status.as_str());
            tracing::warn!(order_id = %order_id, error = %err, "Order status change rejected");
            return Err(err);
        }

        order.status = status;
        order.updated_at = now;
        let order = order.clone();

        self.emit(
            &mut state,
            Some(order_id),
            now,
            EventPayload::OrderStatusChanged { from, to: status },
        );
        if status.is_terminal() {
            if let Some(payload) = state.release_table(&order, now) {
                self.emit(&mut state, Some(order_id), now, payload);
            }
        }

        tracing::info!(
            order_id = %order_id,
            from = from.as_str(),
            to = status.as_str(),
            "Order status changed"
        );
        Ok(order)
    }

    /// Advance a single line item (`pending → preparing → ready → served`)
    pub fn update_line_item_status(
        &self,
        order_id: &str,
        item_id: &str,
        status: LineItemStatus,
    ) -> LedgerResult<Order> {
        let now = now_millis();
        let mut state = self.state.lock();

        let order = state.order_mut(order_id)?;
        match order.status {
            OrderStatus::Paid => return Err(LedgerError::AlreadyPaid(order_id.to_string())),
            OrderStatus::Cancelled => return Err(LedgerError::Cancelled(order_id.to_string())),
            _ => {}
        }

        let item = order
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| LedgerError::not_found(Resource::LineItem, item_id))?;
        let from = item.status;
        if !from.can_transition_to(status) {
            return Err(LedgerError::transition(
                Machine::LineItem,
                from.as_str(),
                status.as_str(),
            ));
        }

        item.status = status;
        order.updated_at = now;
        let order = order.clone();

        self.emit(
            &mut state,
            Some(order_id),
            now,
            EventPayload::LineItemStatusChanged {
                item_id: item_id.to_string(),
                from,
                to: status,
            },
        );
        tracing::info!(
            order_id = %order_id,
            item_id = %item_id,
            to = status.as_str(),
            "Line item status changed"
        );
        Ok(order)
    }
}
