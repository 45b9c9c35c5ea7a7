//! Ledger events - immutable facts recorded after each successful mutation

use serde::{Deserialize, Serialize};

use super::delivery::Courier;
use super::kitchen::Station;
use super::status::{DeliveryStatus, KitchenItemStatus, LineItemStatus, OrderStatus};
use super::types::{OrderType, PaymentMethod};
use crate::models::TableStatus;

/// Ledger event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Event unique ID
    pub event_id: String,
    /// Global sequence number (for ordering and replay)
    pub sequence: u64,
    /// Order this event belongs to (table events may have none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Event type
    pub event_type: LedgerEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEventType {
    // Lifecycle
    OrderCreated,
    OrderStatusChanged,
    LineItemStatusChanged,

    // Payments
    PaymentRecorded,

    // Kitchen
    KitchenTicketCreated,
    KitchenItemStatusChanged,
    KitchenTicketCompleted,

    // Floor / delivery
    TableStatusChanged,
    DeliveryStatusChanged,
    CourierAssigned,
}

impl std::fmt::Display for LedgerEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LedgerEventType::OrderCreated => "ORDER_CREATED",
            LedgerEventType::OrderStatusChanged => "ORDER_STATUS_CHANGED",
            LedgerEventType::LineItemStatusChanged => "LINE_ITEM_STATUS_CHANGED",
            LedgerEventType::PaymentRecorded => "PAYMENT_RECORDED",
            LedgerEventType::KitchenTicketCreated => "KITCHEN_TICKET_CREATED",
            LedgerEventType::KitchenItemStatusChanged => "KITCHEN_ITEM_STATUS_CHANGED",
            LedgerEventType::KitchenTicketCompleted => "KITCHEN_TICKET_COMPLETED",
            LedgerEventType::TableStatusChanged => "TABLE_STATUS_CHANGED",
            LedgerEventType::DeliveryStatusChanged => "DELIVERY_STATUS_CHANGED",
            LedgerEventType::CourierAssigned => "COURIER_ASSIGNED",
        };
        f.write_str(s)
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Lifecycle ==========
    OrderCreated {
        order_type: OrderType,
        #[serde(skip_serializing_if = "Option::is_none")]
        table_id: Option<i64>,
        item_count: u64,
        total: f64,
    },

    OrderStatusChanged {
        from: OrderStatus,
        to: OrderStatus,
    },

    LineItemStatusChanged {
        item_id: String,
        from: LineItemStatus,
        to: LineItemStatus,
    },

    // ========== Payments ==========
    PaymentRecorded {
        payment_id: String,
        method: PaymentMethod,
        amount: f64,
        tendered: f64,
        change: f64,
    },

    // ========== Kitchen ==========
    KitchenTicketCreated {
        ticket_id: String,
        stations: Vec<Station>,
        estimated_time: u32,
    },

    KitchenItemStatusChanged {
        ticket_id: String,
        item_id: String,
        from: KitchenItemStatus,
        to: KitchenItemStatus,
    },

    /// All items ready; the order itself is not advanced
    KitchenTicketCompleted {
        ticket_id: String,
    },

    // ========== Floor / delivery ==========
    TableStatusChanged {
        table_id: i64,
        table_number: u32,
        from: TableStatus,
        to: TableStatus,
    },

    DeliveryStatusChanged {
        tracking_code: String,
        from: DeliveryStatus,
        to: DeliveryStatus,
    },

    CourierAssigned {
        tracking_code: String,
        courier: Courier,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> LedgerEventType {
        match self {
            EventPayload::OrderCreated { .. } => LedgerEventType::OrderCreated,
            EventPayload::OrderStatusChanged { .. } => LedgerEventType::OrderStatusChanged,
            EventPayload::LineItemStatusChanged { .. } => LedgerEventType::LineItemStatusChanged,
            EventPayload::PaymentRecorded { .. } => LedgerEventType::PaymentRecorded,
            EventPayload::KitchenTicketCreated { .. } => LedgerEventType::KitchenTicketCreated,
            EventPayload::KitchenItemStatusChanged { .. } => {
                LedgerEventType::KitchenItemStatusChanged
            }
            EventPayload::KitchenTicketCompleted { .. } => LedgerEventType::KitchenTicketCompleted,
            EventPayload::TableStatusChanged { .. } => LedgerEventType::TableStatusChanged,
            EventPayload::DeliveryStatusChanged { .. } => LedgerEventType::DeliveryStatusChanged,
            EventPayload::CourierAssigned { .. } => LedgerEventType::CourierAssigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tagged_serialization() {
        let payload = EventPayload::OrderStatusChanged {
            from: OrderStatus::Pending,
            to: OrderStatus::Preparing,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "ORDER_STATUS_CHANGED");
        assert_eq!(json["from"], "pending");
        assert_eq!(json["to"], "preparing");
    }

    #[test]
    fn test_event_type_matches_tag() {
        let payload = EventPayload::KitchenTicketCompleted {
            ticket_id: "kitchen-1".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], payload.event_type().to_string());
    }
}
