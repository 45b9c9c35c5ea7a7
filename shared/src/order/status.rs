//! Status state machines
//!
//! Every lifecycle in the ledger (order, line item, kitchen item, delivery)
//! is a forward-only sequence with an optional cancel exit. The rules live
//! once in [`StatusFlow`]; display metadata lives once in [`StatusDisplay`].

use crate::models::TableStatus;
use serde::{Deserialize, Serialize};

/// Forward-only state machine over a fixed sequence
pub trait StatusFlow: Copy + Eq + Sized + 'static {
    /// Happy-path order of states, initial state first
    const SEQUENCE: &'static [Self];

    /// Exit state reachable from any non-terminal state, if the machine has one
    const CANCELLED: Option<Self> = None;

    fn initial() -> Self {
        Self::SEQUENCE[0]
    }

    /// Immediate successor on the happy path
    fn successor(self) -> Option<Self> {
        let pos = Self::SEQUENCE.iter().position(|s| *s == self)?;
        Self::SEQUENCE.get(pos + 1).copied()
    }

    fn is_terminal(self) -> bool {
        Some(self) == Self::CANCELLED || Self::SEQUENCE.last() == Some(&self)
    }

    /// Strict adjacency: no skipping, no regression, cancel from non-terminal only
    fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        if Some(next) == Self::CANCELLED {
            return true;
        }
        self.successor() == Some(next)
    }
}

/// Label and color tone shown by presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMeta {
    /// Wire name (snake_case)
    pub code: &'static str,
    /// Customer-facing label
    pub label: &'static str,
    /// Color tone (warning / primary / success / neutral / secondary / error / accent)
    pub tone: &'static str,
}

pub trait StatusDisplay: Copy {
    fn meta(self) -> StatusMeta;

    fn as_str(self) -> &'static str {
        self.meta().code
    }

    fn label(self) -> &'static str {
        self.meta().label
    }
}

macro_rules! meta {
    ($code:literal, $label:literal, $tone:literal) => {
        StatusMeta {
            code: $code,
            label: $label,
            tone: $tone,
        }
    };
}

// ============================================================================
// Order
// ============================================================================

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Paid,
    Cancelled,
}

impl StatusFlow for OrderStatus {
    const SEQUENCE: &'static [Self] = &[
        Self::Pending,
        Self::Preparing,
        Self::Ready,
        Self::Served,
        Self::Paid,
    ];
    const CANCELLED: Option<Self> = Some(Self::Cancelled);
}

impl StatusDisplay for OrderStatus {
    fn meta(self) -> StatusMeta {
        match self {
            Self::Pending => meta!("pending", "Pendente", "warning"),
            Self::Preparing => meta!("preparing", "Preparando", "primary"),
            Self::Ready => meta!("ready", "Pronto", "success"),
            Self::Served => meta!("served", "Servido", "neutral"),
            Self::Paid => meta!("paid", "Pago", "secondary"),
            Self::Cancelled => meta!("cancelled", "Cancelado", "error"),
        }
    }
}

impl OrderStatus {
    /// Orders still in service (not paid, not cancelled)
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }
}

// ============================================================================
// Line item (front of house)
// ============================================================================

/// Order line item status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineItemStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
}

impl StatusFlow for LineItemStatus {
    const SEQUENCE: &'static [Self] = &[Self::Pending, Self::Preparing, Self::Ready, Self::Served];
}

impl StatusDisplay for LineItemStatus {
    fn meta(self) -> StatusMeta {
        match self {
            Self::Pending => meta!("pending", "Pendente", "warning"),
            Self::Preparing => meta!("preparing", "Preparando", "primary"),
            Self::Ready => meta!("ready", "Pronto", "success"),
            Self::Served => meta!("served", "Servido", "neutral"),
        }
    }
}

// ============================================================================
// Kitchen item
// ============================================================================

/// Kitchen ticket item status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum KitchenItemStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
}

impl StatusFlow for KitchenItemStatus {
    const SEQUENCE: &'static [Self] = &[Self::Pending, Self::Preparing, Self::Ready];
}

impl StatusDisplay for KitchenItemStatus {
    fn meta(self) -> StatusMeta {
        match self {
            Self::Pending => meta!("pending", "Pendente", "warning"),
            Self::Preparing => meta!("preparing", "Preparando", "primary"),
            Self::Ready => meta!("ready", "Pronto", "success"),
        }
    }
}

// ============================================================================
// Delivery
// ============================================================================

/// Delivery tracking status, independent of [`OrderStatus`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl StatusFlow for DeliveryStatus {
    const SEQUENCE: &'static [Self] = &[
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
    ];
    const CANCELLED: Option<Self> = Some(Self::Cancelled);
}

impl StatusDisplay for DeliveryStatus {
    fn meta(self) -> StatusMeta {
        match self {
            Self::Pending => meta!("pending", "Pendente", "warning"),
            Self::Confirmed => meta!("confirmed", "Confirmado", "primary"),
            Self::Preparing => meta!("preparing", "Preparando", "accent"),
            Self::OutForDelivery => meta!("out_for_delivery", "Saiu para Entrega", "secondary"),
            Self::Delivered => meta!("delivered", "Entregue", "success"),
            Self::Cancelled => meta!("cancelled", "Cancelado", "error"),
        }
    }
}

// ============================================================================
// Table (display only, no flow)
// ============================================================================

impl StatusDisplay for TableStatus {
    fn meta(self) -> StatusMeta {
        match self {
            Self::Available => meta!("available", "Disponível", "success"),
            Self::Occupied => meta!("occupied", "Ocupada", "error"),
            Self::Reserved => meta!("reserved", "Reservada", "warning"),
            Self::Maintenance => meta!("maintenance", "Manutenção", "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_forward_only() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Served));
        assert!(Served.can_transition_to(Paid));

        assert!(!Ready.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_order_status_cancel_from_non_terminal_only() {
        use OrderStatus::*;
        for s in [Pending, Preparing, Ready, Served] {
            assert!(s.can_transition_to(Cancelled), "{s:?} -> cancelled");
        }
        assert!(!Paid.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(Paid.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn test_kitchen_item_has_no_cancel() {
        use KitchenItemStatus::*;
        assert_eq!(KitchenItemStatus::initial(), Pending);
        assert!(Pending.can_transition_to(Preparing));
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(Preparing));
        assert!(Ready.is_terminal());
    }

    #[test]
    fn test_delivery_status_sequence() {
        use DeliveryStatus::*;
        assert_eq!(Preparing.successor(), Some(OutForDelivery));
        assert_eq!(Delivered.successor(), None);
        assert!(OutForDelivery.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn test_wire_names_match_serde() {
        for s in [
            DeliveryStatus::Pending,
            DeliveryStatus::OutForDelivery,
            DeliveryStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
        }
        for s in OrderStatus::SEQUENCE {
            let json = serde_json::to_string(s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
        }
        assert_eq!(TableStatus::Maintenance.label(), "Manutenção");
    }
}
