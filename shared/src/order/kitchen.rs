//! Kitchen ticket types
//!
//! A ticket is the part of an order the kitchen has to prepare. Its items
//! move independently through `pending → preparing → ready`; the ticket is
//! complete once every item is ready.

use serde::{Deserialize, Serialize};

use super::status::KitchenItemStatus;
use crate::util::elapsed_minutes;

/// Kitchen preparation station
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Grill,
    Fryer,
    Salad,
    Desserts,
    Beverages,
}

impl Station {
    pub const ALL: [Station; 5] = [
        Self::Grill,
        Self::Fryer,
        Self::Salad,
        Self::Desserts,
        Self::Beverages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grill => "grill",
            Self::Fryer => "fryer",
            Self::Salad => "salad",
            Self::Desserts => "desserts",
            Self::Beverages => "beverages",
        }
    }
}

/// Ticket urgency, derived from age on every read (never stored)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl TicketPriority {
    /// <10 low, <20 normal, <30 high, otherwise urgent
    pub fn from_elapsed_minutes(minutes: i64) -> Self {
        match minutes {
            m if m < 10 => Self::Low,
            m if m < 20 => Self::Normal,
            m if m < 30 => Self::High,
            _ => Self::Urgent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenTicketItem {
    /// Same ID as the originating order line item
    pub id: String,
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub modifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub station: Station,
    /// Minutes, copied from the menu item
    pub preparation_time: u32,
    pub status: KitchenItemStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenTicket {
    /// `kitchen-{order_id}`
    pub id: String,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    pub items: Vec<KitchenTicketItem>,
    /// max preparation time of the items (minutes)
    pub estimated_time: u32,
    pub created_at: i64,
    /// First item left `pending`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    /// All items `ready`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl KitchenTicket {
    pub fn ticket_id_for(order_id: &str) -> String {
        format!("kitchen-{}", order_id)
    }

    pub fn elapsed_minutes(&self, now: i64) -> i64 {
        elapsed_minutes(self.created_at, now)
    }

    pub fn priority_at(&self, now: i64) -> TicketPriority {
        TicketPriority::from_elapsed_minutes(self.elapsed_minutes(now))
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.status == KitchenItemStatus::Ready)
    }

    pub fn has_station(&self, station: Station) -> bool {
        self.items.iter().any(|i| i.station == station)
    }

    pub fn item(&self, item_id: &str) -> Option<&KitchenTicketItem> {
        self.items.iter().find(|i| i.id == item_id)
    }
}

/// Ticket as served to the kitchen display, with read-time priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenTicketView {
    #[serde(flatten)]
    pub ticket: KitchenTicket,
    pub priority: TicketPriority,
    pub elapsed_minutes: i64,
}

impl KitchenTicketView {
    pub fn at(ticket: KitchenTicket, now: i64) -> Self {
        Self {
            priority: ticket.priority_at(now),
            elapsed_minutes: ticket.elapsed_minutes(now),
            ticket,
        }
    }
}

/// Kitchen item status change payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KitchenItemStatusUpdate {
    pub status: KitchenItemStatus,
}
