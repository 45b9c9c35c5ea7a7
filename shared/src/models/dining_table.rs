//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    /// Unique, positive table number
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    /// Floor section label
    pub section: String,
    /// Order currently seated at this table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_order: Option<String>,
    /// Digital menu URL encoded in the table's QR code
    pub qr_code: String,
}

/// Table occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl TableStatus {
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
        TableStatus::Maintenance,
    ];
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: u32,
    pub capacity: u32,
    #[serde(default)]
    pub section: String,
}

/// Table status change payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

/// Floor overview counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub maintenance: usize,
}

impl TableSummary {
    pub fn record(&mut self, status: TableStatus) {
        self.total += 1;
        match status {
            TableStatus::Available => self.available += 1,
            TableStatus::Occupied => self.occupied += 1,
            TableStatus::Reserved => self.reserved += 1,
            TableStatus::Maintenance => self.maintenance += 1,
        }
    }
}
