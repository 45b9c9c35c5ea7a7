//! Delivery tracking types

use serde::{Deserialize, Serialize};

use super::status::DeliveryStatus;

/// Delivery person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// Delivery info submitted with a delivery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryInput {
    pub address: String,
    /// Delivery fee, charged outside the taxed total
    #[serde(default)]
    pub fee: f64,
    /// Estimated minutes until delivered (defaults from kitchen time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

/// Delivery record attached to a delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub address: String,
    pub fee: f64,
    pub estimated_minutes: u32,
    pub delivery_status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier: Option<Courier>,
    /// "TRK" + 6 digits, unique per order
    pub tracking_code: String,
}

/// Delivery status change payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeliveryStatusUpdate {
    pub status: DeliveryStatus,
}
