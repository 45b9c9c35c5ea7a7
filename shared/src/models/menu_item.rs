//! Menu Item Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Menu item entity (菜品)
///
/// Orders embed a full copy of this struct, so later catalog edits never
/// change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Category tag, also drives kitchen station routing
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preparation time in minutes
    pub preparation_time: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    pub is_available: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub preparation_time: Option<u32>,
    pub ingredients: Option<Vec<String>>,
    pub allergens: Option<BTreeSet<String>>,
    pub is_available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub preparation_time: Option<u32>,
    pub ingredients: Option<Vec<String>>,
    pub allergens: Option<BTreeSet<String>>,
    pub is_available: Option<bool>,
}

/// Availability toggle payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuItemAvailability {
    pub is_available: bool,
}

/// One category section of the customer-facing digital menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}
