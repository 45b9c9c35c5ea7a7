//! Inventory Item Model

use serde::{Deserialize, Serialize};

/// Inventory item entity (库存)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Unit of measure (kg, un, l...)
    pub unit: String,
    pub current_stock: f64,
    pub minimum_stock: f64,
    pub maximum_stock: f64,
    pub unit_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// ISO date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Last change timestamp (Unix millis)
    pub last_updated: i64,
}

impl InventoryItem {
    /// Classify the current stock against the configured bounds
    pub fn stock_level(&self) -> StockLevel {
        if self.current_stock <= 0.0 {
            StockLevel::Out
        } else if self.current_stock <= self.minimum_stock {
            StockLevel::Low
        } else if self.current_stock >= self.maximum_stock {
            StockLevel::High
        } else {
            StockLevel::Ok
        }
    }

    /// Stock value at unit cost
    pub fn stock_value(&self) -> f64 {
        self.current_stock * self.unit_cost
    }
}

/// Stock classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Out,
    Low,
    High,
    Ok,
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub current_stock: f64,
    pub minimum_stock: f64,
    pub maximum_stock: f64,
    pub unit_cost: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<String>,
}

/// Update inventory item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub current_stock: Option<f64>,
    pub minimum_stock: Option<f64>,
    pub maximum_stock: Option<f64>,
    pub unit_cost: Option<f64>,
    pub supplier: Option<String>,
    pub expiration_date: Option<String>,
}

/// Stock adjustment payload (positive = restock, negative = consumption)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub delta: f64,
}

/// Inventory overview counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_items: usize,
    /// current ≤ minimum (out-of-stock items included)
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// current ≥ maximum
    pub over_stock: usize,
    /// Σ current × unit_cost
    pub total_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: f64, min: f64, max: f64) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Tomate".to_string(),
            category: "Vegetais".to_string(),
            unit: "kg".to_string(),
            current_stock: current,
            minimum_stock: min,
            maximum_stock: max,
            unit_cost: 8.0,
            supplier: None,
            expiration_date: None,
            last_updated: 0,
        }
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(item(0.0, 5.0, 30.0).stock_level(), StockLevel::Out);
        assert_eq!(item(5.0, 5.0, 30.0).stock_level(), StockLevel::Low);
        assert_eq!(item(30.0, 5.0, 30.0).stock_level(), StockLevel::High);
        assert_eq!(item(12.0, 5.0, 30.0).stock_level(), StockLevel::Ok);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(item(2.5, 1.0, 10.0).stock_value(), 20.0);
    }
}
