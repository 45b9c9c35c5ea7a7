//! Catalog Service - menu, inventory and customer records with in-memory storage

use parking_lot::RwLock;
use shared::models::{
    Customer, CustomerCreate, InventoryItem, InventoryItemCreate, InventoryItemUpdate,
    InventorySummary, MenuItem, MenuItemCreate, MenuItemUpdate, MenuSection, StockLevel,
};
use shared::util::{now_millis, snowflake_id};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};

/// Maximum allowed menu price
const MAX_PRICE: f64 = 1_000_000.0;

/// Unified catalog service
#[derive(Clone, Default)]
pub struct CatalogService {
    /// Menu items: id -> MenuItem
    menu: Arc<RwLock<HashMap<i64, MenuItem>>>,
    /// Inventory: id -> InventoryItem
    inventory: Arc<RwLock<HashMap<i64, InventoryItem>>>,
    /// Customers: id -> Customer
    customers: Arc<RwLock<HashMap<i64, Customer>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("menu_count", &self.menu.read().len())
            .field("inventory_count", &self.inventory.read().len())
            .field("customer_count", &self.customers.read().len())
            .finish()
    }
}

// =============================================================================
// Validation
// =============================================================================

fn require_text(value: &str, field: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn validate_price(price: f64) -> CatalogResult<()> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(CatalogError::InvalidPrice(price));
    }
    Ok(())
}

fn validate_stock_value(value: f64, field: &str) -> CatalogResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidStock(format!(
            "{} must be a finite non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn validate_inventory(item: &InventoryItem) -> CatalogResult<()> {
    require_text(&item.name, "name")?;
    require_text(&item.unit, "unit")?;
    validate_stock_value(item.current_stock, "current_stock")?;
    validate_stock_value(item.minimum_stock, "minimum_stock")?;
    validate_stock_value(item.maximum_stock, "maximum_stock")?;
    validate_stock_value(item.unit_cost, "unit_cost")?;
    if item.minimum_stock > item.maximum_stock {
        return Err(CatalogError::InvalidStock(format!(
            "minimum_stock ({}) exceeds maximum_stock ({})",
            item.minimum_stock, item.maximum_stock
        )));
    }
    Ok(())
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// All menu items, sorted by category then name
    pub fn list_menu_items(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.menu.read().values().cloned().collect();
        items.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        items
    }

    pub fn get_menu_item(&self, id: i64) -> CatalogResult<MenuItem> {
        self.menu
            .read()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::MenuItemNotFound(id))
    }

    /// Snapshot several menu items under one read lock (order creation)
    pub fn menu_items_by_id(&self, ids: &[i64]) -> CatalogResult<HashMap<i64, MenuItem>> {
        let menu = self.menu.read();
        ids.iter()
            .map(|id| {
                menu.get(id)
                    .cloned()
                    .map(|item| (*id, item))
                    .ok_or(CatalogError::MenuItemNotFound(*id))
            })
            .collect()
    }

    pub fn create_menu_item(&self, data: MenuItemCreate) -> CatalogResult<MenuItem> {
        let item = MenuItem {
            id: snowflake_id(),
            name: data.name,
            description: data.description.unwrap_or_default(),
            price: data.price,
            category: data.category,
            image: data.image,
            preparation_time: data.preparation_time.unwrap_or(0),
            ingredients: data.ingredients.unwrap_or_default(),
            allergens: data.allergens.unwrap_or_default(),
            is_available: data.is_available.unwrap_or(true),
        };
        self.insert_menu_item(item)
    }

    /// Insert a fully-formed item (seed data keeps its own IDs)
    pub fn insert_menu_item(&self, item: MenuItem) -> CatalogResult<MenuItem> {
        require_text(&item.name, "name")?;
        require_text(&item.category, "category")?;
        validate_price(item.price)?;

        self.menu.write().insert(item.id, item.clone());
        tracing::info!(menu_item_id = item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    pub fn update_menu_item(&self, id: i64, data: MenuItemUpdate) -> CatalogResult<MenuItem> {
        let mut menu = self.menu.write();
        let current = menu.get(&id).ok_or(CatalogError::MenuItemNotFound(id))?;

        let mut updated = current.clone();
        if let Some(name) = data.name {
            updated.name = name;
        }
        if let Some(description) = data.description {
            updated.description = description;
        }
        if let Some(price) = data.price {
            updated.price = price;
        }
        if let Some(category) = data.category {
            updated.category = category;
        }
        if let Some(image) = data.image {
            updated.image = (!image.is_empty()).then_some(image);
        }
        if let Some(prep) = data.preparation_time {
            updated.preparation_time = prep;
        }
        if let Some(ingredients) = data.ingredients {
            updated.ingredients = ingredients;
        }
        if let Some(allergens) = data.allergens {
            updated.allergens = allergens;
        }
        if let Some(available) = data.is_available {
            updated.is_available = available;
        }

        require_text(&updated.name, "name")?;
        require_text(&updated.category, "category")?;
        validate_price(updated.price)?;

        menu.insert(id, updated.clone());
        tracing::info!(menu_item_id = id, "Menu item updated");
        Ok(updated)
    }

    pub fn delete_menu_item(&self, id: i64) -> CatalogResult<MenuItem> {
        let removed = self
            .menu
            .write()
            .remove(&id)
            .ok_or(CatalogError::MenuItemNotFound(id))?;
        tracing::info!(menu_item_id = id, name = %removed.name, "Menu item deleted");
        Ok(removed)
    }

    pub fn set_menu_item_availability(&self, id: i64, is_available: bool) -> CatalogResult<MenuItem> {
        let mut menu = self.menu.write();
        let item = menu.get_mut(&id).ok_or(CatalogError::MenuItemNotFound(id))?;
        item.is_available = is_available;
        tracing::info!(menu_item_id = id, is_available, "Menu item availability changed");
        Ok(item.clone())
    }

    /// Customer-facing menu: available items grouped by category
    pub fn digital_menu(&self) -> Vec<MenuSection> {
        let mut sections: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
        for item in self.list_menu_items().into_iter().filter(|i| i.is_available) {
            sections.entry(item.category.clone()).or_default().push(item);
        }
        sections
            .into_iter()
            .map(|(category, items)| MenuSection { category, items })
            .collect()
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// All inventory items, sorted by name
    pub fn list_inventory_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.inventory.read().values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        items
    }

    pub fn get_inventory_item(&self, id: i64) -> CatalogResult<InventoryItem> {
        self.inventory
            .read()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::InventoryItemNotFound(id))
    }

    pub fn create_inventory_item(&self, data: InventoryItemCreate) -> CatalogResult<InventoryItem> {
        let item = InventoryItem {
            id: snowflake_id(),
            name: data.name,
            category: data.category,
            unit: data.unit,
            current_stock: data.current_stock,
            minimum_stock: data.minimum_stock,
            maximum_stock: data.maximum_stock,
            unit_cost: data.unit_cost,
            supplier: data.supplier,
            expiration_date: data.expiration_date,
            last_updated: now_millis(),
        };
        self.insert_inventory_item(item)
    }

    pub fn insert_inventory_item(&self, item: InventoryItem) -> CatalogResult<InventoryItem> {
        validate_inventory(&item)?;
        self.inventory.write().insert(item.id, item.clone());
        tracing::info!(inventory_item_id = item.id, name = %item.name, "Inventory item created");
        Ok(item)
    }

    pub fn update_inventory_item(
        &self,
        id: i64,
        data: InventoryItemUpdate,
    ) -> CatalogResult<InventoryItem> {
        let mut inventory = self.inventory.write();
        let current = inventory
            .get(&id)
            .ok_or(CatalogError::InventoryItemNotFound(id))?;

        let mut updated = current.clone();
        if let Some(name) = data.name {
            updated.name = name;
        }
        if let Some(category) = data.category {
            updated.category = category;
        }
        if let Some(unit) = data.unit {
            updated.unit = unit;
        }
        if let Some(v) = data.current_stock {
            updated.current_stock = v;
        }
        if let Some(v) = data.minimum_stock {
            updated.minimum_stock = v;
        }
        if let Some(v) = data.maximum_stock {
            updated.maximum_stock = v;
        }
        if let Some(v) = data.unit_cost {
            updated.unit_cost = v;
        }
        if let Some(supplier) = data.supplier {
            updated.supplier = (!supplier.is_empty()).then_some(supplier);
        }
        if let Some(date) = data.expiration_date {
            updated.expiration_date = (!date.is_empty()).then_some(date);
        }
        updated.last_updated = now_millis();

        validate_inventory(&updated)?;
        inventory.insert(id, updated.clone());
        tracing::info!(inventory_item_id = id, "Inventory item updated");
        Ok(updated)
    }

    pub fn delete_inventory_item(&self, id: i64) -> CatalogResult<InventoryItem> {
        let removed = self
            .inventory
            .write()
            .remove(&id)
            .ok_or(CatalogError::InventoryItemNotFound(id))?;
        tracing::info!(inventory_item_id = id, name = %removed.name, "Inventory item deleted");
        Ok(removed)
    }

    /// Restock (positive delta) or consume (negative delta)
    ///
    /// Stock may not go below zero.
    pub fn adjust_stock(&self, id: i64, delta: f64) -> CatalogResult<InventoryItem> {
        if !delta.is_finite() {
            return Err(CatalogError::InvalidStock(format!(
                "delta must be a finite number, got {}",
                delta
            )));
        }

        let mut inventory = self.inventory.write();
        let item = inventory
            .get_mut(&id)
            .ok_or(CatalogError::InventoryItemNotFound(id))?;

        let next = item.current_stock + delta;
        if next < 0.0 {
            return Err(CatalogError::InvalidStock(format!(
                "{} has {} {} in stock, cannot remove {}",
                item.name, item.current_stock, item.unit, -delta
            )));
        }

        item.current_stock = next;
        item.last_updated = now_millis();
        tracing::info!(
            inventory_item_id = id,
            delta,
            current_stock = next,
            "Stock adjusted"
        );
        if item.stock_level() == StockLevel::Low {
            tracing::warn!(inventory_item_id = id, name = %item.name, "Stock below minimum");
        }
        Ok(item.clone())
    }

    pub fn inventory_summary(&self) -> InventorySummary {
        let inventory = self.inventory.read();
        let mut summary = InventorySummary {
            total_items: inventory.len(),
            ..Default::default()
        };

        let mut total_value = rust_decimal::Decimal::ZERO;
        for item in inventory.values() {
            match item.stock_level() {
                StockLevel::Out => {
                    summary.out_of_stock += 1;
                    summary.low_stock += 1;
                }
                StockLevel::Low => summary.low_stock += 1,
                StockLevel::High => summary.over_stock += 1,
                StockLevel::Ok => {}
            }
            total_value += crate::pricing::to_decimal(item.current_stock)
                * crate::pricing::to_decimal(item.unit_cost);
        }
        summary.total_value = crate::pricing::to_f64(total_value);
        summary
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub fn add_customer(&self, data: CustomerCreate) -> CatalogResult<Customer> {
        let customer = Customer {
            id: snowflake_id(),
            name: data.name,
            phone: data.phone,
            email: data.email,
            addresses: data.addresses,
            preferred_payment_method: data.preferred_payment_method,
            loyalty_points: 0,
            created_at: now_millis(),
        };
        self.insert_customer(customer)
    }

    pub fn insert_customer(&self, customer: Customer) -> CatalogResult<Customer> {
        require_text(&customer.name, "name")?;
        require_text(&customer.phone, "phone")?;
        self.customers.write().insert(customer.id, customer.clone());
        tracing::info!(customer_id = customer.id, "Customer added");
        Ok(customer)
    }

    /// All customers, sorted by name
    pub fn list_customers(&self) -> Vec<Customer> {
        let mut customers: Vec<Customer> = self.customers.read().values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        customers
    }

    pub fn get_customer(&self, id: i64) -> CatalogResult<Customer> {
        self.customers
            .read()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::CustomerNotFound(id))
    }
}
