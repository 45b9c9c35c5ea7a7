//! Demo data (演示数据)
//!
//! Loaded on startup when `SEED_DEMO_DATA` is enabled.

use shared::models::{Address, Customer, InventoryItem, MenuItem};
use shared::util::now_millis;

use super::{CatalogResult, CatalogService};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: i64,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    preparation_time: u32,
    ingredients: &[&str],
    allergens: &[&str],
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: None,
        preparation_time,
        ingredients: strings(ingredients),
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
        is_available: true,
    }
}

pub fn demo_menu() -> Vec<MenuItem> {
    vec![
        menu_item(
            1,
            "Hambúrguer Artesanal",
            "Hambúrguer 180g, queijo, alface, tomate, bacon",
            35.90,
            "Hambúrgueres",
            15,
            &["carne", "queijo", "alface", "tomate", "bacon"],
            &["glúten", "lactose"],
        ),
        menu_item(
            2,
            "Pizza Margherita",
            "Molho de tomate, mussarela, manjericão",
            45.00,
            "Pizzas",
            20,
            &["massa", "molho de tomate", "mussarela", "manjericão"],
            &["glúten", "lactose"],
        ),
        menu_item(
            3,
            "Salmão Grelhado",
            "Salmão grelhado com legumes e molho de ervas",
            65.90,
            "Peixes",
            25,
            &["salmão", "brócolis", "cenoura", "molho de ervas"],
            &["peixe"],
        ),
        menu_item(
            4,
            "Coca-Cola",
            "Refrigerante 350ml",
            5.00,
            "Bebidas",
            2,
            &["refrigerante"],
            &[],
        ),
        menu_item(
            5,
            "Salada Caesar",
            "Alface, croutons, parmesão, molho caesar",
            28.90,
            "Saladas",
            10,
            &["alface", "croutons", "parmesão", "molho caesar"],
            &["glúten", "lactose"],
        ),
    ]
}

pub fn demo_inventory(now: i64) -> Vec<InventoryItem> {
    let item = |id, name: &str, category: &str, stock, min, max, cost, supplier: &str| {
        InventoryItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            unit: "kg".to_string(),
            current_stock: stock,
            minimum_stock: min,
            maximum_stock: max,
            unit_cost: cost,
            supplier: Some(supplier.to_string()),
            expiration_date: None,
            last_updated: now,
        }
    };
    vec![
        item(1, "Carne Bovina", "Carnes", 15.5, 10.0, 50.0, 25.90, "Frigorífico São Paulo"),
        item(2, "Queijo Mussarela", "Laticínios", 8.2, 5.0, 20.0, 18.50, "Laticínios Bela Vista"),
        item(3, "Tomate", "Vegetais", 3.1, 5.0, 15.0, 4.20, "Hortifruti Central"),
    ]
}

pub fn demo_customers(now: i64) -> Vec<Customer> {
    vec![Customer {
        id: 1,
        name: "João Silva".to_string(),
        phone: "(11) 99999-9999".to_string(),
        email: Some("joao@email.com".to_string()),
        addresses: vec![Address {
            street: "Rua das Flores".to_string(),
            number: "123".to_string(),
            complement: None,
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01234-567".to_string(),
            is_default: true,
        }],
        preferred_payment_method: None,
        loyalty_points: 150,
        created_at: now,
    }]
}

/// Load demo menu, inventory and customers into the catalog
pub fn seed_catalog(catalog: &CatalogService) -> CatalogResult<()> {
    let now = now_millis();
    for item in demo_menu() {
        catalog.insert_menu_item(item)?;
    }
    for item in demo_inventory(now) {
        catalog.insert_inventory_item(item)?;
    }
    for customer in demo_customers(now) {
        catalog.insert_customer(customer)?;
    }
    tracing::info!(
        menu_items = catalog.list_menu_items().len(),
        inventory_items = catalog.list_inventory_items().len(),
        "Demo catalog loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::StockLevel;

    #[test]
    fn test_seed_catalog() {
        let catalog = CatalogService::new();
        seed_catalog(&catalog).unwrap();

        assert_eq!(catalog.list_menu_items().len(), 5);
        assert_eq!(catalog.get_menu_item(1).unwrap().price, 35.90);
        assert_eq!(
            catalog.get_inventory_item(3).unwrap().stock_level(),
            StockLevel::Low
        );
        assert_eq!(catalog.get_customer(1).unwrap().loyalty_points, 150);
    }

    #[test]
    fn test_digital_menu_sections_sorted() {
        let catalog = CatalogService::new();
        seed_catalog(&catalog).unwrap();

        let categories: Vec<String> = catalog
            .digital_menu()
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(
            categories,
            vec!["Bebidas", "Hambúrgueres", "Peixes", "Pizzas", "Saladas"]
        );
    }
}
