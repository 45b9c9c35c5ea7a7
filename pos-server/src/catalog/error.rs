use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Inventory item not found: {0}")]
    InventoryItemNotFound(i64),

    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Invalid stock: {0}")]
    InvalidStock(String),

    #[error("{0}")]
    Validation(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::MenuItemNotFound(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message).with_detail("id", id)
            }
            CatalogError::InventoryItemNotFound(id) => {
                AppError::with_message(ErrorCode::InventoryItemNotFound, message)
                    .with_detail("id", id)
            }
            CatalogError::CustomerNotFound(id) => {
                AppError::with_message(ErrorCode::CustomerNotFound, message).with_detail("id", id)
            }
            CatalogError::InvalidPrice(_) => {
                AppError::with_message(ErrorCode::MenuItemInvalidPrice, message)
            }
            CatalogError::InvalidStock(_) => {
                AppError::with_message(ErrorCode::InventoryInvalidStock, message)
            }
            CatalogError::Validation(msg) => AppError::validation(msg),
        }
    }
}
