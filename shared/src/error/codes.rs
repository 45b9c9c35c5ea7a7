//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Delivery errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 7xxx: Table errors
//! - 8xxx: Kitchen errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Delivery ====================
    /// Order has no delivery details
    DeliveryNotFound = 3001,
    /// Delivery status change not allowed
    DeliveryInvalidTransition = 3002,
    /// Delivery address missing
    DeliveryAddressRequired = 3003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been paid
    OrderAlreadyPaid = 4002,
    /// Order status change not allowed
    OrderInvalidTransition = 4003,
    /// Order has already been cancelled
    OrderCancelled = 4004,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order has no items
    OrderEmpty = 4007,
    /// Dine-in order without table
    OrderTableRequired = 4008,

    // ==================== 5xxx: Payment ====================
    /// Payment gateway rejected or failed
    PaymentFailed = 5001,
    /// Amount does not cover the bill
    PaymentInsufficientAmount = 5002,
    /// Payment already in progress for this order
    PaymentInProgress = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 6002,
    /// Menu item is not available
    MenuItemUnavailable = 6003,
    /// Inventory item not found
    InventoryItemNotFound = 6101,
    /// Inventory stock out of range
    InventoryInvalidStock = 6102,
    /// Customer not found
    CustomerNotFound = 6201,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,

    // ==================== 8xxx: Kitchen ====================
    /// Kitchen ticket not found
    KitchenTicketNotFound = 8001,
    /// Kitchen ticket item not found
    KitchenItemNotFound = 8002,
    /// Kitchen item status change not allowed
    KitchenInvalidTransition = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Every code, in numeric order
    pub const ALL: [ErrorCode; 34] = [
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::ValueOutOfRange,
        ErrorCode::DeliveryNotFound,
        ErrorCode::DeliveryInvalidTransition,
        ErrorCode::DeliveryAddressRequired,
        ErrorCode::OrderNotFound,
        ErrorCode::OrderAlreadyPaid,
        ErrorCode::OrderInvalidTransition,
        ErrorCode::OrderCancelled,
        ErrorCode::OrderItemNotFound,
        ErrorCode::OrderEmpty,
        ErrorCode::OrderTableRequired,
        ErrorCode::PaymentFailed,
        ErrorCode::PaymentInsufficientAmount,
        ErrorCode::PaymentInProgress,
        ErrorCode::MenuItemNotFound,
        ErrorCode::MenuItemInvalidPrice,
        ErrorCode::MenuItemUnavailable,
        ErrorCode::InventoryItemNotFound,
        ErrorCode::InventoryInvalidStock,
        ErrorCode::CustomerNotFound,
        ErrorCode::TableNotFound,
        ErrorCode::TableOccupied,
        ErrorCode::KitchenTicketNotFound,
        ErrorCode::KitchenItemNotFound,
        ErrorCode::KitchenInvalidTransition,
        ErrorCode::InternalError,
        ErrorCode::TimeoutError,
        ErrorCode::ConfigError,
    ];

    /// Numeric value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Delivery
            ErrorCode::DeliveryNotFound => "Order is not a delivery order",
            ErrorCode::DeliveryInvalidTransition => "Delivery status change not allowed",
            ErrorCode::DeliveryAddressRequired => "Delivery address is required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyPaid => "Order has already been paid",
            ErrorCode::OrderInvalidTransition => "Order status change not allowed",
            ErrorCode::OrderCancelled => "Order has been cancelled",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderTableRequired => "Dine-in order requires a table",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentInsufficientAmount => "Insufficient payment amount",
            ErrorCode::PaymentInProgress => "Payment already in progress",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item has invalid price",
            ErrorCode::MenuItemUnavailable => "Menu item is not available",
            ErrorCode::InventoryItemNotFound => "Inventory item not found",
            ErrorCode::InventoryInvalidStock => "Inventory stock is out of range",
            ErrorCode::CustomerNotFound => "Customer not found",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",

            // Kitchen
            ErrorCode::KitchenTicketNotFound => "Kitchen ticket not found",
            ErrorCode::KitchenItemNotFound => "Kitchen ticket item not found",
            ErrorCode::KitchenInvalidTransition => "Kitchen item status change not allowed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// u16 that does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

// ==================== 分类与 HTTP 映射 ====================

/// Error domain, taken from the thousands digit of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Delivery,
    Order,
    Payment,
    Catalog,
    Table,
    Kitchen,
    /// 9xxx and anything unassigned
    System,
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        match self.code() / 1000 {
            0 => ErrorCategory::General,
            3 => ErrorCategory::Delivery,
            4 => ErrorCategory::Order,
            5 => ErrorCategory::Payment,
            6 => ErrorCategory::Catalog,
            7 => ErrorCategory::Table,
            8 => ErrorCategory::Kitchen,
            _ => ErrorCategory::System,
        }
    }

    /// Lookup misses on any resource
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::DeliveryNotFound
                | Self::OrderNotFound
                | Self::OrderItemNotFound
                | Self::MenuItemNotFound
                | Self::InventoryItemNotFound
                | Self::CustomerNotFound
                | Self::TableNotFound
                | Self::KitchenTicketNotFound
                | Self::KitchenItemNotFound
        )
    }

    /// The request was valid but clashes with the current state
    pub const fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyExists
                | Self::OrderAlreadyPaid
                | Self::OrderInvalidTransition
                | Self::OrderCancelled
                | Self::DeliveryInvalidTransition
                | Self::KitchenInvalidTransition
                | Self::PaymentInProgress
                | Self::TableOccupied
        )
    }

    pub fn http_status(&self) -> StatusCode {
        if self.is_success() {
            return StatusCode::OK;
        }
        if self.is_not_found() {
            return StatusCode::NOT_FOUND;
        }
        if self.is_conflict() {
            return StatusCode::CONFLICT;
        }
        match self {
            Self::PaymentInsufficientAmount | Self::PaymentFailed => StatusCode::PAYMENT_REQUIRED,
            // 网关超时，客户端可重试
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError | Self::ConfigError | Self::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        assert_eq!(ErrorCode::DeliveryNotFound.code(), 3001);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderAlreadyPaid.code(), 4002);
        assert_eq!(ErrorCode::OrderInvalidTransition.code(), 4003);
        assert_eq!(ErrorCode::PaymentFailed.code(), 5001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::KitchenTicketNotFound.code(), 8001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_all_codes_parse_back() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        let mut values: Vec<u16> = ErrorCode::ALL.iter().map(|c| c.code()).collect();
        values.dedup();
        assert_eq!(values.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_display_is_padded() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::OrderAlreadyPaid.to_string(), "E4002");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderEmpty).unwrap();
        assert_eq!(json, "4007");
        let code: ErrorCode = serde_json::from_str("8002").unwrap();
        assert_eq!(code, ErrorCode::KitchenItemNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_category_follows_thousands_digit() {
        assert_eq!(ErrorCode::ValueOutOfRange.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::DeliveryAddressRequired.category(), ErrorCategory::Delivery);
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::PaymentInProgress.category(), ErrorCategory::Payment);
        assert_eq!(ErrorCode::CustomerNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::TableOccupied.category(), ErrorCategory::Table);
        assert_eq!(ErrorCode::KitchenItemNotFound.category(), ErrorCategory::Kitchen);
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::KitchenTicketNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderInvalidTransition.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::PaymentInProgress.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::PaymentInsufficientAmount.http_status(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(ErrorCode::TimeoutError.http_status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ErrorCode::OrderEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InternalError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_and_conflict_are_disjoint() {
        for code in ErrorCode::ALL {
            assert!(!(code.is_not_found() && code.is_conflict()), "{code}");
        }
    }
}
