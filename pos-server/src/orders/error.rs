use shared::error::{AppError, ErrorCode};
use std::fmt;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Which aggregate a lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Order,
    LineItem,
    KitchenTicket,
    KitchenItem,
    MenuItem,
    Table,
    Delivery,
    Customer,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::LineItem => "line item",
            Self::KitchenTicket => "kitchen ticket",
            Self::KitchenItem => "kitchen item",
            Self::MenuItem => "menu item",
            Self::Table => "table",
            Self::Delivery => "delivery",
            Self::Customer => "customer",
        }
    }

    fn error_code(self) -> ErrorCode {
        match self {
            Self::Order => ErrorCode::OrderNotFound,
            Self::LineItem => ErrorCode::OrderItemNotFound,
            Self::KitchenTicket => ErrorCode::KitchenTicketNotFound,
            Self::KitchenItem => ErrorCode::KitchenItemNotFound,
            Self::MenuItem => ErrorCode::MenuItemNotFound,
            Self::Table => ErrorCode::TableNotFound,
            Self::Delivery => ErrorCode::DeliveryNotFound,
            Self::Customer => ErrorCode::CustomerNotFound,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State machine a rejected transition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Machine {
    Order,
    LineItem,
    KitchenItem,
    Delivery,
}

impl Machine {
    fn error_code(self) -> ErrorCode {
        match self {
            Self::Order | Self::LineItem => ErrorCode::OrderInvalidTransition,
            Self::KitchenItem => ErrorCode::KitchenInvalidTransition,
            Self::Delivery => ErrorCode::DeliveryInvalidTransition,
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Order => "order",
            Self::LineItem => "line item",
            Self::KitchenItem => "kitchen item",
            Self::Delivery => "delivery",
        })
    }
}

/// Rejected input (订单草稿校验)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Dine-in orders require a table")]
    TableRequired,

    #[error("Delivery orders require an address")]
    AddressRequired,

    #[error("Menu item is not available: {0}")]
    MenuItemUnavailable(String),

    #[error("Quantity must be between 1 and {max}, got {got}")]
    InvalidQuantity { got: u32, max: u32 },

    #[error("Invalid {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyOrder => ErrorCode::OrderEmpty,
            Self::TableRequired => ErrorCode::OrderTableRequired,
            Self::AddressRequired => ErrorCode::DeliveryAddressRequired,
            Self::MenuItemUnavailable(_) => ErrorCode::MenuItemUnavailable,
            Self::InvalidQuantity { .. } | Self::InvalidAmount { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::Invalid(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Ledger errors
///
/// Every error leaves ledger state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid {machine} transition: {from} -> {to}")]
    InvalidTransition {
        machine: Machine,
        from: &'static str,
        to: &'static str,
    },

    #[error("Order already paid: {0}")]
    AlreadyPaid(String),

    #[error("Order has been cancelled: {0}")]
    Cancelled(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Payment already in progress for order {0}")]
    PaymentInProgress(String),

    #[error("Insufficient payment: due {due:.2}, tendered {tendered:.2}")]
    PaymentInsufficient { due: f64, tendered: f64 },
}

impl LedgerError {
    pub fn not_found(resource: Resource, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn transition(machine: Machine, from: &'static str, to: &'static str) -> Self {
        Self::InvalidTransition { machine, from, to }
    }
}

impl From<CatalogError> for LedgerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MenuItemNotFound(id) => Self::not_found(Resource::MenuItem, id),
            CatalogError::CustomerNotFound(id) => Self::not_found(Resource::Customer, id),
            other => Self::Validation(ValidationError::Invalid(other.to_string())),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::Validation(v) => AppError::with_message(v.error_code(), message),
            LedgerError::InvalidTransition { machine, from, to } => {
                AppError::with_message(machine.error_code(), message)
                    .with_detail("from", from)
                    .with_detail("to", to)
            }
            LedgerError::AlreadyPaid(id) => {
                AppError::with_message(ErrorCode::OrderAlreadyPaid, message)
                    .with_detail("order_id", id)
            }
            LedgerError::Cancelled(id) => AppError::with_message(ErrorCode::OrderCancelled, message)
                .with_detail("order_id", id),
            LedgerError::NotFound { resource, id } => {
                AppError::with_message(resource.error_code(), message).with_detail("id", id)
            }
            LedgerError::PaymentFailed(_) => AppError::with_message(ErrorCode::PaymentFailed, message),
            LedgerError::PaymentInProgress(id) => {
                AppError::with_message(ErrorCode::PaymentInProgress, message)
                    .with_detail("order_id", id)
            }
            LedgerError::PaymentInsufficient { due, tendered } => {
                AppError::with_message(ErrorCode::PaymentInsufficientAmount, message)
                    .with_detail("due", due)
                    .with_detail("tendered", tendered)
            }
        }
    }
}
