//! Unified error system for the POS ledger
//!
//! - [`ErrorCode`]: stable numeric codes, grouped by domain
//! - [`ErrorCategory`]: the domain a code belongs to
//! - [`AppError`]: code + message + structured details
//! - [`ErrorBody`]: JSON shape of every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 3xxx: Delivery errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors (menu, inventory, customers)
//! - 7xxx: Table errors
//! - 8xxx: Kitchen errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::validation("Order has no items").with_detail("field", "items");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, ErrorCode::ValidationFailed);
//! ```

mod app_error;
mod codes;

pub use app_error::{AppError, AppResult, ErrorBody};
pub use codes::{ErrorCategory, ErrorCode, InvalidErrorCode};
