//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Response envelope handed to the rendering layer
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Report errors
//! - 2xxx: Geo errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::InvalidStatus, "unknown status: closed");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(1002));
//! ```
//!
//! Filtering and marker projection never fail; errors only come from
//! parsing UI input, validating report forms and constructing coordinates.

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
