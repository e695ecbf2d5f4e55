//! Shared types for the civic issue tracker
//!
//! Domain model, category normalization, issue filtering and map marker
//! projection. Everything here is a pure transform over caller-owned data.

pub mod error;
pub mod filter;
pub mod map;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use filter::{CategoryFilter, FilterCriteria, StatusFilter, filter_issues};
pub use map::{MarkerDescriptor, PopupContent, project_markers};
pub use models::{ColorClass, Coordinates, Issue, IssueStatus, Urgency, normalize_category};
