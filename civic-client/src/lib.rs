//! Civic Client - presentation-side state for the issue tracker
//!
//! Holds the caller-owned issue list, seed data, page view states and the
//! ambient setup (configuration, logging). Every page render is a call into
//! the pure transforms in `shared`.

pub mod board;
pub mod config;
pub mod error;
pub mod logger;
pub mod seed;
pub mod views;

pub use board::IssueBoard;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use views::{IssuesView, MapView, ProgressView};

// Re-export shared types for convenience
pub use shared::{FilterCriteria, Issue, IssueStatus, MarkerDescriptor};
