//! Data models
//!
//! Passive records shared by the filter evaluator, the marker projector and
//! the presentation layer. All IDs are `i64`.

pub mod category;
pub mod coordinates;
pub mod issue;
pub mod progress;
pub mod report;
pub mod status;
pub mod urgency;

// Re-exports
pub use category::*;
pub use coordinates::*;
pub use issue::*;
pub use progress::*;
pub use report::*;
pub use status::*;
pub use urgency::*;
