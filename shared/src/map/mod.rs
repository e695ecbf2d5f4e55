//! Map projection

mod marker;
mod viewport;

pub use marker::{MarkerDescriptor, PopupContent, project_markers};
pub use viewport::*;
