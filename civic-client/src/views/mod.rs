//! Page view states
//!
//! Each view is a plain value holding the selections a page would keep in
//! component state. Rendering is a pure call; re-render by calling it again
//! after the view changes.

mod issues;
mod map;
mod progress;

pub use issues::{EMPTY_ISSUES_MESSAGE, IssueCard, IssueListPage, IssuesView};
pub use map::{MapIssueCard, MapPage, MapView};
pub use progress::{CommunityPanel, ProgressCard, ProgressPage, ProgressView};
