//! Issue filtering
//!
//! [`FilterCriteria`] is a caller-owned value; re-run [`filter_issues`]
//! whenever it changes. There is no cached state in between.

mod criteria;
mod evaluator;

#[cfg(test)]
mod property;

pub use criteria::{ALL, CategoryFilter, FilterCriteria, StatusFilter};
pub use evaluator::filter_issues;
