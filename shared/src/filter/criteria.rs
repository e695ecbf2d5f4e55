//! Filter criteria
//!
//! UI selects hand over plain strings with `"all"` as the "no filter"
//! sentinel; these types parse them once so the evaluator only ever sees
//! closed enums.

use crate::error::{AppError, ErrorCode};
use crate::models::{Issue, IssueStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel used by UI selects for "no filter"
pub const ALL: &str = "all";

/// Status selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(IssueStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: IssueStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

/// Category selection, compared against normalized issue categories
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Key(String),
}

impl CategoryFilter {
    /// `normalized` must already be the output of `normalize_category`
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::All => true,
            Self::Key(key) => key == normalized,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL => Ok(Self::All),
            "" => Err(AppError::with_message(
                ErrorCode::InvalidCategory,
                "category filter must not be empty",
            )),
            key => Ok(Self::Key(key.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Key(key) => key,
        }
    }
}

/// Active filter selections for an issue list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub category: CategoryFilter,
    /// Case-insensitive substring over title, description and location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl FilterCriteria {
    /// Criteria with nothing active
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Lowercased search needle, or `None` when the search is inactive
    pub(crate) fn needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// True when every criterion passes every issue
    pub fn is_inactive(&self) -> bool {
        self.status == StatusFilter::All
            && self.category == CategoryFilter::All
            && self.needle().is_none()
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.matches_with(issue, self.needle().as_deref())
    }

    /// `needle` is the precomputed lowercased search term
    pub(crate) fn matches_with(&self, issue: &Issue, needle: Option<&str>) -> bool {
        self.status.matches(issue.status)
            && self.category.matches(&issue.category_key())
            && needle.is_none_or(|n| matches_search(issue, n))
    }
}

fn matches_search(issue: &Issue, needle: &str) -> bool {
    [&issue.title, &issue.description, &issue.location]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
