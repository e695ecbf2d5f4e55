//! Community issues list page

use chrono::NaiveDate;
use serde::Serialize;
use shared::filter::{FilterCriteria, StatusFilter, filter_issues};
use shared::models::{Issue, IssueStatus};
use shared::types::IssueId;

pub const EMPTY_ISSUES_MESSAGE: &str = "No issues found matching your criteria.";

/// Selections on the community issues page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuesView {
    pub search_term: String,
    pub status: StatusFilter,
}

impl IssuesView {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// This page filters by status and search only
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::all()
            .with_status(self.status)
            .with_search(self.search_term.clone())
    }

    pub fn render(&self, issues: &[Issue]) -> IssueListPage {
        let cards: Vec<IssueCard> = filter_issues(issues, &self.criteria())
            .into_iter()
            .map(IssueCard::from)
            .collect();
        let empty_message = cards.is_empty().then_some(EMPTY_ISSUES_MESSAGE);
        IssueListPage {
            cards,
            empty_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueCard {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub reporter: String,
    pub reported_date: NaiveDate,
    pub category: String,
    pub status: IssueStatus,
    pub status_label: &'static str,
    pub badge_classes: String,
}

impl From<Issue> for IssueCard {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            status_label: issue.status.label(),
            badge_classes: issue.status.color_class().badge_classes(),
            status: issue.status,
            title: issue.title,
            description: issue.description,
            location: issue.location,
            reporter: issue.reporter,
            reported_date: issue.reported_date,
            category: issue.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueListPage {
    pub cards: Vec<IssueCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl IssueListPage {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
