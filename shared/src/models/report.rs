//! Report submission payload

use super::{Issue, IssueStatus, Urgency};
use crate::error::{AppError, AppResult};
use crate::types::IssueId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Message shown when a required report field is blank
pub const MISSING_INFORMATION: &str = "Please fill in all required fields.";

/// Create issue payload, as filled in on the report form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueCreate {
    pub title: String,
    pub description: String,
    /// Category key from the form, e.g. "road-infrastructure"
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

impl IssueCreate {
    /// Names of required fields that are empty or whitespace-only
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::required_fields(MISSING_INFORMATION, &missing))
        }
    }

    /// Validate and turn the form into a freshly reported issue
    pub fn into_issue(
        self,
        id: IssueId,
        reporter: impl Into<String>,
        reported_date: NaiveDate,
    ) -> AppResult<Issue> {
        self.validate()?;

        let mut issue = Issue::new(
            id,
            self.title.trim(),
            IssueStatus::Reported,
            self.category.trim(),
            reported_date,
        )
        .with_description(self.description.trim())
        .with_location(self.location.trim())
        .with_reporter(reporter);

        if let Some(urgency) = self.urgency.filter(|u| u.rank().is_some()) {
            issue = issue.with_urgency(urgency);
        }
        Ok(issue)
    }
}
