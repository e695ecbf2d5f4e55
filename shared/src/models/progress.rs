//! Progress tracking for reported issues and community-wide statistics

use super::{Issue, IssueStatus};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::types::IssueId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry on an issue's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub date: NaiveDate,
    pub message: String,
}

/// Resolution progress of one of the user's reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueProgress {
    pub issue_id: IssueId,
    pub title: String,
    pub status: IssueStatus,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub reported_date: NaiveDate,
    pub estimated_completion: Option<NaiveDate>,
    pub location: String,
    #[serde(default)]
    pub updates: Vec<ProgressUpdate>,
}

impl IssueProgress {
    pub fn new(issue: &Issue, progress: u8) -> AppResult<Self> {
        if progress > 100 {
            return Err(AppError::new(ErrorCode::ProgressOutOfRange)
                .with_detail("progress", progress));
        }
        Ok(Self {
            issue_id: issue.id,
            title: issue.title.clone(),
            status: issue.status,
            progress,
            reported_date: issue.reported_date,
            estimated_completion: None,
            location: issue.location.clone(),
            updates: Vec::new(),
        })
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    /// Override the date copied from the issue
    pub fn with_reported_date(mut self, date: NaiveDate) -> Self {
        self.reported_date = date;
        self
    }

    pub fn with_estimated_completion(mut self, date: NaiveDate) -> Self {
        self.estimated_completion = Some(date);
        self
    }

    pub fn with_update(mut self, date: NaiveDate, message: impl Into<String>) -> Self {
        self.updates.push(ProgressUpdate {
            date,
            message: message.into(),
        });
        self
    }

    /// Updates, newest first. Same-day entries keep insertion order.
    pub fn timeline(&self) -> Vec<&ProgressUpdate> {
        let mut updates: Vec<&ProgressUpdate> = self.updates.iter().collect();
        updates.sort_by(|a, b| b.date.cmp(&a.date));
        updates
    }
}

/// Community-wide issue counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub total_issues: u32,
    pub resolved_issues: u32,
    pub in_progress_issues: u32,
    pub reported_issues: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_resolution_days: Option<f64>,
}

impl CommunityStats {
    /// Tally an issue list. Unknown statuses count toward the total only.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let count = |status: IssueStatus| issues.iter().filter(|i| i.status == status).count() as u32;
        Self {
            total_issues: issues.len() as u32,
            resolved_issues: count(IssueStatus::Resolved),
            in_progress_issues: count(IssueStatus::InProgress),
            reported_issues: count(IssueStatus::Reported),
            average_resolution_days: None,
        }
    }

    /// `count` as a whole percentage of the total, rounded half-up; 0 when empty
    pub fn share(&self, count: u32) -> u32 {
        if self.total_issues == 0 {
            return 0;
        }
        (count as f64 / self.total_issues as f64 * 100.0).round() as u32
    }

    pub fn resolution_rate(&self) -> u32 {
        self.share(self.resolved_issues)
    }

    /// e.g. "8.5 days"
    pub fn average_resolution_label(&self) -> Option<String> {
        self.average_resolution_days.map(|d| format!("{d} days"))
    }
}
