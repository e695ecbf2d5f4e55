//! Caller-owned issue storage
//!
//! The shared core never keeps issues; this board owns them and lends
//! slices to the filter and projection functions.

use crate::error::{ClientError, ClientResult};
use crate::seed;
use chrono::NaiveDate;
use shared::models::{CommunityStats, Issue, IssueCreate};
use shared::types::IssueId;
use shared::util::snowflake_id;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct IssueBoard {
    issues: Vec<Issue>,
}

impl IssueBoard {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Board pre-filled with the demo issues
    pub fn seeded() -> Self {
        Self::new(seed::issues())
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn get(&self, id: IssueId) -> ClientResult<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or(ClientError::NotFound(id))
    }

    /// Validate a report form and append the resulting issue
    pub fn submit(
        &mut self,
        form: IssueCreate,
        reporter: &str,
        reported_date: NaiveDate,
    ) -> ClientResult<&Issue> {
        if let Err(err) = form.validate() {
            warn!(missing = ?form.missing_fields(), "Report rejected");
            return Err(err.into());
        }

        let id = self.fresh_id();
        let issue = form.into_issue(id, reporter, reported_date)?;
        info!(id, title = %issue.title, category = %issue.category, "Issue reported");

        self.issues.push(issue);
        let last = self.issues.len() - 1;
        Ok(&self.issues[last])
    }

    /// Tally of the issues currently on the board
    pub fn stats(&self) -> CommunityStats {
        CommunityStats::from_issues(&self.issues)
    }

    fn fresh_id(&self) -> IssueId {
        loop {
            let id = snowflake_id();
            if self.issues.iter().all(|i| i.id != id) {
                return id;
            }
        }
    }
}
