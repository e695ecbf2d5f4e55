//! Progress page: my reports and community statistics

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{CommunityStats, IssueProgress, ProgressUpdate};
use shared::types::IssueId;

/// The progress page: the user's reports and community totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressView;

impl ProgressView {
    pub fn render(&self, mine: &[IssueProgress], stats: &CommunityStats) -> ProgressPage {
        ProgressPage {
            my_issues: mine.iter().map(ProgressCard::from_progress).collect(),
            community: CommunityPanel::from_stats(stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressCard {
    pub issue_id: IssueId,
    pub title: String,
    pub location: String,
    pub status_label: &'static str,
    pub badge_classes: String,
    pub progress: u8,
    pub reported_date: NaiveDate,
    pub estimated_completion: Option<NaiveDate>,
    /// Newest first
    pub timeline: Vec<ProgressUpdate>,
}

impl ProgressCard {
    fn from_progress(p: &IssueProgress) -> Self {
        Self {
            issue_id: p.issue_id,
            title: p.title.clone(),
            location: p.location.clone(),
            status_label: p.status.label(),
            badge_classes: p.status.color_class().badge_classes(),
            progress: p.progress,
            reported_date: p.reported_date,
            estimated_completion: p.estimated_completion,
            timeline: p.timeline().into_iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPanel {
    pub total_issues: u32,
    pub resolved_issues: u32,
    pub in_progress_issues: u32,
    pub reported_issues: u32,
    pub average_resolution: Option<String>,
    /// Whole percentages of the total
    pub resolution_rate: u32,
    pub in_progress_share: u32,
    pub reported_share: u32,
}

impl CommunityPanel {
    fn from_stats(stats: &CommunityStats) -> Self {
        Self {
            total_issues: stats.total_issues,
            resolved_issues: stats.resolved_issues,
            in_progress_issues: stats.in_progress_issues,
            reported_issues: stats.reported_issues,
            average_resolution: stats.average_resolution_label(),
            resolution_rate: stats.resolution_rate(),
            in_progress_share: stats.share(stats.in_progress_issues),
            reported_share: stats.share(stats.reported_issues),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPage {
    pub my_issues: Vec<ProgressCard>,
    pub community: CommunityPanel,
}
