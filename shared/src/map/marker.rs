//! Map marker projection
//!
//! Converts issues into renderer-neutral marker descriptors. Nothing here
//! knows about a particular map widget.

use crate::models::{ColorClass, Coordinates, Issue};
use crate::types::IssueId;
use serde::{Deserialize, Serialize};

/// Text shown in a marker popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupContent {
    pub title: String,
    /// Status with hyphens replaced by spaces, e.g. "in progress"
    pub status: String,
    /// "<urgency> priority" when the issue is ranked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    pub category: String,
}

/// A map-renderable projection of a geolocated issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// Back-reference to the projected issue
    pub issue_id: IssueId,
    pub position: Coordinates,
    pub color_class: ColorClass,
    pub popup: PopupContent,
}

impl MarkerDescriptor {
    /// `None` when the issue has no coordinates
    pub fn from_issue(issue: &Issue) -> Option<Self> {
        let position = issue.coordinates?;
        Some(Self {
            issue_id: issue.id,
            position,
            color_class: issue.status.color_class(),
            popup: PopupContent {
                title: issue.title.clone(),
                status: issue.status.humanized(),
                urgency: issue.urgency_label(),
                category: issue.category.clone(),
            },
        })
    }
}

/// Project every geolocated issue to a marker, in input order.
///
/// Issues without coordinates are skipped.
pub fn project_markers(issues: &[Issue]) -> Vec<MarkerDescriptor> {
    let markers: Vec<MarkerDescriptor> =
        issues.iter().filter_map(MarkerDescriptor::from_issue).collect();

    let skipped = issues.len() - markers.len();
    if skipped > 0 {
        tracing::debug!(skipped, "Issues without coordinates left off the map");
    }
    markers
}
