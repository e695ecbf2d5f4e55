//! Map page: markers, legend and the issues in view

use serde::Serialize;
use shared::filter::{CategoryFilter, FilterCriteria, StatusFilter, filter_issues};
use shared::map::{LegendEntry, MapViewport, MarkerDescriptor, legend, project_markers};
use shared::models::{CATEGORIES, CategoryOption, Issue, Urgency};
use shared::types::IssueId;

/// Selections on the map page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapView {
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl MapView {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// The map filters by status and category, never by search text
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::all()
            .with_status(self.status)
            .with_category(self.category.clone())
    }

    pub fn render(&self, issues: &[Issue], viewport: &MapViewport) -> MapPage {
        let visible = filter_issues(issues, &self.criteria());
        let markers = project_markers(&visible);
        let issues_in_view = visible
            .iter()
            .filter(|i| i.is_geolocated())
            .map(MapIssueCard::from_issue)
            .collect();

        MapPage {
            viewport: viewport.clone(),
            markers,
            legend: legend(),
            categories: CATEGORIES,
            issues_in_view,
        }
    }
}

/// Side-list entry under the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapIssueCard {
    pub id: IssueId,
    pub title: String,
    pub status: String,
    pub badge_classes: String,
    pub category: String,
    pub urgency: Option<String>,
    pub border_class: &'static str,
}

impl MapIssueCard {
    fn from_issue(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            title: issue.title.clone(),
            status: issue.status.humanized(),
            badge_classes: issue.status.color_class().badge_classes(),
            category: issue.category.clone(),
            urgency: issue.urgency_label(),
            border_class: issue
                .urgency
                .unwrap_or(Urgency::Unspecified)
                .border_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPage {
    pub viewport: MapViewport,
    pub markers: Vec<MarkerDescriptor>,
    pub legend: Vec<LegendEntry>,
    /// Options for the category select
    pub categories: &'static [CategoryOption],
    pub issues_in_view: Vec<MapIssueCard>,
}
