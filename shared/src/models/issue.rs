//! Issue Model

use super::{Coordinates, IssueStatus, Urgency, normalize_category};
use crate::types::IssueId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reported civic problem
///
/// Immutable for the duration of any filter or projection call; the core
/// only ever borrows issue lists and returns derived copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text address
    #[serde(default)]
    pub location: String,
    /// Only present for geolocated issues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub status: IssueStatus,
    /// Free-text label, e.g. "Road Infrastructure"
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,

    // -- Provenance (display only) --
    #[serde(default)]
    pub reporter: String,
    pub reported_date: NaiveDate,
}

impl Issue {
    pub fn new(
        id: IssueId,
        title: impl Into<String>,
        status: IssueStatus,
        category: impl Into<String>,
        reported_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            location: String::new(),
            coordinates: None,
            status,
            category: category.into(),
            urgency: None,
            reporter: String::new(),
            reported_date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = reporter.into();
        self
    }

    /// Normalized category, the form filters compare against
    pub fn category_key(&self) -> String {
        normalize_category(&self.category)
    }

    pub fn is_geolocated(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Urgency label when the issue is ranked
    pub fn urgency_label(&self) -> Option<String> {
        self.urgency.and_then(|u| u.label())
    }
}
