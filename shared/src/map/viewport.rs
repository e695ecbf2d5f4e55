//! Initial map view and legend

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{ColorClass, Coordinates, IssueStatus};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CENTER_LAT: f64 = 40.7128;
pub const DEFAULT_CENTER_LNG: f64 = -74.0060;
pub const DEFAULT_CENTER: Coordinates =
    Coordinates::from_degrees(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG);
pub const DEFAULT_ZOOM: u8 = 12;
pub const MAX_ZOOM: u8 = 19;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// What the map renderer should show first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl MapViewport {
    pub fn new(center: Coordinates, zoom: u8) -> AppResult<Self> {
        if zoom > MAX_ZOOM {
            return Err(AppError::new(ErrorCode::InvalidZoom).with_detail("zoom", zoom));
        }
        Ok(Self {
            center,
            zoom,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        })
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// One row of the map legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub color_class: ColorClass,
    pub label: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    IssueStatus::KNOWN
        .iter()
        .map(|status| LegendEntry {
            color_class: status.color_class(),
            label: match status {
                IssueStatus::Reported => "Reported Issues",
                other => other.label(),
            },
        })
        .collect()
}
