//! Geographic position

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting non-finite or out-of-range values
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::new(ErrorCode::InvalidCoordinates)
                .with_detail("lat", lat.to_string())
                .with_detail("lng", lng.to_string()));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::new(ErrorCode::LatitudeOutOfRange).with_detail("lat", lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::new(ErrorCode::LongitudeOutOfRange).with_detail("lng", lng));
        }
        Ok(Self { lat, lng })
    }

    /// Constructor for `const` items. The range is checked at compile time
    /// there, so a bad literal fails the build instead of reaching a marker.
    pub const fn from_degrees(lat: f64, lng: f64) -> Self {
        assert!(lat >= -90.0 && lat <= 90.0, "latitude out of range");
        assert!(lng >= -180.0 && lng <= 180.0, "longitude out of range");
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lat, lng]` as map widgets expect it
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = AppError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}
