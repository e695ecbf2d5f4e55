//! Client configuration

use crate::error::{ClientError, ClientResult};
use shared::map::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM, MapViewport};
use shared::models::Coordinates;
use std::path::PathBuf;

/// Client configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CIVIC_LOG_LEVEL | info | Level for this workspace's crates (RUST_LOG wins) |
/// | CIVIC_LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | CIVIC_REPORTER | Anonymous | Name recorded on submitted reports |
/// | CIVIC_MAP_LAT | 40.7128 | Initial map center latitude |
/// | CIVIC_MAP_LNG | -74.0060 | Initial map center longitude |
/// | CIVIC_MAP_ZOOM | 12 | Initial map zoom |
/// | CIVIC_SEED | true | Start with the demo issues |
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub reporter: String,
    pub map_lat: f64,
    pub map_lng: f64,
    pub map_zoom: u8,
    pub seed: bool,
}

impl ClientConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("CIVIC_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("CIVIC_LOG_DIR").ok().map(PathBuf::from),
            reporter: std::env::var("CIVIC_REPORTER").unwrap_or(defaults.reporter),
            map_lat: std::env::var("CIVIC_MAP_LAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.map_lat),
            map_lng: std::env::var("CIVIC_MAP_LNG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.map_lng),
            map_zoom: std::env::var("CIVIC_MAP_ZOOM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.map_zoom),
            seed: std::env::var("CIVIC_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed),
        }
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log directory
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Set the reporter name
    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = reporter.into();
        self
    }

    /// Set the initial map center and zoom
    pub fn with_map(mut self, lat: f64, lng: f64, zoom: u8) -> Self {
        self.map_lat = lat;
        self.map_lng = lng;
        self.map_zoom = zoom;
        self
    }

    /// Start with or without demo data
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Validated initial map view
    pub fn viewport(&self) -> ClientResult<MapViewport> {
        let center = Coordinates::new(self.map_lat, self.map_lng)
            .map_err(|e| ClientError::Config(format!("map center: {}", e)))?;
        MapViewport::new(center, self.map_zoom)
            .map_err(|e| ClientError::Config(format!("map zoom: {}", e)))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            reporter: "Anonymous".to_string(),
            map_lat: DEFAULT_CENTER_LAT,
            map_lng: DEFAULT_CENTER_LNG,
            map_zoom: DEFAULT_ZOOM,
            seed: true,
        }
    }
}
