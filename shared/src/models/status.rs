//! Issue status and the color classes derived from it

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an issue
///
/// `Unknown` absorbs status strings this build does not recognize when
/// deserializing; it never comes out of [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Reported,
    InProgress,
    Resolved,
    #[serde(other)]
    Unknown,
}

impl IssueStatus {
    /// The statuses a UI may filter by, in display order
    pub const KNOWN: [IssueStatus; 3] = [Self::Reported, Self::InProgress, Self::Resolved];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "reported",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Unknown => "unknown",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire value with hyphens replaced by spaces ("in-progress" -> "in progress")
    pub fn humanized(&self) -> String {
        self.as_str().replace('-', " ")
    }

    pub fn color_class(&self) -> ColorClass {
        match self {
            Self::Reported => ColorClass::Accent,
            Self::InProgress => ColorClass::Primary,
            Self::Resolved => ColorClass::Secondary,
            Self::Unknown => ColorClass::Muted,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = AppError;

    /// Exact, case-sensitive match against the closed status set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reported" => Ok(Self::Reported),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(
                AppError::with_message(ErrorCode::InvalidStatus, format!("unknown status: {other}"))
                    .with_detail("status", other),
            ),
        }
    }
}

/// Design-system color token used for status badges and markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Accent,
    Primary,
    Secondary,
    Muted,
}

impl ColorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Muted => "muted",
        }
    }

    /// Background + foreground utility classes for a badge in this color
    pub fn badge_classes(&self) -> String {
        let token = self.as_str();
        format!("bg-{token} text-{token}-foreground")
    }
}
