//! Urgency levels

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgently an issue needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
    /// Unrecognized wire value; treated like an absent urgency
    #[serde(other)]
    Unspecified,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unspecified => "unspecified",
        }
    }

    /// "<urgency> priority", or `None` when unranked
    pub fn label(&self) -> Option<String> {
        self.rank().map(|_| format!("{} priority", self.as_str()))
    }

    /// 0 (low) ..= 3 (critical); `None` for unspecified
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Low => Some(0),
            Self::Medium => Some(1),
            Self::High => Some(2),
            Self::Critical => Some(3),
            Self::Unspecified => None,
        }
    }

    /// Left-border accent used on issue cards
    pub fn border_class(&self) -> &'static str {
        match self {
            Self::Critical => "border-l-red-500",
            Self::High => "border-l-orange-500",
            Self::Medium => "border-l-yellow-500",
            Self::Low => "border-l-green-500",
            Self::Unspecified => "border-l-gray-500",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(AppError::with_message(
                ErrorCode::InvalidUrgency,
                format!("unknown urgency: {other}"),
            )
            .with_detail("urgency", other)),
        }
    }
}
