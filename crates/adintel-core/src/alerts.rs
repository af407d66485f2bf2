use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// Alert urgency. Variants are declared lowest first so the derived `Ord`
/// ranks `High` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertPriority::Low => write!(f, "low"),
            AlertPriority::Medium => write!(f, "medium"),
            AlertPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for AlertPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(AlertPriority::Low),
            "medium" => Ok(AlertPriority::Medium),
            "high" => Ok(AlertPriority::High),
            _ => Err(ParseEnumError::new(
                "alert priority",
                s,
                "low, medium, high",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    SpendThreshold,
    Competitor,
    CampaignLaunch,
    GrowthRate,
}

impl AlertKind {
    /// Human-readable label used in tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::SpendThreshold => "Spend Threshold",
            AlertKind::Competitor => "New Competitor",
            AlertKind::CampaignLaunch => "Campaign Launch",
            AlertKind::GrowthRate => "Growth Rate",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::SpendThreshold => write!(f, "spend-threshold"),
            AlertKind::Competitor => write!(f, "competitor"),
            AlertKind::CampaignLaunch => write!(f, "campaign-launch"),
            AlertKind::GrowthRate => write!(f, "growth-rate"),
        }
    }
}

impl FromStr for AlertKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spend-threshold" | "spend" => Ok(AlertKind::SpendThreshold),
            "competitor" => Ok(AlertKind::Competitor),
            "campaign-launch" | "campaign" => Ok(AlertKind::CampaignLaunch),
            "growth-rate" | "growth" => Ok(AlertKind::GrowthRate),
            _ => Err(ParseEnumError::new(
                "alert kind",
                s,
                "spend-threshold, competitor, campaign-launch, growth-rate",
            )),
        }
    }
}

/// How a past alert was closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Resolved,
    Acknowledged,
    Dismissed,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Resolved => write!(f, "resolved"),
            AlertStatus::Acknowledged => write!(f, "acknowledged"),
            AlertStatus::Dismissed => write!(f, "dismissed"),
        }
    }
}

impl FromStr for AlertStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolved" => Ok(AlertStatus::Resolved),
            "acknowledged" => Ok(AlertStatus::Acknowledged),
            "dismissed" => Ok(AlertStatus::Dismissed),
            _ => Err(ParseEnumError::new(
                "alert status",
                s,
                "resolved, acknowledged, dismissed",
            )),
        }
    }
}

/// An active alert shown in the alert center inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: u32,
    pub priority: AlertPriority,
    /// Brand the alert concerns, referenced by display name.
    pub brand: String,
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub details: String,
}

/// A closed alert from the history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertHistoryRecord {
    pub id: u32,
    pub priority: AlertPriority,
    pub brand: String,
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub status: AlertStatus,
    #[serde(default)]
    pub action: String,
}
