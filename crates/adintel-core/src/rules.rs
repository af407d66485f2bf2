//! Alert rule configuration.
//!
//! Rules are plain data; evaluating them against brands happens in the engine.
//! Defaults match the thresholds the alert center ships with.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// How often a rule (or the notification channel) fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Immediate,
    Hourly,
    Daily,
    Weekly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Immediate => write!(f, "immediate"),
            Frequency::Hourly => write!(f, "hourly"),
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Frequency::Immediate),
            "hourly" => Ok(Frequency::Hourly),
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(ParseEnumError::new(
                "frequency",
                s,
                "immediate, hourly, daily, weekly",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendThresholdRule {
    pub enabled: bool,
    /// Monthly spend above which an alert is raised.
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: Frequency,
    /// Brand names to watch. Empty means every brand.
    #[serde(default)]
    pub brands: Vec<String>,
}

impl Default for SpendThresholdRule {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: Decimal::from(500_000),
            frequency: Frequency::Daily,
            brands: vec!["Nike".to_string(), "Adidas".to_string(), "Puma".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRule {
    pub enabled: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    pub min_spend: Decimal,
}

impl Default for CompetitorRule {
    fn default() -> Self {
        Self {
            enabled: true,
            categories: vec![
                "Athletic Footwear".to_string(),
                "Sportswear".to_string(),
                "Fitness Equipment".to_string(),
            ],
            min_spend: Decimal::from(50_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignLaunchRule {
    pub enabled: bool,
    #[serde(default)]
    pub brands: Vec<String>,
    pub min_budget: Decimal,
}

impl Default for CampaignLaunchRule {
    fn default() -> Self {
        Self {
            enabled: false,
            brands: Vec::new(),
            min_budget: Decimal::from(25_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateRule {
    pub enabled: bool,
    /// Growth percentage above which an alert is raised.
    pub threshold: f64,
    pub period_days: u32,
    #[serde(default)]
    pub brands: Vec<String>,
}

impl Default for GrowthRateRule {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 25.0,
            period_days: 30,
            brands: vec![
                "Nike".to_string(),
                "Adidas".to_string(),
                "Under Armour".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub in_app: bool,
    #[serde(default)]
    pub frequency: Frequency,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            in_app: true,
            frequency: Frequency::Immediate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    pub spend_threshold: SpendThresholdRule,
    pub competitor_detection: CompetitorRule,
    pub campaign_launches: CampaignLaunchRule,
    pub growth_rate: GrowthRateRule,
    pub notifications: NotificationSettings,
}
