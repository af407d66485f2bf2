pub mod alerts;
pub mod app_config;
pub mod brands;
pub mod config;
pub mod dataset;
pub mod rules;

pub use alerts::{AlertHistoryRecord, AlertKind, AlertPriority, AlertRecord, AlertStatus};
pub use app_config::{AppConfig, Environment};
pub use brands::BrandRecord;
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{load_dataset, parse_dataset, Dataset};
pub use rules::{
    AlertRules, CampaignLaunchRule, CompetitorRule, Frequency, GrowthRateRule, NotificationSettings,
    SpendThresholdRule,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read dataset file {path}: {source}")]
    DatasetFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file: {0}")]
    DatasetFileParse(#[from] serde_yaml::Error),

    #[error("dataset validation failed: {0}")]
    Validation(String),
}

/// Returned when a string does not name a variant of one of the dataset enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'; expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseEnumError {
    #[must_use]
    pub fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
