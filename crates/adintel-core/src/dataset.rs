use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::alerts::{AlertHistoryRecord, AlertRecord};
use crate::brands::BrandRecord;
use crate::rules::AlertRules;
use crate::ConfigError;

/// Demo data compiled into the binary, used when no dataset file is configured.
const BUILTIN_DATASET: &str = include_str!("../../../config/dataset.yaml");

/// Everything the dashboard works over: brands, inbox alerts, closed alerts
/// and the alert rule configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub brands: Vec<BrandRecord>,
    #[serde(default)]
    pub alerts: Vec<AlertRecord>,
    #[serde(default)]
    pub history: Vec<AlertHistoryRecord>,
    #[serde(default)]
    pub rules: AlertRules,
}

impl Dataset {
    /// The built-in demo dataset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_dataset(BUILTIN_DATASET)
    }
}

/// Load and validate a dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_dataset(path: &Path) -> Result<Dataset, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let dataset = parse_dataset(&content)?;
    tracing::debug!(
        path = %path.display(),
        brands = dataset.brands.len(),
        alerts = dataset.alerts.len(),
        history = dataset.history.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse and validate a dataset from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_dataset(content: &str) -> Result<Dataset, ConfigError> {
    let dataset: Dataset = serde_yaml::from_str(content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

fn validate_dataset(dataset: &Dataset) -> Result<(), ConfigError> {
    validate_brands(&dataset.brands)?;

    let mut seen_alert_ids = HashSet::new();
    for alert in &dataset.alerts {
        if !seen_alert_ids.insert(alert.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate alert id: {}",
                alert.id
            )));
        }
    }

    let mut seen_history_ids = HashSet::new();
    for entry in &dataset.history {
        if !seen_history_ids.insert(entry.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate history alert id: {}",
                entry.id
            )));
        }
    }

    if dataset.rules.spend_threshold.amount < Decimal::ZERO {
        return Err(ConfigError::Validation(format!(
            "spend threshold amount must be non-negative, got {}",
            dataset.rules.spend_threshold.amount
        )));
    }

    Ok(())
}

fn validate_brands(brands: &[BrandRecord]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for brand in brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        if brand.monthly_spend < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has negative monthly spend {}",
                brand.name, brand.monthly_spend
            )));
        }

        if !seen_ids.insert(brand.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand id {} (brand '{}')",
                brand.id, brand.name
            )));
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        let slug = brand.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{}' (from brand '{}')",
                slug, brand.name
            )));
        }
    }

    Ok(())
}
