use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One advertiser tracked by the dashboard, with its current ad-spend profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub id: u32,
    pub name: String,
    pub industry: String,
    /// Estimated monthly ad spend in USD.
    pub monthly_spend: Decimal,
    /// Month-over-month spend growth, in percent. May be negative.
    pub growth_rate: f64,
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Market codes the brand advertises in, e.g. `"US"`, `"UK"`.
    #[serde(default)]
    pub geography: Vec<String>,
    #[serde(default)]
    pub campaign_types: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_watched: bool,
    /// Raw date string as supplied by the data source. See [`BrandRecord::last_updated_at`].
    #[serde(default)]
    pub last_updated: String,
}

impl BrandRecord {
    /// Generate a URL-safe slug from the brand name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Parse `last_updated` as an instant in UTC.
    ///
    /// Accepts an RFC 3339 timestamp (any offset) or a plain `YYYY-MM-DD`
    /// date, read as midnight UTC. Anything else, including an empty string,
    /// yields `None`.
    #[must_use]
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_updated.trim();
        if raw.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            })
    }
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
