//! Alert center: inbox filtering and sorting, session read/dismiss state,
//! the history tab, and evaluation of alert rules against brands.

mod history;
mod inbox;
mod scan;

pub use history::{filter_history, HistorySummary};
pub use inbox::{AlertInbox, BulkAction};
pub use scan::scan_rules;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

use adintel_core::{AlertKind, AlertPriority, AlertRecord, ParseEnumError};
use serde::{Deserialize, Serialize};

use crate::sort::locale_cmp;

/// Column the inbox table is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSortField {
    Priority,
    Brand,
    #[default]
    Timestamp,
}

impl FromStr for AlertSortField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(AlertSortField::Priority),
            "brand" => Ok(AlertSortField::Brand),
            "timestamp" | "time" => Ok(AlertSortField::Timestamp),
            _ => Err(ParseEnumError::new(
                "alert sort field",
                s,
                "priority, brand, timestamp",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The other direction; clicking an already-sorted column flips it.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseEnumError::new("sort order", s, "asc, desc")),
        }
    }
}

/// Constraints on the inbox. Empty sets and an empty query constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub priorities: BTreeSet<AlertPriority>,
    pub kinds: Vec<AlertKind>,
    pub unread_only: bool,
    /// Case-insensitive substring over brand, message and details.
    pub query: String,
}

impl AlertFilter {
    #[must_use]
    pub fn matches(&self, alert: &AlertRecord) -> bool {
        if !self.priorities.is_empty() && !self.priorities.contains(&alert.priority) {
            return false;
        }
        if !self.kinds.is_empty() && !self.kinds.contains(&alert.kind) {
            return false;
        }
        if self.unread_only && alert.is_read {
            return false;
        }
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            return [&alert.brand, &alert.message, &alert.details]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }
}

#[must_use]
pub fn filter_alerts(alerts: &[AlertRecord], filter: &AlertFilter) -> Vec<AlertRecord> {
    alerts
        .iter()
        .filter(|alert| filter.matches(alert))
        .cloned()
        .collect()
}

/// Stable sort of the inbox on one column.
#[must_use]
pub fn sort_alerts(
    alerts: &[AlertRecord],
    field: AlertSortField,
    order: SortOrder,
) -> Vec<AlertRecord> {
    let mut sorted = alerts.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_on(a, b, field);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_on(a: &AlertRecord, b: &AlertRecord, field: AlertSortField) -> Ordering {
    match field {
        AlertSortField::Priority => a.priority.cmp(&b.priority),
        AlertSortField::Brand => locale_cmp(&a.brand, &b.brand),
        AlertSortField::Timestamp => a.timestamp.cmp(&b.timestamp),
    }
}
