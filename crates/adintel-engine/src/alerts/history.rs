use adintel_core::{AlertHistoryRecord, AlertKind, AlertStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Closed alerts raised within the last `window_days` whole days, optionally
/// limited to one kind. Input order is preserved.
#[must_use]
pub fn filter_history(
    history: &[AlertHistoryRecord],
    window_days: u32,
    kind: Option<AlertKind>,
    now: DateTime<Utc>,
) -> Vec<AlertHistoryRecord> {
    let window = i64::from(window_days);
    history
        .iter()
        .filter(|entry| now.signed_duration_since(entry.timestamp).num_days() <= window)
        .filter(|entry| kind.is_none_or(|k| entry.kind == k))
        .cloned()
        .collect()
}

/// Status tallies shown above the history table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub resolved: usize,
    pub acknowledged: usize,
    pub dismissed: usize,
    pub total: usize,
}

impl HistorySummary {
    #[must_use]
    pub fn from_records(history: &[AlertHistoryRecord]) -> Self {
        history.iter().fold(Self::default(), |mut summary, entry| {
            match entry.status {
                AlertStatus::Resolved => summary.resolved += 1,
                AlertStatus::Acknowledged => summary.acknowledged += 1,
                AlertStatus::Dismissed => summary.dismissed += 1,
            }
            summary.total += 1;
            summary
        })
    }
}
