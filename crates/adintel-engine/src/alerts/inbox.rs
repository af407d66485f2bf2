use std::collections::BTreeSet;

use adintel_core::AlertRecord;

/// Bulk actions offered once at least one alert is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Dismiss,
    MarkRead,
}

impl BulkAction {
    /// Past-tense verb for confirmation messages.
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            BulkAction::Dismiss => "dismissed",
            BulkAction::MarkRead => "marked as read",
        }
    }
}

/// Session-local read, dismissed and selection state for the inbox.
///
/// The alert records are never modified; [`AlertInbox::view`] produces
/// copies with this state applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertInbox {
    read: BTreeSet<u32>,
    dismissed: BTreeSet<u32>,
    selected: BTreeSet<u32>,
}

impl AlertInbox {
    #[must_use]
    pub fn from_alerts(alerts: &[AlertRecord]) -> Self {
        Self {
            read: alerts.iter().filter(|a| a.is_read).map(|a| a.id).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_read(&self, id: u32) -> bool {
        self.read.contains(&id)
    }

    #[must_use]
    pub fn is_dismissed(&self, id: u32) -> bool {
        self.dismissed.contains(&id)
    }

    /// Returns `true` if the alert was previously unread.
    pub fn mark_read(&mut self, id: u32) -> bool {
        self.read.insert(id)
    }

    /// Returns `true` if the alert was not already dismissed.
    pub fn dismiss(&mut self, id: u32) -> bool {
        self.selected.remove(&id);
        self.dismissed.insert(id)
    }

    /// Flip selection of one alert. Returns whether it is selected afterwards.
    pub fn toggle_selected(&mut self, id: u32) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Select every non-dismissed alert in `alerts`.
    pub fn select_all(&mut self, alerts: &[AlertRecord]) {
        self.selected = alerts
            .iter()
            .map(|a| a.id)
            .filter(|id| !self.dismissed.contains(id))
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    /// Apply `action` to the current selection, then clear it. Returns the
    /// number of alerts whose state changed.
    pub fn apply_bulk(&mut self, action: BulkAction) -> usize {
        let ids = std::mem::take(&mut self.selected);
        let changed = ids
            .into_iter()
            .filter(|&id| match action {
                BulkAction::Dismiss => self.dismissed.insert(id),
                BulkAction::MarkRead => self.read.insert(id),
            })
            .count();
        tracing::debug!(action = action.past_tense(), changed, "applied bulk alert action");
        changed
    }

    /// Non-dismissed alerts with `is_read` reflecting this inbox, in input order.
    #[must_use]
    pub fn view(&self, alerts: &[AlertRecord]) -> Vec<AlertRecord> {
        alerts
            .iter()
            .filter(|a| !self.is_dismissed(a.id))
            .map(|a| AlertRecord {
                is_read: self.is_read(a.id),
                ..a.clone()
            })
            .collect()
    }

    #[must_use]
    pub fn unread_count(&self, alerts: &[AlertRecord]) -> usize {
        alerts
            .iter()
            .filter(|a| !self.is_dismissed(a.id) && !self.is_read(a.id))
            .count()
    }
}
