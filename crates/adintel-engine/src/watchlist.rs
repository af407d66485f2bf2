use std::collections::BTreeSet;

use adintel_core::BrandRecord;

/// Session-local set of watched brand ids.
///
/// Seeded from the records' `is_watched` flags; toggles never touch the
/// records themselves and are not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    watched: BTreeSet<u32>,
}

impl Watchlist {
    #[must_use]
    pub fn from_records(records: &[BrandRecord]) -> Self {
        Self {
            watched: records
                .iter()
                .filter(|b| b.is_watched)
                .map(|b| b.id)
                .collect(),
        }
    }

    #[must_use]
    pub fn is_watched(&self, id: u32) -> bool {
        self.watched.contains(&id)
    }

    /// Flip the watched state of `id`. Returns the new state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.watched.remove(&id) {
            tracing::debug!(brand_id = id, "removed brand from watchlist");
            false
        } else {
            self.watched.insert(id);
            tracing::debug!(brand_id = id, "added brand to watchlist");
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Copies of `records` with `is_watched` reflecting this watchlist.
    #[must_use]
    pub fn apply(&self, records: &[BrandRecord]) -> Vec<BrandRecord> {
        records
            .iter()
            .map(|b| BrandRecord {
                is_watched: self.is_watched(b.id),
                ..b.clone()
            })
            .collect()
    }
}
