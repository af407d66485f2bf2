use adintel_core::BrandRecord;
use serde::Serialize;

use crate::criteria::FilterCriteria;
use crate::filter::filter_records;
use crate::paginate::Pagination;
use crate::sort::{sort_records, SortKey};

/// Everything the brand discovery page lets the user change.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryState {
    pub query: String,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub pagination: Pagination,
}

impl DiscoveryState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            pagination: Pagination::new(page_size),
        }
    }

    /// Clear both the search box and every filter; sort and pagination stay.
    pub fn clear(&mut self) {
        self.query.clear();
        self.criteria.reset();
    }
}

/// What the discovery grid renders.
#[derive(Debug, Clone, Serialize)]
pub struct BrandView {
    pub visible: Vec<BrandRecord>,
    /// Total records matching the query and criteria, before pagination.
    pub total_matching: usize,
    /// Matching records not yet revealed.
    pub remaining: usize,
    pub active_filter_count: usize,
}

/// Filter, sort and paginate `records` according to `state`.
#[must_use]
pub fn discover(records: &[BrandRecord], state: &DiscoveryState) -> BrandView {
    let filtered = filter_records(records, &state.query, &state.criteria);
    let sorted = sort_records(&filtered, state.sort);
    let total_matching = sorted.len();

    BrandView {
        visible: state.pagination.apply(&sorted).to_vec(),
        total_matching,
        remaining: state.pagination.remaining(total_matching),
        active_filter_count: state.criteria.active_filter_count(),
    }
}
