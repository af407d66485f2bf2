//! Filtering, sorting and pagination over the in-memory brand and alert
//! dataset.
//!
//! Every function here is a pure transform: inputs are borrowed, outputs are
//! new collections (or prefixes of the input), and nothing can fail. Session
//! state that the dashboard toggles (watched brands, read/dismissed alerts)
//! lives in explicit structs the caller owns.

pub mod alerts;
pub mod clock;
pub mod criteria;
pub mod discovery;
pub mod facets;
pub mod filter;
pub mod format;
pub mod overview;
pub mod paginate;
pub mod profile;
pub mod sort;
pub mod watchlist;

pub use clock::{Clock, FixedClock, SystemClock};
pub use criteria::{FilterChip, FilterCriteria, GrowthRange, SpendRange, ValueRange};
pub use discovery::{discover, BrandView, DiscoveryState};
pub use facets::{brand_facets, FacetCount, Facets};
pub use filter::{filter_records, matches_record};
pub use overview::{overview, Overview};
pub use paginate::{page_slice, paginate, total_pages, Pagination};
pub use profile::{brand_by_key, brand_profile, BrandProfile};
pub use sort::{locale_cmp, sort_records, SortKey};
pub use watchlist::Watchlist;

#[cfg(test)]
pub(crate) mod fixtures;
