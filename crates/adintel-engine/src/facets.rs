use std::collections::{BTreeMap, BTreeSet};

use adintel_core::BrandRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    /// Number of brands carrying this value.
    pub count: usize,
}

/// Filter options offered by the filter panel, derived from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub industries: Vec<FacetCount>,
    pub platforms: Vec<FacetCount>,
    pub geography: Vec<FacetCount>,
    pub campaign_types: Vec<FacetCount>,
}

/// Distinct values per filterable dimension, sorted by code point.
#[must_use]
pub fn brand_facets(records: &[BrandRecord]) -> Facets {
    Facets {
        industries: tally(records, |b| std::slice::from_ref(&b.industry)),
        platforms: tally(records, |b| b.platforms.as_slice()),
        geography: tally(records, |b| b.geography.as_slice()),
        campaign_types: tally(records, |b| b.campaign_types.as_slice()),
    }
}

fn tally<F>(records: &[BrandRecord], values: F) -> Vec<FacetCount>
where
    F: Fn(&BrandRecord) -> &[String],
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        // A brand listing the same platform twice still counts once.
        let distinct: BTreeSet<&str> = values(record).iter().map(String::as_str).collect();
        for value in distinct {
            *counts.entry(value).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(value, count)| FacetCount {
            value: value.to_string(),
            count,
        })
        .collect()
}
