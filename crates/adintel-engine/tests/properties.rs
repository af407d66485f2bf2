//! Property checks over randomly generated brand catalogs.

use std::cmp::Ordering;

use adintel_core::BrandRecord;
use adintel_engine::{
    filter_records, locale_cmp, paginate, sort_records, FilterCriteria, GrowthRange, Pagination,
    SortKey, SpendRange,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const INDUSTRIES: [&str; 3] = ["Fashion", "Beauty", "Technology"];
const PLATFORMS: [&str; 4] = ["Facebook", "Instagram", "TikTok", "YouTube"];
const REGIONS: [&str; 3] = ["US", "UK", "CA"];

fn arb_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(pool.to_vec(), 0..=pool.len())
        .prop_map(|picked| picked.into_iter().map(str::to_string).collect())
}

fn arb_brand() -> impl Strategy<Value = BrandRecord> {
    (
        "[A-Za-z]{1,3}( [A-Za-z]{1,3})?",
        prop::sample::select(INDUSTRIES.to_vec()),
        0i64..1_500_000,
        -150i32..600,
        arb_subset(&PLATFORMS),
        arb_subset(&REGIONS),
        1u32..28,
    )
        .prop_map(|(name, industry, spend, growth, platforms, geography, day)| BrandRecord {
            id: 0,
            name,
            industry: industry.to_string(),
            monthly_spend: Decimal::from(spend),
            growth_rate: f64::from(growth) / 2.0,
            platforms,
            geography,
            campaign_types: Vec::new(),
            description: String::new(),
            is_watched: false,
            last_updated: format!("2024-01-{day:02}"),
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<BrandRecord>> {
    prop::collection::vec(arb_brand(), 0..40).prop_map(|mut brands| {
        for (id, brand) in (1..).zip(brands.iter_mut()) {
            brand.id = id;
        }
        brands
    })
}

/// Catalog with coarse keys so that most sort keys tie with a neighbour.
fn arb_tied_catalog() -> impl Strategy<Value = Vec<BrandRecord>> {
    arb_catalog().prop_map(|mut brands| {
        for brand in &mut brands {
            brand.monthly_spend = (brand.monthly_spend / Decimal::from(500_000)).floor()
                * Decimal::from(500_000);
            brand.growth_rate = (brand.growth_rate / 100.0).trunc() * 100.0;
            brand.name = brand.name.chars().take(1).collect::<String>().to_uppercase();
            let day = brand.last_updated[8..].parse::<u32>().unwrap_or(1) % 3 + 1;
            brand.last_updated = format!("2024-01-{day:02}");
        }
        brands
    })
}

fn same_sort_key(key: SortKey, a: &BrandRecord, b: &BrandRecord) -> bool {
    match key {
        SortKey::Spend => a.monthly_spend == b.monthly_spend,
        SortKey::Growth => {
            (a.growth_rate + 0.0).total_cmp(&(b.growth_rate + 0.0)) == Ordering::Equal
        }
        SortKey::Alphabetical => locale_cmp(&a.name, &b.name) == Ordering::Equal,
        SortKey::Recent => a.last_updated_at() == b.last_updated_at(),
    }
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        arb_subset(&INDUSTRIES),
        arb_subset(&PLATFORMS),
        arb_subset(&REGIONS),
        0i64..1_200_000,
        0i64..1_200_000,
        -120i32..520,
        -120i32..520,
    )
        .prop_map(
            |(industries, platforms, geography, spend_a, spend_b, growth_a, growth_b)| {
                FilterCriteria {
                    industries: industries.into_iter().collect(),
                    platforms: platforms.into_iter().collect(),
                    geography: geography.into_iter().collect(),
                    spend_range: SpendRange::new(Decimal::from(spend_a), Decimal::from(spend_b)),
                    growth_range: GrowthRange::new(f64::from(growth_a), f64::from(growth_b)),
                }
            },
        )
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Spend),
        Just(SortKey::Growth),
        Just(SortKey::Alphabetical),
        Just(SortKey::Recent),
    ]
}

fn ids(records: &[BrandRecord]) -> Vec<u32> {
    records.iter().map(|b| b.id).collect()
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        catalog in arb_catalog(),
        criteria in arb_criteria(),
        query in "[a-z]{0,2}",
    ) {
        let once = filter_records(&catalog, &query, &criteria);
        let twice = filter_records(&once, &query, &criteria);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn filtering_preserves_relative_order(
        catalog in arb_catalog(),
        criteria in arb_criteria(),
    ) {
        let kept = ids(&filter_records(&catalog, "", &criteria));
        prop_assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn default_criteria_only_drop_out_of_range_records(catalog in arb_catalog()) {
        let kept = filter_records(&catalog, "", &FilterCriteria::default());
        let expected: Vec<u32> = catalog
            .iter()
            .filter(|b| {
                b.monthly_spend <= Decimal::from(1_000_000)
                    && (-100.0..=500.0).contains(&b.growth_rate)
            })
            .map(|b| b.id)
            .collect();
        prop_assert_eq!(ids(&kept), expected);
    }

    #[test]
    fn sorting_is_a_stable_permutation(catalog in arb_catalog(), key in arb_sort_key()) {
        let sorted = sort_records(&catalog, key);

        let mut before = ids(&catalog);
        let mut after = ids(&sorted);
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        // sorting an already-sorted list changes nothing
        prop_assert_eq!(ids(&sort_records(&sorted, key)), ids(&sorted));
    }

    #[test]
    fn equal_keys_keep_their_input_order(catalog in arb_tied_catalog(), key in arb_sort_key()) {
        // ids ascend in input order, so every run of equal keys must too
        let sorted = sort_records(&catalog, key);
        for pair in sorted.windows(2) {
            if same_sort_key(key, &pair[0], &pair[1]) {
                prop_assert!(
                    pair[0].id < pair[1].id,
                    "{} sort swapped tied ids {} and {}",
                    key,
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn loading_more_pages_only_extends_the_prefix(
        catalog in arb_catalog(),
        page_size in 1usize..15,
    ) {
        let mut pagination = Pagination::new(page_size);
        let mut previous = pagination.apply(&catalog).len();
        prop_assert_eq!(previous, catalog.len().min(page_size));

        while pagination.load_more(catalog.len()) {
            let visible = pagination.apply(&catalog);
            prop_assert!(visible.len() > previous);
            prop_assert_eq!(visible, &catalog[..visible.len()]);
            previous = visible.len();
        }
        prop_assert_eq!(previous, catalog.len());
        prop_assert_eq!(pagination.remaining(catalog.len()), 0);
    }

    #[test]
    fn paginate_never_exceeds_requested_pages(
        catalog in arb_catalog(),
        page_size in 0usize..15,
        pages in 0usize..6,
    ) {
        let visible = paginate(&catalog, page_size, pages);
        prop_assert_eq!(visible.len(), catalog.len().min(page_size * pages));
    }

    #[test]
    fn reset_zeroes_the_active_filter_count(criteria in arb_criteria()) {
        let mut criteria = criteria;
        criteria.reset();
        prop_assert_eq!(criteria.active_filter_count(), 0);
        prop_assert!(criteria.chips().is_empty());
        prop_assert!(criteria.is_default());
    }
}
