use adintel_core::BrandRecord;

use crate::criteria::FilterCriteria;

/// Keep the records that match both the free-text `query` and every
/// constraint in `criteria`, preserving their relative order.
///
/// An empty query places no constraint. The source slice is never modified.
#[must_use]
pub fn filter_records(
    records: &[BrandRecord],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<BrandRecord> {
    if criteria.spend_range.is_inverted() || criteria.growth_range.is_inverted() {
        tracing::debug!(
            total = records.len(),
            "inverted range in filter criteria; no records match"
        );
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matched: Vec<BrandRecord> = records
        .iter()
        .filter(|record| matches_lowered(record, &needle, criteria))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = matched.len(),
        active_filters = criteria.active_filter_count(),
        "filtered brand records"
    );
    matched
}

/// Single-record form of [`filter_records`].
#[must_use]
pub fn matches_record(record: &BrandRecord, query: &str, criteria: &FilterCriteria) -> bool {
    matches_lowered(record, &query.to_lowercase(), criteria)
}

fn matches_lowered(record: &BrandRecord, needle: &str, criteria: &FilterCriteria) -> bool {
    if !needle.is_empty()
        && ![&record.name, &record.industry, &record.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    {
        return false;
    }

    if !criteria.industries.is_empty() && !criteria.industries.contains(&record.industry) {
        return false;
    }

    if !criteria.spend_range.contains(&record.monthly_spend) {
        return false;
    }

    if !criteria.growth_range.contains(&record.growth_rate) {
        return false;
    }

    if !criteria.platforms.is_empty()
        && !record.platforms.iter().any(|p| criteria.platforms.contains(p))
    {
        return false;
    }

    if !criteria.geography.is_empty()
        && !record.geography.iter().any(|g| criteria.geography.contains(g))
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::criteria::{GrowthRange, SpendRange};
    use crate::fixtures::{brand, ids};

    fn three_brands() -> Vec<BrandRecord> {
        vec![
            brand(1, "Nike", 100),
            brand(2, "Adidas", 500),
            brand(3, "Puma", 300),
        ]
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_records(&[], "nike", &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn default_criteria_and_empty_query_keep_everything_in_order() {
        let records = three_brands();
        let out = filter_records(&records, "", &FilterCriteria::default());
        assert_eq!(ids(&out), vec![1, 2, 3]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let records = three_brands();
        let out = filter_records(&records, "NIKE", &FilterCriteria::default());
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn query_searches_industry_and_description() {
        let mut records = three_brands();
        records[1].industry = "Athletic Footwear".to_string();
        records[2].description = "Running shoes for FOOTWEAR fans".to_string();
        let out = filter_records(&records, "footwear", &FilterCriteria::default());
        assert_eq!(ids(&out), vec![2, 3]);
    }

    #[test]
    fn spend_range_is_inclusive() {
        let records = three_brands();
        let criteria = FilterCriteria {
            spend_range: SpendRange::new(Decimal::from(200), Decimal::from(1000)),
            ..FilterCriteria::default()
        };
        let out = filter_records(&records, "", &criteria);
        assert_eq!(ids(&out), vec![2, 3]);

        let criteria = FilterCriteria {
            spend_range: SpendRange::new(Decimal::from(300), Decimal::from(300)),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![3]);
    }

    #[test]
    fn inverted_spend_range_matches_nothing() {
        let records = three_brands();
        let criteria = FilterCriteria {
            spend_range: SpendRange::new(Decimal::from(1000), Decimal::ZERO),
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, "", &criteria).is_empty());
    }

    #[test]
    fn inverted_growth_range_matches_nothing() {
        let records = three_brands();
        let criteria = FilterCriteria {
            growth_range: GrowthRange::new(50.0, -50.0),
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, "", &criteria).is_empty());
    }

    #[test]
    fn negative_growth_is_filtered_by_range() {
        let mut records = three_brands();
        records[0].growth_rate = -12.5;
        let criteria = FilterCriteria {
            growth_range: GrowthRange::new(0.0, 500.0),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![2, 3]);
    }

    #[test]
    fn industry_must_be_selected() {
        let mut records = three_brands();
        records[0].industry = "Eyewear".to_string();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_industry("Eyewear");
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![1]);
    }

    #[test]
    fn platforms_need_any_overlap() {
        let mut records = three_brands();
        records[0].platforms = vec!["TikTok".to_string(), "Google".to_string()];
        records[1].platforms = vec!["Pinterest".to_string()];
        let mut criteria = FilterCriteria::default();
        criteria.toggle_platform("Google");
        criteria.toggle_platform("Pinterest");
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![1, 2]);
    }

    #[test]
    fn geography_needs_any_overlap() {
        let mut records = three_brands();
        records[2].geography = vec!["UK".to_string(), "AU".to_string()];
        let mut criteria = FilterCriteria::default();
        criteria.toggle_geography("AU");
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![3]);
    }

    #[test]
    fn record_without_platforms_fails_platform_filter() {
        let mut records = three_brands();
        records[0].platforms.clear();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_platform("Facebook");
        assert_eq!(ids(&filter_records(&records, "", &criteria)), vec![2, 3]);
    }

    #[test]
    fn all_constraints_must_hold() {
        let records = three_brands();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_platform("Facebook");
        criteria.spend_range = SpendRange::new(Decimal::from(400), Decimal::from(600));
        assert_eq!(ids(&filter_records(&records, "a", &criteria)), vec![2]);
        assert!(filter_records(&records, "puma", &criteria).is_empty());
    }

    #[test]
    fn source_is_left_untouched() {
        let records = three_brands();
        let before = records.clone();
        let _ = filter_records(&records, "nike", &FilterCriteria::default());
        assert_eq!(records, before);
    }

    #[test]
    fn matches_record_agrees_with_filter() {
        let records = three_brands();
        let criteria = FilterCriteria::default();
        assert!(matches_record(&records[0], "NiK", &criteria));
        assert!(!matches_record(&records[1], "NiK", &criteria));
    }
}
