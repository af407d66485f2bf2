use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_spend_compact;

/// Upper bound of the spend slider in USD per month.
pub const DEFAULT_SPEND_MAX: i64 = 1_000_000;
/// Bounds of the growth slider in percent.
pub const DEFAULT_GROWTH_MIN: f64 = -100.0;
pub const DEFAULT_GROWTH_MAX: f64 = 500.0;

/// Inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

pub type SpendRange = ValueRange<Decimal>;
pub type GrowthRange = ValueRange<f64>;

impl<T: PartialOrd> ValueRange<T> {
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `true` when `min > max`. An inverted range contains nothing.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Inclusive containment check. Inverted ranges reject every value, and
    /// so does any value that does not compare (NaN).
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        if self.is_inverted() {
            return false;
        }
        &self.min <= value && value <= &self.max
    }
}

impl Default for SpendRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(DEFAULT_SPEND_MAX),
        }
    }
}

impl Default for GrowthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_GROWTH_MIN,
            max: DEFAULT_GROWTH_MAX,
        }
    }
}

/// The combined set of filter constraints on the brand discovery view.
///
/// Empty sets place no constraint on their dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub industries: BTreeSet<String>,
    pub spend_range: SpendRange,
    pub growth_range: GrowthRange,
    pub platforms: BTreeSet<String>,
    pub geography: BTreeSet<String>,
}

/// One removable chip in the "Active Filters" strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dimension", content = "value", rename_all = "lowercase")]
pub enum FilterChip {
    Industry(String),
    Platform(String),
    Geography(String),
    Spend(SpendRange),
    Growth(GrowthRange),
}

impl FilterChip {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            FilterChip::Industry(v) | FilterChip::Platform(v) | FilterChip::Geography(v) => {
                v.clone()
            }
            FilterChip::Spend(range) => format!(
                "Spend: {} - {}",
                format_spend_compact(range.min),
                format_spend_compact(range.max)
            ),
            FilterChip::Growth(range) => format!("Growth: {}% - {}%", range.min, range.max),
        }
    }
}

impl FilterCriteria {
    /// Number of dimensions constrained away from their default.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        [
            !self.industries.is_empty(),
            self.spend_range != SpendRange::default(),
            self.growth_range != GrowthRange::default(),
            !self.platforms.is_empty(),
            !self.geography.is_empty(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Clear every dimension back to its unfiltered default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add `industry` if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle_industry(&mut self, industry: &str) -> bool {
        toggle(&mut self.industries, industry)
    }

    pub fn toggle_platform(&mut self, platform: &str) -> bool {
        toggle(&mut self.platforms, platform)
    }

    pub fn toggle_geography(&mut self, geo: &str) -> bool {
        toggle(&mut self.geography, geo)
    }

    pub fn reset_spend_range(&mut self) {
        self.spend_range = SpendRange::default();
    }

    pub fn reset_growth_range(&mut self) {
        self.growth_range = GrowthRange::default();
    }

    /// Chips for every active constraint: industries, platforms and
    /// geographies first (each alphabetical), then the spend and growth
    /// ranges when they differ from their defaults.
    #[must_use]
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips: Vec<FilterChip> = self
            .industries
            .iter()
            .cloned()
            .map(FilterChip::Industry)
            .chain(self.platforms.iter().cloned().map(FilterChip::Platform))
            .chain(self.geography.iter().cloned().map(FilterChip::Geography))
            .collect();

        if self.spend_range != SpendRange::default() {
            chips.push(FilterChip::Spend(self.spend_range));
        }
        if self.growth_range != GrowthRange::default() {
            chips.push(FilterChip::Growth(self.growth_range));
        }
        chips
    }

    /// Drop the constraint a chip stands for. Range chips reset their range.
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        match chip {
            FilterChip::Industry(v) => {
                self.industries.remove(v);
            }
            FilterChip::Platform(v) => {
                self.platforms.remove(v);
            }
            FilterChip::Geography(v) => {
                self.geography.remove(v);
            }
            FilterChip::Spend(_) => self.reset_spend_range(),
            FilterChip::Growth(_) => self.reset_growth_range(),
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_has_no_active_filters() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.active_filter_count(), 0);
        assert!(criteria.is_default());
        assert!(criteria.chips().is_empty());
    }

    #[test]
    fn each_dimension_counts_once() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_industry("Eyewear");
        criteria.toggle_industry("Jewelry");
        assert_eq!(criteria.active_filter_count(), 1);

        criteria.spend_range.min = Decimal::from(100_000);
        assert_eq!(criteria.active_filter_count(), 2);

        criteria.growth_range.max = 50.0;
        assert_eq!(criteria.active_filter_count(), 3);

        criteria.toggle_platform("TikTok");
        criteria.toggle_geography("UK");
        assert_eq!(criteria.active_filter_count(), 5);

        criteria.reset();
        assert_eq!(criteria.active_filter_count(), 0);
    }

    #[test]
    fn widened_range_still_counts_as_set() {
        let mut criteria = FilterCriteria::default();
        criteria.spend_range.max = Decimal::from(5_000_000);
        assert_eq!(criteria.active_filter_count(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.toggle_platform("Google"));
        assert!(criteria.platforms.contains("Google"));
        assert!(!criteria.toggle_platform("Google"));
        assert!(criteria.platforms.is_empty());
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = SpendRange::new(Decimal::from(1000), Decimal::ZERO);
        assert!(range.is_inverted());
        assert!(!range.contains(&Decimal::from(500)));
        assert!(!range.contains(&Decimal::from(1000)));
        assert!(!range.contains(&Decimal::ZERO));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = GrowthRange::new(-10.0, 10.0);
        assert!(range.contains(&-10.0));
        assert!(range.contains(&10.0));
        assert!(!range.contains(&10.01));
        assert!(!range.contains(&f64::NAN));
    }

    #[test]
    fn chips_follow_display_order() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_geography("US");
        criteria.toggle_industry("Jewelry");
        criteria.toggle_platform("TikTok");
        criteria.growth_range = GrowthRange::new(10.0, 50.0);
        criteria.spend_range = SpendRange::new(Decimal::from(100_000), Decimal::from(500_000));

        let labels: Vec<String> = criteria.chips().iter().map(FilterChip::label).collect();
        assert_eq!(
            labels,
            vec![
                "Jewelry",
                "TikTok",
                "US",
                "Spend: $100K - $500K",
                "Growth: 10% - 50%",
            ]
        );
    }

    #[test]
    fn removing_chips_clears_their_dimension() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_industry("Eyewear");
        criteria.spend_range.min = Decimal::from(1);

        for chip in criteria.chips() {
            criteria.remove_chip(&chip);
        }
        assert!(criteria.is_default());
    }
}
