//! Single-brand lookup and the profile export.

use adintel_core::BrandRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Find a brand by numeric id, slug, or name (case-insensitive).
///
/// A key that parses as an id only matches by id, so a brand named "42"
/// cannot shadow brand 42.
#[must_use]
pub fn brand_by_key<'a>(records: &'a [BrandRecord], key: &str) -> Option<&'a BrandRecord> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    if let Ok(id) = key.parse::<u32>() {
        return records.iter().find(|b| b.id == id);
    }
    records
        .iter()
        .find(|b| b.slug().eq_ignore_ascii_case(key))
        .or_else(|| records.iter().find(|b| b.name.trim().to_lowercase() == key.to_lowercase()))
}

/// Exported view of one brand, ranked against the rest of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandProfile {
    pub brand: BrandRecord,
    pub slug: String,
    pub exported_at: DateTime<Utc>,
    /// Monthly spend times twelve.
    pub annual_spend: Decimal,
    /// 1-based position by monthly spend across all tracked brands. Brands
    /// with equal spend share a rank.
    pub spend_rank: usize,
    pub tracked_brands: usize,
    /// Same ranking restricted to the brand's industry.
    pub industry_rank: usize,
    pub industry_brands: usize,
}

/// Build the profile of `brand` against `records`, which should contain it.
#[must_use]
pub fn brand_profile(
    records: &[BrandRecord],
    brand: &BrandRecord,
    exported_at: DateTime<Utc>,
) -> BrandProfile {
    let peers: Vec<&BrandRecord> = records
        .iter()
        .filter(|b| b.industry == brand.industry)
        .collect();

    BrandProfile {
        brand: brand.clone(),
        slug: brand.slug(),
        exported_at,
        annual_spend: brand.monthly_spend * Decimal::from(12),
        spend_rank: rank_by_spend(records.iter(), brand.monthly_spend),
        tracked_brands: records.len(),
        industry_rank: rank_by_spend(peers.iter().copied(), brand.monthly_spend),
        industry_brands: peers.len(),
    }
}

fn rank_by_spend<'a>(records: impl Iterator<Item = &'a BrandRecord>, spend: Decimal) -> usize {
    1 + records.filter(|b| b.monthly_spend > spend).count()
}
