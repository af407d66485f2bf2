//! Headline figures for the dashboard landing page.

use adintel_core::BrandRecord;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::sort::{sort_records, SortKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Sum of monthly spend across tracked brands.
    pub total_spend: Decimal,
    pub brand_count: usize,
    pub watched_count: usize,
    /// Mean monthly spend per brand, to the cent. Zero for an empty dataset.
    pub average_spend: Decimal,
    /// Mean growth rate in percent over brands with a finite rate. Zero when
    /// there are none.
    pub average_growth: f64,
    /// Highest spenders, ties in dataset order.
    pub top_by_spend: Vec<BrandRecord>,
}

/// Summarize `records`, keeping the `top_n` highest spenders.
#[must_use]
pub fn overview(records: &[BrandRecord], top_n: usize) -> Overview {
    let total_spend: Decimal = records.iter().map(|b| b.monthly_spend).sum();
    let average_spend = if records.is_empty() {
        Decimal::ZERO
    } else {
        (total_spend / Decimal::from(records.len())).round_dp(2)
    };

    let rates: Vec<f64> = records
        .iter()
        .map(|b| b.growth_rate)
        .filter(|r| r.is_finite())
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let average_growth = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    let mut top_by_spend = sort_records(records, SortKey::Spend);
    top_by_spend.truncate(top_n);

    tracing::debug!(
        brands = records.len(),
        %total_spend,
        top = top_by_spend.len(),
        "built overview"
    );

    Overview {
        total_spend,
        brand_count: records.len(),
        watched_count: records.iter().filter(|b| b.is_watched).count(),
        average_spend,
        average_growth,
        top_by_spend,
    }
}
