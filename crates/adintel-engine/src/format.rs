//! Display helpers shared by the brand cards, chips and alert tables.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Short spend label: `$1.2M`, `$245K`, `$500`.
#[must_use]
pub fn format_spend_compact(amount: Decimal) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if amount >= million {
        let mut value = (amount / million)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(1);
        format!("${value}M")
    } else if amount >= thousand {
        let value = (amount / thousand)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        format!("${value}K")
    } else {
        format!("${}", amount.normalize())
    }
}

/// Whole-dollar amount with thousands separators: `$1,234,567`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Signed growth percentage with one decimal: `+23.5%`, `-4.0%`.
#[must_use]
pub fn format_growth(rate: f64) -> String {
    format!("{rate:+.1}%")
}

/// Coarse age of `timestamp` relative to `now`: `5m ago`, `3h ago`, `2d ago`.
/// Timestamps in the future read as `0m ago`.
#[must_use]
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);
    let days = elapsed.num_days().max(0);

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}
