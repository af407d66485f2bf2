use std::cmp::Ordering;
use std::str::FromStr;

use adintel_core::{BrandRecord, ParseEnumError};
use serde::{Deserialize, Serialize};

/// Ordering applied to the brand discovery results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Monthly spend, highest first.
    #[default]
    Spend,
    /// Growth rate, highest first.
    Growth,
    /// Name, A to Z.
    Alphabetical,
    /// Last updated, newest first. Missing or unparseable dates go last.
    Recent,
}

impl SortKey {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Spend => "Monthly Spend",
            SortKey::Growth => "Growth Rate",
            SortKey::Alphabetical => "Alphabetical",
            SortKey::Recent => "Recently Updated",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Spend => write!(f, "spend"),
            SortKey::Growth => write!(f, "growth"),
            SortKey::Alphabetical => write!(f, "alphabetical"),
            SortKey::Recent => write!(f, "recent"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spend" => Ok(SortKey::Spend),
            "growth" => Ok(SortKey::Growth),
            "alphabetical" | "name" => Ok(SortKey::Alphabetical),
            "recent" => Ok(SortKey::Recent),
            _ => Err(ParseEnumError::new(
                "sort key",
                s,
                "spend, growth, alphabetical, recent",
            )),
        }
    }
}

/// Return a sorted copy of `records`. Equal keys keep their input order.
#[must_use]
pub fn sort_records(records: &[BrandRecord], key: SortKey) -> Vec<BrandRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Spend => sorted.sort_by(|a, b| b.monthly_spend.cmp(&a.monthly_spend)),
        SortKey::Growth => {
            sorted.sort_by(|a, b| {
                growth_key(b.growth_rate).total_cmp(&growth_key(a.growth_rate))
            });
        }
        SortKey::Alphabetical => sorted.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Recent => {
            // Parse once per record rather than once per comparison.
            let mut keyed: Vec<_> = sorted
                .into_iter()
                .map(|record| (record.last_updated_at(), record))
                .collect();
            // `None` compares below every instant, so it lands last when descending.
            keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
            sorted = keyed.into_iter().map(|(_, record)| record).collect();
        }
    }
    tracing::debug!(count = sorted.len(), key = %key, "sorted brand records");
    sorted
}

/// Growth as a totally ordered sort key: `-0.0` equals `0.0`, and NaN ranks
/// with negative infinity so it lands last when descending.
fn growth_key(rate: f64) -> f64 {
    if rate.is_nan() {
        f64::NEG_INFINITY
    } else {
        // -0.0 + 0.0 is +0.0
        rate + 0.0
    }
}

/// Collation for display names, in the spirit of an English locale compare.
///
/// Letters compare case- and accent-insensitively first; accents then break
/// ties (plain before accented), and finally case (lowercase before
/// uppercase). Strings that differ in none of these compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(fold_accent)
            .collect::<Vec<char>>()
    };
    let secondary = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<char>>();
    let tertiary = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<bool>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
}

/// Map common Latin accented lowercase letters to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
