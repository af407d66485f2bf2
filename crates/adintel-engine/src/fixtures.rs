//! Record builders shared by the unit tests.

use adintel_core::{AlertKind, AlertPriority, AlertRecord, BrandRecord};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

pub(crate) fn brand(id: u32, name: &str, spend: i64) -> BrandRecord {
    BrandRecord {
        id,
        name: name.to_string(),
        industry: "Apparel".to_string(),
        monthly_spend: Decimal::from(spend),
        growth_rate: 10.0,
        platforms: vec!["Facebook".to_string()],
        geography: vec!["US".to_string()],
        campaign_types: vec!["Performance".to_string()],
        description: String::new(),
        is_watched: false,
        last_updated: "2024-01-01".to_string(),
    }
}

pub(crate) fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn alert(id: u32, priority: AlertPriority, brand: &str, hour: u32) -> AlertRecord {
    AlertRecord {
        id,
        priority,
        brand: brand.to_string(),
        kind: AlertKind::SpendThreshold,
        message: format!("{brand} alert"),
        timestamp: ts(15, hour),
        is_read: false,
        details: String::new(),
    }
}

pub(crate) fn ids(records: &[BrandRecord]) -> Vec<u32> {
    records.iter().map(|b| b.id).collect()
}
