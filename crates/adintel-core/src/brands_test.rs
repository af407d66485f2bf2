use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use super::*;

fn brand(name: &str, last_updated: &str) -> BrandRecord {
    BrandRecord {
        id: 1,
        name: name.to_string(),
        industry: "Apparel".to_string(),
        monthly_spend: Decimal::from(234_000),
        growth_rate: 28.9,
        platforms: vec!["Facebook".to_string()],
        geography: vec!["US".to_string()],
        campaign_types: vec![],
        description: String::new(),
        is_watched: false,
        last_updated: last_updated.to_string(),
    }
}

#[test]
fn slug_simple_name() {
    assert_eq!(brand("Warby Parker", "").slug(), "warby-parker");
}

#[test]
fn slug_special_characters() {
    assert_eq!(brand("Uncle Arnie's", "").slug(), "uncle-arnies");
}

#[test]
fn slug_ampersand_and_double_space() {
    // '&' is stripped and the surrounding dashes collapse
    assert_eq!(brand("Home  & Living", "").slug(), "home-living");
}

#[test]
fn slug_accented_characters() {
    // Non-ASCII chars are stripped; no dash inserted between adjacent ASCII chars
    assert_eq!(brand("BRĒZ", "").slug(), "brz");
}

#[test]
fn last_updated_plain_date_is_midnight_utc() {
    assert_eq!(
        brand("Allbirds", "2024-01-15").last_updated_at(),
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single()
    );
}

#[test]
fn last_updated_rfc3339_keeps_time_of_day() {
    assert_eq!(
        brand("Allbirds", "2024-01-15T08:30:00Z").last_updated_at(),
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).single()
    );
}

#[test]
fn last_updated_offset_converts_to_utc_day() {
    // 23:30 at UTC-5 is already the next day in UTC
    assert_eq!(
        brand("Allbirds", "2024-01-15T23:30:00-05:00").last_updated_at(),
        Utc.with_ymd_and_hms(2024, 1, 16, 4, 30, 0).single()
    );
}

#[test]
fn last_updated_garbage_is_none() {
    assert!(brand("Allbirds", "last tuesday").last_updated_at().is_none());
    assert!(brand("Allbirds", "2024-13-45").last_updated_at().is_none());
}

#[test]
fn last_updated_empty_is_none() {
    assert!(brand("Allbirds", "  ").last_updated_at().is_none());
}

#[test]
fn deserializes_with_optional_fields_missing() {
    let json = r#"{
        "id": 7,
        "name": "Ritual",
        "industry": "Health & Wellness",
        "monthly_spend": 345000,
        "growth_rate": 19.6
    }"#;
    let brand: BrandRecord = serde_json::from_str(json).unwrap();
    assert_eq!(brand.monthly_spend, Decimal::from(345_000));
    assert!(brand.platforms.is_empty());
    assert!(!brand.is_watched);
    assert!(brand.last_updated_at().is_none());
}
