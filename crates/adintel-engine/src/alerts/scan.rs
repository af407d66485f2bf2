use adintel_core::{AlertKind, AlertPriority, AlertRecord, AlertRules, BrandRecord};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::format::{format_currency, format_growth};

/// Evaluate the enabled spend-threshold and growth-rate rules against
/// `brands`. Alerts are unread, stamped with `now`, and numbered from 1 in
/// brand order (spend alerts before growth alerts for the same brand).
#[must_use]
pub fn scan_rules(
    brands: &[BrandRecord],
    rules: &AlertRules,
    now: DateTime<Utc>,
) -> Vec<AlertRecord> {
    let spend = &rules.spend_threshold;
    let growth = &rules.growth_rate;
    let mut raised = Vec::new();

    for brand in brands {
        if spend.enabled
            && is_listed(&spend.brands, &brand.name)
            && brand.monthly_spend > spend.amount
        {
            let high = brand.monthly_spend >= spend.amount * Decimal::new(12, 1);
            raised.push(AlertRecord {
                id: 0,
                priority: priority(high),
                brand: brand.name.clone(),
                kind: AlertKind::SpendThreshold,
                message: format!("{} exceeded spend threshold", brand.name),
                timestamp: now,
                is_read: false,
                details: format!(
                    "Monthly spend of {} is above the {} threshold",
                    format_currency(brand.monthly_spend),
                    format_currency(spend.amount)
                ),
            });
        }

        if growth.enabled
            && is_listed(&growth.brands, &brand.name)
            && brand.growth_rate > growth.threshold
        {
            let high = brand.growth_rate >= growth.threshold * 1.2;
            raised.push(AlertRecord {
                id: 0,
                priority: priority(high),
                brand: brand.name.clone(),
                kind: AlertKind::GrowthRate,
                message: format!("{} growth rate above threshold", brand.name),
                timestamp: now,
                is_read: false,
                details: format!(
                    "Growth of {} over the last {} days exceeds the {} threshold",
                    format_growth(brand.growth_rate),
                    growth.period_days,
                    format_growth(growth.threshold)
                ),
            });
        }
    }

    for (id, alert) in (1..).zip(raised.iter_mut()) {
        alert.id = id;
    }
    tracing::debug!(brands = brands.len(), raised = raised.len(), "scanned alert rules");
    raised
}

fn is_listed(names: &[String], brand: &str) -> bool {
    names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case(brand))
}

fn priority(high: bool) -> AlertPriority {
    if high {
        AlertPriority::High
    } else {
        AlertPriority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{brand, ts};

    fn rules() -> AlertRules {
        let mut rules = AlertRules::default();
        rules.spend_threshold.brands = vec!["Nike".to_string(), "puma".to_string()];
        rules.spend_threshold.amount = Decimal::from(500_000);
        rules.growth_rate.brands = Vec::new();
        rules.growth_rate.threshold = 25.0;
        rules
    }

    #[test]
    fn spend_rule_respects_brand_list_and_priority_band() {
        let brands = vec![
            brand(1, "Nike", 650_000),
            brand(2, "Puma", 550_000),
            brand(3, "Adidas", 900_000),
            brand(4, "Nike Golf", 500_000),
        ];
        let alerts = scan_rules(&brands, &rules(), ts(15, 12));

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].brand, "Nike");
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(alerts[1].brand, "Puma");
        assert_eq!(alerts[1].priority, AlertPriority::Medium);
        assert!(alerts.iter().all(|a| a.kind == AlertKind::SpendThreshold));
        assert_eq!(
            alerts[0].details,
            "Monthly spend of $650,000 is above the $500,000 threshold"
        );
    }

    #[test]
    fn spend_exactly_at_threshold_does_not_fire() {
        let alerts = scan_rules(&[brand(1, "Nike", 500_000)], &rules(), ts(15, 12));
        assert!(alerts.is_empty());
    }

    #[test]
    fn empty_growth_list_watches_every_brand() {
        let mut fast = brand(1, "Adidas", 10_000);
        fast.growth_rate = 31.0;
        let mut steady = brand(2, "Puma", 10_000);
        steady.growth_rate = 26.0;
        let alerts = scan_rules(&[fast, steady], &rules(), ts(15, 12));

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(alerts[1].priority, AlertPriority::Medium);
        assert!(alerts.iter().all(|a| a.kind == AlertKind::GrowthRate));
        assert!(alerts[0].details.contains("+31.0%"));
    }

    #[test]
    fn disabled_rules_raise_nothing_and_ids_are_sequential() {
        let mut hot = brand(1, "Nike", 800_000);
        hot.growth_rate = 80.0;

        let mut rules = rules();
        let alerts = scan_rules(std::slice::from_ref(&hot), &rules, ts(15, 12));
        assert_eq!(alerts.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(alerts.iter().all(|a| !a.is_read && a.timestamp == ts(15, 12)));

        rules.spend_threshold.enabled = false;
        rules.growth_rate.enabled = false;
        assert!(scan_rules(&[hot], &rules, ts(15, 12)).is_empty());
    }
}
