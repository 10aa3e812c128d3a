//! Property tests for labor aggregation and the prevailing wage impact.

use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use prevailing_wage_engine::calculation::{
    aggregate_labor, assemble_project_cost, compare_impact, cost_line_item,
};
use prevailing_wage_engine::config::{Craft, MarkupRates, RateTable, RateTableMetadata};
use prevailing_wage_engine::models::{ProjectInputs, RateSource, WageMode, WorkItem};

const CRAFTS: [&str; 3] = ["Electrician", "Laborer", "Roofer"];
const REGIONS: [&str; 3] = ["RegionA", "RegionB", "Elsewhere"];

fn create_table() -> RateTable {
    let mut region_a = HashMap::new();
    region_a.insert("Electrician".to_string(), Decimal::new(8050, 2));
    region_a.insert("Roofer".to_string(), Decimal::new(6400, 2));
    let mut overrides = HashMap::new();
    overrides.insert("RegionA".to_string(), region_a);

    let craft = |name: &str, market: i64, regulated: i64| Craft {
        name: name.to_string(),
        market_rate: Decimal::new(market, 2),
        regulated_rate: Decimal::new(regulated, 2),
    };

    RateTable::new(
        RateTableMetadata {
            name: "Property Table".to_string(),
            version: "test".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            source_url: "https://example.com".to_string(),
        },
        vec![
            craft("Electrician", 4500, 7500),
            craft("Laborer", 2500, 5000),
            craft("Roofer", 3500, 6000),
        ],
        vec!["RegionA".to_string(), "RegionB".to_string()],
        overrides,
        MarkupRates::default(),
    )
}

fn work_item() -> impl Strategy<Value = WorkItem> {
    (
        0usize..CRAFTS.len() + 1,
        any::<bool>(),
        0i64..100_000,
        0u32..20,
    )
        .prop_map(|(craft, regulated, hour_cents, crew_size)| WorkItem {
            id: format!("item_{}", hour_cents),
            // One index past the known crafts yields a craft the table lacks
            craft: CRAFTS.get(craft).copied().unwrap_or("Boilermaker").to_string(),
            wage_mode: if regulated {
                WageMode::Regulated
            } else {
                WageMode::Market
            },
            hours: Decimal::new(hour_cents, 2),
            crew_size,
        })
}

fn region() -> impl Strategy<Value = &'static str> {
    prop::sample::select(REGIONS.to_vec())
}

proptest! {
    /// Property: item cost is exactly hours x crew x rate
    #[test]
    fn item_cost_is_exact_product(hour_cents in 0i64..1_000_000, crew in 0u32..100, rate_cents in 0i64..50_000) {
        let hours = Decimal::new(hour_cents, 2);
        let rate = Decimal::new(rate_cents, 2);
        let cost = cost_line_item(hours, crew, rate).unwrap();
        prop_assert_eq!(cost.item_cost, hours * Decimal::from(crew) * rate);
        prop_assert!(cost.item_cost >= Decimal::ZERO);
    }

    /// Property: direct cost and hours are sums over included items only
    #[test]
    fn direct_cost_sums_included_items(items in prop::collection::vec(work_item(), 0..12), region in region()) {
        let table = create_table();
        let summary = aggregate_labor(&items, region, &table);

        let direct: Decimal = summary.line_items.iter().map(|line| line.cost).sum();
        prop_assert_eq!(summary.direct_labor_cost, direct);
        prop_assert_eq!(summary.line_items.len() + summary.skipped_items.len(), items.len());
        prop_assert!(summary.skipped_items.iter().all(|s| s.craft == "Boilermaker"));
        for line in &summary.line_items {
            prop_assert!(line.rate >= Decimal::ZERO);
            prop_assert_eq!(line.cost, line.hours * Decimal::from(line.crew_size) * line.rate);
        }
    }

    /// Property: labor total is direct cost plus each markup
    #[test]
    fn labor_total_adds_markups(items in prop::collection::vec(work_item(), 0..12), region in region()) {
        let table = create_table();
        let summary = aggregate_labor(&items, region, &table);

        prop_assert_eq!(
            summary.labor_total,
            summary.direct_labor_cost + summary.admin_cost + summary.insurance_cost + summary.margin
        );
    }

    /// Property: the regulated margin applies iff an included item is regulated
    #[test]
    fn margin_switches_on_included_regulated_item(items in prop::collection::vec(work_item(), 0..12), region in region()) {
        let table = create_table();
        let summary = aggregate_labor(&items, region, &table);
        let markups = MarkupRates::default();

        let any_regulated = summary.line_items.iter().any(|line| line.wage_mode.is_regulated());
        let expected = if any_regulated { markups.margin_regulated } else { markups.margin_market };
        prop_assert_eq!(summary.margin_rate, expected);
    }

    /// Property: impact is actual minus baseline, and zero without regulated items
    #[test]
    fn impact_is_difference_of_runs(items in prop::collection::vec(work_item(), 0..12), region in region()) {
        let table = create_table();
        let comparison = compare_impact(&items, region, &table);

        prop_assert_eq!(comparison.impact, comparison.actual.labor_total - comparison.baseline.labor_total);
        // Every regulated rate in the table is at least the market rate
        prop_assert!(comparison.impact >= Decimal::ZERO);
        prop_assert!(comparison.baseline.line_items.iter().all(|line| line.wage_mode == WageMode::Market));

        let market_only: Vec<WorkItem> = items
            .into_iter()
            .map(|item| WorkItem { wage_mode: WageMode::Market, ..item })
            .collect();
        prop_assert_eq!(compare_impact(&market_only, region, &table).impact, Decimal::ZERO);
    }

    /// Property: a region override wins over the statewide default
    #[test]
    fn region_override_takes_precedence(hour_cents in 1i64..100_000, crew in 1u32..20) {
        let table = create_table();
        let item = WorkItem {
            id: "e".to_string(),
            craft: "Electrician".to_string(),
            wage_mode: WageMode::Regulated,
            hours: Decimal::new(hour_cents, 2),
            crew_size: crew,
        };

        let overridden = aggregate_labor(std::slice::from_ref(&item), "RegionA", &table);
        prop_assert_eq!(overridden.line_items[0].rate, Decimal::new(8050, 2));
        prop_assert_eq!(overridden.line_items[0].rate_source, RateSource::RegionOverride);

        let fallback = aggregate_labor(std::slice::from_ref(&item), "RegionB", &table);
        prop_assert_eq!(fallback.line_items[0].rate, Decimal::new(7500, 2));
        prop_assert_eq!(fallback.line_items[0].rate_source, RateSource::StatewideDefault);
    }

    /// Property: identical inputs give identical results
    #[test]
    fn project_cost_is_idempotent(
        items in prop::collection::vec(work_item(), 0..12),
        region in region(),
        kw_cents in -10_000i64..1_000_000,
        per_watt_cents in -500i64..500,
    ) {
        let table = create_table();
        let inputs = ProjectInputs {
            region: region.to_string(),
            system_size_kw: Decimal::new(kw_cents, 2),
            material_cost_per_watt: Decimal::new(per_watt_cents, 2),
            items,
        };

        let first = assemble_project_cost(&inputs, &table);
        let second = assemble_project_cost(&inputs, &table);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert!(first.non_labor_cost >= Decimal::ZERO);
        prop_assert_eq!(first.total_project_cost, first.non_labor_cost + first.labor.labor_total);
    }
}
