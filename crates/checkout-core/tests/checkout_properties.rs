//! End-to-end pricing behaviour against the reference catalogue.

use std::collections::BTreeMap;
use std::sync::Arc;

use checkout_core::{Catalogue, Checkout, CheckoutError, Money, RuleSpec, ScanPolicy};
use proptest::prelude::*;

const SKUS: [&str; 4] = ["A", "B", "C", "D"];

fn reference_catalogue() -> Arc<Catalogue> {
    let mut builder = Catalogue::builder();
    builder
        .insert("A", RuleSpec::unit(50).with_bulk(3, 130))
        .expect("A is valid")
        .insert("B", RuleSpec::unit(30).with_bulk(2, 45))
        .expect("B is valid")
        .insert("C", RuleSpec::unit(20))
        .expect("C is valid")
        .insert("D", RuleSpec::unit(15))
        .expect("D is valid");
    Arc::new(builder.build())
}

fn promotions(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(sku, n)| (sku.to_string(), *n)).collect()
}

struct Case {
    name: &'static str,
    items: &'static [&'static str],
    total: Result<i64, &'static str>,
    promotions: &'static [(&'static str, u32)],
}

#[test]
fn reference_baskets() {
    let cases = [
        Case { name: "single item", items: &["A"], total: Ok(50), promotions: &[] },
        Case { name: "no special pricing", items: &["A", "B", "C", "D"], total: Ok(115), promotions: &[] },
        Case { name: "special pricing for A", items: &["A", "A", "A"], total: Ok(130), promotions: &[("A", 1)] },
        Case { name: "special pricing for B", items: &["B", "B"], total: Ok(45), promotions: &[("B", 1)] },
        Case {
            name: "mixed basket",
            items: &["A", "A", "B", "B", "A", "C", "D"],
            total: Ok(210),
            promotions: &[("A", 1), ("B", 1)],
        },
        Case { name: "invalid item", items: &["A", "E"], total: Err("invalid SKU: E"), promotions: &[] },
        Case {
            name: "multiple offers for A",
            items: &["A", "A", "A", "A", "A", "A", "A"],
            total: Ok(310),
            promotions: &[("A", 2)],
        },
        Case { name: "no items", items: &[], total: Ok(0), promotions: &[] },
        Case { name: "just below threshold", items: &["A", "A", "B"], total: Ok(130), promotions: &[] },
    ];

    for case in cases {
        let mut checkout = Checkout::new(reference_catalogue());
        let result = checkout
            .scan_all(case.items, ScanPolicy::Abort)
            .and_then(|_| checkout.total_price());

        match (result, case.total) {
            (Ok(total), Ok(expected)) => {
                assert_eq!(total.cents(), expected, "{}", case.name);
                assert_eq!(
                    checkout.applied_promotions().unwrap(),
                    promotions(case.promotions),
                    "{}",
                    case.name
                );
            }
            (Err(err), Err(expected)) => assert_eq!(err.to_string(), expected, "{}", case.name),
            (got, expected) => panic!("{}: got {:?}, expected {:?}", case.name, got, expected),
        }
    }
}

#[test]
fn unknown_item_then_continue() {
    let mut checkout = Checkout::new(reference_catalogue());
    checkout.scan("A").unwrap();
    assert_eq!(
        checkout.scan("E"),
        Err(CheckoutError::UnknownItem("E".to_string()))
    );
    assert_eq!(checkout.total_price().unwrap(), Money::from_cents(50));
}

#[test]
fn summary_reproduces_savings_from_engine_outputs() {
    let catalogue = reference_catalogue();
    let mut checkout = Checkout::new(Arc::clone(&catalogue));
    checkout
        .scan_all(["A", "A", "A", "A", "A", "A", "A", "B", "B"], ScanPolicy::Abort)
        .unwrap();

    let summary = checkout.summary().unwrap();
    for promotion in &summary.promotions {
        let rule = catalogue.rule(&promotion.sku).unwrap();
        let offer = rule.bulk().unwrap();
        let per_bundle =
            rule.unit_price().cents() * i64::from(offer.quantity()) - offer.price().cents();
        assert_eq!(promotion.saved.cents(), per_bundle * i64::from(promotion.times));
    }
    assert_eq!(summary.total_savings().unwrap().cents(), 40 + 15);
    assert_eq!(summary.total, checkout.total_price().unwrap());
}

#[test]
fn sku_with_spaces_is_scanned_exactly() {
    let mut builder = Catalogue::builder();
    builder.insert("Coke 330", RuleSpec::unit(10).with_bulk(6, 50)).unwrap();
    let mut checkout = Checkout::new(Arc::new(builder.build()));

    checkout
        .scan_all(std::iter::repeat("Coke 330").take(7), ScanPolicy::Abort)
        .unwrap();
    assert!(checkout.scan("Coke").is_err());
    assert_eq!(checkout.total_price().unwrap().cents(), 60);
}

#[test]
fn extreme_prices_report_overflow_instead_of_panicking() {
    let mut builder = Catalogue::builder();
    builder
        .insert("A", RuleSpec::unit(i64::MAX / 2 + 1))
        .unwrap();
    let mut checkout = Checkout::new(Arc::new(builder.build()));
    checkout.scan("A").unwrap();
    checkout.scan("A").unwrap();

    assert_eq!(
        checkout.total_price().unwrap_err(),
        CheckoutError::Overflow {
            sku: "A".to_string()
        }
    );
    // Reads stay usable after the error
    assert_eq!(checkout.count("A"), 2);
    assert!(checkout.applied_promotions().unwrap().is_empty());
}

proptest! {
    #[test]
    fn total_is_invariant_under_reordering(
        indices in prop::collection::vec(0usize..SKUS.len(), 0..64),
        seed in any::<u64>(),
    ) {
        let items: Vec<&str> = indices.iter().map(|&i| SKUS[i]).collect();

        let mut shuffled = items.clone();
        // Deterministic Fisher-Yates driven by the generated seed
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let mut in_order = Checkout::new(reference_catalogue());
        in_order.scan_all(&items, ScanPolicy::Abort).unwrap();
        let mut reordered = Checkout::new(reference_catalogue());
        reordered.scan_all(&shuffled, ScanPolicy::Abort).unwrap();

        prop_assert_eq!(in_order.total_price().unwrap(), reordered.total_price().unwrap());
        prop_assert_eq!(
            in_order.applied_promotions().unwrap(),
            reordered.applied_promotions().unwrap()
        );
    }

    #[test]
    fn failed_scan_never_changes_total(
        indices in prop::collection::vec(0usize..SKUS.len(), 0..32),
        unknown in "[E-Z][0-9]{0,3}",
    ) {
        let mut checkout = Checkout::new(reference_catalogue());
        for &i in &indices {
            checkout.scan(SKUS[i]).unwrap();
        }

        let before = checkout.total_price().unwrap();
        let tally_before = checkout.tally().clone();
        prop_assert!(checkout.scan(&unknown).is_err());
        prop_assert_eq!(checkout.total_price().unwrap(), before);
        prop_assert_eq!(checkout.tally(), &tally_before);
    }

    #[test]
    fn bundle_formula_matches_division(
        unit in 0i64..1_000,
        bundle_qty in 1u32..10,
        bundle_price in 0i64..5_000,
        count in 0u32..200,
    ) {
        let rule = RuleSpec::unit(unit)
            .with_bulk(bundle_qty, bundle_price)
            .into_rule("X")
            .unwrap();

        let bundles = count / bundle_qty;
        let remainder = count % bundle_qty;
        let expected = bundle_price * i64::from(bundles) + unit * i64::from(remainder);

        prop_assert_eq!(rule.price_for(count).unwrap().cents(), expected);
        prop_assert_eq!(rule.bundles(count), bundles);
    }

    #[test]
    fn price_for_is_exact_or_overflow_at_any_magnitude(
        unit in 0i64..=i64::MAX,
        bundle_qty in 1u32..=u32::MAX,
        bundle_price in 0i64..=i64::MAX,
        count in 0u32..=u32::MAX,
    ) {
        let rule = RuleSpec::unit(unit)
            .with_bulk(bundle_qty, bundle_price)
            .into_rule("X")
            .unwrap();

        let bundles = count / bundle_qty;
        let remainder = count % bundle_qty;
        let wide = i128::from(bundle_price) * i128::from(bundles)
            + i128::from(unit) * i128::from(remainder);

        match i64::try_from(wide) {
            Ok(cents) => prop_assert_eq!(rule.price_for(count), Some(Money::from_cents(cents))),
            Err(_) => prop_assert_eq!(rule.price_for(count), None),
        }
    }
}
