//! Balance Engine Tests
//!
//! Covers the share semantics (equal split, explicit split, no-split) and
//! the tolerance policy (unknown names are no-ops).

use std::collections::BTreeMap;

use billbuddy_engine::{compute_balances, Expense, Member, Payment};

// ============================================================================
// Test Helpers
// ============================================================================

fn member(name: &str) -> Member {
    Member::new(name.to_string())
}

fn expense(description: &str, amount: f64, paid_by: &str, involved: &[&str]) -> Expense {
    Expense::new(
        description.to_string(),
        amount,
        paid_by.to_string(),
        "2026-03-14".to_string(),
        involved.iter().map(|s| s.to_string()).collect(),
    )
}

fn payment(from: &str, to: &str, amount: f64) -> Payment {
    Payment::new(
        from.to_string(),
        to.to_string(),
        amount,
        "2026-03-20".to_string(),
    )
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Equal Split
// ============================================================================

#[test]
fn equal_split_default() {
    let members = vec![member("A"), member("B"), member("C")];
    let expenses = vec![expense("Dinner", 90.0, "A", &["A", "B", "C"])];

    let sheet = compute_balances(&members, &expenses, &[]);

    // A paid 90, own share 30 => net +60
    assert_close(sheet.net_of("A").unwrap(), 60.0);
    assert_close(sheet.net_of("B").unwrap(), -30.0);
    assert_close(sheet.net_of("C").unwrap(), -30.0);
}

#[test]
fn self_paid_solo_expense_is_balance_neutral() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Coffee", 5.0, "A", &["A"])];

    let sheet = compute_balances(&members, &expenses, &[]);

    assert_close(sheet.net_of("A").unwrap(), 0.0);
    assert_close(sheet.net_of("B").unwrap(), 0.0);
    assert!(sheet.is_settled());
}

#[test]
fn paid_and_share_totals_are_tracked_separately() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Lunch", 40.0, "A", &["A", "B"])];

    let sheet = compute_balances(&members, &expenses, &[]);
    let a = sheet.get("A").unwrap();

    assert_close(a.total_paid(), 40.0);
    assert_close(a.total_share(), 20.0);
    assert_close(a.net(), 20.0);
}

// ============================================================================
// Explicit Split Details
// ============================================================================

#[test]
fn split_details_override_equal_split() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Taxi", 100.0, "A", &["A", "B"]).with_split_details(
        BTreeMap::from([("A".to_string(), 70.0), ("B".to_string(), 30.0)]),
    )];

    let sheet = compute_balances(&members, &expenses, &[]);

    assert_close(sheet.net_of("A").unwrap(), 30.0);
    assert_close(sheet.net_of("B").unwrap(), -30.0);
}

// ============================================================================
// Tolerance Policy
// ============================================================================

#[test]
fn unknown_payer_is_a_no_op() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Ghost dinner", 50.0, "Ghost", &["A", "B"])];

    let sheet = compute_balances(&members, &expenses, &[]);

    // Shares still debit the known members; the orphan credit is dropped
    assert_close(sheet.net_of("A").unwrap(), -25.0);
    assert_close(sheet.net_of("B").unwrap(), -25.0);
    assert!(sheet.get("Ghost").is_none());
}

#[test]
fn unknown_participant_share_is_dropped() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Trip", 90.0, "A", &["A", "B", "Ghost"])];

    let sheet = compute_balances(&members, &expenses, &[]);

    assert_close(sheet.net_of("A").unwrap(), 60.0);
    assert_close(sheet.net_of("B").unwrap(), -30.0);
}

#[test]
fn empty_involved_credits_payer_only() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Personal note", 25.0, "A", &[])];

    let sheet = compute_balances(&members, &expenses, &[]);

    assert_close(sheet.net_of("A").unwrap(), 25.0);
    assert_close(sheet.net_of("B").unwrap(), 0.0);
}

// ============================================================================
// Payments
// ============================================================================

#[test]
fn payment_shifts_balances_symmetrically() {
    let members = vec![member("A"), member("B")];
    let expenses = vec![expense("Lunch", 40.0, "B", &["A", "B"])];
    let payments = vec![payment("A", "B", 20.0)];

    let sheet = compute_balances(&members, &expenses, &payments);

    assert!(sheet.is_settled());
    assert_close(sheet.net_of("A").unwrap(), 0.0);
    assert_close(sheet.net_of("B").unwrap(), 0.0);
}

#[test]
fn payment_between_unknown_names_is_a_no_op() {
    let members = vec![member("A")];
    let payments = vec![payment("Ghost", "Phantom", 100.0)];

    let sheet = compute_balances(&members, &[], &payments);

    assert_close(sheet.net_of("A").unwrap(), 0.0);
}

// ============================================================================
// Determinism & Presentation
// ============================================================================

#[test]
fn recomputation_is_idempotent() {
    let members = vec![member("A"), member("B"), member("C")];
    let expenses = vec![
        expense("Dinner", 90.0, "A", &["A", "B", "C"]),
        expense("Cab", 30.0, "B", &["B", "C"]),
    ];
    let payments = vec![payment("C", "A", 10.0)];

    let first = compute_balances(&members, &expenses, &payments);
    let second = compute_balances(&members, &expenses, &payments);
    assert_eq!(first, second);
}

#[test]
fn ranked_orders_creditors_first() {
    let members = vec![member("A"), member("B"), member("C")];
    let expenses = vec![expense("Dinner", 90.0, "A", &["A", "B", "C"])];

    let sheet = compute_balances(&members, &expenses, &[]);
    let ranked = sheet.ranked();

    assert_eq!(ranked[0].0, "A");
    assert!(ranked[0].1.net() >= ranked[1].1.net());
    assert!(ranked[1].1.net() >= ranked[2].1.net());
}

#[test]
fn members_with_no_activity_appear_with_zero_balance() {
    let members = vec![member("A"), member("Idle")];
    let expenses = vec![expense("Coffee", 5.0, "A", &["A"])];

    let sheet = compute_balances(&members, &expenses, &[]);

    assert_eq!(sheet.len(), 2);
    assert_close(sheet.net_of("Idle").unwrap(), 0.0);
}
