//! Snapshot Loading Tests
//!
//! Covers JSON parsing (including the optional fields the upstream rows
//! carry), round-tripping, and the convenience computations.

use billbuddy_engine::{SettlementStatus, Snapshot};

const FULL_SNAPSHOT: &str = r#"{
    "members": [
        {"id": "m1", "name": "Asha"},
        {"id": "m2", "name": "Ben"},
        {"id": "m3", "name": "Chloe"}
    ],
    "expenses": [
        {
            "id": "e1",
            "description": "Dinner",
            "amount": 90.0,
            "paid_by": "Asha",
            "date": "2026-03-14",
            "category": "Food",
            "involved": ["Asha", "Ben", "Chloe"]
        },
        {
            "id": "e2",
            "description": "Taxi",
            "amount": 100.0,
            "paid_by": "Ben",
            "date": "2026-03-15",
            "involved": ["Asha", "Ben"],
            "split_details": {"Asha": 70.0, "Ben": 30.0},
            "notes": "airport run"
        }
    ],
    "payments": [
        {
            "id": "p1",
            "from_user": "Ben",
            "to_user": "Asha",
            "amount": 30.0,
            "date": "2026-03-20",
            "note": "dinner share"
        }
    ]
}"#;

#[test]
fn parses_full_snapshot() {
    let snapshot = Snapshot::from_json(FULL_SNAPSHOT).unwrap();

    assert_eq!(snapshot.members().len(), 3);
    assert_eq!(snapshot.expenses().len(), 2);
    assert_eq!(snapshot.payments().len(), 1);

    let taxi = &snapshot.expenses()[1];
    assert_eq!(taxi.category(), None);
    assert_eq!(taxi.notes(), Some("airport run"));
    assert!(taxi.split_details().is_some());
}

#[test]
fn missing_collections_default_to_empty() {
    let snapshot = Snapshot::from_json(r#"{"members": [{"id": "m1", "name": "Asha"}]}"#).unwrap();
    assert_eq!(snapshot.members().len(), 1);
    assert!(snapshot.expenses().is_empty());
    assert!(snapshot.payments().is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Snapshot::from_json("{not json").is_err());
    assert!(Snapshot::from_json(r#"{"expenses": [{"id": "e1"}]}"#).is_err());
}

#[test]
fn round_trips_through_json() {
    let snapshot = Snapshot::from_json(FULL_SNAPSHOT).unwrap();
    let reparsed = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(snapshot, reparsed);
}

#[test]
fn convenience_computations_agree_with_the_engines() {
    let snapshot = Snapshot::from_json(FULL_SNAPSHOT).unwrap();

    // Dinner: Asha +60, Ben -30, Chloe -30
    // Taxi:   Ben +70, Asha -70
    // Payment Ben→Asha 30: sender Ben +30, receiver Asha -30
    let sheet = snapshot.balances();
    assert!((sheet.net_of("Asha").unwrap() - (60.0 - 70.0 - 30.0)).abs() < 1e-9);
    assert!((sheet.net_of("Ben").unwrap() - (-30.0 + 70.0 + 30.0)).abs() < 1e-9);
    assert!((sheet.net_of("Chloe").unwrap() + 30.0).abs() < 1e-9);

    let records = snapshot.settlements();
    // Ben's dinner debt to Asha is fully paid; Asha owes Ben for the taxi
    let ben_to_asha = records
        .iter()
        .find(|r| r.from() == "Ben" && r.to() == "Asha")
        .unwrap();
    assert_eq!(ben_to_asha.status(), SettlementStatus::Settled);

    let asha_to_ben = records
        .iter()
        .find(|r| r.from() == "Asha" && r.to() == "Ben")
        .unwrap();
    assert!((asha_to_ben.remaining_amount() - 70.0).abs() < 1e-9);

    let summary = snapshot.summary();
    assert_eq!(summary.member_count, 3);
    assert_eq!(summary.expense_count, 2);
    assert!((summary.total_spent - 190.0).abs() < 1e-9);

    assert!(snapshot.validate().is_empty());
}
