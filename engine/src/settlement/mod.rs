//! Settlement Matcher
//!
//! Turns a snapshot into directed "A owes B" records with per-expense and
//! per-payment attribution.
//!
//! # Critical Invariants
//!
//! 1. **Pairwise attribution**: debts are reported per (debtor, creditor)
//!    pair with the contributing expenses attached. Debts are never netted
//!    into fewer, larger transfers — traceability over minimality.
//! 2. **Tolerance**: unknown names are no-ops, same policy as the balance
//!    engine.
//! 3. **Deterministic order**: debtor name ascending, then remaining
//!    amount descending.
//!
//! # Example
//!
//! ```rust
//! use billbuddy_engine::{settlement::compute_settlements, Expense, Member};
//!
//! let members = vec![Member::new("Asha".to_string()), Member::new("Ben".to_string())];
//! let expenses = vec![Expense::new(
//!     "Cab".to_string(),
//!     60.0,
//!     "Ben".to_string(),
//!     "2026-03-14".to_string(),
//!     vec!["Asha".to_string(), "Ben".to_string()],
//! )];
//!
//! let records = compute_settlements(&members, &expenses, &[]);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].from(), "Asha");
//! assert_eq!(records[0].to(), "Ben");
//! assert!((records[0].total_owed() - 30.0).abs() < 1e-9);
//! ```

pub mod matcher;

// Re-export public API
pub use matcher::{
    compute_settlements, total_outstanding, ExpenseShare, PaymentRecord, SettlementRecord,
    SettlementStatus,
};
