//! BillBuddy Engine - shared-expense balance and settlement core
//!
//! Computes who owes whom from a snapshot of group expenses and payments.
//!
//! # Architecture
//!
//! - **models**: Domain types (Member, Expense, Payment, Snapshot)
//! - **balance**: Per-member net balance computation
//! - **settlement**: Pairwise debtor→creditor matching with attribution
//! - **stats**: Category/payer aggregations and group summary
//! - **validation**: Advisory issue scan over a snapshot
//!
//! # Critical Invariants
//!
//! 1. All computations are pure and total: same input, same output;
//!    no I/O, no hidden state, no errors on well-typed input.
//! 2. Members are joined by display name; unknown names are silent no-ops
//!    (use `validation` to surface them).
//! 3. All currency comparisons share one epsilon
//!    ([`balance::SETTLEMENT_EPSILON`], 0.01).
//! 4. Settlements are direct pairwise attributions, never netted into a
//!    minimum-transfer plan — each record carries the expenses and
//!    payments behind it.

// Module declarations
pub mod balance;
pub mod models;
pub mod settlement;
pub mod stats;
pub mod validation;

// Re-exports for convenience
pub use balance::{compute_balances, BalanceSheet, MemberBalance, SETTLEMENT_EPSILON};
pub use models::{Expense, Member, Payment, Snapshot, SnapshotError};
pub use settlement::{
    compute_settlements, total_outstanding, ExpenseShare, PaymentRecord, SettlementRecord,
    SettlementStatus,
};
pub use stats::GroupSummary;
pub use validation::{validate, ValidationIssue};
