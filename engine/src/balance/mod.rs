//! Balance Engine
//!
//! Computes each member's net position from an in-memory snapshot of
//! expenses and payments. Pure and total: deterministic for identical
//! input, no I/O, never errors.
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: when every referenced name is a known member, the
//!    member nets sum to zero (within [`SETTLEMENT_EPSILON`]).
//! 2. **Tolerance**: a name that is not in the member list is a silent
//!    no-op — its contribution is dropped, never an error.
//! 3. **Purity**: the inputs are read-only; recomputation is free to run
//!    at any time and yields identical output.
//!
//! # Example
//!
//! ```rust
//! use billbuddy_engine::{balance::compute_balances, Expense, Member};
//!
//! let members = vec![Member::new("Asha".to_string()), Member::new("Ben".to_string())];
//! let expenses = vec![Expense::new(
//!     "Lunch".to_string(),
//!     40.0,
//!     "Asha".to_string(),
//!     "2026-03-14".to_string(),
//!     vec!["Asha".to_string(), "Ben".to_string()],
//! )];
//!
//! let sheet = compute_balances(&members, &expenses, &[]);
//! assert!((sheet.net_of("Asha").unwrap() - 20.0).abs() < 1e-9);
//! assert!((sheet.net_of("Ben").unwrap() + 20.0).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, Member, Payment};

/// Tolerance for currency equality and settled/zero checks
///
/// Amounts are `f64` currency values; every comparison against zero or
/// between amounts in this crate goes through this single epsilon so all
/// callers agree on what "settled" means.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// One member's aggregated position
///
/// `total_paid` counts expenses the member paid plus payments they sent;
/// `total_share` counts their shares of expenses plus payments they
/// received. The net is the difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// Amount this member has put into the group
    total_paid: f64,

    /// Amount of group cost attributed to this member
    total_share: f64,
}

impl MemberBalance {
    /// Get total paid in
    pub fn total_paid(&self) -> f64 {
        self.total_paid
    }

    /// Get total share owed
    pub fn total_share(&self) -> f64 {
        self.total_share
    }

    /// Net position: positive = owed money by the group, negative = owes
    pub fn net(&self) -> f64 {
        self.total_paid - self.total_share
    }

    /// Whether this member's net is within [`SETTLEMENT_EPSILON`] of zero
    pub fn is_settled(&self) -> bool {
        self.net().abs() < SETTLEMENT_EPSILON
    }
}

/// Per-member balances for one snapshot
///
/// Keyed by member name (the join key used throughout the data). Holds
/// one entry per known member, including members with no activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    balances: BTreeMap<String, MemberBalance>,
}

impl BalanceSheet {
    /// Look up a member's position by name
    pub fn get(&self, name: &str) -> Option<&MemberBalance> {
        self.balances.get(name)
    }

    /// Look up a member's net position by name
    pub fn net_of(&self, name: &str) -> Option<f64> {
        self.balances.get(name).map(MemberBalance::net)
    }

    /// Iterate entries in member-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemberBalance)> {
        self.balances.iter().map(|(name, b)| (name.as_str(), b))
    }

    /// Number of members on the sheet
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Whether the sheet has no members
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Entries ordered by net descending (creditors first), the order
    /// the balances screen displays
    pub fn ranked(&self) -> Vec<(&str, &MemberBalance)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.1.net()
                .partial_cmp(&a.1.net())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// Whether every member's net is within [`SETTLEMENT_EPSILON`] of zero
    pub fn is_settled(&self) -> bool {
        self.balances.values().all(MemberBalance::is_settled)
    }

    fn credit(&mut self, name: &str, amount: f64) {
        if let Some(balance) = self.balances.get_mut(name) {
            balance.total_paid += amount;
        }
    }

    fn debit(&mut self, name: &str, amount: f64) {
        if let Some(balance) = self.balances.get_mut(name) {
            balance.total_share += amount;
        }
    }
}

/// Compute per-member balances from a snapshot
///
/// Every expense credits its payer with the full amount and debits each
/// share-holder with their share; every payment credits the sender and
/// debits the receiver. Names not present in `members` are no-ops.
///
/// # Arguments
///
/// * `members` - The group roster; one sheet entry per member
/// * `expenses` - Expense records (any order)
/// * `payments` - Settlement payments (any order)
pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
    payments: &[Payment],
) -> BalanceSheet {
    let mut sheet = BalanceSheet::default();
    for member in members {
        sheet
            .balances
            .entry(member.name().to_string())
            .or_default();
    }

    for expense in expenses {
        sheet.credit(expense.paid_by(), expense.amount());
        for (name, share) in expense.shares() {
            sheet.debit(name, share);
        }
    }

    for payment in payments {
        sheet.credit(payment.from_user(), payment.amount());
        sheet.debit(payment.to_user(), payment.amount());
    }

    sheet
}
