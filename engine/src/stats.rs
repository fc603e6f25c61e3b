//! Spending statistics
//!
//! Aggregations backing the dashboard and statistics screens: totals per
//! category, totals per payer, and a one-line group summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, Member, Payment};
use crate::settlement::{compute_settlements, total_outstanding};

/// Category label used for expenses with no category set
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Headline numbers for the whole group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Number of members in the roster
    pub member_count: usize,

    /// Number of expense records
    pub expense_count: usize,

    /// Number of payment records
    pub payment_count: usize,

    /// Sum of all expense amounts
    pub total_spent: f64,

    /// Sum of remaining amounts across settlement pairs
    pub total_outstanding: f64,
}

/// Total spend per category, name-ordered
///
/// Expenses with no category (or an empty one) group under
/// [`UNCATEGORIZED`].
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        let category = match expense.category() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        };
        *totals.entry(category.to_string()).or_insert(0.0) += expense.amount();
    }
    totals
}

/// Total paid per payer name, name-ordered
///
/// Keyed by the raw `paid_by` field; no membership filtering, so an
/// orphaned payer name still shows up here (matching the source screen).
pub fn spending_by_payer(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.paid_by().to_string()).or_insert(0.0) += expense.amount();
    }
    totals
}

/// Compute the group summary for a snapshot
pub fn summarize(members: &[Member], expenses: &[Expense], payments: &[Payment]) -> GroupSummary {
    let records = compute_settlements(members, expenses, payments);
    GroupSummary {
        member_count: members.len(),
        expense_count: expenses.len(),
        payment_count: payments.len(),
        total_spent: expenses.iter().map(Expense::amount).sum(),
        total_outstanding: total_outstanding(&records),
    }
}
