//! Pairwise debt matching
//!
//! The matcher builds one bucket per (debtor, creditor) pair:
//!
//! ```text
//! expense "Cab" paid by Ben, split Asha/Ben
//!         ↓
//! bucket (Asha → Ben): total_owed += Asha's share, expense attached
//!         ↓
//! payment Asha → Ben:  paid_amount += amount, payment attached
//!         ↓
//! SettlementRecord { remaining = total_owed - paid_amount, status }
//! ```
//!
//! A payment whose (from, to) pair has no expense bucket is dropped from
//! the settlement view (it still moves net balances; `validation`
//! surfaces it as an `UnattributedPayment` issue).

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::balance::SETTLEMENT_EPSILON;
use crate::models::{Expense, Member, Payment};

/// Settlement status of one (debtor, creditor) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementStatus {
    /// Remaining amount is within [`SETTLEMENT_EPSILON`] of zero (or below)
    Settled,

    /// Money is still owed
    Due,
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettlementStatus::Settled => write!(f, "Settled"),
            SettlementStatus::Due => write!(f, "Due"),
        }
    }
}

/// One expense's contribution to a debt, kept for the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    description: String,
    category: Option<String>,
    date: String,
    /// The debtor's share of this expense
    share: f64,
    /// The expense's full amount
    total_amount: f64,
    /// How many members the expense was split among
    split_count: usize,
}

impl ExpenseShare {
    /// Get expense description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get expense category, if set
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get expense date string
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the debtor's share
    pub fn share(&self) -> f64 {
        self.share
    }

    /// Get the expense's full amount
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Get the number of members the expense was split among
    pub fn split_count(&self) -> usize {
        self.split_count
    }
}

/// One payment's contribution against a debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    amount: f64,
    date: String,
    note: Option<String>,
}

impl PaymentRecord {
    /// Get payment amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get payment date string
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get payment note, if set
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Aggregated debt from one member to another
///
/// One record per (debtor, creditor) pair with expense debt between them.
/// Carries the full attribution: every contributing expense share and
/// every offsetting payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Debtor name
    from: String,

    /// Creditor name
    to: String,

    /// Sum of the debtor's shares of creditor-paid expenses
    total_owed: f64,

    /// Sum of payments debtor → creditor
    paid_amount: f64,

    /// `total_owed - paid_amount`
    remaining_amount: f64,

    /// Settled iff `remaining_amount <= SETTLEMENT_EPSILON`
    status: SettlementStatus,

    /// Contributing expenses, in input order
    expenses: Vec<ExpenseShare>,

    /// Offsetting payments, in input order
    payments: Vec<PaymentRecord>,
}

impl SettlementRecord {
    /// Get debtor name
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Get creditor name
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Get total owed before payments
    pub fn total_owed(&self) -> f64 {
        self.total_owed
    }

    /// Get amount already paid
    pub fn paid_amount(&self) -> f64 {
        self.paid_amount
    }

    /// Get remaining amount due
    pub fn remaining_amount(&self) -> f64 {
        self.remaining_amount
    }

    /// Get settlement status
    pub fn status(&self) -> SettlementStatus {
        self.status
    }

    /// Whether this pair is fully settled
    pub fn is_settled(&self) -> bool {
        self.status == SettlementStatus::Settled
    }

    /// Get the contributing expense shares
    pub fn expenses(&self) -> &[ExpenseShare] {
        &self.expenses
    }

    /// Get the offsetting payments
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }
}

#[derive(Debug, Default)]
struct DebtBucket {
    total_owed: f64,
    paid_amount: f64,
    expenses: Vec<ExpenseShare>,
    payments: Vec<PaymentRecord>,
}

/// Compute pairwise settlement records from a snapshot
///
/// For each expense, every share-holder other than the payer accumulates
/// debt into the (share-holder, payer) bucket; contributions involving an
/// unknown name are dropped. Payments then offset the matching bucket.
/// Buckets with `total_owed > 0` become records, ordered by debtor name
/// ascending then remaining amount descending.
///
/// # Arguments
///
/// * `members` - The group roster; contributions naming anyone else are no-ops
/// * `expenses` - Expense records (any order)
/// * `payments` - Settlement payments (any order)
pub fn compute_settlements(
    members: &[Member],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<SettlementRecord> {
    let known: BTreeSet<&str> = members.iter().map(Member::name).collect();
    let mut buckets: BTreeMap<(String, String), DebtBucket> = BTreeMap::new();

    for expense in expenses {
        let payer = expense.paid_by();
        if !known.contains(payer) {
            continue;
        }
        for (name, share) in expense.shares() {
            if name == payer || !known.contains(name) {
                continue;
            }
            let bucket = buckets
                .entry((name.to_string(), payer.to_string()))
                .or_default();
            bucket.total_owed += share;
            bucket.expenses.push(ExpenseShare {
                description: expense.description().to_string(),
                category: expense.category().map(str::to_string),
                date: expense.date().to_string(),
                share,
                total_amount: expense.amount(),
                split_count: expense.involved().len(),
            });
        }
    }

    for payment in payments {
        let key = (
            payment.from_user().to_string(),
            payment.to_user().to_string(),
        );
        // Payments only attach to pairs with existing expense debt
        if let Some(bucket) = buckets.get_mut(&key) {
            bucket.paid_amount += payment.amount();
            bucket.payments.push(PaymentRecord {
                amount: payment.amount(),
                date: payment.date().to_string(),
                note: payment.note().map(str::to_string),
            });
        }
    }

    let mut records: Vec<SettlementRecord> = buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.total_owed > 0.0)
        .map(|((from, to), bucket)| {
            let remaining_amount = bucket.total_owed - bucket.paid_amount;
            let status = if remaining_amount <= SETTLEMENT_EPSILON {
                SettlementStatus::Settled
            } else {
                SettlementStatus::Due
            };
            SettlementRecord {
                from,
                to,
                total_owed: bucket.total_owed,
                paid_amount: bucket.paid_amount,
                remaining_amount,
                status,
                expenses: bucket.expenses,
                payments: bucket.payments,
            }
        })
        .collect();

    records.sort_by(|a, b| {
        a.from.cmp(&b.from).then_with(|| {
            b.remaining_amount
                .partial_cmp(&a.remaining_amount)
                .unwrap_or(Ordering::Equal)
        })
    });

    records
}

/// Sum of remaining amounts across records (the "outstanding" headline)
pub fn total_outstanding(records: &[SettlementRecord]) -> f64 {
    records.iter().map(SettlementRecord::remaining_amount).sum()
}
