//! Snapshot of the group's data
//!
//! The engines operate on an immutable snapshot of the three collections
//! the datastore holds: members, expenses, payments. Callers refetch and
//! recompute on every change; there is no incremental update, so a
//! snapshot is also the natural interchange format (plain JSON with
//! `members`/`expenses`/`payments` keys, all optional).

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::balance::{compute_balances, BalanceSheet};
use crate::models::{Expense, Member, Payment};
use crate::settlement::{compute_settlements, SettlementRecord};
use crate::stats::{summarize, GroupSummary};
use crate::validation::{validate, ValidationIssue};

/// Errors that can occur loading or saving a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// An immutable view of the group's members, expenses, and payments
///
/// # Example
/// ```
/// use billbuddy_engine::Snapshot;
///
/// let snapshot = Snapshot::from_json(r#"{
///     "members": [{"id": "m1", "name": "Asha"}, {"id": "m2", "name": "Ben"}],
///     "expenses": [{
///         "id": "e1", "description": "Lunch", "amount": 40.0,
///         "paid_by": "Asha", "date": "2026-03-14",
///         "involved": ["Asha", "Ben"]
///     }],
///     "payments": []
/// }"#).unwrap();
///
/// let sheet = snapshot.balances();
/// assert!((sheet.net_of("Ben").unwrap() + 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    members: Vec<Member>,

    #[serde(default)]
    expenses: Vec<Expense>,

    #[serde(default)]
    payments: Vec<Payment>,
}

impl Snapshot {
    /// Create a snapshot from already-fetched collections
    pub fn new(members: Vec<Member>, expenses: Vec<Expense>, payments: Vec<Payment>) -> Self {
        Self {
            members,
            expenses,
            payments,
        }
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize the snapshot to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the member roster
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Get the expense records
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get the payment records
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Compute per-member balances over this snapshot
    pub fn balances(&self) -> BalanceSheet {
        compute_balances(&self.members, &self.expenses, &self.payments)
    }

    /// Compute pairwise settlement records over this snapshot
    pub fn settlements(&self) -> Vec<SettlementRecord> {
        compute_settlements(&self.members, &self.expenses, &self.payments)
    }

    /// Compute the group summary over this snapshot
    pub fn summary(&self) -> GroupSummary {
        summarize(&self.members, &self.expenses, &self.payments)
    }

    /// Scan this snapshot for data problems
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(&self.members, &self.expenses, &self.payments)
    }
}
