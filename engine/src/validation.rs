//! Advisory snapshot validation
//!
//! The balance engine and settlement matcher are total over well-typed
//! input: unknown names, bad amounts, and mismatched splits are silent
//! no-ops there. This module makes those conditions visible without
//! changing that contract — `validate` returns a list of issues for a
//! caller (or the `check` CLI command) to display, and never blocks a
//! computation.
//!
//! Issue order is deterministic: member issues first, then expense issues
//! in input order, then payment issues in input order.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::balance::SETTLEMENT_EPSILON;
use crate::models::{Expense, Member, Payment};

/// A non-fatal data problem found in a snapshot
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationIssue {
    #[error("member name {name:?} appears more than once")]
    DuplicateMemberName { name: String },

    #[error("expense {id}: payer {name:?} is not a member")]
    UnknownPayer { id: String, name: String },

    #[error("expense {id}: participant {name:?} is not a member")]
    UnknownParticipant { id: String, name: String },

    #[error("expense {id}: amount {amount} is not positive")]
    NonPositiveExpenseAmount { id: String, amount: f64 },

    #[error("expense {id}: no participants, amount credits the payer only")]
    NoParticipants { id: String },

    #[error("expense {id}: split details sum to {split_total}, amount is {amount}")]
    SplitMismatch {
        id: String,
        split_total: f64,
        amount: f64,
    },

    #[error("payment {id}: sender {name:?} is not a member")]
    UnknownPaymentSender { id: String, name: String },

    #[error("payment {id}: receiver {name:?} is not a member")]
    UnknownPaymentReceiver { id: String, name: String },

    #[error("payment {id}: amount {amount} is not positive")]
    NonPositivePaymentAmount { id: String, amount: f64 },

    #[error("payment {id}: no expense debt from {from:?} to {to:?}, ignored by settlements")]
    UnattributedPayment {
        id: String,
        from: String,
        to: String,
    },
}

/// Scan a snapshot for data problems
///
/// Returns an empty vector for a clean snapshot. Issues mirror the
/// tolerance policy of the computations: everything reported here is
/// something the engines silently skip or carry through.
pub fn validate(
    members: &[Member],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut known: BTreeSet<&str> = BTreeSet::new();
    for member in members {
        if !known.insert(member.name()) {
            issues.push(ValidationIssue::DuplicateMemberName {
                name: member.name().to_string(),
            });
        }
    }

    // Pairs with expense debt, for the unattributed-payment check
    let mut debt_pairs: BTreeSet<(&str, &str)> = BTreeSet::new();

    for expense in expenses {
        if expense.amount() <= 0.0 {
            issues.push(ValidationIssue::NonPositiveExpenseAmount {
                id: expense.id().to_string(),
                amount: expense.amount(),
            });
        }
        if !known.contains(expense.paid_by()) {
            issues.push(ValidationIssue::UnknownPayer {
                id: expense.id().to_string(),
                name: expense.paid_by().to_string(),
            });
        }
        if expense.involved().is_empty() {
            issues.push(ValidationIssue::NoParticipants {
                id: expense.id().to_string(),
            });
        }
        for (name, _) in expense.shares() {
            if !known.contains(name) {
                issues.push(ValidationIssue::UnknownParticipant {
                    id: expense.id().to_string(),
                    name: name.to_string(),
                });
            } else if name != expense.paid_by() && known.contains(expense.paid_by()) {
                debt_pairs.insert((name, expense.paid_by()));
            }
        }
        if let Some(details) = expense.split_details() {
            if !expense.involved().is_empty() {
                let split_total: f64 = details.values().sum();
                if (split_total - expense.amount()).abs() >= SETTLEMENT_EPSILON {
                    issues.push(ValidationIssue::SplitMismatch {
                        id: expense.id().to_string(),
                        split_total,
                        amount: expense.amount(),
                    });
                }
            }
        }
    }

    for payment in payments {
        if payment.amount() <= 0.0 {
            issues.push(ValidationIssue::NonPositivePaymentAmount {
                id: payment.id().to_string(),
                amount: payment.amount(),
            });
        }
        let sender_known = known.contains(payment.from_user());
        let receiver_known = known.contains(payment.to_user());
        if !sender_known {
            issues.push(ValidationIssue::UnknownPaymentSender {
                id: payment.id().to_string(),
                name: payment.from_user().to_string(),
            });
        }
        if !receiver_known {
            issues.push(ValidationIssue::UnknownPaymentReceiver {
                id: payment.id().to_string(),
                name: payment.to_user().to_string(),
            });
        }
        if sender_known
            && receiver_known
            && !debt_pairs.contains(&(payment.from_user(), payment.to_user()))
        {
            issues.push(ValidationIssue::UnattributedPayment {
                id: payment.id().to_string(),
                from: payment.from_user().to_string(),
                to: payment.to_user().to_string(),
            });
        }
    }

    issues
}
