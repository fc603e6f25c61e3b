//! Expense model
//!
//! A recorded group cost: paid by one member, split among the `involved`
//! members. The split is equal by default; `split_details` overrides it
//! with explicit per-member shares.
//!
//! # Share Semantics
//!
//! - `involved` empty: the expense produces **no shares** at all. The
//!   amount is credited only to the payer (a deliberate "no-split"
//!   expense, e.g. a personal note).
//! - `split_details` present (and `involved` non-empty): its entries are
//!   the shares. Intended to sum to `amount`; this is not enforced here —
//!   `validation::validate` reports mismatches.
//! - Otherwise: each involved member owes `amount / involved.len()`.
//!
//! Dates are opaque ISO-8601 strings; the engine never parses them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A shared group expense
///
/// # Example
/// ```
/// use billbuddy_engine::Expense;
///
/// let expense = Expense::new(
///     "Dinner".to_string(),
///     90.0,
///     "Asha".to_string(),
///     "2026-03-14".to_string(),
///     vec!["Asha".to_string(), "Ben".to_string(), "Chloe".to_string()],
/// )
/// .with_category("Food".to_string());
///
/// // Equal split by default
/// let shares = expense.shares();
/// assert_eq!(shares.len(), 3);
/// assert!((shares[0].1 - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique record identifier (UUID)
    id: String,

    /// Human-readable description ("Dinner", "Groceries", ...)
    description: String,

    /// Total amount paid (currency value, intended > 0)
    amount: f64,

    /// Name of the member who paid
    paid_by: String,

    /// ISO-8601 date string (display only)
    date: String,

    /// Expense category; empty/missing rows group under "Uncategorized"
    #[serde(default)]
    category: Option<String>,

    /// Members sharing this cost (order irrelevant)
    #[serde(default)]
    involved: Vec<String>,

    /// Explicit per-member shares overriding the equal split
    #[serde(default)]
    split_details: Option<BTreeMap<String, f64>>,

    /// Free-form notes
    #[serde(default)]
    notes: Option<String>,
}

impl Expense {
    /// Create a new expense with a generated id and an equal split
    pub fn new(
        description: String,
        amount: f64,
        paid_by: String,
        date: String,
        involved: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            amount,
            paid_by,
            date,
            category: None,
            involved,
            split_details: None,
            notes: None,
        }
    }

    /// Set category (builder pattern)
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Set explicit per-member shares (builder pattern)
    pub fn with_split_details(mut self, split_details: BTreeMap<String, f64>) -> Self {
        self.split_details = Some(split_details);
        self
    }

    /// Set notes (builder pattern)
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Get record id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get total amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get payer name
    pub fn paid_by(&self) -> &str {
        &self.paid_by
    }

    /// Get date string
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get category, if set
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the members sharing this expense
    pub fn involved(&self) -> &[String] {
        &self.involved
    }

    /// Get the explicit share map, if set
    pub fn split_details(&self) -> Option<&BTreeMap<String, f64>> {
        self.split_details.as_ref()
    }

    /// Get notes, if set
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Derive the per-member shares for this expense
    ///
    /// Returns `(name, share)` pairs following the share semantics above.
    /// Names are returned as they appear in the record; callers decide
    /// what to do with names that are not known members.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    /// use billbuddy_engine::Expense;
    ///
    /// let expense = Expense::new(
    ///     "Taxi".to_string(),
    ///     100.0,
    ///     "Asha".to_string(),
    ///     "2026-03-14".to_string(),
    ///     vec!["Asha".to_string(), "Ben".to_string()],
    /// )
    /// .with_split_details(BTreeMap::from([
    ///     ("Asha".to_string(), 70.0),
    ///     ("Ben".to_string(), 30.0),
    /// ]));
    ///
    /// assert_eq!(expense.shares(), vec![("Asha", 70.0), ("Ben", 30.0)]);
    /// ```
    pub fn shares(&self) -> Vec<(&str, f64)> {
        if self.involved.is_empty() {
            return Vec::new();
        }

        match &self.split_details {
            Some(details) => details
                .iter()
                .map(|(name, share)| (name.as_str(), *share))
                .collect(),
            None => {
                let share = self.amount / self.involved.len() as f64;
                self.involved
                    .iter()
                    .map(|name| (name.as_str(), share))
                    .collect()
            }
        }
    }
}
