//! Payment model
//!
//! A direct transfer recorded between two members: `from_user` settling
//! (part of) a debt owed to `to_user`. A payment shifts balances
//! symmetrically to an expense — the sender gains credit, the receiver's
//! claim shrinks.

use serde::{Deserialize, Serialize};

/// A direct member-to-member settlement transfer
///
/// # Example
/// ```
/// use billbuddy_engine::Payment;
///
/// let payment = Payment::new(
///     "Ben".to_string(),
///     "Asha".to_string(),
///     30.0,
///     "2026-03-20".to_string(),
/// )
/// .with_note("dinner share".to_string());
///
/// assert_eq!(payment.from_user(), "Ben");
/// assert_eq!(payment.to_user(), "Asha");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique record identifier (UUID)
    id: String,

    /// Name of the member paying (the debtor)
    from_user: String,

    /// Name of the member receiving (the creditor)
    to_user: String,

    /// Transfer amount (currency value, intended > 0)
    amount: f64,

    /// ISO-8601 date string (display only)
    date: String,

    /// Free-form note
    #[serde(default)]
    note: Option<String>,
}

impl Payment {
    /// Create a new payment with a generated id
    pub fn new(from_user: String, to_user: String, amount: f64, date: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from_user,
            to_user,
            amount,
            date,
            note: None,
        }
    }

    /// Set note (builder pattern)
    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    /// Get record id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get sender (debtor) name
    pub fn from_user(&self) -> &str {
        &self.from_user
    }

    /// Get receiver (creditor) name
    pub fn to_user(&self) -> &str {
        &self.to_user
    }

    /// Get transfer amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get date string
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get note, if set
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
