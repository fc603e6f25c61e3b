//! Member model
//!
//! Represents a named participant in the shared-expense group.
//!
//! # Name-as-Identity Note
//!
//! The upstream data joins expenses and payments to members by **display
//! name**, not by id. This crate preserves that contract: `name` is the
//! join key everywhere, and `id` exists only as a stable record
//! identifier. Renaming a member therefore orphans historical references
//! to the old name; `validation::validate` surfaces such orphans instead
//! of erroring on them.

use serde::{Deserialize, Serialize};

/// A named participant in the shared-expense group
///
/// # Example
/// ```
/// use billbuddy_engine::Member;
///
/// let member = Member::new("Asha".to_string());
/// assert_eq!(member.name(), "Asha");
/// assert!(!member.id().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique record identifier (UUID)
    id: String,

    /// Display name; the join key used by expenses and payments
    name: String,
}

impl Member {
    /// Create a new member with a generated id
    pub fn new(name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
        }
    }

    /// Restore a member with an existing id (e.g. from a datastore row)
    pub fn from_parts(id: String, name: String) -> Self {
        Self { id, name }
    }

    /// Get record id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }
}
