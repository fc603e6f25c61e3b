//! Domain models for the expense tracker

pub mod expense;
pub mod member;
pub mod payment;
pub mod snapshot;

// Re-exports
pub use expense::Expense;
pub use member::Member;
pub use payment::Payment;
pub use snapshot::{Snapshot, SnapshotError};
