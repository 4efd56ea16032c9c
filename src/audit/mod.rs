//! Audit logging for expense mutations
//!
//! Every create, update and delete of an expense item is appended to a JSON
//! Lines file with full before/after snapshots of the item.

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
