//! Audit logging
//!
//! Append-only JSONL log of every create, update, and delete.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
