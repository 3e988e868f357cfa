//! Audit logging for fintrack
//!
//! Every mutation made through the command line is appended to
//! `audit.log` as one JSON object per line, with the entity state before
//! and after the change.
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.append(&AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.as_str(),
//!     Some(txn.category.to_string()),
//!     &txn,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
