//! Domain model for users, teams and tasks.
//!
//! # Responsibility
//! - Keep records schema-less so extra caller fields survive persistence.
//! - Expose strongly typed views of identity, membership and status fields.
//!
//! # Invariants
//! - Every record is identified by an integer key unique within its collection.
//! - Task status is always one of the fixed board columns.

pub mod entity;
pub mod record;
pub mod task_status;
