//! Manager services for users, teams and the task board.
//!
//! # Responsibility
//! - Validate JSON input and enforce referential rules before persistence.
//! - Return JSON payloads (`status: "success"` envelopes) to callers.
//!
//! # Invariants
//! - Every precondition is checked before any write.
//! - Failures are typed `ManagerError`s; there is no retry or partial success.

pub mod board_manager;
pub mod error;
pub mod planner;
pub mod response;
pub mod team_manager;
pub mod user_manager;
