//! Repository layer over flat JSON collection files.
//!
//! # Responsibility
//! - Translate keyed CRUD intents into whole-file load/save cycles.
//! - Report semantic failures (`NotFound`, `DuplicateKey`) separately from
//!   storage failures.
//!
//! # Invariants
//! - Lookups are linear scans by integer identity key; there is no index.

pub mod record_repo;
