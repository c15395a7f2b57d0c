//! Core library for the team planner.
//! Users, teams and task boards persisted as flat JSON collection files.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::StorageConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{EntityKind, TaskId, TeamId, UserId};
pub use model::record::{Record, RecordError};
pub use model::task_status::TaskStatus;
pub use repo::record_repo::{JsonRecordRepository, RepoError, RepoResult};
pub use service::board_manager::{BoardManager, BoardOperations};
pub use service::error::{ErrorKind, ManagerError, ManagerResult};
pub use service::planner::Planner;
pub use service::response::{
    Outcome, TaskCreated, TaskDeleted, TaskStatusUpdated, TeamCreated, TeamDeleted, TeamUpdated,
    UserCreated, UserDeleted, UserUpdated,
};
pub use service::team_manager::{TeamManager, TeamOperations};
pub use service::user_manager::{UserManager, UserOperations};
pub use store::{JsonFileStore, StoreError, StoreResult};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
