//! Facade wiring the three managers to one storage configuration.

use crate::config::StorageConfig;
use crate::service::board_manager::BoardManager;
use crate::service::error::ManagerResult;
use crate::service::team_manager::TeamManager;
use crate::service::user_manager::UserManager;
use log::info;

/// User, team and board managers sharing one [`StorageConfig`].
#[derive(Debug, Clone)]
pub struct Planner {
    users: UserManager,
    teams: TeamManager,
    board: BoardManager,
}

impl Planner {
    /// Opens every collection, creating empty files where needed.
    ///
    /// The board reads teams from `config.teams_path`.
    pub fn open(config: &StorageConfig) -> ManagerResult<Self> {
        let users = UserManager::open(&config.users_path)?;
        let teams = TeamManager::open(&config.teams_path)?;
        let board = BoardManager::open(&config.tasks_path, &config.teams_path)?;
        info!(
            "event=planner_open module=service status=ok users={} teams={} tasks={}",
            config.users_path.display(),
            config.teams_path.display(),
            config.tasks_path.display()
        );
        Ok(Self {
            users,
            teams,
            board,
        })
    }

    pub fn users(&self) -> &UserManager {
        &self.users
    }

    pub fn teams(&self) -> &TeamManager {
        &self.teams
    }

    pub fn board(&self) -> &BoardManager {
        &self.board
    }
}
