//! Team manager.
//!
//! # Responsibility
//! - Create, read, merge-update and delete team records.
//!
//! # Invariants
//! - `team_id` is unique within the team collection.
//! - `members` entries are user ids but are never checked against users.
//! - Update replaces `members` wholesale when supplied; existing tasks are
//!   not revalidated and deletes do not cascade.

use crate::model::entity::{EntityKind, TeamId};
use crate::model::record::{integer_field, merge_fields, parse_record, require_fields};
use crate::repo::record_repo::JsonRecordRepository;
use crate::service::error::{log_failure, ManagerError, ManagerResult};
use crate::service::response::{
    creation_timestamp, encode, Outcome, TeamCreated, TeamDeleted, TeamUpdated,
};
use crate::store::JsonFileStore;
use log::info;
use std::path::Path;

/// Capability interface for team record operations.
pub trait TeamOperations {
    fn create_team(&self, input_json: &str) -> ManagerResult<String>;
    fn get_team(&self, team_id: TeamId) -> ManagerResult<String>;
    fn get_all_teams(&self) -> ManagerResult<String>;
    fn update_team(&self, input_json: &str) -> ManagerResult<String>;
    fn delete_team(&self, team_id: TeamId) -> ManagerResult<String>;
}

/// JSON-file-backed team manager.
#[derive(Debug, Clone)]
pub struct TeamManager {
    teams: JsonRecordRepository,
}

impl TeamManager {
    pub fn open(path: impl AsRef<Path>) -> ManagerResult<Self> {
        let store = JsonFileStore::open(path)?;
        Ok(Self {
            teams: JsonRecordRepository::new(EntityKind::Team, store),
        })
    }

    pub fn path(&self) -> &Path {
        self.teams.path()
    }

    fn create(&self, input_json: &str) -> ManagerResult<TeamCreated> {
        let record = parse_record(input_json)?;
        require_fields(&record, EntityKind::Team.required_fields())?;
        let team_id = integer_field(&record, "team_id")?;

        self.teams.insert(team_id, record.clone())?;
        info!("event=team_create module=service status=ok team_id={team_id}");
        Ok(TeamCreated {
            status: Outcome::Success,
            team: record,
            timestamp: creation_timestamp(),
        })
    }

    fn update(&self, input_json: &str) -> ManagerResult<TeamUpdated> {
        let patch = parse_record(input_json)?;
        let team_id = integer_field(&patch, "team_id")?;

        let merged = self
            .teams
            .update(team_id, |stored| merge_fields(stored, patch))?;
        info!("event=team_update module=service status=ok team_id={team_id}");
        Ok(TeamUpdated {
            status: Outcome::Success,
            team: merged,
        })
    }

    fn delete(&self, team_id: TeamId) -> ManagerResult<TeamDeleted> {
        let remaining = self.teams.remove(team_id)?;
        info!(
            "event=team_delete module=service status=ok team_id={team_id} remaining={remaining}"
        );
        Ok(TeamDeleted {
            status: Outcome::Success,
            deleted_team_id: team_id,
            remaining_teams: remaining,
        })
    }
}

impl TeamOperations for TeamManager {
    fn create_team(&self, input_json: &str) -> ManagerResult<String> {
        self.create(input_json)
            .and_then(|created| encode(&created))
            .inspect_err(|err| log_failure("team_create", err))
    }

    fn get_team(&self, team_id: TeamId) -> ManagerResult<String> {
        let team = self.teams.find(team_id)?.ok_or(ManagerError::NotFound {
            kind: EntityKind::Team,
            id: team_id,
        })?;
        encode(&team)
    }

    fn get_all_teams(&self) -> ManagerResult<String> {
        encode(&self.teams.list()?)
    }

    fn update_team(&self, input_json: &str) -> ManagerResult<String> {
        self.update(input_json)
            .and_then(|updated| encode(&updated))
            .inspect_err(|err| log_failure("team_update", err))
    }

    fn delete_team(&self, team_id: TeamId) -> ManagerResult<String> {
        self.delete(team_id)
            .and_then(|deleted| encode(&deleted))
            .inspect_err(|err| log_failure("team_delete", err))
    }
}
