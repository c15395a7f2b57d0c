//! Task board manager.
//!
//! # Responsibility
//! - Create, read, status-update and delete task records.
//! - Validate task team/assignee references against the team collection.
//!
//! # Invariants
//! - A task is only created when its team exists and lists the assignee.
//! - `status` is always one of `To Do`, `In Progress`, `Done`.
//! - `status` is the only field that changes after creation.
//! - The team file is read-only from this manager's point of view.
//!
//! # See also
//! - `service::team_manager` for the owner of the team collection.

use crate::model::entity::{team_members, EntityKind, TaskId, TeamId, UserId};
use crate::model::record::{integer_field, parse_record, require_fields};
use crate::model::task_status::TaskStatus;
use crate::repo::record_repo::{position_of, JsonRecordRepository};
use crate::service::error::{log_failure, ManagerError, ManagerResult};
use crate::service::response::{
    creation_timestamp, encode, Outcome, TaskCreated, TaskDeleted, TaskStatusUpdated,
};
use crate::store::JsonFileStore;
use log::info;
use serde_json::Value;
use std::path::Path;

/// Capability interface for task board operations.
pub trait BoardOperations {
    fn create_task(&self, input_json: &str) -> ManagerResult<String>;
    fn get_task(&self, task_id: TaskId) -> ManagerResult<String>;
    fn get_all_tasks(&self) -> ManagerResult<String>;
    /// Moves a task to `status`; any column may move to any other.
    fn update_task_status(&self, task_id: TaskId, status: &str) -> ManagerResult<String>;
    fn delete_task(&self, task_id: TaskId) -> ManagerResult<String>;
}

/// JSON-file-backed task board.
#[derive(Debug, Clone)]
pub struct BoardManager {
    tasks: JsonRecordRepository,
    teams: JsonFileStore,
}

impl BoardManager {
    /// Opens the task collection at `tasks_path` and attaches read-only to
    /// the team collection at `teams_path`.
    ///
    /// A missing team file is not created here; it reads as no teams.
    pub fn open(tasks_path: impl AsRef<Path>, teams_path: impl AsRef<Path>) -> ManagerResult<Self> {
        let store = JsonFileStore::open(tasks_path)?;
        Ok(Self {
            tasks: JsonRecordRepository::new(EntityKind::Task, store),
            teams: JsonFileStore::attach(teams_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.tasks.path()
    }

    pub fn teams_path(&self) -> &Path {
        self.teams.path()
    }

    /// Accepts `{"task_id": .., "status": ..}` and delegates to
    /// [`BoardOperations::update_task_status`].
    pub fn update_task_status_json(&self, input_json: &str) -> ManagerResult<String> {
        self.status_request(input_json)
            .and_then(|(task_id, status)| self.set_status(task_id, status))
            .and_then(|updated| encode(&updated))
            .inspect_err(|err| log_failure("task_status_update", err))
    }

    fn create(&self, input_json: &str) -> ManagerResult<TaskCreated> {
        let record = parse_record(input_json)?;
        require_fields(&record, EntityKind::Task.required_fields())?;
        let task_id = integer_field(&record, "task_id")?;
        let team_id = integer_field(&record, "team_id")?;
        let assigned_to = integer_field(&record, "assigned_to")?;
        parse_status(record.get("status").unwrap_or(&Value::Null))?;

        self.ensure_assignable(team_id, assigned_to)?;
        self.tasks.insert(task_id, record.clone())?;
        info!(
            "event=task_create module=service status=ok task_id={task_id} team_id={team_id}"
        );
        Ok(TaskCreated {
            status: Outcome::Success,
            task: record,
            timestamp: creation_timestamp(),
        })
    }

    fn ensure_assignable(&self, team_id: TeamId, user_id: UserId) -> ManagerResult<()> {
        let teams = self.teams.load_if_exists()?;
        let team = position_of(&teams, EntityKind::Team, team_id)
            .map(|index| &teams[index])
            .ok_or(ManagerError::TeamNotFound(team_id))?;

        if team_members(team).contains(&user_id) {
            Ok(())
        } else {
            Err(ManagerError::UserNotInTeam { user_id, team_id })
        }
    }

    fn status_request(&self, input_json: &str) -> ManagerResult<(TaskId, TaskStatus)> {
        let record = parse_record(input_json)?;
        require_fields(&record, &["task_id", "status"])?;
        let task_id = integer_field(&record, "task_id")?;
        let status = parse_status(record.get("status").unwrap_or(&Value::Null))?;
        Ok((task_id, status))
    }

    fn set_status(&self, task_id: TaskId, status: TaskStatus) -> ManagerResult<TaskStatusUpdated> {
        let updated = self.tasks.update(task_id, |task| {
            task.insert(
                "status".to_string(),
                Value::String(status.as_str().to_string()),
            );
        })?;
        info!(
            "event=task_status_update module=service status=ok task_id={task_id} task_status={}",
            status.as_str().replace(' ', "_")
        );
        Ok(TaskStatusUpdated {
            status: Outcome::Success,
            updated_task: updated,
        })
    }

    fn delete(&self, task_id: TaskId) -> ManagerResult<TaskDeleted> {
        let remaining = self.tasks.remove(task_id)?;
        info!(
            "event=task_delete module=service status=ok task_id={task_id} remaining={remaining}"
        );
        Ok(TaskDeleted {
            status: Outcome::Success,
            deleted_task_id: task_id,
            remaining_tasks: remaining,
        })
    }
}

fn parse_status(value: &Value) -> ManagerResult<TaskStatus> {
    TaskStatus::from_value(value).ok_or_else(|| {
        let shown = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());
        ManagerError::InvalidStatus(shown)
    })
}

impl BoardOperations for BoardManager {
    fn create_task(&self, input_json: &str) -> ManagerResult<String> {
        self.create(input_json)
            .and_then(|created| encode(&created))
            .inspect_err(|err| log_failure("task_create", err))
    }

    fn get_task(&self, task_id: TaskId) -> ManagerResult<String> {
        let task = self.tasks.find(task_id)?.ok_or(ManagerError::NotFound {
            kind: EntityKind::Task,
            id: task_id,
        })?;
        encode(&task)
    }

    fn get_all_tasks(&self) -> ManagerResult<String> {
        encode(&self.tasks.list()?)
    }

    fn update_task_status(&self, task_id: TaskId, status: &str) -> ManagerResult<String> {
        TaskStatus::parse(status)
            .ok_or_else(|| ManagerError::InvalidStatus(status.to_string()))
            .and_then(|status| self.set_status(task_id, status))
            .and_then(|updated| encode(&updated))
            .inspect_err(|err| log_failure("task_status_update", err))
    }

    fn delete_task(&self, task_id: TaskId) -> ManagerResult<String> {
        self.delete(task_id)
            .and_then(|deleted| encode(&deleted))
            .inspect_err(|err| log_failure("task_delete", err))
    }
}
