//! JSON response envelopes returned by manager operations.
//!
//! # Invariants
//! - Every mutation envelope carries `status: "success"`.
//! - Field names are part of the persisted/API contract; do not rename.

use crate::model::entity::{TaskId, TeamId, UserId};
use crate::model::record::Record;
use crate::service::error::ManagerResult;
use chrono::Local;
use serde::Serialize;

/// Outcome marker serialized as the envelope `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCreated {
    pub status: Outcome,
    pub user: Record,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdated {
    pub status: Outcome,
    pub updated_user: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDeleted {
    pub status: Outcome,
    pub deleted_user_id: UserId,
    pub remaining_users: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCreated {
    pub status: Outcome,
    pub team: Record,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamUpdated {
    pub status: Outcome,
    pub team: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDeleted {
    pub status: Outcome,
    pub deleted_team_id: TeamId,
    pub remaining_teams: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCreated {
    pub status: Outcome,
    pub task: Record,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatusUpdated {
    pub status: Outcome,
    pub updated_task: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDeleted {
    pub status: Outcome,
    pub deleted_task_id: TaskId,
    pub remaining_tasks: usize,
}

/// Serializes a response envelope or record list to compact JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> ManagerResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Local wall-clock time as ISO-8601 with microseconds and no offset.
pub fn creation_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
