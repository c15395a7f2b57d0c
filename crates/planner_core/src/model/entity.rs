//! Entity kinds and identifier types.

use crate::model::record::{key_of, Record};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub type UserId = i64;
pub type TeamId = i64;
pub type TaskId = i64;

/// The three record collections managed by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Team,
    Task,
}

impl EntityKind {
    /// Name of the identity field for this kind.
    pub fn key_field(self) -> &'static str {
        match self {
            Self::User => "user_id",
            Self::Team => "team_id",
            Self::Task => "task_id",
        }
    }

    /// Fields a create payload must carry.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::User => &["user_id", "name"],
            Self::Team => &["team_id", "name", "members"],
            Self::Task => &["task_id", "title", "team_id", "assigned_to", "status"],
        }
    }

    /// Identity of `record` for this kind, if it carries an integer key.
    pub fn id_of(self, record: &Record) -> Option<i64> {
        key_of(record, self.key_field())
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Team => "Team",
            Self::Task => "Task",
        };
        f.write_str(name)
    }
}

/// Member identifiers of a team record.
///
/// Entries that are not integers are skipped; a missing or non-array
/// `members` field yields an empty list.
pub fn team_members(team: &Record) -> Vec<UserId> {
    match team.get("members") {
        Some(Value::Array(members)) => members.iter().filter_map(Value::as_i64).collect(),
        _ => Vec::new(),
    }
}
