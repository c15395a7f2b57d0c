//! Manager-level error taxonomy.

use crate::model::entity::{EntityKind, TeamId, UserId};
use crate::model::record::RecordError;
use crate::model::task_status::TaskStatus;
use crate::repo::record_repo::RepoError;
use crate::store::StoreError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Stable classification of [`ManagerError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    MissingField,
    DuplicateKey,
    NotFound,
    InvalidStatus,
    TeamNotFound,
    UserNotInTeam,
    Storage,
    Encoding,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed_input",
            Self::MissingField => "missing_field",
            Self::DuplicateKey => "duplicate_key",
            Self::NotFound => "not_found",
            Self::InvalidStatus => "invalid_status",
            Self::TeamNotFound => "team_not_found",
            Self::UserNotInTeam => "user_not_in_team",
            Self::Storage => "storage",
            Self::Encoding => "encoding",
        }
    }
}

/// Failure of a user/team/board manager operation.
///
/// Every variant is raised before any write happens, except `Storage`
/// which may come from the write itself.
#[derive(Debug)]
pub enum ManagerError {
    /// Input is not a JSON object, or a key field is not an integer.
    MalformedInput(String),
    /// Required fields absent from the payload.
    MissingField(Vec<String>),
    DuplicateKey { kind: EntityKind, id: i64 },
    NotFound { kind: EntityKind, id: i64 },
    /// Offending status text (or JSON rendering for non-strings).
    InvalidStatus(String),
    TeamNotFound(TeamId),
    UserNotInTeam { user_id: UserId, team_id: TeamId },
    Storage(StoreError),
    /// Response payload could not be serialized.
    Encoding(serde_json::Error),
}

impl ManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidStatus(_) => ErrorKind::InvalidStatus,
            Self::TeamNotFound(_) => ErrorKind::TeamNotFound,
            Self::UserNotInTeam { .. } => ErrorKind::UserNotInTeam,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(details) => write!(f, "{details}"),
            Self::MissingField(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::DuplicateKey { kind, id } => write!(f, "{kind} ID {id} already exists"),
            Self::NotFound { kind, id } => write!(f, "{kind} ID {id} not found"),
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; must be one of: {}",
                TaskStatus::allowed_values()
            ),
            Self::TeamNotFound(team_id) => write!(f, "Team ID {team_id} not found"),
            Self::UserNotInTeam { user_id, team_id } => {
                write!(f, "User {user_id} is not in team {team_id}")
            }
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encoding(err) => write!(f, "failed to encode response: {err}"),
        }
    }
}

impl Error for ManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordError> for ManagerError {
    fn from(value: RecordError) -> Self {
        match value {
            RecordError::MissingFields(fields) => Self::MissingField(fields),
            other => Self::MalformedInput(other.to_string()),
        }
    }
}

impl From<RepoError> for ManagerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            RepoError::DuplicateKey { kind, id } => Self::DuplicateKey { kind, id },
            RepoError::Store(err) => Self::Storage(err),
        }
    }
}

impl From<StoreError> for ManagerError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for ManagerError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

/// Emits the metadata-only failure event for a manager operation.
pub(crate) fn log_failure(event: &str, err: &ManagerError) {
    warn!(
        "event={event} module=service status=error error_kind={}",
        err.kind().as_str()
    );
}
