//! User manager.
//!
//! # Responsibility
//! - Create, read, merge-update and delete user records.
//! - Own the user collection file exclusively.
//!
//! # Invariants
//! - `user_id` is unique; creation never overwrites an existing user.
//! - Update merges supplied fields only; unspecified fields are preserved.

use crate::model::entity::{EntityKind, UserId};
use crate::model::record::{integer_field, merge_fields, parse_record, require_fields};
use crate::repo::record_repo::JsonRecordRepository;
use crate::service::error::{log_failure, ManagerError, ManagerResult};
use crate::service::response::{
    creation_timestamp, encode, Outcome, UserCreated, UserDeleted, UserUpdated,
};
use crate::store::JsonFileStore;
use log::info;
use std::path::Path;

/// Capability interface for user record operations.
///
/// Create/update take a JSON-encoded object; every operation returns a
/// JSON-encoded result.
pub trait UserOperations {
    fn create_user(&self, input_json: &str) -> ManagerResult<String>;
    fn get_user(&self, user_id: UserId) -> ManagerResult<String>;
    fn get_all_users(&self) -> ManagerResult<String>;
    fn update_user(&self, input_json: &str) -> ManagerResult<String>;
    fn delete_user(&self, user_id: UserId) -> ManagerResult<String>;
}

/// JSON-file-backed user manager.
#[derive(Debug, Clone)]
pub struct UserManager {
    users: JsonRecordRepository,
}

impl UserManager {
    /// Opens (and initializes when needed) the user collection at `path`.
    pub fn open(path: impl AsRef<Path>) -> ManagerResult<Self> {
        let store = JsonFileStore::open(path)?;
        Ok(Self {
            users: JsonRecordRepository::new(EntityKind::User, store),
        })
    }

    pub fn path(&self) -> &Path {
        self.users.path()
    }

    fn create(&self, input_json: &str) -> ManagerResult<UserCreated> {
        let record = parse_record(input_json)?;
        require_fields(&record, EntityKind::User.required_fields())?;
        let user_id = integer_field(&record, "user_id")?;

        self.users.insert(user_id, record.clone())?;
        info!("event=user_create module=service status=ok user_id={user_id}");
        Ok(UserCreated {
            status: Outcome::Success,
            user: record,
            timestamp: creation_timestamp(),
        })
    }

    fn update(&self, input_json: &str) -> ManagerResult<UserUpdated> {
        let patch = parse_record(input_json)?;
        let user_id = integer_field(&patch, "user_id")?;

        let merged = self
            .users
            .update(user_id, |stored| merge_fields(stored, patch))?;
        info!("event=user_update module=service status=ok user_id={user_id}");
        Ok(UserUpdated {
            status: Outcome::Success,
            updated_user: merged,
        })
    }

    fn delete(&self, user_id: UserId) -> ManagerResult<UserDeleted> {
        let remaining = self.users.remove(user_id)?;
        info!(
            "event=user_delete module=service status=ok user_id={user_id} remaining={remaining}"
        );
        Ok(UserDeleted {
            status: Outcome::Success,
            deleted_user_id: user_id,
            remaining_users: remaining,
        })
    }
}

impl UserOperations for UserManager {
    fn create_user(&self, input_json: &str) -> ManagerResult<String> {
        self.create(input_json)
            .and_then(|created| encode(&created))
            .inspect_err(|err| log_failure("user_create", err))
    }

    fn get_user(&self, user_id: UserId) -> ManagerResult<String> {
        let user = self.users.find(user_id)?.ok_or(ManagerError::NotFound {
            kind: EntityKind::User,
            id: user_id,
        })?;
        encode(&user)
    }

    fn get_all_users(&self) -> ManagerResult<String> {
        encode(&self.users.list()?)
    }

    fn update_user(&self, input_json: &str) -> ManagerResult<String> {
        self.update(input_json)
            .and_then(|updated| encode(&updated))
            .inspect_err(|err| log_failure("user_update", err))
    }

    fn delete_user(&self, user_id: UserId) -> ManagerResult<String> {
        self.delete(user_id)
            .and_then(|deleted| encode(&deleted))
            .inspect_err(|err| log_failure("user_delete", err))
    }
}
