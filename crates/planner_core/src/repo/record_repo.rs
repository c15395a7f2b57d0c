//! Keyed record collection on top of a JSON file.
//!
//! # Responsibility
//! - Provide scan/insert/update/remove by integer identity key.
//! - Run every operation as load-whole-file, mutate, rewrite-whole-file.
//!
//! # Invariants
//! - Identity keys are unique within the collection after every write.
//! - Precondition failures (`NotFound`, `DuplicateKey`) never write.
//! - Storage order is preserved; new records are appended.

use crate::model::entity::EntityKind;
use crate::model::record::Record;
use crate::store::{JsonFileStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    NotFound { kind: EntityKind, id: i64 },
    DuplicateKey { kind: EntityKind, id: i64 },
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} ID {id} not found"),
            Self::DuplicateKey { kind, id } => write!(f, "{kind} ID {id} already exists"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Index of the record whose `kind` key equals `id`.
pub fn position_of(records: &[Record], kind: EntityKind, id: i64) -> Option<usize> {
    records
        .iter()
        .position(|record| kind.id_of(record) == Some(id))
}

/// Record collection for one entity kind backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonRecordRepository {
    kind: EntityKind,
    store: JsonFileStore,
}

impl JsonRecordRepository {
    pub fn new(kind: EntityKind, store: JsonFileStore) -> Self {
        Self { kind, store }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// All records in storage order.
    pub fn list(&self) -> RepoResult<Vec<Record>> {
        Ok(self.store.load()?)
    }

    /// Record with identity `id`, if any.
    pub fn find(&self, id: i64) -> RepoResult<Option<Record>> {
        let mut records = self.store.load()?;
        Ok(position_of(&records, self.kind, id).map(|index| records.swap_remove(index)))
    }

    /// Appends `record` under identity `id`.
    ///
    /// # Errors
    /// - `DuplicateKey` when a record with `id` is already stored.
    pub fn insert(&self, id: i64, record: Record) -> RepoResult<()> {
        let mut records = self.store.load()?;
        if position_of(&records, self.kind, id).is_some() {
            return Err(RepoError::DuplicateKey {
                kind: self.kind,
                id,
            });
        }

        records.push(record);
        self.store.save(&records)?;
        Ok(())
    }

    /// Applies `mutate` to the record with identity `id` and persists.
    ///
    /// Returns the record as stored after mutation.
    pub fn update<F>(&self, id: i64, mutate: F) -> RepoResult<Record>
    where
        F: FnOnce(&mut Record),
    {
        let mut records = self.store.load()?;
        let index = position_of(&records, self.kind, id).ok_or(RepoError::NotFound {
            kind: self.kind,
            id,
        })?;

        mutate(&mut records[index]);
        self.store.save(&records)?;
        Ok(records.swap_remove(index))
    }

    /// Removes every record with identity `id` and returns the remaining count.
    ///
    /// # Errors
    /// - `NotFound` when nothing matches.
    pub fn remove(&self, id: i64) -> RepoResult<usize> {
        let records = self.store.load()?;
        let before = records.len();
        let remaining = records
            .into_iter()
            .filter(|record| self.kind.id_of(record) != Some(id))
            .collect::<Vec<_>>();

        if remaining.len() == before {
            return Err(RepoError::NotFound {
                kind: self.kind,
                id,
            });
        }

        self.store.save(&remaining)?;
        Ok(remaining.len())
    }
}
