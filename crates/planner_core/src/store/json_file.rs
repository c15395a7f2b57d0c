//! Whole-file JSON array persistence.
//!
//! # Responsibility
//! - Create collection files on first use.
//! - Load the full record array, tolerating a UTF-8 byte-order mark.
//! - Rewrite the full record array with two-space indentation.
//!
//! # Invariants
//! - A missing or zero-length file is initialized to `[]` by `open`.
//! - Writes never emit a byte-order mark and keep non-ASCII text unescaped.
//! - File handles live only for the duration of one load or save call.

use super::{StoreError, StoreResult};
use crate::model::record::Record;
use log::{debug, error, info};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Handle to one JSON collection file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a collection file for read/write use.
    ///
    /// # Side effects
    /// - Creates missing parent directories.
    /// - Writes `[]` when the file is missing or zero-length.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(&path, err))?;
        }

        let needs_init = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == ErrorKind::NotFound => true,
            Err(err) => return Err(StoreError::io(&path, err)),
        };

        if needs_init {
            write_records(&path, &[])?;
            info!(
                "event=store_init module=store status=ok path={}",
                path.display()
            );
        }

        Ok(Self { path })
    }

    /// Attaches to a collection file owned by another component.
    ///
    /// Performs no I/O; use [`JsonFileStore::load_if_exists`] to read it.
    pub fn attach(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in storage order.
    pub fn load(&self) -> StoreResult<Vec<Record>> {
        let mut file = File::open(&self.path).map_err(|err| StoreError::io(&self.path, err))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|err| StoreError::io(&self.path, err))?;

        let records = decode_records(&self.path, &bytes)?;
        debug!(
            "event=store_read module=store status=ok path={} records={}",
            self.path.display(),
            records.len()
        );
        Ok(records)
    }

    /// Like [`JsonFileStore::load`], but a missing file reads as empty.
    pub fn load_if_exists(&self) -> StoreResult<Vec<Record>> {
        if !self.path.exists() {
            debug!(
                "event=store_read module=store status=missing path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }
        self.load()
    }

    /// Replaces the file contents with `records`.
    pub fn save(&self, records: &[Record]) -> StoreResult<()> {
        match write_records(&self.path, records) {
            Ok(()) => {
                debug!(
                    "event=store_write module=store status=ok path={} records={}",
                    self.path.display(),
                    records.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_write module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn decode_records(path: &Path, bytes: &[u8]) -> StoreResult<Vec<Record>> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| StoreError::json(path, err))?;
    let Value::Array(items) = value else {
        return Err(StoreError::invalid_data(path, "expected a JSON array"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(StoreError::invalid_data(
                path,
                format!("element {index} is not an object"),
            )),
        })
        .collect()
}

fn write_records(path: &Path, records: &[Record]) -> StoreResult<()> {
    let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|err| StoreError::json(path, err))?;
    writer.flush().map_err(|err| StoreError::io(path, err))
}
