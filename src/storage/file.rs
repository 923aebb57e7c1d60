// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file storage for the CLI.
//!
//! The whole store is one JSON object of string values. Writes go to a
//! sibling temp file which is then renamed over the original.

use super::{Storage, StorageError};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StorageError::Read(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupt(self.path.display().to_string())),
            Err(e) => Err(StorageError::Corrupt(e.to_string())),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }

        let body = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Write(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.read_all()?;
        Ok(map.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = match self.read_all() {
            Ok(map) => map,
            Err(StorageError::Corrupt(e)) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Resetting corrupt storage file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = match self.read_all() {
            Ok(map) => map,
            Err(StorageError::Corrupt(_)) => Map::new(),
            Err(e) => return Err(e),
        };
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&map)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}
