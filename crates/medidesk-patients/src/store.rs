//! Flat-file patient store.
//!
//! The persisted state is one JSON document mapping patient id to record.
//! Every operation begins with a full load of the mapping; every mutating
//! operation ends with a full save. There is no locking and no conflict
//! detection: concurrent writers race and the last full-file write wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::patient::{PatientRecord, PatientUpdate};

/// Store errors. Display strings double as the HTTP `detail` payload.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("patient data not found: {0}")]
    NotFound(String),

    #[error("patient already exists: {0}")]
    Conflict(String),

    #[error("patient validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("invalid sort field '{0}', select from height, weight or bmi")]
    InvalidSortField(String),

    #[error("invalid sort order '{0}', select between asc and desc")]
    InvalidSortOrder(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Fields a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl FromStr for SortField {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "height" => Ok(Self::Height),
            "weight" => Ok(Self::Weight),
            "bmi" => Ok(Self::Bmi),
            other => Err(StoreError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort direction; ascending when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(StoreError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// File-backed store over the patient mapping.
pub struct PatientStore {
    path: PathBuf,
}

impl PatientStore {
    /// Open a store over the given JSON file, creating an empty mapping if
    /// the file does not exist yet.
    ///
    /// # Errors
    /// Returns error if the initial empty document cannot be written.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        if !store.path.exists() {
            store.save(&BTreeMap::new())?;
        }
        Ok(store)
    }

    /// Load the full persisted mapping.
    fn load(&self) -> StoreResult<BTreeMap<String, PatientRecord>> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Replace the persisted document with the given mapping.
    fn save(&self, data: &BTreeMap<String, PatientRecord>) -> StoreResult<()> {
        let json = serde_json::to_string(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Return the entire mapping unmodified.
    pub fn list(&self) -> StoreResult<BTreeMap<String, PatientRecord>> {
        self.load()
    }

    /// Get a single record by id.
    ///
    /// # Errors
    /// `NotFound` if the id is absent.
    pub fn get(&self, id: &str) -> StoreResult<PatientRecord> {
        let data = self.load()?;
        data.get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Store a validated record under `id`.
    ///
    /// # Errors
    /// `Conflict` if the id already exists; the existing record is left
    /// unchanged.
    pub fn create(&self, id: String, record: PatientRecord) -> StoreResult<()> {
        let mut data = self.load()?;
        if data.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        data.insert(id, record);
        self.save(&data)
    }

    /// Merge a partial update onto the existing record, re-validate the
    /// merged whole and recompute its derived fields, then persist.
    ///
    /// # Errors
    /// `NotFound` if the id is absent; `Validation` if the merged record
    /// violates any field constraint (the store is left unchanged).
    pub fn update(&self, id: &str, update: &PatientUpdate) -> StoreResult<PatientRecord> {
        let mut data = self.load()?;
        let existing = data
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let merged = existing.merge(update).map_err(StoreError::Validation)?;
        data.insert(id.to_string(), merged.clone());
        self.save(&data)?;
        Ok(merged)
    }

    /// Remove a record by id and persist.
    ///
    /// # Errors
    /// `NotFound` if the id is absent.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut data = self.load()?;
        if data.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.save(&data)
    }

    /// Records ordered by the chosen field's current value.
    ///
    /// The sort is stable: ties keep the mapping's iteration order. A record
    /// whose sort field is absent from the file sorts as 0 without being
    /// mutated. Never writes to the store.
    ///
    /// # Errors
    /// Field and order are validated by their `FromStr` impls before this
    /// is called; here only load errors remain.
    pub fn sort(&self, field: SortField, order: SortOrder) -> StoreResult<Vec<PatientRecord>> {
        let data = self.load()?;
        let mut records: Vec<PatientRecord> = data.into_values().collect();

        let key = |r: &PatientRecord| match field {
            SortField::Height => r.height,
            SortField::Weight => r.weight,
            SortField::Bmi => r.bmi,
        };

        match order {
            SortOrder::Asc => records.sort_by(|a, b| key(a).total_cmp(&key(b))),
            SortOrder::Desc => records.sort_by(|a, b| key(b).total_cmp(&key(a))),
        }

        Ok(records)
    }
}
