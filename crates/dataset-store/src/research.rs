//! Research upload store: one JSON envelope file per uploaded document
//! under the `research/` subdirectory of the data directory.
//!
//! Envelopes are written once and never mutated. Listing returns the
//! metadata only; the parsed payload is served on direct retrieval.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, StoreError};

/// Full persisted envelope for one uploaded research document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchUpload {
    pub title: String,
    pub description: String,
    pub data_type: String,
    pub upload_date: DateTime<Utc>,
    pub filename: String,
    pub data: Value,
}

/// Listing entry: the envelope without its payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSummary {
    pub title: String,
    pub description: String,
    pub data_type: String,
    pub upload_date: DateTime<Utc>,
    pub filename: String,
}

impl From<&ResearchUpload> for ResearchSummary {
    fn from(upload: &ResearchUpload) -> Self {
        Self {
            title: upload.title.clone(),
            description: upload.description.clone(),
            data_type: upload.data_type.clone(),
            upload_date: upload.upload_date,
            filename: upload.filename.clone(),
        }
    }
}

pub struct ResearchStore {
    dir: PathBuf,
}

/// Envelope filenames are opaque keys, never paths. Anything that
/// could navigate the filesystem is rejected on both read and write.
fn is_simple_key(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

impl ResearchStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist an envelope under its embedded filename.
    pub fn save(&self, upload: &ResearchUpload) -> Result<()> {
        if !is_simple_key(&upload.filename) {
            return Err(StoreError::InvalidFilename(upload.filename.clone()));
        }
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec_pretty(upload)?;
        fs::write(self.dir.join(&upload.filename), json)?;
        Ok(())
    }

    /// Enumerate every stored envelope, payloads omitted.
    pub fn list(&self) -> Result<Vec<ResearchSummary>> {
        fs::create_dir_all(&self.dir)?;

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if !name.to_string_lossy().ends_with(".json") {
                continue;
            }
            let bytes = fs::read(entry.path())?;
            let upload: ResearchUpload = serde_json::from_slice(&bytes)?;
            summaries.push(ResearchSummary::from(&upload));
        }
        Ok(summaries)
    }

    /// Fetch one envelope by its on-disk filename.
    pub fn get(&self, filename: &str) -> Result<ResearchUpload> {
        if !is_simple_key(filename) {
            return Err(StoreError::NotFound(filename.to_string()));
        }

        let bytes = fs::read(self.dir.join(filename)).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(filename.to_string())
            } else {
                StoreError::Io(e)
            }
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
