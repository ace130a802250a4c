//! Dataset Store
//!
//! Flat-file JSON persistence for the five OceanEye dataset categories,
//! plus the research upload store. Each category is one pretty-printed
//! JSON array file under the data directory; missing files are healed
//! by re-running the generators (lazy initialization).
//!
//! There is deliberately no locking: writes are whole-file replacements
//! and concurrent regeneration is benign (last writer wins).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use ocean_datasets::{anomalies, biodiversity, disasters, historical, map_features, DatasetCounts};

pub mod research;

pub use research::{ResearchStore, ResearchSummary, ResearchUpload};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The five persisted dataset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Anomalies,
    Biodiversity,
    DisasterPredictions,
    MapFeatures,
    HistoricalData,
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Anomalies,
        Dataset::Biodiversity,
        Dataset::DisasterPredictions,
        Dataset::MapFeatures,
        Dataset::HistoricalData,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Anomalies => "anomalies.json",
            Dataset::Biodiversity => "biodiversity.json",
            Dataset::DisasterPredictions => "disaster_predictions.json",
            Dataset::MapFeatures => "map_features.json",
            Dataset::HistoricalData => "historical_data.json",
        }
    }
}

/// What `ensure` does when it finds a dataset file missing.
///
/// `RegenerateAll` rebuilds every dataset whenever any single file is
/// missing, so one request heals the whole directory. `MissingOnly`
/// rebuilds just the requested file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitPolicy {
    #[default]
    RegenerateAll,
    MissingOnly,
}

pub struct DatasetStore {
    root: PathBuf,
    counts: DatasetCounts,
    policy: InitPolicy,
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            counts: DatasetCounts::default(),
            policy: InitPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: InitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_counts(mut self, counts: DatasetCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, dataset: Dataset) -> PathBuf {
        self.root.join(dataset.file_name())
    }

    /// Generate and persist all five datasets, replacing any existing
    /// files. Explicit counterpart to the lazy path in [`ensure`].
    ///
    /// [`ensure`]: DatasetStore::ensure
    pub fn initialize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let now = Utc::now();

        tracing::info!(root = %self.root.display(), "initializing mock datasets");
        for dataset in Dataset::ALL {
            self.write_generated(dataset, rng, now)?;
        }
        Ok(())
    }

    /// Make sure the backing file for `dataset` exists, regenerating
    /// per the configured [`InitPolicy`] if it does not.
    pub fn ensure<R: Rng + ?Sized>(&self, dataset: Dataset, rng: &mut R) -> Result<()> {
        if self.path(dataset).exists() {
            return Ok(());
        }

        match self.policy {
            InitPolicy::RegenerateAll => self.initialize(rng),
            InitPolicy::MissingOnly => {
                fs::create_dir_all(&self.root)?;
                self.write_generated(dataset, rng, Utc::now())
            }
        }
    }

    /// Read the persisted array for `dataset`.
    pub fn read(&self, dataset: Dataset) -> Result<Vec<Value>> {
        let path = self.path(dataset);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(dataset.file_name().to_string())
            } else {
                StoreError::Io(e)
            }
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Whole-file pretty-printed JSON replacement.
    pub fn write<T: Serialize>(&self, dataset: Dataset, records: &[T]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(self.path(dataset), json)?;
        Ok(())
    }

    fn write_generated<R: Rng + ?Sized>(
        &self,
        dataset: Dataset,
        rng: &mut R,
        now: chrono::DateTime<Utc>,
    ) -> Result<()> {
        match dataset {
            Dataset::Anomalies => {
                self.write(dataset, &anomalies::generate(rng, now, self.counts.anomalies))
            }
            Dataset::Biodiversity => self.write(
                dataset,
                &biodiversity::generate(rng, now, self.counts.biodiversity),
            ),
            Dataset::DisasterPredictions => {
                self.write(dataset, &disasters::generate(rng, now, self.counts.disasters))
            }
            Dataset::MapFeatures => {
                self.write(dataset, &map_features::generate(rng, self.counts.map_features))
            }
            Dataset::HistoricalData => self.write(
                dataset,
                &historical::generate(
                    rng,
                    now,
                    self.counts.historical_years,
                    self.counts.samples_per_year,
                ),
            ),
        }
    }
}
