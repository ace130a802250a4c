//! Mock Oceanographic Datasets
//!
//! Record models and procedural generators for the five OceanEye
//! dataset categories: anomalies, biodiversity, disaster predictions,
//! map features and historical timelines.
//!
//! Every generator is a pure function of an injected random source,
//! a wall-clock "now" and a requested count, so tests can seed a
//! `StdRng` and get reproducible batches.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod anomalies;
pub mod biodiversity;
pub mod disasters;
pub mod historical;
pub mod map_features;

pub use anomalies::AnomalyRecord;
pub use biodiversity::{BiodiversityRecord, MigrationPattern, SpeciesObservation};
pub use disasters::DisasterPrediction;
pub use historical::HistoricalPoint;
pub use map_features::MapFeature;

/// A point on the ocean surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Uniform draw over the sampled ocean band (lat clipped to ±60°).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            lat: rng.gen_range(-60.0..60.0),
            lng: rng.gen_range(-180.0..180.0),
        }
    }
}

/// Batch sizes used when materializing a full set of datasets.
#[derive(Debug, Clone, Copy)]
pub struct DatasetCounts {
    pub anomalies: usize,
    pub biodiversity: usize,
    pub disasters: usize,
    pub map_features: usize,
    pub historical_years: usize,
    pub samples_per_year: usize,
}

impl Default for DatasetCounts {
    fn default() -> Self {
        Self {
            anomalies: 100,
            biodiversity: 50,
            disasters: 20,
            map_features: 60,
            historical_years: 50,
            samples_per_year: 12,
        }
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round1(2.67), 2.7);
        assert_eq!(round2(33.333333), 33.33);
    }

    #[test]
    fn test_default_counts() {
        let counts = DatasetCounts::default();
        assert_eq!(counts.anomalies, 100);
        assert_eq!(counts.historical_years * counts.samples_per_year, 600);
    }
}
