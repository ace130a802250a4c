//! Sensor anomaly records: temperature spikes, salinity changes and
//! algal blooms scattered over a 30-day trailing window.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{round2, GeoPoint};

pub const ANOMALY_TYPES: [&str; 3] = ["temperature_spike", "salinity_change", "algal_bloom"];

/// Probability that any given reading is flagged anomalous.
const ANOMALY_RATE: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub location: GeoPoint,
    pub temperature: f64,
    pub salinity: f64,
    pub algae_concentration: f64,
    pub is_anomaly: bool,
    pub anomaly_type: Option<String>,
    pub severity: Option<u8>,
}

/// Generate `count` readings, one every half day starting 30 days ago.
///
/// Anomalous readings get a type, a severity in 1..=5 and an upward
/// perturbation of the matching measurement.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<AnomalyRecord> {
    let base = now - Duration::days(30);

    (0..count)
        .map(|i| {
            let timestamp = base + Duration::hours(12 * i as i64);
            let location = GeoPoint::random(rng);

            let mut temperature = rng.gen_range(0.0..30.0);
            let mut salinity = rng.gen_range(30.0..40.0);
            let mut algae = rng.gen_range(0.0..100.0);

            let is_anomaly = rng.gen_bool(ANOMALY_RATE);
            let mut anomaly_type = None;
            let mut severity = None;

            if is_anomaly {
                let kind = *ANOMALY_TYPES.choose(rng).unwrap();
                severity = Some(rng.gen_range(1..=5));

                match kind {
                    "temperature_spike" => temperature += rng.gen_range(5.0..15.0),
                    "salinity_change" => salinity += rng.gen_range(-10.0..10.0),
                    _ => algae += rng.gen_range(50.0..150.0),
                }

                anomaly_type = Some(kind.to_string());
            }

            AnomalyRecord {
                id: format!("anomaly-{}", i),
                timestamp,
                location,
                temperature: round2(temperature),
                salinity: round2(salinity),
                algae_concentration: round2(algae),
                is_anomaly,
                anomaly_type,
                severity,
            }
        })
        .collect()
}
