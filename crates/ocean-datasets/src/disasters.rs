//! Marine disaster predictions with type-dependent location sampling
//! and templated advisory text.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{round2, GeoPoint};

pub const DISASTER_TYPES: [&str; 4] = [
    "cyclone",
    "tsunami",
    "underwater_earthquake",
    "marine_heatwave",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterPrediction {
    pub id: String,
    pub disaster_type: String,
    pub probability: f64,
    pub location: GeoPoint,
    pub predicted_time: DateTime<Utc>,
    pub severity: u8,
    pub advisory: String,
}

fn advisory_for(disaster_type: &str) -> &'static str {
    match disaster_type {
        "cyclone" => {
            "Potential cyclone formation detected. Marine vessels advised to avoid the area."
        }
        "tsunami" => {
            "Tsunami risk due to seismic activity. Coastal communities should prepare for possible evacuation."
        }
        "underwater_earthquake" => {
            "Submarine seismic activity detected. Monitoring for potential tsunami generation."
        }
        "marine_heatwave" => {
            "Elevated ocean temperatures may impact marine ecosystems. Monitor coral health."
        }
        _ => "Monitor situation for developments.",
    }
}

fn location_for<R: Rng + ?Sized>(rng: &mut R, disaster_type: &str) -> GeoPoint {
    match disaster_type {
        // Cyclones form in the tropical bands either side of the equator
        "cyclone" => {
            let lat_sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let lng_sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            GeoPoint {
                lat: rng.gen_range(5.0..30.0) * lat_sign,
                lng: rng.gen_range(0.0..180.0) * lng_sign,
            }
        }
        // Tsunamis cluster around the Pacific Ring of Fire longitudes
        "tsunami" => GeoPoint {
            lat: rng.gen_range(-50.0..50.0),
            lng: if rng.gen_bool(0.5) {
                rng.gen_range(120.0..180.0)
            } else {
                rng.gen_range(-180.0..-80.0)
            },
        },
        _ => GeoPoint::random(rng),
    }
}

/// Generate `count` predictions dated 1-30 days into the future.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<DisasterPrediction> {
    (0..count)
        .map(|i| {
            let disaster_type = *DISASTER_TYPES.choose(rng).unwrap();
            let location = location_for(rng, disaster_type);
            let predicted_time = now + Duration::days(rng.gen_range(1..=30));

            DisasterPrediction {
                id: format!("disaster-{}", i),
                disaster_type: disaster_type.to_string(),
                probability: round2(rng.gen_range(0.1..0.95)),
                location,
                predicted_time,
                severity: rng.gen_range(1..=5),
                advisory: advisory_for(disaster_type).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probability_and_severity_bounds() {
        let mut rng = StdRng::seed_from_u64(19);
        for prediction in generate(&mut rng, Utc::now(), 200) {
            assert!(prediction.probability >= 0.1 && prediction.probability <= 0.95);
            assert!((1..=5).contains(&prediction.severity));
        }
    }

    #[test]
    fn test_predictions_are_in_the_future() {
        let mut rng = StdRng::seed_from_u64(19);
        let now = Utc::now();
        for prediction in generate(&mut rng, now, 100) {
            assert!(prediction.predicted_time > now);
            assert!(prediction.predicted_time <= now + Duration::days(30));
        }
    }

    #[test]
    fn test_type_dependent_locations() {
        let mut rng = StdRng::seed_from_u64(5);
        for prediction in generate(&mut rng, Utc::now(), 400) {
            match prediction.disaster_type.as_str() {
                "cyclone" => {
                    let lat = prediction.location.lat.abs();
                    assert!((5.0..=30.0).contains(&lat));
                }
                "tsunami" => {
                    let lng = prediction.location.lng;
                    assert!(
                        (120.0..=180.0).contains(&lng) || (-180.0..=-80.0).contains(&lng),
                        "tsunami longitude outside Pacific rim: {}",
                        lng
                    );
                }
                other => {
                    assert!(DISASTER_TYPES.contains(&other));
                    assert!(prediction.location.lat.abs() <= 60.0);
                }
            }
            assert_eq!(prediction.advisory, advisory_for(&prediction.disaster_type));
        }
    }
}
