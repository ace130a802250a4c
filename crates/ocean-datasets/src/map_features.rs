//! Named seafloor and surface features for the map overlay:
//! tectonic plates, hydrothermal vents, trenches and reefs.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::round1;

pub const FEATURE_TYPES: [&str; 4] = [
    "tectonic_plate",
    "deep_sea_vent",
    "ocean_trench",
    "coral_reef",
];

const PLATE_NAMES: [&str; 7] = [
    "Pacific Plate",
    "North American Plate",
    "Eurasian Plate",
    "African Plate",
    "Antarctic Plate",
    "Indo-Australian Plate",
    "South American Plate",
];

const VENT_NAMES: [&str; 7] = [
    "Black Smoker Vent",
    "White Smoker Vent",
    "Hydrothermal Field",
    "Loki's Castle",
    "Rainbow Vent Field",
    "Lost City",
    "TAG Hydrothermal Field",
];

const TRENCH_NAMES: [&str; 7] = [
    "Mariana Trench",
    "Puerto Rico Trench",
    "Java Trench",
    "Atacama Trench",
    "South Sandwich Trench",
    "Japan Trench",
    "Kuril\u{2013}Kamchatka Trench",
];

const REEF_NAMES: [&str; 7] = [
    "Great Barrier Reef",
    "Mesoamerican Reef",
    "Red Sea Coral Reef",
    "New Caledonia Barrier Reef",
    "Andros Barrier Reef",
    "Raja Ampat Reef",
    "Maldives Coral Reef",
];

const PLATE_DIRECTIONS: [&str; 4] = ["northeast", "northwest", "southeast", "southwest"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFeature {
    pub id: String,
    pub feature_type: String,
    pub name: String,
    /// [longitude, latitude]
    pub coordinates: [f64; 2],
    pub description: String,
    pub properties: Value,
}

fn name_pool(feature_type: &str) -> &'static [&'static str] {
    match feature_type {
        "tectonic_plate" => &PLATE_NAMES,
        "deep_sea_vent" => &VENT_NAMES,
        "ocean_trench" => &TRENCH_NAMES,
        _ => &REEF_NAMES,
    }
}

fn description_for(feature_type: &str) -> &'static str {
    match feature_type {
        "tectonic_plate" => {
            "A massive, irregularly shaped slab of solid rock, composed of both continental and oceanic lithosphere."
        }
        "deep_sea_vent" => {
            "A fissure in the Earth's surface from which geothermally heated water issues, often rich in minerals and supporting unique ecosystems."
        }
        "ocean_trench" => {
            "Long, narrow, steep-sided depressions in the ocean floor representing the deepest parts of the ocean."
        }
        _ => "Diverse underwater ecosystems held together by calcium carbonate structures secreted by corals.",
    }
}

fn properties_for<R: Rng + ?Sized>(rng: &mut R, feature_type: &str) -> Value {
    match feature_type {
        "tectonic_plate" => json!({
            "movement_direction": PLATE_DIRECTIONS.choose(rng).unwrap(),
            "movement_rate_mm_per_year": rng.gen_range(5..=100),
        }),
        "deep_sea_vent" => json!({
            "temperature_celsius": rng.gen_range(60..=400),
            "depth_meters": rng.gen_range(1000..=5000),
        }),
        "ocean_trench" => json!({
            "depth_meters": rng.gen_range(6000..=11_000),
            "length_km": rng.gen_range(200..=2000),
        }),
        _ => json!({
            "area_sq_km": rng.gen_range(10..=2000),
            "health_index": round1(rng.gen_range(3.0..10.0)),
        }),
    }
}

/// Generate `count` features. Names are drawn from a fixed per-type
/// pool and suffixed with the record index, so they are unique within
/// a batch even when the pool repeats.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<MapFeature> {
    (0..count)
        .map(|i| {
            let feature_type = *FEATURE_TYPES.choose(rng).unwrap();
            let name = *name_pool(feature_type).choose(rng).unwrap();

            MapFeature {
                id: format!("{}-{}", feature_type, i),
                feature_type: feature_type.to_string(),
                name: format!("{} {}", name, i),
                coordinates: [rng.gen_range(-180.0..180.0), rng.gen_range(-60.0..60.0)],
                description: description_for(feature_type).to_string(),
                properties: properties_for(rng, feature_type),
            }
        })
        .collect()
}
