//! Biodiversity survey records over a fixed six-species catalog,
//! sampled across the trailing year.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{round1, GeoPoint};

/// (common name, scientific name, endangered)
pub const SPECIES_CATALOG: [(&str, &str, bool); 6] = [
    ("Bottlenose Dolphin", "Tursiops truncatus", false),
    ("Blue Whale", "Balaenoptera musculus", true),
    ("Great White Shark", "Carcharodon carcharias", false),
    ("Green Sea Turtle", "Chelonia mydas", true),
    ("Giant Squid", "Architeuthis dux", false),
    ("Coral (Various species)", "Anthozoa", true),
];

const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];
const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

/// Probability that a survey includes a migration observation.
const MIGRATION_RATE: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesObservation {
    pub name: String,
    pub scientific_name: String,
    pub count: u32,
    pub endangered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationPattern {
    pub species: String,
    pub direction: String,
    pub distance_km: u32,
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiodiversityRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub location: GeoPoint,
    pub species_count: u32,
    pub coral_health_index: f64,
    pub species: Vec<SpeciesObservation>,
    pub migration_patterns: Option<Vec<MigrationPattern>>,
}

/// Generate `count` surveys, one every 12 days starting a year ago.
///
/// `species_count` is always the sum of the per-species counts.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<BiodiversityRecord> {
    let base = now - Duration::days(365);

    (0..count)
        .map(|i| {
            let timestamp = base + Duration::days(12 * i as i64);
            let location = GeoPoint::random(rng);

            let mut total: u32 = 0;
            let species: Vec<SpeciesObservation> = SPECIES_CATALOG
                .iter()
                .map(|&(name, scientific_name, endangered)| {
                    let observed = rng.gen_range(10..=1000);
                    total += observed;
                    SpeciesObservation {
                        name: name.to_string(),
                        scientific_name: scientific_name.to_string(),
                        count: observed,
                        endangered,
                    }
                })
                .collect();

            let migration_patterns = if rng.gen_bool(MIGRATION_RATE) {
                Some(vec![MigrationPattern {
                    species: SPECIES_CATALOG.choose(rng).unwrap().0.to_string(),
                    direction: DIRECTIONS.choose(rng).unwrap().to_string(),
                    distance_km: rng.gen_range(100..=5000),
                    season: SEASONS.choose(rng).unwrap().to_string(),
                }])
            } else {
                None
            };

            BiodiversityRecord {
                id: format!("bio-{}", i),
                timestamp,
                location,
                species_count: total,
                coral_health_index: round1(rng.gen_range(3.0..10.0)),
                species,
                migration_patterns,
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
    fn test_species_count_is_sum_of_observations() {
        let mut rng = StdRng::seed_from_u64(11);
        for record in generate(&mut rng, Utc::now(), 100) {
            let sum: u32 = record.species.iter().map(|s| s.count).sum();
            assert_eq!(record.species_count, sum);
            assert_eq!(record.species.len(), SPECIES_CATALOG.len());
        }
    }

    #[test]
    fn test_coral_health_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for record in generate(&mut rng, Utc::now(), 100) {
            assert!(record.coral_health_index >= 3.0 && record.coral_health_index <= 10.0);
        }
    }

    #[test]
    fn test_migration_patterns_single_entry() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate(&mut rng, Utc::now(), 200);

        let with_migration: Vec<_> = records
            .iter()
            .filter_map(|r| r.migration_patterns.as_ref())
            .collect();
        assert!(!with_migration.is_empty());

        for patterns in with_migration {
            assert_eq!(patterns.len(), 1);
            let pattern = &patterns[0];
            assert!((100..=5000).contains(&pattern.distance_km));
            assert!(DIRECTIONS.contains(&pattern.direction.as_str()));
            assert!(SEASONS.contains(&pattern.season.as_str()));
        }
    }
}
