//! Property tests: generator invariants must hold for every seed.

use chrono::Utc;
use ocean_datasets::{anomalies, biodiversity, disasters, historical};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn anomaly_flag_implies_type_and_severity(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for record in anomalies::generate(&mut rng, Utc::now(), 50) {
            prop_assert_eq!(
                record.is_anomaly,
                record.anomaly_type.is_some() && record.severity.is_some()
            );
        }
    }

    #[test]
    fn species_counts_sum(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for record in biodiversity::generate(&mut rng, Utc::now(), 20) {
            let sum: u32 = record.species.iter().map(|s| s.count).sum();
            prop_assert_eq!(record.species_count, sum);
        }
    }

    #[test]
    fn disaster_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for prediction in disasters::generate(&mut rng, Utc::now(), 20) {
            prop_assert!(prediction.probability >= 0.1 && prediction.probability <= 0.95);
            prop_assert!((1..=5).contains(&prediction.severity));
        }
    }

    #[test]
    fn sea_level_monotonic(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = historical::generate(&mut rng, Utc::now(), 5, 12);
        for pair in points.windows(2) {
            prop_assert!(pair[1].sea_level_rise_mm >= pair[0].sea_level_rise_mm);
        }
    }

    #[test]
    fn batch_lengths_match_request(seed in any::<u64>(), count in 0usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc::now();
        prop_assert_eq!(anomalies::generate(&mut rng, now, count).len(), count);
        prop_assert_eq!(disasters::generate(&mut rng, now, count).len(), count);
    }
}
