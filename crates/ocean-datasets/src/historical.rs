//! Historical ocean timeline: monthly temperature, sea level and pH
//! samples over a multi-decade window.
//!
//! Months are modeled as 30 days, so dates drift from the calendar
//! over long spans. The `year`/`month` fields are taken from the
//! computed date, not the loop indices.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::{round1, round2};

/// Global average sea temperature at the start of the window.
const BASE_TEMPERATURE_C: f64 = 16.0;

/// Warming trend, °C per year.
const WARMING_RATE: f64 = 0.02;

/// Sea level rise, mm per year.
const SEA_LEVEL_RISE_MM_PER_YEAR: f64 = 3.3;

/// Surface pH at the start of the window, with a slow acidification trend.
const BASE_PH: f64 = 8.2;
const PH_TREND_PER_YEAR: f64 = -0.002;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub id: String,
    pub date: DateTime<Utc>,
    pub year: i32,
    pub month: u32,
    pub average_temperature: f64,
    pub sea_level_rise_mm: f64,
    pub ocean_ph: f64,
}

/// Generate `years * samples_per_year` points starting `years` years ago.
///
/// Sea level rise is strictly driven by the sample index, so it is
/// non-decreasing across the whole series.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    years: usize,
    samples_per_year: usize,
) -> Vec<HistoricalPoint> {
    let start = now - Duration::days(365 * years as i64);
    let monthly_rise = SEA_LEVEL_RISE_MM_PER_YEAR / 12.0;

    let mut points = Vec::with_capacity(years * samples_per_year);

    for year in 0..years {
        for month in 0..samples_per_year {
            let sample = (year * 12 + month) as f64;
            let date = start + Duration::days((year as i64 * 12 + month as i64) * 30);

            let seasonal = 1.5 * (2.0 * PI * (month as f64 / 12.0)).sin();
            let temperature = BASE_TEMPERATURE_C
                + year as f64 * WARMING_RATE
                + seasonal
                + rng.gen_range(-0.3..0.3);

            let ph = BASE_PH + PH_TREND_PER_YEAR * year as f64 + rng.gen_range(-0.05..0.05);

            points.push(HistoricalPoint {
                id: format!("hist-{}-{}", year, month),
                date,
                year: date.year(),
                month: date.month(),
                average_temperature: round2(temperature),
                sea_level_rise_mm: round1(sample * monthly_rise),
                ocean_ph: round2(ph),
            });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sea_level_rise_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(31);
        let points = generate(&mut rng, Utc::now(), 50, 12);

        assert_eq!(points.len(), 600);
        for pair in points.windows(2) {
            assert!(pair[1].sea_level_rise_mm >= pair[0].sea_level_rise_mm);
        }
    }

    #[test]
    fn test_temperature_and_ph_near_baselines() {
        let mut rng = StdRng::seed_from_u64(31);
        for point in generate(&mut rng, Utc::now(), 50, 12) {
            // baseline 16.0, max trend 1.0, seasonal ±1.5, noise ±0.3
            assert!(point.average_temperature > 13.0 && point.average_temperature < 19.0);
            assert!(point.ocean_ph > 8.0 && point.ocean_ph < 8.3);
        }
    }

    #[test]
    fn test_dates_step_thirty_days() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = generate(&mut rng, Utc::now(), 2, 12);

        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(30));
        }
    }
}
