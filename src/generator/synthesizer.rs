use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::aqi::aqi_from_concentration;
use crate::error::{Result, SynthError};
use crate::generator::modulation::{diurnal_factor, seasonal_factor};
use crate::models::{monitored_locations, AqiRecord, Location, Pollutant};
use crate::utils::constants::{OUTLIER_MAX_FACTOR, OUTLIER_MIN_FACTOR, OUTLIER_PROBABILITY};

/// Synthesizes hourly multi-pollutant series for the monitored locations.
///
/// Each generator owns its random source, so independent instances never
/// share state and concurrent callers can each hold their own.
pub struct SeriesGenerator {
    rng: StdRng,
    locations: Vec<Location>,
}

impl SeriesGenerator {
    /// Generator with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a fixed seed, for reproducible series.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            locations: monitored_locations(),
        }
    }

    /// Generate `num_hours` hourly records per location, anchored at the
    /// current wall-clock time.
    pub fn generate(&mut self, num_hours: u32) -> Result<Vec<AqiRecord>> {
        self.generate_from(Local::now().naive_local(), num_hours)
    }

    /// Generate `num_hours` hourly records per location from a fixed start
    /// time. Locations are iterated in declaration order, hours ascending
    /// within each location.
    pub fn generate_from(
        &mut self,
        start: NaiveDateTime,
        num_hours: u32,
    ) -> Result<Vec<AqiRecord>> {
        if num_hours == 0 {
            return Err(SynthError::InvalidHourCount { hours: num_hours });
        }

        let mut records = Vec::with_capacity(self.locations.len() * num_hours as usize);

        for location in &self.locations {
            for offset in 0..num_hours {
                let timestamp = start + Duration::hours(i64::from(offset));
                records.push(sample_record(&mut self.rng, location, timestamp));
            }
        }

        debug!(
            rows = records.len(),
            hours = num_hours,
            "generated synthetic series"
        );

        Ok(records)
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one row: six base concentrations, modulation, the outlier decision,
/// clipping, rounding, and AQI conversion.
fn sample_record(rng: &mut StdRng, location: &Location, timestamp: NaiveDateTime) -> AqiRecord {
    let hour = timestamp.hour();
    let day_of_year = timestamp.ordinal();

    // The outlier decision is made once per row; when it hits, every
    // pollutant spikes, each with its own fresh multiplier.
    let spike = if rng.gen_bool(OUTLIER_PROBABILITY) {
        Some(outlier_factors(rng))
    } else {
        None
    };

    let mut concentrations = [0.0f64; 6];
    let mut aqis = [None; 6];

    for (i, &pollutant) in Pollutant::ALL.iter().enumerate() {
        let (low, high) = pollutant.base_range();
        let base = rng.gen_range(low..=high);

        let mut value = base * diurnal_factor(hour) * seasonal_factor(day_of_year, pollutant);
        if let Some(factors) = spike {
            value *= factors[i];
        }

        let clipped = value.min(pollutant.ceiling());
        let rounded = round_to(clipped, pollutant.decimals());

        concentrations[i] = rounded;
        aqis[i] = aqi_from_concentration(rounded, pollutant);
    }

    AqiRecord::from_samples(location, timestamp, concentrations, aqis)
}

/// One spike multiplier per pollutant, each drawn independently from the
/// outlier range.
fn outlier_factors(rng: &mut StdRng) -> [f64; 6] {
    let mut factors = [1.0f64; 6];
    for factor in &mut factors {
        *factor = rng.gen_range(OUTLIER_MIN_FACTOR..=OUTLIER_MAX_FACTOR);
    }
    factors
}

/// Round to a fixed number of decimal places, half away from zero.
fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
