// Synthetic telemetry: one device, one reading per step, daily ambient cycle
// with noise, device temperature tracking ambient plus rare spikes.

use std::f64::consts::PI;
use std::io;

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use rand::Rng;
use tracing::info;

use crate::telemetry_repo::CSV_HEADER;

const BASE_AMBIENT: f64 = 22.0;
const AMBIENT_SWING: f64 = 4.0;
const BASE_DEVICE: f64 = 50.0;
const AMBIENT_COUPLING: f64 = 1.5;
const NOISE: f64 = 0.5;
const SPIKE_PROBABILITY: f64 = 0.001;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub device_id: String,
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
    pub step: TimeDelta,
}

impl GeneratorConfig {
    /// `days` days from `start`, one reading every `step_secs`.
    /// `None` when the span or step falls outside chrono's range.
    pub fn spanning_days(
        device_id: impl Into<String>,
        start: DateTime<Utc>,
        days: i64,
        step_secs: i64,
    ) -> Option<Self> {
        let end = start.checked_add_signed(TimeDelta::try_days(days)?)?;
        Some(Self {
            device_id: device_id.into(),
            start,
            end,
            step: TimeDelta::try_seconds(step_secs)?,
        })
    }
}

/// Writes header plus readings for `[start, end)` to `writer`. Returns the number of rows.
pub fn generate<W: io::Write, R: Rng>(
    writer: W,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<u64, csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADER)?;

    let mut rows: u64 = 0;
    let mut ts = config.start;
    while ts < config.end {
        let (ambient, device) = sample(ts, rng);
        let timestamp = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let ambient = ambient.to_string();
        let device = device.to_string();
        w.write_record([
            config.device_id.as_str(),
            timestamp.as_str(),
            ambient.as_str(),
            device.as_str(),
        ])?;
        rows += 1;
        if rows % 86_400 == 0 {
            info!(rows, at = %ts, "generating telemetry");
        }
        ts += config.step;
    }
    w.flush()?;
    Ok(rows)
}

/// (ambient, device) for one instant, both rounded to 2 decimals.
fn sample<R: Rng>(ts: DateTime<Utc>, rng: &mut R) -> (f64, f64) {
    let hour = f64::from(ts.hour());
    let base_ambient = BASE_AMBIENT + AMBIENT_SWING * (((hour - 4.0) / 24.0) * 2.0 * PI).sin();
    let ambient = round2(base_ambient + rng.random_range(-NOISE..NOISE));

    let spike = if rng.random::<f64>() < SPIKE_PROBABILITY {
        rng.random_range(5.0..15.0)
    } else {
        0.0
    };
    let device = round2(
        BASE_DEVICE
            + (ambient - BASE_AMBIENT) * AMBIENT_COUPLING
            + spike
            + rng.random_range(-NOISE..NOISE),
    );
    (ambient, device)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn samples_stay_in_expected_band() {
        let mut rng = SmallRng::seed_from_u64(7);
        let start: DateTime<Utc> = "2024-02-02T00:00:00Z".parse().unwrap();
        for h in 0..24 {
            let (ambient, device) = sample(start + TimeDelta::hours(h), &mut rng);
            assert!((17.5..=26.5).contains(&ambient), "ambient {}", ambient);
            // 50 ± 1.5·4.5 ± 0.5, plus at most a 15° spike
            assert!((42.75..=72.25).contains(&device), "device {}", device);
        }
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(20.456), 20.46);
        assert_eq!(round2(-0.004), -0.0);
    }
}
