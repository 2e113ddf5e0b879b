//! Windowed heart-rate aggregation
//!
//! The recording is cut into fixed-duration windows from the first sample;
//! each complete window gets one rate from the periodicity estimator. A
//! trailing partial window is discarded, never emitted.

use crate::periodicity::estimate_interval;
use hrm_core::Signal;

/// Emitted rates are rounded to this many decimal digits
const RATE_DECIMALS: i32 = 5;

fn round_rate(bpm: f64) -> f64 {
    let scale = 10f64.powi(RATE_DECIMALS);
    (bpm * scale).round() / scale
}

/// Heart rate in beats per minute for each complete window of
/// `window_size` seconds.
///
/// Returns an empty sequence when the recording is shorter than one
/// window.
pub fn windowed_rates(signal: &Signal, window_size: f64) -> Vec<f64> {
    let times = signal.times();
    let voltages = signal.voltages();

    let mut rates = Vec::new();
    let mut window_start = 0;

    for i in 0..times.len() {
        if times[i] - times[window_start] >= window_size {
            let interval = estimate_interval(&voltages[window_start..i], &times[window_start..i]);
            // A window of duplicated timestamps estimates a zero-length
            // interval; no finite rate exists for it, so it emits nothing
            if interval.seconds > 0.0 {
                rates.push(round_rate(60.0 / interval.seconds));
            }
            window_start = i;
        }
    }

    rates
}
