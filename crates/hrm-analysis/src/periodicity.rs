//! Periodicity estimation via autocorrelation
//!
//! The dominant repetition interval of a voltage slice is the lag of the
//! strongest autocorrelation peak after the central zero-lag peak. Values
//! are squared to emphasize peaks and suppress sign, and deliberately not
//! normalized; magnitudes grow with slice length, which is why everything
//! here is f64.

/// Estimated beat-to-beat period for one voltage slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Period in seconds
    pub seconds: f64,
    /// Sample-index offset of the autocorrelation peak that produced it
    pub lag: usize,
    /// Whether the squared autocorrelation rose again after the central
    /// peak. False means the slice shows no repetition at all (constant
    /// signal, or a single isolated transient) and `lag` is only the
    /// degenerate end of the search range.
    pub periodic: bool,
}

/// Full autocorrelation of `voltage` with itself, non-negative lags only
fn autocorrelation(voltage: &[f64]) -> Vec<f64> {
    let n = voltage.len();
    let mut acf = Vec::with_capacity(n);
    for lag in 0..n {
        let mut sum = 0.0;
        for i in 0..n - lag {
            sum += voltage[i] * voltage[i + lag];
        }
        acf.push(sum);
    }
    acf
}

/// Estimate the dominant repetition interval of a voltage slice.
///
/// `time` and `voltage` must be the same length and non-empty; the pipeline
/// guarantees both. The walk off the central peak stops at the first lag
/// where the squared autocorrelation rises again; the argmax over the
/// remaining lags is the second peak. For a never-increasing sequence the
/// walk ends on the last lag and the search range degenerates to that
/// single point.
pub fn estimate_interval(voltage: &[f64], time: &[f64]) -> Interval {
    debug_assert_eq!(voltage.len(), time.len());

    let squared: Vec<f64> = autocorrelation(voltage)
        .into_iter()
        .map(|v| v * v)
        .collect();

    // End of the central zero-lag peak: first lag where the curve turns up
    let mut after_peak = squared.len() - 1;
    let mut periodic = false;
    for lag in 1..squared.len() {
        if squared[lag] > squared[lag - 1] {
            after_peak = lag;
            periodic = true;
            break;
        }
    }

    // Earliest index wins on exact ties
    let mut lag = after_peak;
    let mut best = squared[after_peak];
    for (offset, &value) in squared[after_peak..].iter().enumerate() {
        if value > best {
            best = value;
            lag = after_peak + offset;
        }
    }

    Interval {
        seconds: time[lag] - time[0],
        lag,
        periodic,
    }
}
