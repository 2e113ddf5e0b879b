//! Signal: validated container for one ECG recording

use crate::error::{AnalysisError, HrmResult};

/// One validated sample: time in seconds, voltage in millivolts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub voltage: f64,
}

/// Immutable owner of the validated sample sequence for one recording.
///
/// Times and voltages are stored as parallel arrays so the estimators can
/// borrow sub-slices without copying. Construction enforces the invariants
/// the downstream math relies on: at least one sample, and time values that
/// never decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    times: Vec<f64>,
    voltages: Vec<f64>,
}

impl Signal {
    /// Create a signal from parallel time/voltage arrays.
    ///
    /// Rejects empty input and time sequences that go backwards; the row
    /// number reported for a monotonicity violation is 1-based, matching
    /// the validator's row numbering.
    pub fn new(times: Vec<f64>, voltages: Vec<f64>) -> HrmResult<Self> {
        if times.is_empty() || times.len() != voltages.len() {
            return Err(AnalysisError::EmptyInput);
        }

        for (i, pair) in times.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(AnalysisError::NonMonotonicTime { row: i + 2 });
            }
        }

        Ok(Signal { times, voltages })
    }

    /// Number of samples in the recording
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time values in seconds, one per sample
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Voltage values in millivolts, one per sample
    pub fn voltages(&self) -> &[f64] {
        &self.voltages
    }

    /// Sample at the given index, if in range
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            voltage: *self.voltages.get(index)?,
        })
    }

}
