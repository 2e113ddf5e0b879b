//! Exported attribute bundle for one analysed recording

use serde::Serialize;

/// Final attribute set for one recording, created once and handed to the
/// exporter. Immutable by convention; nothing mutates it after the pipeline
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Dominant beat-to-beat interval in seconds
    pub peak_interval: f64,
    /// Heart rate in beats per minute, one value per complete window
    pub mean_hr_bpm: Vec<f64>,
    /// Minimum and maximum voltage in millivolts
    pub voltage_extremes: (f64, f64),
    /// Recording length in seconds
    pub duration: f64,
    /// Number of beats located
    pub num_beats: usize,
    /// Beat times in seconds
    pub beats: Vec<f64>,
}
