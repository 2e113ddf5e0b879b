//! The analysis pipeline: raw records in, attribute bundle out
//!
//! Stages run to completion in order; any fatal error aborts the run with
//! no partial result. Advisories accumulate on the sink without altering
//! control flow.

use crate::beats::locate_beats;
use crate::periodicity::estimate_interval;
use crate::rates::windowed_rates;
use crate::stats;
use crate::validate::validate;
use hrm_core::{AnalysisConfig, AnalysisResult, DiagnosticSink, HrmResult};

/// Run the full analysis over one recording's raw records.
pub fn analyze(
    raw: &[Vec<String>],
    config: &AnalysisConfig,
    sink: &mut dyn DiagnosticSink,
) -> HrmResult<AnalysisResult> {
    config.validate()?;

    let signal = validate(raw, config, sink)?;

    let voltage_extremes = stats::voltage_extremes(&signal);
    let duration = stats::duration(&signal);

    let interval = estimate_interval(signal.voltages(), signal.times());

    let beat_indices = locate_beats(&signal, &interval, config, sink)?;
    let beats: Vec<f64> = beat_indices
        .iter()
        .map(|&idx| signal.times()[idx])
        .collect();

    let mean_hr_bpm = windowed_rates(&signal, config.window_size);

    Ok(AnalysisResult {
        peak_interval: interval.seconds,
        mean_hr_bpm,
        voltage_extremes,
        duration,
        num_beats: beats.len(),
        beats,
    })
}
