//! Beat location: bandpass energy, peak finding, de-duplication
//!
//! The voltage sequence is bandpass filtered to isolate QRS energy,
//! squared, scanned for width-dominant peaks above a configured fraction
//! of the maximum energy, and thinned so no two kept beats sit closer
//! than a quarter of the estimated interval lag.

use crate::filter::BandpassFilter;
use crate::periodicity::Interval;
use hrm_core::{Advisory, AnalysisConfig, DiagnosticSink, HrmResult, Signal};

/// Candidate peak indices of `energy`, earliest index first.
///
/// An index qualifies when its energy reaches `floor`, rises strictly
/// above its left neighbour, and is not exceeded anywhere within `width`
/// samples on either side. The strict left rise makes the earliest index
/// win on exactly-equal plateaus; it also means index 0 never qualifies,
/// having no left neighbour to rise from.
fn find_peaks(energy: &[f64], width: usize, floor: f64) -> Vec<usize> {
    let mut peaks = Vec::new();

    for i in 1..energy.len() {
        if energy[i] < floor || energy[i] <= energy[i - 1] {
            continue;
        }

        let lo = i.saturating_sub(width);
        let hi = (i + width + 1).min(energy.len());
        if energy[lo..hi].iter().all(|&v| v <= energy[i]) {
            peaks.push(i);
        }
    }

    peaks
}

/// Thin sorted candidates so consecutive kept indices are more than
/// `min_distance` samples apart
fn deduplicate(candidates: &[usize], min_distance: usize) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::new();

    for &idx in candidates {
        match kept.last() {
            Some(&last) if idx - last <= min_distance => {}
            _ => kept.push(idx),
        }
    }

    kept
}

/// Locate beat sample indices in a validated signal.
///
/// An empty result is a valid "no beats detected" outcome reported through
/// the sink, not an error.
pub fn locate_beats(
    signal: &Signal,
    interval: &Interval,
    config: &AnalysisConfig,
    sink: &mut dyn DiagnosticSink,
) -> HrmResult<Vec<usize>> {
    // A signal whose autocorrelation never rose again has no repeating
    // energy to locate beats in; an isolated transient is not a beat.
    if !interval.periodic {
        sink.record(Advisory::NoBeatsDetected);
        return Ok(Vec::new());
    }

    let mut filter = BandpassFilter::new(&config.bandpass)?;
    let filtered = filter.apply(signal.voltages());

    let energy: Vec<f64> = filtered.iter().map(|&v| v * v).collect();
    let max_energy = energy.iter().fold(0.0f64, |acc, &v| acc.max(v));
    let floor = config.energy_floor_ratio * max_energy;

    let candidates = find_peaks(&energy, config.peak_width, floor);
    let beats = deduplicate(&candidates, interval.lag / config.dedup_divisor);

    if beats.is_empty() {
        sink.record(Advisory::NoBeatsDetected);
    }

    Ok(beats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::periodicity::estimate_interval;
    use hrm_core::DiagnosticLog;

    fn sine_signal(len: usize, period_samples: f64, dt: f64) -> Signal {
        let times: Vec<f64> = (0..len).map(|i| i as f64 * dt).collect();
        let voltages: Vec<f64> = (0..len)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period_samples).sin())
            .collect();
        Signal::new(times, voltages).unwrap()
    }

    #[test]
    fn test_find_peaks_simple() {
        let energy = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0];
        // With a narrow width both maxima dominate their neighbourhoods;
        // widening it past their separation leaves only the larger one
        assert_eq!(find_peaks(&energy, 5, 0.0), vec![1, 7]);
        assert_eq!(find_peaks(&energy, 6, 0.0), vec![7]);
    }

    #[test]
    fn test_floor_rejects_weak_peaks() {
        let energy = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0];
        assert_eq!(find_peaks(&energy, 5, 1.5), vec![7]);
        // The floor itself still qualifies
        assert_eq!(find_peaks(&energy, 5, 1.0), vec![1, 7]);
    }

    #[test]
    fn test_plateau_tie_breaks_to_earliest() {
        let energy = [0.0, 3.0, 3.0, 3.0, 0.0];
        assert_eq!(find_peaks(&energy, 1, 0.0), vec![1]);
    }

    #[test]
    fn test_flat_energy_has_no_peaks() {
        assert!(find_peaks(&[0.0; 40], 5, 0.0).is_empty());
        assert!(find_peaks(&[2.5; 40], 5, 0.0).is_empty());
    }

    #[test]
    fn test_deduplicate_keeps_first_beyond_threshold() {
        let candidates = [10, 12, 14, 30, 33, 60];
        assert_eq!(deduplicate(&candidates, 4), vec![10, 30, 60]);
        // Exactly at the threshold still counts as a duplicate
        assert_eq!(deduplicate(&[10, 14, 19], 4), vec![10, 19]);
    }

    #[test]
    fn test_sine_beat_spacing_matches_estimate() {
        // Rectified sine energy peaks once per half cycle; the estimator
        // sees the same rectified periodicity, so spacings track its lag
        let signal = sine_signal(400, 14.0, 0.01);
        let interval = estimate_interval(signal.voltages(), signal.times());
        let mut log = DiagnosticLog::new();
        let beats =
            locate_beats(&signal, &interval, &AnalysisConfig::default(), &mut log).unwrap();

        assert!(beats.len() > 10);
        let floor = interval.lag / 4;
        for pair in beats.windows(2) {
            let spacing = pair[1] - pair[0];
            assert!(spacing > floor, "beats {} apart, floor {}", spacing, floor);
        }
        // Past the filter's startup transient the spacing settles onto the
        // estimated lag
        for pair in beats[4..].windows(2) {
            let spacing = pair[1] - pair[0];
            assert!(
                (spacing as i64 - interval.lag as i64).abs() <= 1,
                "spacing {} deviates from estimated lag {}",
                spacing,
                interval.lag
            );
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_isolated_transient_is_not_a_beat() {
        // A single spike in an otherwise silent recording repeats nothing;
        // the filter's decaying tail must not be promoted to beats
        let times: Vec<f64> = (0..500).map(|i| i as f64 * 0.01).collect();
        let voltages: Vec<f64> = (0..500)
            .map(|i| if i == 250 { 0.9 } else { 0.0 })
            .collect();
        let signal = Signal::new(times, voltages).unwrap();
        let interval = estimate_interval(signal.voltages(), signal.times());
        assert!(!interval.periodic);

        let mut log = DiagnosticLog::new();
        let beats =
            locate_beats(&signal, &interval, &AnalysisConfig::default(), &mut log).unwrap();

        assert!(beats.is_empty());
        assert_eq!(log.advisories(), &[Advisory::NoBeatsDetected]);
    }

    #[test]
    fn test_constant_signal_has_no_beats() {
        let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.01).collect();
        let signal = Signal::new(times, vec![0.0; 200]).unwrap();
        let interval = estimate_interval(signal.voltages(), signal.times());

        let mut log = DiagnosticLog::new();
        let beats =
            locate_beats(&signal, &interval, &AnalysisConfig::default(), &mut log).unwrap();

        assert!(beats.is_empty());
        assert_eq!(log.advisories(), &[Advisory::NoBeatsDetected]);
    }
}
