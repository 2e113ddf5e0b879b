//! Descriptive statistics over a validated signal

use hrm_core::Signal;

/// Minimum and maximum voltage over the whole recording
pub fn voltage_extremes(signal: &Signal) -> (f64, f64) {
    let min = signal
        .voltages()
        .iter()
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let max = signal
        .voltages()
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    (min, max)
}

/// Recording length in seconds: last sample time minus first
pub fn duration(signal: &Signal) -> f64 {
    let times = signal.times();
    times[times.len() - 1] - times[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        let signal = Signal::new(vec![0.0, 1.0, 2.0], vec![-0.4, 0.9, 0.1]).unwrap();
        assert_eq!(voltage_extremes(&signal), (-0.4, 0.9));
    }

    #[test]
    fn test_constant_voltage_extremes() {
        let signal = Signal::new(vec![0.0, 1.0, 2.0], vec![0.7; 3]).unwrap();
        assert_eq!(voltage_extremes(&signal), (0.7, 0.7));
    }

    #[test]
    fn test_duration() {
        let signal = Signal::new(vec![2.0, 3.5, 7.0], vec![0.0; 3]).unwrap();
        assert_eq!(duration(&signal), 5.0);
    }

    #[test]
    fn test_single_sample() {
        let signal = Signal::new(vec![1.5], vec![0.3]).unwrap();
        assert_eq!(duration(&signal), 0.0);
        assert_eq!(voltage_extremes(&signal), (0.3, 0.3));
    }
}
