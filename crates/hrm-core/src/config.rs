//! Configuration surface consumed by the analysis pipeline
//!
//! The out-of-range voltage limit and the de-duplication divisor encode
//! domain policy, not derived constants, so they are named fields here
//! rather than literals in the algorithms.

use crate::error::{AnalysisError, HrmResult};
use serde::{Deserialize, Serialize};

/// Bandpass filter parameters for QRS isolation.
///
/// Cutoffs are normalized frequencies in (0, 1) where 1.0 is Nyquist,
/// so the filter design needs no sampling rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandpassConfig {
    /// Low passband edge, fraction of Nyquist
    pub low: f64,
    /// High passband edge, fraction of Nyquist
    pub high: f64,
    /// Filter order (even; realized as order/2 biquad sections per edge)
    pub order: usize,
}

impl Default for BandpassConfig {
    fn default() -> Self {
        // 5-12 Hz physiological QRS band expressed as normalized edges
        Self {
            low: 0.1,
            high: 0.8,
            order: 6,
        }
    }
}

/// Full configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Scale factor applied to raw time values
    pub time_units: f64,
    /// Scale factor applied to raw voltage values
    pub voltage_units: f64,
    /// Heart-rate window length in seconds
    pub window_size: f64,
    /// Post-scaling voltage magnitude considered physiologically abnormal (mV)
    pub voltage_limit: f64,
    /// Divisor applied to the estimated interval lag to get the minimum
    /// sample distance between two kept beats
    pub dedup_divisor: usize,
    /// Expected beat peak width in samples
    pub peak_width: usize,
    /// Candidate peaks below this fraction of the maximum filtered energy
    /// are discarded. Filters out the decaying numerical tail the bandpass
    /// leaves after an isolated transient.
    pub energy_floor_ratio: f64,
    /// Bandpass filter parameters
    pub bandpass: BandpassConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            time_units: 1.0,
            voltage_units: 1.0,
            window_size: 10.0,
            voltage_limit: 300.0,
            dedup_divisor: 4,
            peak_width: 5,
            energy_floor_ratio: 0.05,
            bandpass: BandpassConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration before running the pipeline
    pub fn validate(&self) -> HrmResult<()> {
        if !(self.time_units > 0.0 && self.time_units.is_finite()) {
            return Err(AnalysisError::InvalidConfig {
                reason: "time_units must be positive and finite",
            });
        }
        if !(self.voltage_units > 0.0 && self.voltage_units.is_finite()) {
            return Err(AnalysisError::InvalidConfig {
                reason: "voltage_units must be positive and finite",
            });
        }
        if !(self.window_size > 0.0 && self.window_size.is_finite()) {
            return Err(AnalysisError::InvalidConfig {
                reason: "window_size must be positive and finite",
            });
        }
        if !(self.voltage_limit > 0.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: "voltage_limit must be positive",
            });
        }
        if self.dedup_divisor == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "dedup_divisor must be at least 1",
            });
        }
        if self.peak_width == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "peak_width must be at least 1",
            });
        }
        if !(self.energy_floor_ratio >= 0.0 && self.energy_floor_ratio < 1.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: "energy_floor_ratio must be in [0, 1)",
            });
        }

        let bp = &self.bandpass;
        if !(bp.low > 0.0 && bp.high < 1.0 && bp.low < bp.high) {
            return Err(AnalysisError::InvalidConfig {
                reason: "bandpass edges must satisfy 0 < low < high < 1",
            });
        }
        if bp.order == 0 || bp.order % 2 != 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "bandpass order must be a positive even number",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.time_units, 1.0);
        assert_eq!(config.window_size, 10.0);
        assert_eq!(config.voltage_limit, 300.0);
        assert_eq!(config.dedup_divisor, 4);
        assert_eq!(config.energy_floor_ratio, 0.05);
        assert_eq!(config.bandpass.order, 6);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let mut config = AnalysisConfig::default();
        config.time_units = 0.0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.voltage_units = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_passband_rejected() {
        let mut config = AnalysisConfig::default();
        config.bandpass.low = 0.9;
        config.bandpass.high = 0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_odd_filter_order_rejected() {
        let mut config = AnalysisConfig::default();
        config.bandpass.order = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_energy_floor_out_of_range_rejected() {
        let mut config = AnalysisConfig::default();
        config.energy_floor_ratio = 1.0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.energy_floor_ratio = -0.1;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.energy_floor_ratio = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let mut config = AnalysisConfig::default();
        config.dedup_divisor = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
