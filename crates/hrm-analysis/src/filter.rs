//! Butterworth bandpass filtering for QRS isolation
//!
//! Cascaded biquad sections designed with the bilinear transform. The
//! bandpass is realized as a highpass cascade at the low edge followed by
//! a lowpass cascade at the high edge; cutoffs are normalized fractions of
//! Nyquist, so no sampling rate is needed.

use hrm_core::{AnalysisError, BandpassConfig, HrmResult};

/// Single biquad section (2nd order), direct form I
#[derive(Debug, Clone)]
struct Biquad {
    // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    fn lowpass(cutoff: f64, alpha: f64) -> Self {
        let k = (std::f64::consts::PI * cutoff / 2.0).tan();
        let norm = 1.0 / (1.0 + alpha * k + k * k);
        let b0 = k * k * norm;
        Self {
            b0,
            b1: 2.0 * b0,
            b2: b0,
            a1: 2.0 * (k * k - 1.0) * norm,
            a2: (1.0 - alpha * k + k * k) * norm,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn highpass(cutoff: f64, alpha: f64) -> Self {
        let k = (std::f64::consts::PI * cutoff / 2.0).tan();
        let norm = 1.0 / (1.0 + alpha * k + k * k);
        Self {
            b0: norm,
            b1: -2.0 * norm,
            b2: norm,
            a1: 2.0 * (k * k - 1.0) * norm,
            a2: (1.0 - alpha * k + k * k) * norm,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn process_sample(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Butterworth damping coefficients (2·sin θ) for each second-order
/// section of an even-order filter
fn section_alphas(order: usize) -> Vec<f64> {
    (0..order / 2)
        .map(|k| {
            let theta = std::f64::consts::PI * (2 * k + 1) as f64 / (2 * order) as f64;
            2.0 * theta.sin()
        })
        .collect()
}

/// Bandpass filter as a cascade of biquad sections
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    sections: Vec<Biquad>,
}

impl BandpassFilter {
    /// Design the cascade for the given passband.
    ///
    /// Edges must satisfy `0 < low < high < 1` and the order must be a
    /// positive even number; [`hrm_core::AnalysisConfig::validate`] checks
    /// the same bounds up front.
    pub fn new(config: &BandpassConfig) -> HrmResult<Self> {
        if !(config.low > 0.0 && config.high < 1.0 && config.low < config.high) {
            return Err(AnalysisError::InvalidConfig {
                reason: "bandpass edges must satisfy 0 < low < high < 1",
            });
        }
        if config.order == 0 || config.order % 2 != 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "bandpass order must be a positive even number",
            });
        }

        let alphas = section_alphas(config.order);
        let mut sections = Vec::with_capacity(alphas.len() * 2);
        for &alpha in &alphas {
            sections.push(Biquad::highpass(config.low, alpha));
        }
        for &alpha in &alphas {
            sections.push(Biquad::lowpass(config.high, alpha));
        }

        Ok(Self { sections })
    }

    /// Filter a voltage slice, returning an output of the same length
    pub fn apply(&mut self, input: &[f64]) -> Vec<f64> {
        self.reset();
        input
            .iter()
            .map(|&sample| {
                self.sections
                    .iter_mut()
                    .fold(sample, |acc, section| section.process_sample(acc))
            })
            .collect()
    }

    fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }
}
