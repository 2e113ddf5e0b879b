//! Non-fatal advisories and the sink they are reported through
//!
//! Advisories never alter control flow; the pipeline records them on an
//! explicit sink parameter and keeps running. There is deliberately no
//! global logger handle here: callers decide what a sink does with what
//! it is given.

use core::fmt;

/// Non-fatal diagnostic conditions observed during an analysis run
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Advisory {
    /// A scaled voltage magnitude reached the configured abnormal range
    VoltageOutOfRange {
        /// 1-based row number of the first offending sample
        row: usize,
        /// The offending voltage in millivolts
        voltage: f64,
        /// Configured magnitude limit in millivolts
        limit: f64,
    },

    /// Beat location found no candidate peaks; zero beats is a valid outcome
    NoBeatsDetected,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::VoltageOutOfRange {
                row,
                voltage,
                limit,
            } => {
                write!(
                    f,
                    "Voltage {:.1} mV at row {} exceeds expected range (limit {:.1} mV)",
                    voltage, row, limit
                )
            }
            Advisory::NoBeatsDetected => {
                write!(f, "No beats detected in recording")
            }
        }
    }
}

/// Destination for advisories emitted while a pipeline runs
pub trait DiagnosticSink {
    /// Record one advisory
    fn record(&mut self, advisory: Advisory);
}

/// Vec-backed sink that keeps everything it is given
#[derive(Debug, Default, Clone)]
pub struct DiagnosticLog {
    advisories: Vec<Advisory>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All advisories recorded so far, in emission order
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn record(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }
}
