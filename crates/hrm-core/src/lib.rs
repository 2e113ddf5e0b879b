//! HRM-Core: Foundation types for ECG heart-rate analysis
//!
//! Value types shared by the analysis pipeline: the validated signal
//! container, configuration surface, error taxonomy and diagnostic sink.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod result;
pub mod signal;

pub use config::{AnalysisConfig, BandpassConfig};
pub use diagnostics::{Advisory, DiagnosticLog, DiagnosticSink};
pub use error::{AnalysisError, HrmResult};
pub use result::AnalysisResult;
pub use signal::{Sample, Signal};
