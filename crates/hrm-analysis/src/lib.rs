//! HRM-Analysis: ECG heart-rate estimation pipeline
//!
//! Record validation and repair, descriptive statistics, autocorrelation
//! periodicity estimation, bandpass beat location and windowed heart-rate
//! aggregation, composed by [`pipeline::analyze`].

pub mod beats;
pub mod filter;
pub mod periodicity;
pub mod pipeline;
pub mod rates;
pub mod stats;
pub mod validate;

pub use beats::locate_beats;
pub use periodicity::{estimate_interval, Interval};
pub use pipeline::analyze;
pub use rates::windowed_rates;
pub use validate::validate;
