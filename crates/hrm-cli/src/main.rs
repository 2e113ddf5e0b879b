//! Batch ECG heart-rate analysis over a CSV recording
//!
//! Usage: `hrm <recording.csv>`. Writes the result next to the input with
//! the extension swapped for `.json`.

mod export;
mod loader;

use anyhow::{bail, Context, Result};
use hrm_analysis::analyze;
use hrm_core::{AnalysisConfig, DiagnosticLog};
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args_os().skip(1);
    let input: PathBuf = match (args.next(), args.next()) {
        (Some(path), None) => path.into(),
        _ => bail!("usage: hrm <recording.csv>"),
    };

    let raw = loader::load_csv(&input)
        .with_context(|| format!("failed to read recording {}", input.display()))?;
    tracing::info!(rows = raw.len(), input = %input.display(), "recording loaded");

    let mut log = DiagnosticLog::new();
    let result = analyze(&raw, &AnalysisConfig::default(), &mut log)
        .with_context(|| format!("analysis failed for {}", input.display()))?;

    for advisory in log.advisories() {
        tracing::warn!("{}", advisory);
    }

    let output = export::output_path(&input);
    export::write_json(&result, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        beats = result.num_beats,
        duration_s = result.duration,
        output = %output.display(),
        "analysis complete"
    );
    Ok(())
}
