//! Result export: attribute bundle to a JSON file

use anyhow::Result;
use hrm_core::AnalysisResult;
use std::path::{Path, PathBuf};

/// Output path for a recording: same location, `.json` extension
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Serialize the result record to a JSON file
pub fn write_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string(result)?;
    std::fs::write(path, json)?;
    Ok(())
}
