//! CSV loading: text rows into raw field strings
//!
//! Shape problems (wrong field count, non-numeric values) are the
//! validator's job; the loader only splits rows.

use anyhow::{bail, Result};
use std::path::Path;

/// Read a `.csv` recording into raw records, one `Vec<String>` per row.
///
/// Rows are split on a single comma; any other extension is rejected.
pub fn load_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {}
        other => bail!("unsupported file type: {:?}", other),
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim().split(',').map(str::to_string).collect())
        .collect())
}
