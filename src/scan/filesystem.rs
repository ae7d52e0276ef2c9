use crate::error::{PageScoreError, Result};
use std::path::Path;

/// Reads a page input file, reporting a missing path distinctly from other
/// I/O failures.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PageScoreError::PathNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_optional_input(path: Option<&Path>) -> Result<Option<String>> {
    path.map(read_input).transpose()
}
