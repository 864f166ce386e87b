//! Output writing.

use std::fs;
use std::path::Path;

use crate::builder::BundleError;

/// Write the combined document, replacing any existing file.
///
/// Returns the size of the written file in bytes. The parent directory must
/// already exist.
pub fn write_document(path: &Path, document: &str) -> Result<u64, BundleError> {
    fs::write(path, document).map_err(|e| BundleError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let bytes = fs::metadata(path)
        .map(|m| m.len())
        .unwrap_or(document.len() as u64);

    Ok(bytes)
}
