//! Asset loading.

use std::fs;
use std::path::Path;

use crate::manifest::{Manifest, ManifestEntry};

/// An asset read from disk, or the reason it could not be read.
#[derive(Debug)]
pub struct LoadedAsset {
    /// The manifest entry this asset came from
    pub entry: ManifestEntry,

    /// Raw UTF-8 text
    pub content: Result<String, LoadError>,
}

/// Errors that can occur when reading an asset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },
}

/// Read every manifest entry relative to `asset_dir`, in manifest order.
///
/// A file that cannot be read (missing, unreadable, not UTF-8) is logged and
/// kept as an error entry; the remaining assets are still loaded.
pub fn load_assets(asset_dir: &Path, manifest: &Manifest) -> Vec<LoadedAsset> {
    manifest
        .iter()
        .map(|entry| {
            let path = asset_dir.join(&entry.path);
            let content = fs::read_to_string(&path).map_err(|e| LoadError::ReadError {
                path: entry.path.display().to_string(),
                message: e.to_string(),
            });

            match &content {
                Ok(text) => tracing::debug!(
                    "Loaded {} ({}, {} bytes)",
                    entry.path.display(),
                    entry.kind,
                    text.len()
                ),
                Err(e) => tracing::warn!("Skipping asset: {}", e),
            }

            LoadedAsset {
                entry: entry.clone(),
                content,
            }
        })
        .collect()
}
