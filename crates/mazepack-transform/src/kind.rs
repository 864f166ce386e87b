//! Asset kinds.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// The kind of a web asset, which selects the rewrite rules applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// HTML document
    Markup,
    /// CSS stylesheet
    Stylesheet,
    /// JavaScript module
    Script,
}

impl AssetKind {
    /// Infer the kind from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, KindError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "html" | "htm" => Ok(AssetKind::Markup),
            "css" => Ok(AssetKind::Stylesheet),
            "js" | "mjs" => Ok(AssetKind::Script),
            _ => Err(KindError::Unrecognized(path.display().to_string())),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Markup => "markup",
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::Script => "script",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when determining an asset kind.
#[derive(Debug, thiserror::Error)]
pub enum KindError {
    #[error("Cannot infer asset kind from extension: {0}")]
    Unrecognized(String),
}
