//! Asset manifest.

use std::path::PathBuf;

use mazepack_transform::AssetKind;

/// A single asset declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the asset directory
    pub path: PathBuf,

    /// Kind, which selects the rewrite rules
    pub kind: AssetKind,
}

impl ManifestEntry {
    /// Create a new manifest entry.
    pub fn new(path: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Ordered list of assets to bundle.
///
/// Script entries are concatenated in this order, so it must match the order
/// in which the game expects its modules to be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create a manifest from entries, keeping their order.
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// The maze game's asset set.
    pub fn maze_game() -> Self {
        let mut entries = vec![
            ManifestEntry::new("index.html", AssetKind::Markup),
            ManifestEntry::new("style.css", AssetKind::Stylesheet),
        ];
        entries.extend(
            [
                "config.js",
                "state.js",
                "maze.js",
                "player.js",
                "items.js",
                "game.js",
            ]
            .into_iter()
            .map(|name| ManifestEntry::new(name, AssetKind::Script)),
        );

        Self { entries }
    }

    /// Iterate over entries in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
