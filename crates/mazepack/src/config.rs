//! Configuration file loading (mazepack.toml).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mazepack_bundle::{BundleConfig, Manifest, ManifestEntry, DEFAULT_OUTPUT};
use mazepack_transform::AssetKind;
use serde::Deserialize;

/// Name of the optional configuration file next to the executable.
pub const CONFIG_FILE: &str = "mazepack.toml";

/// Configuration file structure (mazepack.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    bundle: BundleSettings,
    /// Replaces the built-in manifest when non-empty
    #[serde(default)]
    assets: Vec<AssetSpec>,
}

#[derive(Debug, Deserialize)]
struct BundleSettings {
    #[serde(default = "default_output")]
    output: String,
    /// Relative to the executable's directory
    asset_dir: Option<String>,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            asset_dir: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AssetSpec {
    path: String,
    kind: Option<AssetKind>,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

/// Directory containing the running executable.
pub fn tool_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the mazepack executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Load configuration from mazepack.toml in `dir` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(dir: &Path) -> Result<ConfigFile> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    tracing::info!("Loaded config from {}", config_path.display());

    Ok(config)
}

impl ConfigFile {
    /// Resolve the file settings and the command-line output into a bundle config.
    ///
    /// `--output` takes precedence over `bundle.output`.
    pub fn into_bundle_config(
        self,
        tool_dir: &Path,
        output: Option<PathBuf>,
    ) -> Result<BundleConfig> {
        let asset_dir = match self.bundle.asset_dir {
            Some(dir) => tool_dir.join(dir),
            None => tool_dir.to_path_buf(),
        };

        let manifest = if self.assets.is_empty() {
            Manifest::maze_game()
        } else {
            let entries = self
                .assets
                .into_iter()
                .map(|asset| -> Result<ManifestEntry> {
                    let path = PathBuf::from(asset.path);
                    let kind = match asset.kind {
                        Some(kind) => kind,
                        None => AssetKind::from_path(&path)?,
                    };
                    Ok(ManifestEntry::new(path, kind))
                })
                .collect::<Result<Vec<_>>>()?;
            Manifest::new(entries)
        };

        Ok(BundleConfig {
            asset_dir,
            output: output.unwrap_or_else(|| PathBuf::from(self.bundle.output)),
            manifest,
        })
    }
}
