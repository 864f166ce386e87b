//! Bundle builder.

use std::path::PathBuf;
use std::time::Instant;

use crate::assembler::{assemble, Fragments};
use crate::loader::load_assets;
use crate::manifest::Manifest;
use crate::writer::write_document;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "maze-game.html";

/// Configuration for building a bundle.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Directory the manifest paths are resolved against
    pub asset_dir: PathBuf,

    /// Output HTML file
    pub output: PathBuf,

    /// Assets to bundle, in order
    pub manifest: Manifest,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            manifest: Manifest::maze_game(),
        }
    }
}

/// Result of a bundle operation.
#[derive(Debug)]
pub struct BundleResult {
    /// Output file
    pub output: PathBuf,

    /// Size of the written file in bytes
    pub bytes: u64,

    /// Assets that were read and inlined
    pub loaded: Vec<PathBuf>,

    /// Assets that could not be read
    pub skipped: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BundleResult {
    /// Size of the written file in kibibytes.
    pub fn kib(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Errors that can occur during a bundle.
///
/// Unreadable assets are not errors; they are skipped and reported in
/// [`BundleResult::skipped`].
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// A combined document that has not been written yet.
#[derive(Debug)]
pub struct Rendered {
    /// The self-contained HTML
    pub document: String,

    /// Assets that were read and inlined
    pub loaded: Vec<PathBuf>,

    /// Assets that could not be read
    pub skipped: Vec<PathBuf>,
}

/// Runs the load, transform, assemble and write stages once.
pub struct Bundler {
    config: BundleConfig,
}

impl Bundler {
    /// Create a new bundler.
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Build the combined document in memory without writing it.
    pub fn render(&self) -> Rendered {
        let assets = load_assets(&self.config.asset_dir, &self.config.manifest);

        let mut loaded = Vec::new();
        let mut skipped = Vec::new();
        for asset in &assets {
            match asset.content {
                Ok(_) => loaded.push(asset.entry.path.clone()),
                Err(_) => skipped.push(asset.entry.path.clone()),
            }
        }

        let fragments = Fragments::collect(&assets);

        Rendered {
            document: assemble(&fragments),
            loaded,
            skipped,
        }
    }

    /// Build and write the bundle.
    pub fn build(&self) -> Result<BundleResult, BundleError> {
        let start = Instant::now();

        let rendered = self.render();
        let bytes = write_document(&self.config.output, &rendered.document)?;

        Ok(BundleResult {
            output: self.config.output.clone(),
            bytes,
            loaded: rendered.loaded,
            skipped: rendered.skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <title>迷宫游戏</title>
    <link rel="stylesheet" href="style.css?v=2">
</head>
<body>
    <canvas id="maze"></canvas>
    <img src="assets/key.png">
    <script type="module" src="game.js?v=2"></script>
</body>
</html>
"#;

    const STYLE_CSS: &str = "#maze {\n    user-select: none;\n}\n";

    const SCRIPTS: [(&str, &str); 6] = [
        ("config.js", "export const CELL = 20;\n"),
        ("state.js", "import { CELL } from './config.js';\nexport let state = { cell: CELL };\n"),
        ("maze.js", "export class Maze {}\n"),
        ("player.js", "export function movePlayer() {}\n"),
        ("items.js", "function spawn() {}\nexport { spawn };\n"),
        ("game.js", "import { Maze } from './maze.js';\nnew Maze();\n"),
    ];

    fn write_site(dir: &Path) {
        fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
        fs::write(dir.join("style.css"), STYLE_CSS).unwrap();
        for (name, source) in SCRIPTS {
            fs::write(dir.join(name), source).unwrap();
        }
    }

    fn config(dir: &Path) -> BundleConfig {
        BundleConfig {
            asset_dir: dir.to_path_buf(),
            output: dir.join("out").join(DEFAULT_OUTPUT),
            manifest: Manifest::maze_game(),
        }
    }

    #[test]
    fn builds_single_document() {
        let temp = tempdir().unwrap();
        write_site(temp.path());
        fs::create_dir(temp.path().join("out")).unwrap();

        let result = Bundler::new(config(temp.path())).build().unwrap();
        let html = fs::read_to_string(&result.output).unwrap();

        assert_eq!(result.loaded.len(), 8);
        assert!(result.skipped.is_empty());
        assert_eq!(result.bytes, html.len() as u64);

        assert_eq!(html.matches("<script").count(), 1);
        assert!(!html.contains(r#"<link rel="stylesheet""#));
        assert!(!html.contains("<img"));
        assert!(!html.contains("import"));
        assert!(!html.contains("export"));
        assert_eq!(html.matches(r#"<meta charset="UTF-8">"#).count(), 1);
        assert!(html.contains("-webkit-user-select: none;\n    user-select: none;"));
        assert!(html.contains("迷宫游戏"));
    }

    #[test]
    fn scripts_follow_manifest_order() {
        let temp = tempdir().unwrap();
        write_site(temp.path());

        let html = Bundler::new(config(temp.path())).render().document;

        let positions: Vec<usize> = [
            "const CELL = 20;",
            "let state =",
            "class Maze {}",
            "function movePlayer()",
            "function spawn()",
            "new Maze();",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_asset_is_skipped() {
        let temp = tempdir().unwrap();
        write_site(temp.path());
        fs::remove_file(temp.path().join("player.js")).unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();

        let result = Bundler::new(config(temp.path())).build().unwrap();
        let html = fs::read_to_string(&result.output).unwrap();

        assert_eq!(result.skipped, [PathBuf::from("player.js")]);
        assert_eq!(result.loaded.len(), 7);
        assert!(!html.contains("movePlayer"));

        let class_pos = html.find("class Maze {}").unwrap();
        let spawn_pos = html.find("function spawn()").unwrap();
        assert!(html.find("const CELL").unwrap() < class_pos);
        assert!(class_pos < spawn_pos);
        assert!(spawn_pos < html.find("new Maze();").unwrap());
    }

    #[test]
    fn repeated_builds_are_identical() {
        let temp = tempdir().unwrap();
        write_site(temp.path());
        fs::create_dir(temp.path().join("out")).unwrap();
        let bundler = Bundler::new(config(temp.path()));

        let first = bundler.build().unwrap();
        let first_bytes = fs::read(&first.output).unwrap();
        let second = bundler.build().unwrap();
        let second_bytes = fs::read(&second.output).unwrap();

        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn write_failure_is_reported() {
        let temp = tempdir().unwrap();
        write_site(temp.path());

        let err = Bundler::new(config(temp.path())).build().unwrap_err();

        assert!(err.to_string().contains(DEFAULT_OUTPUT));
    }

    #[test]
    fn reports_size_in_kib() {
        let result = BundleResult {
            output: PathBuf::from(DEFAULT_OUTPUT),
            bytes: 1536,
            loaded: vec![],
            skipped: vec![],
            duration_ms: 0,
        };

        assert_eq!(format!("{:.2}", result.kib()), "1.50");
    }
}
