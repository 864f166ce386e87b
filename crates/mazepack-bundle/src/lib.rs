//! Single-file bundler for the maze game.
//!
//! Loads the assets named by a manifest, rewrites each one for inlining, and
//! assembles them into one self-contained HTML document.

pub mod assembler;
pub mod builder;
pub mod loader;
pub mod manifest;
pub mod writer;

pub use assembler::{assemble, Fragments, CSP_META};
pub use builder::{BundleConfig, BundleError, BundleResult, Bundler, Rendered, DEFAULT_OUTPUT};
pub use loader::{load_assets, LoadError, LoadedAsset};
pub use manifest::{Manifest, ManifestEntry};
pub use writer::write_document;
