//! Trait definitions for asset transformers.

use crate::kind::AssetKind;

/// Trait for kind-specific asset rewrites.
///
/// Transformers are infallible: a rule whose pattern does not match leaves the
/// content unchanged.
pub trait AssetTransform: Send + Sync {
    /// The asset kind this transformer handles
    fn kind(&self) -> AssetKind;

    /// Rewrite the asset source so it can be inlined.
    fn transform(&self, source: &str) -> String;
}
