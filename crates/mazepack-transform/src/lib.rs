//! Per-kind text rewrites for inlining web assets.
//!
//! Each asset kind (markup, stylesheet, script) has a transformer that rewrites
//! the source so it can be embedded directly into a single HTML document.

pub mod kind;
pub mod markup;
pub mod script;
pub mod stylesheet;
pub mod traits;

pub use kind::{AssetKind, KindError};
pub use markup::MarkupTransform;
pub use script::ScriptTransform;
pub use stylesheet::StylesheetTransform;
pub use traits::AssetTransform;

/// Get the transformer for an asset kind.
pub fn transformer_for(kind: AssetKind) -> &'static dyn AssetTransform {
    match kind {
        AssetKind::Markup => &MarkupTransform,
        AssetKind::Stylesheet => &StylesheetTransform,
        AssetKind::Script => &ScriptTransform,
    }
}
