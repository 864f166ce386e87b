//! Fragment collection and document assembly.

use regex::Regex;
use std::sync::LazyLock;

use mazepack_transform::{transformer_for, AssetKind};

use crate::loader::LoadedAsset;

/// Content-Security-Policy tag inserted as the first child of `<head>`.
///
/// Everything is restricted to the document's own origin, except inline
/// script and style, which is where the bundled assets end up.
pub const CSP_META: &str = r#"<meta http-equiv="Content-Security-Policy" content="default-src 'self' 'unsafe-inline'; script-src 'unsafe-inline'; style-src 'unsafe-inline';">"#;

/// Transformed asset text, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    /// Transformed HTML document
    pub markup: String,

    /// Transformed stylesheet
    pub stylesheet: String,

    /// Transformed scripts in manifest order
    pub scripts: Vec<String>,
}

impl Fragments {
    /// Transform every successfully loaded asset and group the results.
    ///
    /// Assets that failed to load contribute nothing.
    pub fn collect(assets: &[LoadedAsset]) -> Self {
        let mut fragments = Self::default();

        for asset in assets {
            let Ok(source) = &asset.content else {
                continue;
            };

            let transformed = transformer_for(asset.entry.kind).transform(source);
            tracing::debug!(
                "Transformed {} ({} -> {} bytes)",
                asset.entry.path.display(),
                source.len(),
                transformed.len()
            );

            fragments.push(asset.entry.kind, transformed);
        }

        fragments
    }

    /// Add a transformed fragment.
    ///
    /// Scripts accumulate; markup and stylesheet keep the last fragment pushed.
    pub fn push(&mut self, kind: AssetKind, text: String) {
        let slot = match kind {
            AssetKind::Script => {
                self.scripts.push(text);
                return;
            }
            AssetKind::Markup => &mut self.markup,
            AssetKind::Stylesheet => &mut self.stylesheet,
        };

        if !slot.is_empty() {
            tracing::warn!("More than one {} asset; keeping the last one", kind);
        }
        *slot = text;
    }
}

/// Merge the stylesheet and scripts into the markup.
///
/// Existing `<script>`, stylesheet `<link>` and `<img>` tags are dropped, the
/// CSP tag goes right after `<head>`, the stylesheet before `</head>`, and the
/// scripts, joined by newlines, before `</body>`. A missing anchor tag makes
/// the corresponding insertion a no-op.
pub fn assemble(fragments: &Fragments) -> String {
    static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?s)<script[^>]*>.*?</script>").expect("Invalid script tag regex")
    });
    static STYLESHEET_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<link[^>]*rel="stylesheet"[^>]*>"#).expect("Invalid link tag regex")
    });
    static IMG_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<img[^>]*src="[^"]+"[^>]*>"#).expect("Invalid img tag regex")
    });

    let html = SCRIPT_RE.replace_all(&fragments.markup, "");
    let html = STYLESHEET_RE.replace_all(&html, "");
    let html = IMG_RE.replace_all(&html, "");

    let html = html.replace("<head>", &format!("<head>\n    {CSP_META}"));
    let html = html.replace(
        "</head>",
        &format!("<style>\n{}\n</style>\n</head>", fragments.stylesheet),
    );
    html.replace(
        "</body>",
        &format!("<script>\n{}\n</script>\n</body>", fragments.scripts.join("\n")),
    )
}
