//! HTML rewrites.
//!
//! Strips cache-busting query strings from `src`/`href` attributes and makes
//! sure the document declares a UTF-8 charset.

use regex::Regex;
use std::sync::LazyLock;

use crate::kind::AssetKind;
use crate::traits::AssetTransform;

/// The charset declaration inserted after `<head>`.
pub const CHARSET_META: &str = r#"<meta charset="UTF-8">"#;

/// Markup transformer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupTransform;

impl AssetTransform for MarkupTransform {
    fn kind(&self) -> AssetKind {
        AssetKind::Markup
    }

    fn transform(&self, source: &str) -> String {
        let html = strip_query_suffixes(source);
        ensure_charset(&html)
    }
}

/// Remove `?query` suffixes from `src="..."` and `href="..."` values.
pub fn strip_query_suffixes(html: &str) -> String {
    static SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"src="([^"]+)\?[^"]*""#).expect("Invalid src query regex")
    });
    static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"href="([^"]+)\?[^"]*""#).expect("Invalid href query regex")
    });

    let html = SRC_RE.replace_all(html, r#"src="${1}""#);
    HREF_RE.replace_all(&html, r#"href="${1}""#).into_owned()
}

/// Insert the charset declaration after `<head>` unless one is already present.
pub fn ensure_charset(html: &str) -> String {
    if html.contains(CHARSET_META) {
        return html.to_string();
    }
    html.replace("<head>", &format!("<head>\n    {CHARSET_META}"))
}
