//! CSS rewrites.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::kind::AssetKind;
use crate::traits::AssetTransform;

/// Stylesheet transformer.
///
/// Adds a `-webkit-` prefixed copy in front of every `user-select`
/// declaration so Safari honours it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetTransform;

impl AssetTransform for StylesheetTransform {
    fn kind(&self) -> AssetKind {
        AssetKind::Stylesheet
    }

    fn transform(&self, source: &str) -> String {
        prefix_user_select(source)
    }
}

/// Duplicate `user-select: <value>;` with a `-webkit-` prefixed declaration.
pub fn prefix_user_select(css: &str) -> String {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"user-select:\s*([^;]+);").expect("Invalid user-select regex")
    });

    RE.replace_all(css, |caps: &Captures| {
        let whole = caps.get(0).expect("group 0 always matches");

        // Tail of a longer property such as -webkit-user-select
        let preceding = css[..whole.start()].chars().next_back();
        if matches!(preceding, Some(c) if c == '-' || c.is_alphanumeric()) {
            return whole.as_str().to_string();
        }

        let value = &caps[1];
        format!("-webkit-user-select: {value};\n    user-select: {value};")
    })
    .into_owned()
}
