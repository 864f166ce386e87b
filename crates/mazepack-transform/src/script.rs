//! JavaScript module rewrites.
//!
//! Once every script is concatenated into a single `<script>` block they share
//! one scope, so relative imports and exports become dead syntax. This module
//! removes them:
//!
//! - `import { a, b } from './file.js';` is removed
//! - `export { a, b };` is removed
//! - `export const|let|function|class` loses its `export` keyword
//!
//! Other export forms (`export default`, `export async function`,
//! `export * from`) are left untouched.

use regex::Regex;
use std::sync::LazyLock;

use crate::kind::AssetKind;
use crate::traits::AssetTransform;

/// Script transformer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTransform;

impl AssetTransform for ScriptTransform {
    fn kind(&self) -> AssetKind {
        AssetKind::Script
    }

    fn transform(&self, source: &str) -> String {
        let js = remove_relative_imports(source);
        let js = remove_export_lists(&js);
        demote_exported_declarations(&js)
    }
}

/// Remove brace-form imports from same-directory modules.
pub fn remove_relative_imports(js: &str) -> String {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"import\s+\{[^}]+\}\s+from\s+['"]\./[^'"]+['"];"#)
            .expect("Invalid import regex")
    });

    RE.replace_all(js, "").into_owned()
}

/// Remove `export { ... };` statements.
pub fn remove_export_lists(js: &str) -> String {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"export\s+\{[^}]+\};").expect("Invalid export list regex"));

    RE.replace_all(js, "").into_owned()
}

/// Strip `export` from `const`, `let`, `function` and `class` declarations.
pub fn demote_exported_declarations(js: &str) -> String {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"export\s+(const|let|function|class)\s+")
            .expect("Invalid export declaration regex")
    });

    RE.replace_all(js, "${1} ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_relative_imports() {
        let js = "import { bar } from './utils.js';\nbar();";
        let out = ScriptTransform.transform(js);

        assert!(!out.contains("import"));
        assert!(!out.contains("./utils.js"));
        assert!(out.contains("bar();"));
    }

    #[test]
    fn removes_multi_name_imports() {
        let js = "import {\n  CONFIG,\n  DIRECTIONS\n} from \"./config.js\";\nconst x = 1;";
        assert_eq!(remove_relative_imports(js), "\nconst x = 1;");
    }

    #[test]
    fn keeps_package_and_parent_imports() {
        let js = "import { h } from 'preact';\nimport { a } from '../a.js';";
        assert_eq!(remove_relative_imports(js), js);
    }

    #[test]
    fn removes_export_lists() {
        let js = "function a() {}\nexport { a, b };\n";
        assert_eq!(remove_export_lists(js), "function a() {}\n\n");
    }

    #[test]
    fn demotes_exported_function() {
        let out = ScriptTransform.transform("export function foo() {}");

        assert!(out.contains("function foo() {}"));
        assert!(!out.contains("export function foo"));
    }

    #[test]
    fn demotes_all_declaration_keywords() {
        let js = "export const A = 1;\nexport let b = 2;\nexport class Maze {}\nexport  function  go() {}";

        assert_eq!(
            ScriptTransform.transform(js),
            "const A = 1;\nlet b = 2;\nclass Maze {}\nfunction go() {}"
        );
    }

    #[test]
    fn leaves_other_export_forms() {
        let js = "export default Game;\nexport async function load() {}";
        assert_eq!(ScriptTransform.transform(js), js);
    }
}
