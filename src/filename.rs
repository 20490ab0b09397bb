//! Canonical remote filenames
//!
//! The game stores top-level scripts without a leading slash (`hack.js`) and
//! scripts inside folders with one (`/lib/net.js`). Sending the other form is
//! silently mishandled on the remote side, so every name crossing the wire or
//! used as a reconciliation key goes through [`normalize`].

use std::path::Path;

/// Normalize a path-like string into the remote naming convention
///
/// Runs of `\` or `/` collapse to a single `/`. A name nested under at least
/// one folder gets a leading `/`; a top-level name loses it.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len() + 1);
    let mut in_separator = false;

    for c in raw.chars() {
        if c == '/' || c == '\\' {
            if !in_separator {
                collapsed.push('/');
            }
            in_separator = true;
        } else {
            collapsed.push(c);
            in_separator = false;
        }
    }

    // Nested means some non-empty prefix is followed by a separator
    let nested = collapsed.chars().skip(1).any(|c| c == '/');
    let has_leading = collapsed.starts_with('/');

    if nested && !has_leading {
        collapsed.insert(0, '/');
    } else if !nested && has_leading {
        collapsed.remove(0);
    }

    collapsed
}

/// Normalize a path relative to the script root
#[must_use]
pub fn from_relative_path(path: &Path) -> String {
    normalize(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_top_level_has_no_leading_slash() {
        assert_eq!(normalize("hack.js"), "hack.js");
        assert_eq!(normalize("/hack.js"), "hack.js");
        assert_eq!(normalize("\\hack.js"), "hack.js");
    }

    #[test]
    fn test_nested_gets_leading_slash() {
        assert_eq!(normalize("lib/net.js"), "/lib/net.js");
        assert_eq!(normalize("/lib/net.js"), "/lib/net.js");
        assert_eq!(normalize("a/b/c.script"), "/a/b/c.script");
    }

    #[test]
    fn test_backslashes_match_forward_slashes() {
        assert_eq!(normalize("\\a\\b.js"), normalize("/a/b.js"));
        assert_eq!(normalize("\\a\\b.js"), "/a/b.js");
        assert_eq!(normalize("a\\b\\c.js"), "/a/b/c.js");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(normalize("a//b.js"), "/a/b.js");
        assert_eq!(normalize("//a\\/\\b.js"), "/a/b.js");
        assert_eq!(normalize("///top.js"), "top.js");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize("\\\\//"), "");
        assert_eq!(normalize("dir/"), "/dir/");
    }

    #[test]
    fn test_multibyte_names() {
        assert_eq!(normalize("é.js"), "é.js");
        assert_eq!(normalize("é/ü.js"), "/é/ü.js");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "hack.js",
            "/hack.js",
            "lib/net.js",
            "\\a\\\\b\\c.ns",
            "",
            "//",
            "x//",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_never_contains_backslash() {
        for raw in ["a\\b", "\\\\x", "a\\b\\c\\d.txt"] {
            assert!(!normalize(raw).contains('\\'));
        }
    }

    #[test]
    fn test_from_relative_path() {
        assert_eq!(from_relative_path(&PathBuf::from("a.js")), "a.js");
        assert_eq!(
            from_relative_path(&PathBuf::from("sub").join("b.ns")),
            "/sub/b.ns"
        );
    }
}
