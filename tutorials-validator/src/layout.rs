//! The repository layout the validator checks against.
//!
//! ```text
//! <root>/README.md
//! <root>/CONTRIBUTING.md
//! <root>/templates/tutorial-README.md
//! <root>/templates/environment.yml
//! <root>/tutorials/<tool>/<tutorial-slug>/README.md
//! <root>/tutorials/<tool>/<tutorial-slug>/tutorial.ipynb   (or tutorial.md)
//! <root>/tutorials/<tool>/<tutorial-slug>/environment.yml  (recommended)
//! ```

/// Whether a required entry must be a regular file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A path relative to the repository root that must exist with the given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredEntry {
    pub path: &'static str,
    pub kind: EntryKind,
}

/// Top-level entries, checked in this order before the tutorials tree.
pub const REQUIRED_ENTRIES: &[RequiredEntry] = &[
    RequiredEntry {
        path: "README.md",
        kind: EntryKind::File,
    },
    RequiredEntry {
        path: "CONTRIBUTING.md",
        kind: EntryKind::File,
    },
    RequiredEntry {
        path: "templates",
        kind: EntryKind::Directory,
    },
    RequiredEntry {
        path: "templates/tutorial-README.md",
        kind: EntryKind::File,
    },
    RequiredEntry {
        path: "templates/environment.yml",
        kind: EntryKind::File,
    },
];

/// Directory holding one subdirectory per tool.
pub const TUTORIALS_DIR: &str = "tutorials";

pub const TUTORIAL_README: &str = "README.md";
pub const TUTORIAL_NOTEBOOK: &str = "tutorial.ipynb";
pub const TUTORIAL_MARKDOWN: &str = "tutorial.md";
pub const TUTORIAL_ENVIRONMENT: &str = "environment.yml";

/// Names starting with this marker are never traversed.
pub const HIDDEN_MARKER: u8 = b'.';

/// Validates a tutorial directory name without regex.
///
/// Valid slugs: start with `[a-z0-9]`, followed by `[a-z0-9-]*`.
#[inline]
#[must_use]
pub fn is_valid_slug(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for name in ["quickstart", "shapes-annotations", "01-intro", "a", "x-"] {
            assert!(is_valid_slug(name), "{name} should be a slug");
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for name in [
            "",
            "-leading-hyphen",
            "Shapes_Demo",
            "shapes_demo",
            "Quickstart",
            "with space",
            "dots.in.name",
            "caf\u{e9}",
        ] {
            assert!(!is_valid_slug(name), "{name} should not be a slug");
        }
    }

    #[test]
    fn test_templates_dir_checked_before_its_files() {
        let templates = REQUIRED_ENTRIES
            .iter()
            .position(|e| e.path == "templates")
            .unwrap();
        assert_eq!(REQUIRED_ENTRIES[templates].kind, EntryKind::Directory);
        assert!(
            REQUIRED_ENTRIES[templates + 1..]
                .iter()
                .all(|e| e.kind == EntryKind::File)
        );
    }
}
