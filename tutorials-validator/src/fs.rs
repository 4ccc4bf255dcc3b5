//! Filesystem primitives: required-entry checks and tutorial discovery.
//!
//! Nothing here reads file content or modifies the tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Rule, ValidateError};
use crate::layout::{EntryKind, HIDDEN_MARKER};
use crate::report::Collector;

/// Whether `path` exists with the given kind. Symlinks are followed.
pub fn has_kind(path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::File => path.is_file(),
        EntryKind::Directory => path.is_dir(),
    }
}

/// Record an error if `path` is absent or not of the expected kind.
///
/// Never fails the run; the caller decides whether to descend further.
pub fn check_entry(path: &Path, kind: EntryKind, findings: &mut Collector<'_>) {
    if has_kind(path, kind) {
        return;
    }
    let rule = match kind {
        EntryKind::File => Rule::MissingFile,
        EntryKind::Directory => Rule::MissingDirectory,
    };
    findings.error(rule, path.to_path_buf());
}

/// Check if an entry name is hidden (starts with `.`).
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .starts_with(&[HIDDEN_MARKER])
}

/// List the tutorial directories directly under a tool directory.
///
/// Returns paths sorted by file name. Hidden entries and anything that is
/// not a directory (after following symlinks) are skipped.
///
/// # Errors
///
/// Returns `ValidateError::ListDir` if the directory cannot be read.
pub fn tutorial_dirs(tool_root: &Path) -> Result<Vec<PathBuf>, ValidateError> {
    let mut dirs = Vec::new();

    for entry_result in WalkDir::new(tool_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry_result.map_err(|source| ValidateError::ListDir {
            path: tool_root.to_path_buf(),
            source,
        })?;

        if is_hidden(&entry) || !entry.path().is_dir() {
            continue;
        }

        dirs.push(entry.into_path());
    }

    Ok(dirs)
}
