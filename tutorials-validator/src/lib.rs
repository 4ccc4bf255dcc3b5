//! # tutorials-validator
//!
//! Structural linter for the molsyssuite-tutorials repository.
//!
//! Checks required top-level files, the `templates` directory, and every
//! tutorial directory under `tutorials/<tool>/` for naming and content
//! conventions. File contents are never parsed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tutorials_validator::{Mode, ValidationConfig, output, resolve_root, validate_repo};
//!
//! let root = resolve_root(Path::new("."));
//! let config = ValidationConfig::new(Mode::Strict);
//!
//! let mut stdout = std::io::stdout();
//! let report = validate_repo(&root, &config, &mut stdout).unwrap();
//! output::write_outcome(&report, &mut stdout).unwrap();
//! std::process::exit(report.exit_code());
//! ```

mod config;
mod error;
mod fs;
pub mod layout;
pub mod output;
mod report;
mod tutorial;

pub use config::{Mode, TOOL_DIRS, ValidationConfig};
pub use error::{Finding, Rule, Severity, ValidateError};
pub use report::ValidationReport;

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use fs::{check_entry, tutorial_dirs};
use layout::{EntryKind, REQUIRED_ENTRIES, TUTORIALS_DIR, is_valid_slug};
use report::Collector;
use tutorial::validate_tutorial_dir;

/// Resolve the repository root to an absolute path.
///
/// Existing paths are canonicalized; a missing path is made absolute
/// against the current directory so its findings still name a full path.
#[must_use]
pub fn resolve_root(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Validate the repository layout under `root`.
///
/// This is the primary public API. Warnings are written to `warnings_out`
/// as they are found; errors are returned in the report for the caller to
/// print with [`output::write_outcome`].
///
/// Checks run in a fixed order: top-level entries, the `tutorials`
/// directory, then each tool directory in `config.tool_dirs` order with its
/// tutorial directories sorted by name. A missing tool directory is
/// reported once and its subtree skipped.
///
/// # Errors
///
/// Returns `ValidateError::ListDir` if an existing tool directory cannot be
/// enumerated, or `ValidateError::Output` if a warning cannot be written.
pub fn validate_repo(
    root: &Path,
    config: &ValidationConfig,
    warnings_out: &mut dyn Write,
) -> Result<ValidationReport, ValidateError> {
    debug!(root = %root.display(), mode = ?config.mode, "validating repository");
    let mut findings = Collector::new(warnings_out);

    for entry in REQUIRED_ENTRIES {
        check_entry(&root.join(entry.path), entry.kind, &mut findings);
    }

    let tutorials_root = root.join(TUTORIALS_DIR);
    check_entry(&tutorials_root, EntryKind::Directory, &mut findings);

    for tool in &config.tool_dirs {
        let tool_root = tutorials_root.join(tool);
        check_entry(&tool_root, EntryKind::Directory, &mut findings);
        if !tool_root.is_dir() {
            debug!(tool = %tool, "tool directory missing, skipping");
            continue;
        }

        let tutorials = tutorial_dirs(&tool_root)?;
        debug!(tool = %tool, count = tutorials.len(), "found tutorial directories");

        for tut in tutorials {
            findings.tutorial_visited();
            let name_ok = tut
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_valid_slug);

            if !name_ok {
                findings.warn(Rule::InvalidName, tut.clone())?;
                if config.mode.is_strict() {
                    findings.error(Rule::InvalidName, tut);
                    continue;
                }
            }

            validate_tutorial_dir(&tut, &mut findings, config.mode)?;
        }
    }

    let report = findings.finish();
    info!(
        tutorials = report.tutorials_checked,
        errors = report.errors_count(),
        warnings = report.warnings_count(),
        "validation finished"
    );
    Ok(report)
}
