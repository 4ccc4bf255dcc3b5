//! Finding and error types for repository validation.

use std::path::PathBuf;

use thiserror::Error;

/// Whether a finding blocks success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks success; the run exits non-zero.
    Error,
    /// Informational only; never affects the exit status.
    Warning,
}

impl Severity {
    /// Line prefix used on the output stream.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }
}

/// The layout rule a finding was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rule {
    /// A required file is absent or not a regular file.
    MissingFile,
    /// A required directory is absent or not a directory.
    MissingDirectory,
    /// A tutorial directory has no `README.md`.
    MissingReadme,
    /// A tutorial directory has neither `tutorial.ipynb` nor `tutorial.md`.
    MissingContent,
    /// A tutorial directory has no `environment.yml` (strict mode only).
    MissingEnvironment,
    /// A tutorial directory name is not a slug.
    InvalidName,
}

/// A single problem found in the repository layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Finding {
    pub severity: Severity,
    pub rule: Rule,
    /// The offending path (absolute when the root was resolved).
    pub path: PathBuf,
}

impl Finding {
    #[must_use]
    pub fn error(rule: Rule, path: PathBuf) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            path,
        }
    }

    #[must_use]
    pub fn warning(rule: Rule, path: PathBuf) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            path,
        }
    }

    /// Human-readable message, always naming the path.
    #[must_use]
    pub fn message(&self) -> String {
        let p = self.path.display();
        match (self.rule, self.severity) {
            (Rule::MissingFile, _) => format!("Missing required file: {p}"),
            (Rule::MissingDirectory, _) => format!("Missing required directory: {p}"),
            (Rule::MissingReadme, _) => format!("{p}: missing README.md"),
            (Rule::MissingContent, Severity::Warning) => {
                format!("{p}: expected tutorial.ipynb or tutorial.md")
            }
            (Rule::MissingContent, Severity::Error) => {
                format!("{p}: missing tutorial content (tutorial.ipynb or tutorial.md)")
            }
            (Rule::MissingEnvironment, _) => {
                format!("{p}: environment.yml recommended (strict mode expects it).")
            }
            (Rule::InvalidName, Severity::Warning) => {
                format!("{p}: directory name should be a slug (lowercase, digits, hyphens).")
            }
            (Rule::InvalidName, Severity::Error) => {
                format!("{p}: invalid tutorial directory name")
            }
        }
    }

    /// Format the finding as one output line: `{LABEL}: {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {}", self.severity.label(), self.message())
    }
}

/// Operational failures that stop a run before it can report.
///
/// These are distinct from `Finding`s: a finding describes the repository,
/// a `ValidateError` means the validator itself could not proceed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidateError {
    /// A tool directory could not be enumerated.
    #[error("failed to list {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A finding could not be written to the output stream.
    #[error("failed to write findings: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_missing_file() {
        let finding = Finding::error(Rule::MissingFile, PathBuf::from("/repo/README.md"));
        assert_eq!(
            finding.format_human_readable(),
            "ERROR: Missing required file: /repo/README.md"
        );
    }

    #[test]
    fn test_content_message_depends_on_severity() {
        let path = PathBuf::from("/repo/tutorials/molsysmt/quickstart");
        let warning = Finding::warning(Rule::MissingContent, path.clone());
        let error = Finding::error(Rule::MissingContent, path);

        assert_eq!(
            warning.format_human_readable(),
            "WARNING: /repo/tutorials/molsysmt/quickstart: expected tutorial.ipynb or tutorial.md"
        );
        assert!(error.format_human_readable().starts_with("ERROR: "));
        assert!(error.message().contains("missing tutorial content"));
    }

    #[test]
    fn test_invalid_name_messages() {
        let path = PathBuf::from("tutorials/molsysmt/Shapes_Demo");
        let warning = Finding::warning(Rule::InvalidName, path.clone());
        let error = Finding::error(Rule::InvalidName, path);

        assert!(warning.message().contains("should be a slug"));
        assert!(warning.message().starts_with("tutorials/molsysmt/Shapes_Demo"));
        assert_eq!(
            error.message(),
            "tutorials/molsysmt/Shapes_Demo: invalid tutorial directory name"
        );
    }
}
