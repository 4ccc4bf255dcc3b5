//! Validation report types.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{Finding, Rule, ValidateError};

/// Result of a validation run.
///
/// Findings are only ever appended. The run fails if and only if
/// `errors` is non-empty; warnings never affect the outcome.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Blocking findings, in discovery order.
    pub errors: Vec<Finding>,
    /// Advisory findings, in discovery order. Already printed during the walk.
    pub warnings: Vec<Finding>,
    /// Number of tutorial directories visited (valid or not).
    pub tutorials_checked: usize,
}

impl ValidationReport {
    /// Whether no errors were found.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status for this report: `0` when ok, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.ok())
    }

    /// Number of errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings found.
    #[must_use]
    pub fn warnings_count(&self) -> usize {
        self.warnings.len()
    }
}

/// Accumulates findings for one run.
///
/// Warnings are written to `out` the moment they are recorded so they
/// interleave with the walk; errors are held until the walk finishes.
pub struct Collector<'w> {
    report: ValidationReport,
    out: &'w mut dyn Write,
}

impl<'w> Collector<'w> {
    #[must_use]
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self {
            report: ValidationReport::default(),
            out,
        }
    }

    pub fn error(&mut self, rule: Rule, path: PathBuf) {
        self.report.errors.push(Finding::error(rule, path));
    }

    pub fn warn(&mut self, rule: Rule, path: PathBuf) -> Result<(), ValidateError> {
        let finding = Finding::warning(rule, path);
        writeln!(self.out, "{}", finding.format_human_readable())?;
        self.report.warnings.push(finding);
        Ok(())
    }

    pub fn tutorial_visited(&mut self) {
        self.report.tutorials_checked += 1;
    }

    #[must_use]
    pub fn finish(self) -> ValidationReport {
        self.report
    }
}
