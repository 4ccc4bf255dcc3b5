//! Final outcome formatting for validation reports.
//!
//! Warnings are written during the walk by the collector; this module
//! only prints what is left once the walk is over.

use std::io::Write;

use crate::report::ValidationReport;

/// Line printed when the repository has no errors.
pub const SUCCESS_LINE: &str = "OK: repository structure looks good.";

/// Write the outcome of a run: one `ERROR:` line per error, or the success line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok() {
        writeln!(writer, "{SUCCESS_LINE}")?;
        return Ok(());
    }

    for error in &report.errors {
        writeln!(writer, "{}", error.format_human_readable())?;
    }
    Ok(())
}
