//! Content rules for a single tutorial directory.

use std::path::Path;

use tracing::debug;

use crate::config::Mode;
use crate::error::{Rule, ValidateError};
use crate::layout::{
    TUTORIAL_ENVIRONMENT, TUTORIAL_MARKDOWN, TUTORIAL_NOTEBOOK, TUTORIAL_README,
};
use crate::report::Collector;

/// Which of the expected entries a tutorial directory contains.
///
/// Presence only: an entry of any kind with the expected name counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialContents {
    pub readme: bool,
    /// `tutorial.ipynb` or `tutorial.md` is present.
    pub content: bool,
    pub environment: bool,
}

impl TutorialContents {
    /// Probe `dir` for each expected entry. Independent of the directory name.
    #[must_use]
    pub fn probe(dir: &Path) -> Self {
        Self {
            readme: dir.join(TUTORIAL_README).exists(),
            content: dir.join(TUTORIAL_NOTEBOOK).exists()
                || dir.join(TUTORIAL_MARKDOWN).exists(),
            environment: dir.join(TUTORIAL_ENVIRONMENT).exists(),
        }
    }
}

/// Apply the README, content, and environment rules to one tutorial directory.
///
/// Every rule is evaluated; none short-circuits another.
///
/// # Errors
///
/// Returns `ValidateError::Output` if a warning cannot be written.
pub fn validate_tutorial_dir(
    dir: &Path,
    findings: &mut Collector<'_>,
    mode: Mode,
) -> Result<(), ValidateError> {
    let contents = TutorialContents::probe(dir);
    debug!(dir = %dir.display(), ?contents, "checking tutorial");

    if !contents.readme {
        findings.error(Rule::MissingReadme, dir.to_path_buf());
    }

    if !contents.content {
        findings.warn(Rule::MissingContent, dir.to_path_buf())?;
        if mode.is_strict() {
            findings.error(Rule::MissingContent, dir.to_path_buf());
        }
    }

    // Recommended only: never promoted to an error.
    if mode.is_strict() && !contents.environment {
        findings.warn(Rule::MissingEnvironment, dir.to_path_buf())?;
    }

    Ok(())
}
