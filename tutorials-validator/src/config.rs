//! Configuration types for a validation run.
//!
//! A `ValidationConfig` is built once at startup and only read afterwards.

/// Tool directories expected under `tutorials/`, in reporting order.
pub const TOOL_DIRS: &[&str] = &["molsysmt", "molsysviewer", "molsys-ai"];

/// How strictly findings are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Mode {
    /// Local/dev runs: advisory findings stay warnings (default).
    #[default]
    Normal,
    /// CI runs: missing tutorial content and non-slug directory names become errors.
    /// Invalid-named directories are not content-checked.
    Strict,
}

impl Mode {
    /// Map the `--strict` flag onto a mode.
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Normal }
    }

    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

/// Validation config for one run over a repository.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Finding classification mode.
    pub mode: Mode,
    /// Tool directory names under `tutorials/`, visited in this order.
    pub tool_dirs: Vec<String>,
}

impl ValidationConfig {
    /// Config for the standard tool directory set in the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            tool_dirs: TOOL_DIRS.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}
