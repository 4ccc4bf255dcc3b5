// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: findings go to stdout, operational errors to stderr.
// - exit: the exit status is the CI contract (0 valid, 1 errors found).
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tutorials_validator::{Mode, ValidationConfig, output, resolve_root, validate_repo};

#[derive(Debug, Parser)]
#[command(
    name = "tutorials-validator",
    version,
    about = "Validate molsyssuite-tutorials repository structure."
)]
struct Cli {
    /// Repository root
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Stricter checks (recommended for CI).
    #[arg(long)]
    strict: bool,

    /// Diagnostic logging on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let root = resolve_root(&cli.repo_root);
    let config = ValidationConfig::new(Mode::from_strict(cli.strict));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = validate_repo(&root, &config, &mut out)
        .with_context(|| format!("validating {}", root.display()))?;
    output::write_outcome(&report, &mut out)?;
    out.flush()?;

    Ok(report.exit_code())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_current_dir_normal_mode() {
        let cli = Cli::try_parse_from(["tutorials-validator"]).unwrap();
        assert_eq!(cli.repo_root, PathBuf::from("."));
        assert!(!cli.strict);
        assert_eq!(cli.verbose, 0);
        assert_eq!(Mode::from_strict(cli.strict), Mode::Normal);
    }

    #[test]
    fn test_parses_root_strict_and_verbosity() {
        let cli = Cli::try_parse_from([
            "tutorials-validator",
            "--repo-root",
            "/srv/tutorials",
            "--strict",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.repo_root, PathBuf::from("/srv/tutorials"));
        assert_eq!(Mode::from_strict(cli.strict), Mode::Strict);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tutorials-validator", "some/path"]).is_err());
    }

    #[test]
    fn test_run_maps_report_to_exit_status() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["tutorials-validator", "--repo-root", root]).unwrap();
        assert_eq!(run(&cli).unwrap(), 1);

        for rel in [
            "README.md",
            "CONTRIBUTING.md",
            "templates/tutorial-README.md",
            "templates/environment.yml",
        ] {
            let path = tmp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        for tool in tutorials_validator::TOOL_DIRS {
            fs::create_dir_all(tmp.path().join("tutorials").join(tool)).unwrap();
        }

        let strict =
            Cli::try_parse_from(["tutorials-validator", "--repo-root", root, "--strict"]).unwrap();
        assert_eq!(run(&strict).unwrap(), 0);
    }
}
