//! Release manifest CLI entrypoint.
//!
//! Builds the manifest for a release from per-artefact checksum files and
//! writes it as JSON. Diagnostics go to standard error; standard output only
//! ever carries a complete manifest.

use clap::Parser;
use env_logger::Env;
use release_manifest::artefact::release_version::ReleaseVersion;
use release_manifest::builder::build_manifest;
use release_manifest::cli::Cli;
use release_manifest::error::{ManifestError, Result};
use release_manifest::output::{emit_manifest, render_manifest_json};
use std::error::Error;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Installs the stderr logger; `RUST_LOG` takes precedence over CLI flags.
fn init_logging(cli: &Cli) {
    let default_filter = cli.log_level().to_string().to_lowercase();
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let version = ReleaseVersion::new(cli.release_version.as_str());
    let manifest = build_manifest(version, &cli.base, &cli.build_options())?;
    let rendered = render_manifest_json(&manifest)?;
    emit_manifest(&rendered, &cli.output_target(), stdout)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {err}"));
            let mut source = err.source();
            while let Some(cause) = source {
                write_stderr_line(stderr, format!("  caused by: {cause}"));
                source = cause.source();
            }
            if let Some(hint) = recovery_hint(&err) {
                write_stderr_line(stderr, format!("hint: {hint}"));
            }
            1
        }
    }
}

/// CLI-level advice for errors the user can resolve with a flag.
fn recovery_hint(err: &ManifestError) -> Option<&'static str> {
    match err {
        ManifestError::NotADirectory { .. } => {
            Some("pass --skip-stray-files to ignore files placed directly inside BASE")
        }
        _ => None,
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(base: &Utf8PathBuf, extra: &[&str]) -> Cli {
        let mut args = vec!["release-manifest"];
        args.extend_from_slice(extra);
        args.extend(["1.2.3", base.as_str()]);
        Cli::parse_from(args)
    }

    fn temp_base() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("non-UTF8 path");
        (temp, base)
    }

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_chain_and_returns_one() {
        let err = ManifestError::ReadChecksum {
            path: Utf8PathBuf::from("dist/linux/agent.sha256"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let text = String::from_utf8(stderr).expect("stderr should be UTF-8");
        assert!(text.starts_with("error: failed to read checksum file dist/linux/agent.sha256"));
        assert!(text.contains("caused by: denied"));
    }

    #[test]
    fn stray_entry_error_is_followed_by_flag_hint() {
        let err = ManifestError::NotADirectory {
            path: Utf8PathBuf::from("dist/README.md"),
        };
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let text = String::from_utf8(stderr).expect("stderr should be UTF-8");
        assert_eq!(
            text,
            concat!(
                "error: expected a directory at dist/README.md\n",
                "hint: pass --skip-stray-files to ignore files placed directly inside BASE\n",
            )
        );
    }

    #[test]
    fn io_errors_carry_no_flag_hint() {
        let err = ManifestError::WriteStdout {
            source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        };
        let mut stderr = Vec::new();
        exit_code_for_run_result(Err(err), &mut stderr);

        let text = String::from_utf8(stderr).expect("stderr should be UTF-8");
        assert!(!text.contains("hint:"));
    }

    #[test]
    fn run_prints_manifest_to_stdout() {
        let (_temp, base) = temp_base();
        fs::create_dir(base.join("linux")).expect("mkdir");
        fs::write(base.join("linux/agent.sha256"), "deadbeef\n").expect("write");

        let mut stdout = Vec::new();
        run(&cli_for(&base, &[]), &mut stdout).expect("run should succeed");

        let text = String::from_utf8(stdout).expect("stdout should be UTF-8");
        assert_eq!(
            text,
            "{\n  \"version\": \"1.2.3\",\n  \"checksums\": {\n    \"agent\": \"deadbeef\"\n  }\n}\n"
        );
    }

    #[test]
    fn run_writes_nothing_when_build_fails() {
        let (_temp, base) = temp_base();
        fs::write(base.join("stray.txt"), "x").expect("write");

        let mut stdout = Vec::new();
        let result = run(&cli_for(&base, &[]), &mut stdout);
        assert!(result.is_err());
        assert!(stdout.is_empty());
    }
}
