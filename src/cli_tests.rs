//! Tests for CLI parsing and derived settings.

use super::*;
use rstest::rstest;

#[test]
fn cli_parses_positional_arguments() {
    let cli = Cli::parse_from(["release-manifest", "1.2.3", "dist"]);
    assert_eq!(cli.release_version, "1.2.3");
    assert_eq!(cli.base, Utf8PathBuf::from("dist"));
    assert!(cli.output.is_none());
    assert!(!cli.skip_stray_files);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_accepts_empty_version() {
    let cli = Cli::parse_from(["release-manifest", "", "dist"]);
    assert_eq!(cli.release_version, "");
}

#[test]
fn cli_accepts_version_with_whitespace() {
    let cli = Cli::parse_from(["release-manifest", "  1.2.3 beta ", "dist"]);
    assert_eq!(cli.release_version, "  1.2.3 beta ");
}

#[test]
fn cli_accepts_hyphenated_version_after_separator() {
    let cli = Cli::parse_from(["release-manifest", "--", "-rc1", "dist"]);
    assert_eq!(cli.release_version, "-rc1");
}

#[rstest]
#[case::prerelease_suffix("-rc1")]
#[case::negative_number("-1")]
#[case::long_flag_shape("--beta")]
fn cli_accepts_version_starting_with_hyphen(#[case] version: &str) {
    let cli = Cli::try_parse_from(["release-manifest", version, "dist"])
        .expect("hyphenated version should parse");
    assert_eq!(cli.release_version, version);
    assert_eq!(cli.base, Utf8PathBuf::from("dist"));
    assert!(!cli.quiet);
}

#[test]
fn options_before_hyphenated_version_still_apply() {
    let cli = Cli::parse_from([
        "release-manifest",
        "-v",
        "--output",
        "out/manifest.json",
        "-rc1",
        "dist",
    ]);
    assert_eq!(cli.verbosity, 1);
    assert_eq!(cli.output, Some(Utf8PathBuf::from("out/manifest.json")));
    assert_eq!(cli.release_version, "-rc1");
}

#[rstest]
#[case::no_arguments(&["release-manifest"])]
#[case::missing_base(&["release-manifest", "1.2.3"])]
#[case::surplus_argument(&["release-manifest", "1.2.3", "dist", "extra"])]
fn cli_rejects_wrong_positional_count(#[case] args: &[&str]) {
    Cli::try_parse_from(args).expect_err("expected clap to reject the arguments");
}

#[test]
fn cli_parses_output_file() {
    let cli = Cli::parse_from(["release-manifest", "-o", "out/manifest.json", "1.2.3", "dist"]);
    assert_eq!(cli.output, Some(Utf8PathBuf::from("out/manifest.json")));
    assert_eq!(
        cli.output_target(),
        OutputTarget::File(Utf8PathBuf::from("out/manifest.json"))
    );
}

#[test]
fn output_target_defaults_to_stdout() {
    let cli = Cli::parse_from(["release-manifest", "1.2.3", "dist"]);
    assert_eq!(cli.output_target(), OutputTarget::Stdout);
}

#[rstest]
#[case::default(&["release-manifest", "1", "dist"], StrayEntryPolicy::Reject)]
#[case::skip(&["release-manifest", "--skip-stray-files", "1", "dist"], StrayEntryPolicy::Skip)]
fn build_options_follow_stray_flag(#[case] args: &[&str], #[case] expected: StrayEntryPolicy) {
    let cli = Cli::parse_from(args);
    assert_eq!(cli.build_options().stray_entries, expected);
}

#[rstest]
#[case::default(&["release-manifest", "1", "dist"], LevelFilter::Warn)]
#[case::verbose(&["release-manifest", "-v", "1", "dist"], LevelFilter::Info)]
#[case::very_verbose(&["release-manifest", "-vv", "1", "dist"], LevelFilter::Debug)]
#[case::trace(&["release-manifest", "-vvvv", "1", "dist"], LevelFilter::Trace)]
#[case::quiet(&["release-manifest", "-q", "1", "dist"], LevelFilter::Error)]
fn log_level_follows_verbosity_flags(#[case] args: &[&str], #[case] expected: LevelFilter) {
    let cli = Cli::parse_from(args);
    assert_eq!(cli.log_level(), expected);
}

#[test]
fn cli_rejects_quiet_with_verbose() {
    Cli::try_parse_from(["release-manifest", "-q", "-v", "1", "dist"])
        .expect_err("expected clap to reject conflicting flags");
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
