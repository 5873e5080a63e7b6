// crates/make_readme/src/cli.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use readme_config::ReadmeConfig;

/// Command-line definition. Every flag is optional; with no arguments the
/// compiled-in defaults from `readme_config` are used.
pub fn build_cli() -> Command {
    Command::new("make_readme")
        .version("0.1.0")
        .about("Collects marked comments from source files into a README")
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .help("Directory to scan (default: current directory)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .help("Document to write; its directory must already exist"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .num_args(1)
                .help("Token separating code from documentation on a line"),
        )
        .arg(
            Arg::new("accept")
                .long("accept")
                .action(ArgAction::Append)
                .help("Scan files whose name contains this substring (repeatable)"),
        )
        .arg(
            Arg::new("reject")
                .long("reject")
                .action(ArgAction::Append)
                .help("Skip files whose name contains this substring (repeatable)"),
        )
        .arg(
            Arg::new("skip_dir")
                .long("skip-dir")
                .action(ArgAction::Append)
                .help("Never descend into directories with this name (repeatable)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

/// Builds the run configuration from parsed arguments. A repeatable flag,
/// when given at all, replaces the default list rather than extending it.
pub fn config_from_matches(matches: &ArgMatches) -> ReadmeConfig {
    let mut config = ReadmeConfig::default();

    if let Some(root) = matches.get_one::<String>("root") {
        config.root = PathBuf::from(root);
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output_path = PathBuf::from(output);
    }
    if let Some(marker) = matches.get_one::<String>("marker") {
        config.comment_marker = marker.clone();
    }
    if let Some(values) = many(matches, "accept") {
        config.required_name_substrings = values;
    }
    if let Some(values) = many(matches, "reject") {
        config.forbidden_name_substrings = values;
    }
    if let Some(values) = many(matches, "skip_dir") {
        config.excluded_directory_names = values;
    }
    config
}

fn many(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
}
