use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use make_readme::cli::{build_cli, config_from_matches};
use make_readme::generate_readme;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let config = config_from_matches(&matches);
    let summary = generate_readme(&config)?;

    println!(
        "Wrote {} line(s) from {} file(s) to {}",
        summary.lines_written,
        summary.files_scanned,
        summary.output_path.display()
    );
    Ok(())
}

/// Logs go to stderr so stdout only carries the run summary. `RUST_LOG`
/// wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
