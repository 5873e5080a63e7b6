// crates/make_readme/src/lib.rs

use anyhow::{Context, Result};
use std::path::PathBuf;

use extract_marked_comments::processor::{extract_comments, DefaultCommentExtractor};
use find_candidate_files::find_candidate_files;
use readme_config::ReadmeConfig;
use write_readme::write_document;

pub mod cli;

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadmeSummary {
    pub files_scanned: usize,
    pub lines_written: usize,
    pub output_path: PathBuf,
}

/// Scans the tree and extracts the marked comments without writing anything.
pub fn collect_readme_lines(config: &ReadmeConfig) -> Result<Vec<String>> {
    collect(config).map(|(_, lines)| lines)
}

/// Runs the whole pipeline: scan, extract, then replace the output document.
///
/// Either the complete document is written or an error is returned and the
/// previous document (if any) is left untouched.
pub fn generate_readme(config: &ReadmeConfig) -> Result<ReadmeSummary> {
    let (files_scanned, lines) = collect(config)?;
    write_document(&config.output_path, &lines)?;
    log::info!(
        "wrote {} line(s) to {}",
        lines.len(),
        config.output_path.display()
    );
    Ok(ReadmeSummary {
        files_scanned,
        lines_written: lines.len(),
        output_path: config.output_path.clone(),
    })
}

fn collect(config: &ReadmeConfig) -> Result<(usize, Vec<String>)> {
    config.validate().context("invalid configuration")?;

    log::info!("scanning {}", config.root.display());
    let files = find_candidate_files(config)?;
    log::info!("{} candidate file(s)", files.len());

    let lines = extract_comments(&DefaultCommentExtractor, &files, &config.comment_marker)?;
    Ok((files.len(), lines))
}
