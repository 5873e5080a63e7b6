// crates/readme_config/src/lib.rs

//! Run configuration shared by every stage of the README generator.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Marker separating code from documentation text on a source line.
pub const DEFAULT_COMMENT_MARKER: &str = "//#";

/// A file is scanned only if its name contains one of these.
pub const DEFAULT_REQUIRED_NAME_SUBSTRINGS: &[&str] = &[".cpp", ".h"];

/// A file is skipped if its name contains any of these (editor swap files, Qt moc output).
pub const DEFAULT_FORBIDDEN_NAME_SUBSTRINGS: &[&str] = &[".swp", "moc_"];

/// Directories that are never descended into.
pub const DEFAULT_EXCLUDED_DIRECTORY_NAMES: &[&str] = &[".git"];

pub const DEFAULT_OUTPUT_PATH: &str = "./bin/README";

pub const DEFAULT_ROOT: &str = ".";

/// Configuration for one run, built once at startup and passed by reference
/// into the scanner, the extractor and the writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadmeConfig {
    /// Directory the scan starts from.
    pub root: PathBuf,
    pub required_name_substrings: Vec<String>,
    pub forbidden_name_substrings: Vec<String>,
    /// Matched by exact name; the whole subtree is pruned.
    pub excluded_directory_names: Vec<String>,
    pub comment_marker: String,
    /// Destination document, replaced wholesale on every run.
    pub output_path: PathBuf,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            required_name_substrings: to_owned_list(DEFAULT_REQUIRED_NAME_SUBSTRINGS),
            forbidden_name_substrings: to_owned_list(DEFAULT_FORBIDDEN_NAME_SUBSTRINGS),
            excluded_directory_names: to_owned_list(DEFAULT_EXCLUDED_DIRECTORY_NAMES),
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ReadmeConfig {
    /// Rejects configurations that cannot produce a meaningful run.
    ///
    /// An empty marker would match every line and leave nothing to split on;
    /// an empty excluded directory name can never match a real directory and
    /// is almost certainly a mistake on the command line.
    pub fn validate(&self) -> Result<()> {
        if self.comment_marker.is_empty() {
            bail!("comment marker must not be empty");
        }
        if self.excluded_directory_names.iter().any(|name| name.is_empty()) {
            bail!("excluded directory names must not be empty");
        }
        Ok(())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
