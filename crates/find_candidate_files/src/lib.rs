// crates/find_candidate_files/src/lib.rs

use anyhow::{bail, Context, Result};
use filter_candidate_names::NameFilter;
use readme_config::ReadmeConfig;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walks `config.root` and returns every file whose name passes the
/// configured name filter, skipping the excluded directories entirely.
///
/// The order of the result is the order comments end up in the generated
/// document, so it is made independent of the file system: inside each
/// directory the files come first, sorted by name, and only then are the
/// subdirectories descended into, also sorted by name.
///
/// Any directory that cannot be read fails the whole scan.
pub fn find_candidate_files(config: &ReadmeConfig) -> Result<Vec<PathBuf>> {
    let filter = NameFilter::from_config(config);
    let finder = CandidateFinder::new(&config.root, &config.excluded_directory_names, &filter);
    finder.find()
}

// === Private Implementation === //

struct CandidateFinder<'a> {
    root: &'a Path,
    excluded_dirs: &'a [String],
    filter: &'a NameFilter,
}

impl<'a> CandidateFinder<'a> {
    fn new(root: &'a Path, excluded_dirs: &'a [String], filter: &'a NameFilter) -> Self {
        Self {
            root,
            excluded_dirs,
            filter,
        }
    }

    fn find(&self) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(self.root)
            .with_context(|| format!("failed to scan {}", self.root.display()))?;
        if !metadata.is_dir() {
            bail!("failed to scan {}: not a directory", self.root.display());
        }

        let walker = WalkDir::new(self.root)
            .follow_links(false)
            .sort_by(files_before_directories)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to scan {}", self.root.display()))?;
            if !is_file_entry(&entry) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.filter.accepts(&name) {
                log::debug!("candidate: {}", entry.path().display());
                candidates.push(entry.into_path());
            }
        }
        Ok(candidates)
    }

    /// The scan root itself is never pruned, only directories below it.
    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let excluded = entry
            .file_name()
            .to_str()
            .map(|name| self.excluded_dirs.iter().any(|dir| dir == name))
            .unwrap_or(false);
        if excluded {
            log::debug!("skipping directory: {}", entry.path().display());
        }
        excluded
    }
}

fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Every non-directory entry is a file, including symlinks that cannot be
/// resolved; those fail later when read instead of vanishing from the
/// document. Links to directories are neither followed nor treated as files.
fn is_file_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    !(entry.path_is_symlink() && entry.path().is_dir())
}
