// crates/extract_marked_comments/src/processor/file_processor.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::utils::marker_utils::extract_comments_from_str;

/// Trait that abstracts reading marked comments out of one file.
pub trait CommentExtractor {
    /// Returns the comments found in `file_path`, in line order.
    fn extract_file(&self, file_path: &Path, marker: &str) -> Result<Vec<String>>;
}

/// Reads the whole file as UTF-8 text and extracts its marked lines.
///
/// The file handle is opened and closed within the call. A file that cannot
/// be opened or is not valid UTF-8 is an error.
pub struct DefaultCommentExtractor;

impl CommentExtractor for DefaultCommentExtractor {
    fn extract_file(&self, file_path: &Path, marker: &str) -> Result<Vec<String>> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("failed to read {}", file_path.display()))?;
        Ok(extract_comments_from_str(&content, marker))
    }
}

/// Runs `extractor` over `file_paths` in order and concatenates the results.
///
/// Stops at the first file that fails; no partial result is returned.
pub fn extract_comments<P: AsRef<Path>>(
    extractor: &dyn CommentExtractor,
    file_paths: &[P],
    marker: &str,
) -> Result<Vec<String>> {
    let mut comments = Vec::new();
    for path in file_paths {
        let path = path.as_ref();
        let found = extractor.extract_file(path, marker)?;
        log::debug!("{}: {} line(s)", path.display(), found.len());
        comments.extend(found);
    }
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Dummy extractor that always returns an error.
    struct FailingExtractor;

    impl CommentExtractor for FailingExtractor {
        fn extract_file(&self, _file_path: &Path, _marker: &str) -> Result<Vec<String>> {
            Err(anyhow!("Simulated extraction failure"))
        }
    }

    /// Records the order files are visited in and returns the file name as the only comment.
    struct RecordingExtractor {
        seen: RefCell<Vec<PathBuf>>,
    }

    impl CommentExtractor for RecordingExtractor {
        fn extract_file(&self, file_path: &Path, _marker: &str) -> Result<Vec<String>> {
            self.seen.borrow_mut().push(file_path.to_path_buf());
            Ok(vec![file_path.display().to_string()])
        }
    }

    #[test]
    fn test_default_extractor_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "int x; //# Describes x\nint y;\n").unwrap();
        let lines = DefaultCommentExtractor
            .extract_file(temp_file.path(), "//#")
            .unwrap();
        assert_eq!(lines, vec!["Describes x"]);
    }

    #[test]
    fn test_default_extractor_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.h");
        let err = DefaultCommentExtractor.extract_file(&missing, "//#").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(err.to_string().contains("gone.h"));
    }

    #[test]
    fn test_default_extractor_rejects_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"//# ok\n\xff\xfe //# bad\n").unwrap();
        assert!(DefaultCommentExtractor.extract_file(temp_file.path(), "//#").is_err());
    }

    #[test]
    fn test_failing_extractor_stops_the_run() {
        let paths = vec![PathBuf::from("a.h"), PathBuf::from("b.h")];
        let result = extract_comments(&FailingExtractor, &paths, "//#");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_comments_preserves_list_order() {
        let extractor = RecordingExtractor {
            seen: RefCell::new(Vec::new()),
        };
        let paths = vec![PathBuf::from("z.h"), PathBuf::from("a.cpp"), PathBuf::from("m.h")];
        let lines = extract_comments(&extractor, &paths, "//#").unwrap();
        assert_eq!(*extractor.seen.borrow(), paths);
        assert_eq!(lines, vec!["z.h", "a.cpp", "m.h"]);
    }

    #[test]
    fn test_extract_comments_empty_list() {
        let paths: Vec<PathBuf> = Vec::new();
        let lines = extract_comments(&DefaultCommentExtractor, &paths, "//#").unwrap();
        assert!(lines.is_empty());
    }
}
