// crates/write_readme/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Joins the extracted lines into the final document: every line is followed
/// by a single `\n`, with no header or footer. No lines gives an empty string.
pub fn render_document<S: AsRef<str>>(lines: &[S]) -> String {
    let mut document = String::new();
    for line in lines {
        document.push_str(line.as_ref());
        document.push('\n');
    }
    document
}

/// Replaces `output_path` with the rendered document.
///
/// The document is written to a temporary file next to the destination and
/// renamed over it only once fully written, so the destination always holds
/// either the previous document or the new one. The parent directory must
/// already exist. When the destination is a symlink, the file it points to
/// is replaced and the link itself is left in place.
pub fn write_document<S: AsRef<str>>(output_path: &Path, lines: &[S]) -> Result<()> {
    let document = render_document(lines);
    let target = resolve_destination(output_path);
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // Dropping `temp` on any early return removes the temporary file.
    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    temp.write_all(document.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    copy_destination_permissions(&target, temp.path())
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    temp.persist(&target)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    log::debug!("wrote {} byte(s) to {}", document.len(), output_path.display());
    Ok(())
}

/// An existing destination is resolved through any symlinks so the rename
/// lands on the real file; a new destination is used as given.
fn resolve_destination(output_path: &Path) -> PathBuf {
    fs::canonicalize(output_path).unwrap_or_else(|_| output_path.to_path_buf())
}

/// The temporary file is created private (0600); give the result the
/// permissions the destination already had, or 0644 for a new file.
#[cfg(unix)]
fn copy_destination_permissions(destination: &Path, temp_path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = match fs::metadata(destination) {
        Ok(meta) => meta.permissions().mode(),
        Err(_) => 0o644,
    };
    fs::set_permissions(temp_path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn copy_destination_permissions(destination: &Path, temp_path: &Path) -> std::io::Result<()> {
    match fs::metadata(destination) {
        Ok(meta) => fs::set_permissions(temp_path, meta.permissions()),
        Err(_) => Ok(()),
    }
}
