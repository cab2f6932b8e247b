use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Persists decoded text as UTF-8. Output never starts with a byte-order mark.
#[derive(Debug, Clone, Copy)]
pub struct Writer {
    atomic: bool,
}

impl Writer {
    pub fn new(atomic: bool) -> Self {
        Self { atomic }
    }

    /// Overwrites the whole file at `path` with `content`, unchanged or not.
    pub fn write<P: AsRef<Path>>(&self, path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if self.atomic {
            write_file_atomic(path, content)
        } else {
            write_file(path, content)
        }
    }
}

/// Truncates and rewrites `path` in place. A crash mid-write leaves a
/// truncated file behind.
pub fn write_file<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::write(dest_path, content)
        .map_err(|source| Error::FileWrite { path: dest_path.to_path_buf(), source })
}

/// Writes `content` to a temporary file next to the file `dest_path` points to
/// and renames it over that file. Symlinks are resolved first so the link
/// itself survives, and the target keeps its permission bits. Hard-linked
/// files are written in place so every link sees the new content.
pub fn write_file_atomic<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let write_error =
        |source: std::io::Error| Error::FileWrite { path: dest_path.to_path_buf(), source };

    let target = fs::canonicalize(dest_path).unwrap_or_else(|_| dest_path.to_path_buf());
    let metadata = fs::metadata(&target).ok();

    if let Some(metadata) = &metadata {
        if has_other_links(metadata) {
            return write_file(dest_path, content);
        }
        // Renaming would sidestep a read-only target, so check it opens for writing.
        fs::OpenOptions::new().write(true).open(&target).map_err(write_error)?;
    }

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_error)?;
    tmp.write_all(content.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    if let Some(metadata) = metadata {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_error)?;
    }
    tmp.persist(&target).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &fs::Metadata) -> bool {
    false
}
