//! Lazy directory traversal yielding one `(directory, file names)` pair per
//! directory under the root.

use std::ffi::OsString;
use std::iter::Peekable;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Files directly inside `dir`. Anything that is not a directory (after
/// following symlinks) counts as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntries {
    pub dir: PathBuf,
    pub files: Vec<OsString>,
}

impl DirEntries {
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.dir.join(name))
    }
}

pub struct DirectoryWalker {
    root: PathBuf,
    inner: Peekable<walkdir::IntoIter>,
}

impl DirectoryWalker {
    /// Fails with [`Error::RootInaccessible`] when `root` does not exist or is
    /// not a directory. Symlinked subdirectories are listed but not entered.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let metadata = std::fs::metadata(&root)
            .map_err(|source| Error::RootInaccessible { root: root.clone(), source })?;
        if !metadata.is_dir() {
            return Err(Error::RootInaccessible {
                root,
                source: std::io::Error::other("not a directory"),
            });
        }

        // Files sort ahead of subdirectories so a directory's files directly
        // follow it in the depth-first stream.
        let inner = WalkDir::new(&root)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .peekable();
        Ok(Self { root, inner })
    }

    fn map_walk_error(&self, err: walkdir::Error) -> Error {
        if err.depth() == 0 || err.path() == Some(self.root.as_path()) {
            if let Some(io) = err.io_error() {
                return Error::RootInaccessible {
                    root: self.root.clone(),
                    source: std::io::Error::new(io.kind(), io.to_string()),
                };
            }
        }
        Error::Walk(err)
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<DirEntries>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(self.map_walk_error(err))),
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            trace!("Listing directory '{}'", entry.path().display());

            let depth = entry.depth();
            let mut files = Vec::new();
            while let Some(Ok(child)) = self.inner.peek() {
                if child.depth() != depth + 1 || child.file_type().is_dir() {
                    break;
                }
                let name = (!child.path().is_dir()).then(|| child.file_name().to_os_string());
                self.inner.next();
                files.extend(name);
            }
            return Some(Ok(DirEntries { dir: entry.into_path(), files }));
        }
    }
}
