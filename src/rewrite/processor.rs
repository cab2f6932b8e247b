use std::path::Path;

use log::trace;

use crate::config::Config;
use crate::error::Result;
use crate::ioutils::Writer;
use crate::loader::TextLoader;

use super::operation::FileOperation;

/// Runs load, substitute and write for a single file.
pub struct FileProcessor<'a> {
    config: &'a Config,
    loader: TextLoader<'a>,
    writer: Writer,
}

impl<'a> FileProcessor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            loader: TextLoader::new(config.encodings()),
            writer: Writer::new(config.atomic_writes()),
        }
    }

    /// Whether the file name at the end of `path` is in the allow-list.
    pub fn is_selected<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref()
            .file_name()
            .is_some_and(|name| self.config.extensions().accepts(name))
    }

    /// Processes one file. Selected files are always written back, even when
    /// the substitution found nothing, so their encoding is normalized.
    ///
    /// # Arguments
    /// * `path` - The file to process
    ///
    /// # Returns
    /// * `Result<FileOperation>` - What happened to the file, or the first
    ///   read, decode or write error
    pub fn process<P: AsRef<Path>>(&self, path: P) -> Result<FileOperation> {
        let path = path.as_ref();
        if !self.is_selected(path) {
            return Ok(FileOperation::Ignore { path: path.to_path_buf() });
        }

        let decoded = self.loader.load(path)?;
        let substitution = self.config.replacement().apply(&decoded.text);
        trace!(
            "'{}': {} occurrence(s) of '{}'",
            path.display(),
            substitution.replacements,
            self.config.replacement().search()
        );

        if !self.config.dry_run() {
            self.writer.write(path, &substitution.text)?;
        }

        let fallback = self.config.encodings().first() != Some(&decoded.encoding);
        Ok(FileOperation::Rewrite {
            path: path.to_path_buf(),
            encoding: decoded.encoding,
            replacements: substitution.replacements,
            fallback,
        })
    }
}
