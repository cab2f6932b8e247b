use std::path::PathBuf;

use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    /// The file was selected, decoded and written back.
    Rewrite {
        path: PathBuf,
        encoding: &'static Encoding,
        replacements: usize,
        fallback: bool,
    },
    /// The file name does not end with an allow-listed suffix.
    Ignore { path: PathBuf },
}

impl FileOperation {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOperation::Rewrite { path, .. } | FileOperation::Ignore { path } => path,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (nothing was written)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            FileOperation::Rewrite { path, encoding, replacements, fallback } => {
                let source = if *fallback {
                    format!("{} (fallback)", encoding.name())
                } else {
                    encoding.name().to_string()
                };
                match *replacements {
                    0 => format!(
                        "{}Rewriting '{}' from {} (no occurrences)",
                        prefix,
                        path.display(),
                        source
                    ),
                    1 => format!(
                        "{}Rewriting '{}' from {} (1 occurrence replaced)",
                        prefix,
                        path.display(),
                        source
                    ),
                    n => format!(
                        "{}Rewriting '{}' from {} ({} occurrences replaced)",
                        prefix,
                        path.display(),
                        source,
                        n
                    ),
                }
            }
            FileOperation::Ignore { path } => {
                format!("{}Ignoring '{}' (extension not selected)", prefix, path.display())
            }
        }
    }
}
