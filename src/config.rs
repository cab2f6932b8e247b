//! Run configuration.
//!
//! Everything a run needs is gathered into one immutable [`Config`] value at
//! startup and borrowed by every component afterwards. The replacement rule,
//! extension list and candidate encodings come from [`crate::constants`].

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::constants::{
    DEFAULT_ROOT, ENCODING_LABELS, EXTENSIONS, SOURCE_PACKAGE, TARGET_PACKAGE,
};
use crate::error::{Error, Result};
use crate::filter::ExtensionSet;
use crate::substitute::Replacement;

#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    replacement: Replacement,
    extensions: ExtensionSet,
    encodings: Vec<&'static Encoding>,
    dry_run: bool,
    atomic_writes: bool,
}

impl Config {
    /// Builds the compiled-in configuration rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config = Self {
            root: root.as_ref().to_path_buf(),
            replacement: Replacement::new(SOURCE_PACKAGE, TARGET_PACKAGE)?,
            extensions: ExtensionSet::new(EXTENSIONS.iter().copied())?,
            encodings: encodings_for_labels(ENCODING_LABELS)?,
            dry_run: false,
            atomic_writes: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::new`] using [`DEFAULT_ROOT`].
    pub fn with_default_root() -> Result<Self> {
        Self::new(DEFAULT_ROOT)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_encodings(mut self, encodings: Vec<&'static Encoding>) -> Self {
        self.encodings = encodings;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.encodings.is_empty() {
            return Err(Error::ConfigValidation(
                "at least one candidate encoding is required".into(),
            ));
        }
        if self.replacement.search().is_empty() {
            return Err(Error::ConfigValidation("search literal must not be empty".into()));
        }
        if self.extensions.suffixes().is_empty() {
            return Err(Error::ConfigValidation("extension list must not be empty".into()));
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn encodings(&self) -> &[&'static Encoding] {
        &self.encodings
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

/// Resolves WHATWG encoding labels in order.
pub fn encodings_for_labels(labels: &[&str]) -> Result<Vec<&'static Encoding>> {
    labels
        .iter()
        .map(|label| {
            Encoding::for_label(label.as_bytes()).ok_or_else(|| {
                Error::ConfigValidation(format!("unknown encoding label '{label}'"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_in_defaults() {
        let config = Config::new("project").unwrap();
        assert_eq!(config.root(), Path::new("project"));
        assert_eq!(config.replacement().search(), "com.app.tool.excel");
        assert_eq!(config.replacement().replace(), "com.gmrfid.excel");
        assert_eq!(config.extensions().suffixes().len(), 6);
        assert_eq!(config.encodings(), &[encoding_rs::UTF_8, encoding_rs::GBK]);
        assert!(!config.dry_run());
        assert!(config.atomic_writes());
    }

    #[test]
    fn default_root_comes_from_constants() {
        let config = Config::with_default_root().unwrap();
        assert_eq!(config.root(), Path::new(DEFAULT_ROOT));
    }

    #[test]
    fn builder_overrides_run_options() {
        let config = Config::new("project").unwrap().with_dry_run(true).with_atomic_writes(false);
        assert!(config.dry_run());
        assert!(!config.atomic_writes());
    }

    #[test]
    fn custom_rule_and_extensions() {
        let config = Config::new("project")
            .unwrap()
            .with_replacement(Replacement::new("org.old", "org.new").unwrap())
            .with_extensions(ExtensionSet::new([".kt"]).unwrap());
        assert!(config.validate().is_ok());
        assert_eq!(config.replacement().apply("import org.old.A").text, "import org.new.A");
        assert!(config.extensions().accepts("Main.kt"));
        assert!(!config.extensions().accepts("Main.java"));
    }

    #[test]
    fn rejects_empty_encoding_list() {
        let config = Config::new("project").unwrap().with_encodings(Vec::new());
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn unknown_encoding_label_is_an_error() {
        assert!(encodings_for_labels(&["utf-8", "klingon"]).is_err());
        assert_eq!(
            encodings_for_labels(&["utf8", "gb2312"]).unwrap(),
            vec![encoding_rs::UTF_8, encoding_rs::GBK]
        );
    }
}
