use std::ffi::OsStr;

use crate::error::{Error, Result};

/// Case-sensitive allow-list of file name suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        if suffixes.is_empty() {
            return Err(Error::ConfigValidation("extension list must not be empty".into()));
        }
        if suffixes.iter().any(|s| s.is_empty()) {
            return Err(Error::ConfigValidation(
                "extension list must not contain empty suffixes".into(),
            ));
        }
        Ok(Self { suffixes })
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns true when `file_name` ends with one of the suffixes. The match is
    /// done on raw bytes so names that are not valid Unicode are still checked.
    pub fn accepts<N: AsRef<OsStr>>(&self, file_name: N) -> bool {
        let name = file_name.as_ref().as_encoded_bytes();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
    }
}
