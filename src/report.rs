use serde::Serialize;

use crate::rewrite::operation::FileOperation;

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub directories: usize,
    pub files_seen: usize,
    /// Files selected by the extension filter and decoded.
    pub files_matched: usize,
    /// Files actually written back. Always zero in a dry run.
    pub files_rewritten: usize,
    /// Files holding at least one occurrence of the search literal.
    pub files_changed: usize,
    pub replacements: usize,
    pub fallback_decodes: usize,
    pub dry_run: bool,
}

impl Report {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, ..Default::default() }
    }

    pub fn record(&mut self, operation: &FileOperation) {
        self.files_seen += 1;
        if let FileOperation::Rewrite { replacements, fallback, .. } = operation {
            self.files_matched += 1;
            if !self.dry_run {
                self.files_rewritten += 1;
            }
            self.replacements += replacements;
            if *replacements > 0 {
                self.files_changed += 1;
            }
            if *fallback {
                self.fallback_decodes += 1;
            }
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
