//! Literal search-and-replace over decoded file contents.

use crate::error::{Error, Result};

/// An immutable `(search, replace)` pair applied to every selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    search: String,
    replace: String,
}

/// Text produced by [`Replacement::apply`] together with the number of
/// occurrences that were replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub replacements: usize,
}

impl Substitution {
    pub fn is_changed(&self) -> bool {
        self.replacements > 0
    }
}

impl Replacement {
    /// Builds a replacement rule. An empty search literal is rejected since it
    /// would match between every character.
    pub fn new<S: Into<String>, R: Into<String>>(search: S, replace: R) -> Result<Self> {
        let search = search.into();
        if search.is_empty() {
            return Err(Error::ConfigValidation("search literal must not be empty".into()));
        }
        Ok(Self { search, replace: replace.into() })
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    /// Whether the replacement text contains the search literal, in which case
    /// applying the rule twice keeps growing the text.
    pub fn reintroduces_search(&self) -> bool {
        self.replace.contains(self.search.as_str())
    }

    /// Replaces every non-overlapping occurrence of the search literal, scanning
    /// left to right.
    pub fn apply(&self, text: &str) -> Substitution {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut replacements = 0;

        for (start, matched) in text.match_indices(self.search.as_str()) {
            out.push_str(&text[last..start]);
            out.push_str(&self.replace);
            last = start + matched.len();
            replacements += 1;
        }
        out.push_str(&text[last..]);

        Substitution { text: out, replacements }
    }
}
