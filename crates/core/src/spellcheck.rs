//! Spelling suggestion side-list

use serde::{Deserialize, Serialize};

/// A suggested replacement for a query word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested word
    pub word: String,
    /// Document frequency of the suggestion in the index
    pub freq: u64,
}

/// Suggestions for one query word on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCheck {
    /// Field the suggestions were computed on
    pub field: String,
    /// Word as typed
    pub word: String,
    /// Suggestions, best first
    pub suggestions: Vec<Suggestion>,
}

impl SpellCheck {
    /// Create an entry with no suggestions
    pub fn new(field: impl Into<String>, word: impl Into<String>) -> Self {
        SpellCheck {
            field: field.into(),
            word: word.into(),
            suggestions: Vec::new(),
        }
    }

    /// Builder: append a suggestion
    pub fn with_suggestion(mut self, word: impl Into<String>, freq: u64) -> Self {
        self.suggestions.push(Suggestion {
            word: word.into(),
            freq,
        });
        self
    }

    /// Best suggestion, if any
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// All spell-check entries of a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCheckList {
    entries: Vec<SpellCheck>,
}

impl SpellCheckList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: SpellCheck) {
        self.entries.push(entry);
    }

    /// Entries for a field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a SpellCheck> + 'a {
        self.entries.iter().filter(move |e| e.field == field)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entry was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
