//! Materialized document content for a result window

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored field values of one document in the requested window
///
/// Fields are kept in name order so that encoded output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    fields: BTreeMap<String, Vec<String>>,
    snippets: BTreeMap<String, Vec<String>>,
}

impl ResultDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a stored value to a field
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_value(field, value);
        self
    }

    /// Builder: append a highlighted snippet to a field
    pub fn with_snippet(mut self, field: impl Into<String>, snippet: impl Into<String>) -> Self {
        self.snippets
            .entry(field.into())
            .or_default()
            .push(snippet.into());
        self
    }

    /// Append a stored value to a field
    pub fn add_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(value.into());
    }

    /// All values of a field
    pub fn values(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First value of a field
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values(field).first().map(String::as_str)
    }

    /// Snippets of a field
    pub fn snippets(&self, field: &str) -> &[String] {
        self.snippets.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_values() {
        let doc = ResultDocument::new()
            .with_value("title", "Rust in Action")
            .with_value("tag", "rust")
            .with_value("tag", "book");

        assert_eq!(doc.value("title"), Some("Rust in Action"));
        assert_eq!(doc.values("tag"), &["rust".to_string(), "book".to_string()]);
        assert!(doc.values("missing").is_empty());
        assert_eq!(doc.field_names().collect::<Vec<_>>(), vec!["tag", "title"]);
    }

    #[test]
    fn test_document_snippets() {
        let doc = ResultDocument::new().with_snippet("body", "the <b>borrow</b> checker");
        assert_eq!(doc.snippets("body").len(), 1);
        assert!(doc.snippets("title").is_empty());
    }
}
