//! Facet side-list
//!
//! Facet counts are computed by the facet engine; a result only carries the
//! finished per-field term counts.

use serde::{Deserialize, Serialize};

/// Term counts of one faceted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Field name
    pub field: String,
    /// `(term, count)` pairs, in engine order
    pub terms: Vec<(String, u64)>,
}

impl Facet {
    /// Create a facet with no terms
    pub fn new(field: impl Into<String>) -> Self {
        Facet {
            field: field.into(),
            terms: Vec::new(),
        }
    }

    /// Builder: append a term count
    pub fn with_term(mut self, term: impl Into<String>, count: u64) -> Self {
        self.terms.push((term.into(), count));
        self
    }

    /// Count for a term, if present
    pub fn count(&self, term: &str) -> Option<u64> {
        self.terms
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, count)| *count)
    }
}

/// All facets of a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetList {
    facets: Vec<Facet>,
}

impl FacetList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facet, replacing any previous facet for the same field
    pub fn add(&mut self, facet: Facet) {
        match self.facets.iter_mut().find(|f| f.field == facet.field) {
            Some(existing) => *existing = facet,
            None => self.facets.push(facet),
        }
    }

    /// Facet for a field
    pub fn get(&self, field: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.field == field)
    }

    /// Number of facets
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// True if no facet was added
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Iterate over facets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_counts() {
        let facet = Facet::new("lang").with_term("en", 40).with_term("fr", 2);
        assert_eq!(facet.count("en"), Some(40));
        assert_eq!(facet.count("de"), None);
    }

    #[test]
    fn test_facet_list_add_replaces_same_field() {
        let mut list = FacetList::new();
        list.add(Facet::new("lang").with_term("en", 1));
        list.add(Facet::new("site").with_term("a.org", 3));
        list.add(Facet::new("lang").with_term("en", 5));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("lang").unwrap().count("en"), Some(5));
        let fields: Vec<_> = list.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["lang", "site"]);
    }
}
