//! Result container
//!
//! A [`ResultContainer`] holds everything one executed query hands back:
//! the ranked candidate list, the materialized documents of the requested
//! window, aggregate counters and the optional facet/spell-check side-lists.
//!
//! ## Lifecycle
//!
//! Containers are populated through a [`ResultContainerBuilder`] and are
//! immutable once built. A new query or a new decode produces a new
//! container.
//!
//! ## Two indexing disciplines
//!
//! - [`ResultContainer::document_at`] takes an absolute position and the
//!   page window, and reads `documents[position - start]`.
//! - [`ResultContainer::score_at`] and [`ResultContainer::collapse_count_at`]
//!   index the ranked list directly, with no window offset.
//!
//! After a decode the ranked list is only populated inside the transmitted
//! window. Reading a score below the window start is a caller bug and
//! panics.

use std::fmt;

use crate::collapse::CollapseState;
use crate::document::ResultDocument;
use crate::error::{Error, Result};
use crate::facet::FacetList;
use crate::hit::{RankedHit, RankedHits};
use crate::request::{PageWindow, SearchRequest};
use crate::spellcheck::SpellCheckList;

/// Results of one executed (or decoded) query
#[derive(Debug, Clone, PartialEq)]
pub struct ResultContainer {
    ranked_hits: RankedHits,
    documents: Vec<ResultDocument>,
    num_found: u32,
    max_score: f32,
    collapsed_doc_count: u32,
    facet_list: Option<FacetList>,
    spell_check_list: Option<SpellCheckList>,
    collapse: Option<CollapseState>,
}

impl ResultContainer {
    /// Start building a container with no request context
    ///
    /// Used when rebuilding a container from the wire: no side-list is
    /// pre-created and the window document count is not checked.
    pub fn builder() -> ResultContainerBuilder {
        ResultContainerBuilder::default()
    }

    /// Start building the container for an executed request
    ///
    /// Pre-creates an empty facet list and spell-check list when the
    /// request asks for them, and attaches the collapse state the request
    /// calls for.
    pub fn for_request(request: &SearchRequest) -> ResultContainerBuilder {
        ResultContainerBuilder {
            window: Some(request.window()),
            facet_list: request.wants_facets().then(FacetList::new),
            spell_check_list: request.wants_spell_check().then(SpellCheckList::new),
            collapse: CollapseState::for_request(request),
            ..Default::default()
        }
    }

    /// Materialized document at an absolute position
    ///
    /// Returns `None` when the position is below the window start, at or
    /// past the window end, or at or past the conceptual length of the
    /// ranked list, checked in that order.
    pub fn document_at(&self, position: usize, window: &PageWindow) -> Option<&ResultDocument> {
        if position < window.start() {
            return None;
        }
        if position >= window.end() {
            return None;
        }
        if position >= self.doc_length() {
            return None;
        }
        self.documents.get(position - window.start())
    }

    /// Number of window positions backed by a ranked hit
    ///
    /// `clamp(end, 0, doc_length) - start`, never negative.
    pub fn document_count(&self, window: &PageWindow) -> usize {
        window.clamped_count(self.doc_length())
    }

    /// Conceptual length of the ranked list
    pub fn doc_length(&self) -> usize {
        self.ranked_hits.len()
    }

    /// Score of the hit at an absolute position
    ///
    /// Returns `0.0` when the ranked list is absent.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range or its slot was not
    /// transmitted.
    pub fn score_at(&self, position: usize) -> f32 {
        if self.ranked_hits.is_empty() {
            return 0.0;
        }
        self.expect_hit(position).score
    }

    /// Collapse count of the hit at an absolute position
    ///
    /// Returns `0` when the ranked list is absent.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range or its slot was not
    /// transmitted.
    pub fn collapse_count_at(&self, position: usize) -> u32 {
        if self.ranked_hits.is_empty() {
            return 0;
        }
        self.expect_hit(position).collapse_count
    }

    /// Hit at an absolute position, `None` if out of range or unpopulated
    pub fn hit_at(&self, position: usize) -> Option<&RankedHit> {
        self.ranked_hits.get(position)
    }

    fn expect_hit(&self, position: usize) -> &RankedHit {
        assert!(
            position < self.ranked_hits.len(),
            "ranked hit position {} out of range (length {})",
            position,
            self.ranked_hits.len()
        );
        match self.ranked_hits.get(position) {
            Some(hit) => hit,
            None => panic!(
                "ranked hit position {} was not transmitted (populated from {})",
                position,
                self.ranked_hits.populated_from()
            ),
        }
    }

    /// Ranked candidate list
    pub fn ranked_hits(&self) -> &RankedHits {
        &self.ranked_hits
    }

    /// Materialized documents of the window, indexed by `position - start`
    pub fn documents(&self) -> &[ResultDocument] {
        &self.documents
    }

    /// Total number of matching documents
    pub fn num_found(&self) -> u32 {
        self.num_found
    }

    /// Highest score across all candidates
    pub fn max_score(&self) -> f32 {
        self.max_score
    }

    /// Number of candidates removed by collapsing
    pub fn collapsed_doc_count(&self) -> u32 {
        self.collapsed_doc_count
    }

    /// Facet list, if the request asked for facets
    pub fn facet_list(&self) -> Option<&FacetList> {
        self.facet_list.as_ref()
    }

    /// Spell-check list, if the request asked for spelling suggestions
    pub fn spell_check_list(&self) -> Option<&SpellCheckList> {
        self.spell_check_list.as_ref()
    }

    /// Collapse state; always `None` on a decoded container
    pub fn collapse(&self) -> Option<&CollapseState> {
        self.collapse.as_ref()
    }
}

impl fmt::Display for ResultContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} founds.", self.num_found)?;
        if !self.ranked_hits.is_empty() {
            write!(f, " {} docs.", self.ranked_hits.len())?;
        }
        write!(f, " {} resultDocuments.", self.documents.len())?;
        write!(f, " MaxScore: {}", self.max_score)
    }
}

/// Builder for [`ResultContainer`]; the mutable "building" state
#[derive(Debug, Default)]
pub struct ResultContainerBuilder {
    window: Option<PageWindow>,
    ranked_hits: RankedHits,
    documents: Vec<ResultDocument>,
    num_found: u32,
    max_score: f32,
    collapsed_doc_count: u32,
    facet_list: Option<FacetList>,
    spell_check_list: Option<SpellCheckList>,
    collapse: Option<CollapseState>,
}

impl ResultContainerBuilder {
    /// Builder: set ranked hits
    pub fn with_ranked_hits(mut self, hits: impl Into<RankedHits>) -> Self {
        self.ranked_hits = hits.into();
        self
    }

    /// Builder: set materialized window documents
    pub fn with_documents(mut self, documents: Vec<ResultDocument>) -> Self {
        self.documents = documents;
        self
    }

    /// Builder: set total match count
    pub fn with_num_found(mut self, num_found: u32) -> Self {
        self.num_found = num_found;
        self
    }

    /// Builder: set highest score
    pub fn with_max_score(mut self, max_score: f32) -> Self {
        self.max_score = max_score;
        self
    }

    /// Builder: set collapsed candidate count
    pub fn with_collapsed_doc_count(mut self, count: u32) -> Self {
        self.collapsed_doc_count = count;
        self
    }

    /// Builder: replace the facet list
    pub fn with_facet_list(mut self, facets: Option<FacetList>) -> Self {
        self.facet_list = facets;
        self
    }

    /// Builder: replace the spell-check list
    pub fn with_spell_check_list(mut self, spell_check: Option<SpellCheckList>) -> Self {
        self.spell_check_list = spell_check;
        self
    }

    /// Facet list pre-created for the request, for the facet engine to fill
    pub fn facet_list_mut(&mut self) -> Option<&mut FacetList> {
        self.facet_list.as_mut()
    }

    /// Spell-check list pre-created for the request
    pub fn spell_check_list_mut(&mut self) -> Option<&mut SpellCheckList> {
        self.spell_check_list.as_mut()
    }

    /// Collapse state attached for the request
    pub fn collapse_mut(&mut self) -> Option<&mut CollapseState> {
        self.collapse.as_mut()
    }

    /// Seal the container
    ///
    /// When built for a request, a non-empty document list must hold
    /// exactly one document per available window position. An empty
    /// document list is always accepted (stats-only result).
    pub fn build(self) -> Result<ResultContainer> {
        if let Some(window) = self.window {
            let expected = window.clamped_count(self.ranked_hits.len());
            if !self.documents.is_empty() && self.documents.len() != expected {
                return Err(Error::InvalidOperation(format!(
                    "window [{}, {}) over {} hits needs {} documents, got {}",
                    window.start(),
                    window.end(),
                    self.ranked_hits.len(),
                    expected,
                    self.documents.len()
                )));
            }
        }
        Ok(ResultContainer {
            ranked_hits: self.ranked_hits,
            documents: self.documents,
            num_found: self.num_found,
            max_score: self.max_score,
            collapsed_doc_count: self.collapsed_doc_count,
            facet_list: self.facet_list,
            spell_check_list: self.spell_check_list,
            collapse: self.collapse,
        })
    }
}
