//! Ranked hits
//!
//! A [`RankedHit`] is one scored candidate. [`RankedHits`] is the ordered
//! candidate list of a result, indexed by absolute rank.
//!
//! ## Conceptual vs populated length
//!
//! A list built by the producer is fully populated. A list rebuilt from the
//! wire keeps its conceptual length (up to the end of the transmitted window)
//! but only the slots from `populated_from()` onward hold a hit; slots below
//! it are unpopulated and never read by the windowed accessors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    /// Internal document identifier of the index segment
    pub doc_id: u32,
    /// Score from the scorer (higher = more relevant)
    pub score: f32,
    /// Number of records folded into this hit by collapsing
    pub collapse_count: u32,
}

impl RankedHit {
    /// Create a hit with no folded records
    pub fn new(doc_id: u32, score: f32) -> Self {
        RankedHit {
            doc_id,
            score,
            collapse_count: 0,
        }
    }

    /// Builder: set collapse count
    pub fn with_collapse_count(mut self, count: u32) -> Self {
        self.collapse_count = count;
        self
    }
}

/// Ordered candidate list, possibly populated only from some offset onward
///
/// Only the populated tail is stored; the unpopulated head costs nothing
/// regardless of its length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedHits {
    len: usize,
    populated_from: usize,
    populated: Vec<RankedHit>,
}

impl RankedHits {
    /// An absent list (conceptual length 0)
    pub fn absent() -> Self {
        Self::default()
    }

    /// A fully populated list
    pub fn full(hits: Vec<RankedHit>) -> Self {
        RankedHits {
            len: hits.len(),
            populated_from: 0,
            populated: hits,
        }
    }

    /// Rebuild a list of conceptual length `len` whose slots `start..len`
    /// hold `window`, in order. Slots below `start` stay unpopulated.
    pub fn from_window(len: usize, start: usize, window: Vec<RankedHit>) -> Result<Self> {
        if start > len {
            return Err(Error::Format(format!(
                "window start {} exceeds list length {}",
                start, len
            )));
        }
        if window.len() != len - start {
            return Err(Error::Format(format!(
                "expected {} hits in window starting at {}, got {}",
                len - start,
                start,
                window.len()
            )));
        }
        Ok(RankedHits {
            len,
            populated_from: start,
            populated: window,
        })
    }

    /// Conceptual length
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for an absent list
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First populated position (0 for producer-built lists)
    pub fn populated_from(&self) -> usize {
        self.populated_from
    }

    /// Hits held in memory, i.e. positions `populated_from()..len()`
    pub fn populated(&self) -> &[RankedHit] {
        &self.populated
    }

    /// Hit at an absolute position, `None` if out of range or unpopulated
    pub fn get(&self, position: usize) -> Option<&RankedHit> {
        position
            .checked_sub(self.populated_from)
            .and_then(|offset| self.populated.get(offset))
    }
}

impl From<Vec<RankedHit>> for RankedHits {
    fn from(hits: Vec<RankedHit>) -> Self {
        RankedHits::full(hits)
    }
}
