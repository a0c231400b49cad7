//! Request-side types consumed by the result container
//!
//! This module defines the small slice of the query description that
//! result handling needs:
//! - PageWindow: the `[start, end)` range a page request wants materialized
//! - CollapseMode / CollapseConfig: how near-duplicate hits are folded
//! - SearchRequest: window plus the side-list and collapse options
//!
//! Query execution itself lives elsewhere; these types only carry the
//! parameters that shape a result.

use crate::error::{Error, Result};

// ============================================================================
// PageWindow
// ============================================================================

/// The contiguous index range `[start, end)` a page request asks for
///
/// # Invariant
///
/// `start <= end`. Enforced by [`PageWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    start: usize,
    end: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        PageWindow { start: 0, end: 10 }
    }
}

impl PageWindow {
    /// Create a window, rejecting `start > end`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidOperation(format!(
                "window start {} is past window end {}",
                start, end
            )));
        }
        Ok(PageWindow { start, end })
    }

    /// Create a window from an offset and a page size
    pub fn from_rows(start: usize, rows: usize) -> Self {
        PageWindow {
            start,
            end: start.saturating_add(rows),
        }
    }

    /// Zero-based first wanted index
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive upper bound of the wanted window
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of positions requested
    pub fn rows(&self) -> usize {
        self.end - self.start
    }

    /// Check whether a position falls inside `[start, end)`
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end
    }

    /// Number of positions actually available once clamped to `available`
    ///
    /// `clamp(end, 0, available) - start`, never negative.
    pub fn clamped_count(&self, available: usize) -> usize {
        self.end.min(available).saturating_sub(self.start)
    }
}

// ============================================================================
// Collapse configuration
// ============================================================================

/// Collapsing strategy requested by the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseMode {
    /// No collapsing (default)
    #[default]
    Off,
    /// Collapse only the hits needed to fill the requested window
    Optimized,
    /// Collapse the whole candidate list
    Full,
}

/// Collapsing parameters carried by a request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollapseConfig {
    /// Strategy
    pub mode: CollapseMode,
    /// Field whose equal values mark near-duplicates
    pub field: Option<String>,
    /// Hits with more than this many siblings are folded
    pub max: u32,
}

impl CollapseConfig {
    /// Create a config for the given field and mode
    pub fn new(mode: CollapseMode, field: impl Into<String>, max: u32) -> Self {
        CollapseConfig {
            mode,
            field: Some(field.into()),
            max,
        }
    }

    /// Collapsing is active only with a mode and a field
    pub fn is_active(&self) -> bool {
        self.mode != CollapseMode::Off && self.field.is_some()
    }
}

// ============================================================================
// SearchRequest
// ============================================================================

/// Parameters of an executed query that shape its result container
///
/// # Examples
///
/// ```
/// use searchwire_core::{PageWindow, SearchRequest};
///
/// let req = SearchRequest::new(PageWindow::from_rows(20, 10))
///     .with_facet_fields(vec!["lang".to_string()]);
///
/// assert_eq!(req.window().start(), 20);
/// assert_eq!(req.window().end(), 30);
/// assert!(req.wants_facets());
/// assert!(!req.wants_spell_check());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    window: PageWindow,
    facet_fields: Vec<String>,
    spell_check_fields: Vec<String>,
    collapse: CollapseConfig,
}

impl SearchRequest {
    /// Create a request for the given window with no side-lists and no collapsing
    pub fn new(window: PageWindow) -> Self {
        SearchRequest {
            window,
            ..Default::default()
        }
    }

    /// Builder: set facet fields
    pub fn with_facet_fields(mut self, fields: Vec<String>) -> Self {
        self.facet_fields = fields;
        self
    }

    /// Builder: set spell-check fields
    pub fn with_spell_check_fields(mut self, fields: Vec<String>) -> Self {
        self.spell_check_fields = fields;
        self
    }

    /// Builder: set collapse configuration
    pub fn with_collapse(mut self, collapse: CollapseConfig) -> Self {
        self.collapse = collapse;
        self
    }

    /// Requested window
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Facet fields
    pub fn facet_fields(&self) -> &[String] {
        &self.facet_fields
    }

    /// Spell-check fields
    pub fn spell_check_fields(&self) -> &[String] {
        &self.spell_check_fields
    }

    /// Collapse configuration
    pub fn collapse(&self) -> &CollapseConfig {
        &self.collapse
    }

    /// True if any facet field was requested
    pub fn wants_facets(&self) -> bool {
        !self.facet_fields.is_empty()
    }

    /// True if any spell-check field was requested
    pub fn wants_spell_check(&self) -> bool {
        !self.spell_check_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_new_rejects_inverted_bounds() {
        assert!(PageWindow::new(5, 5).is_ok());
        assert!(matches!(
            PageWindow::new(6, 5),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_window_from_rows() {
        let window = PageWindow::from_rows(20, 10);
        assert_eq!(window.start(), 20);
        assert_eq!(window.end(), 30);
        assert_eq!(window.rows(), 10);
    }

    #[test]
    fn test_window_from_rows_saturates() {
        let window = PageWindow::from_rows(usize::MAX - 1, 10);
        assert_eq!(window.end(), usize::MAX);
    }

    #[test]
    fn test_window_contains() {
        let window = PageWindow::new(10, 20).unwrap();
        assert!(!window.contains(9));
        assert!(window.contains(10));
        assert!(window.contains(19));
        assert!(!window.contains(20));
    }

    #[test]
    fn test_clamped_count() {
        let window = PageWindow::new(0, 10).unwrap();
        assert_eq!(window.clamped_count(25), 10);

        let window = PageWindow::new(20, 30).unwrap();
        assert_eq!(window.clamped_count(25), 5);

        // Start past the available data
        assert_eq!(window.clamped_count(15), 0);
        assert_eq!(window.clamped_count(0), 0);
    }

    #[test]
    fn test_default_window() {
        let window = PageWindow::default();
        assert_eq!((window.start(), window.end()), (0, 10));
    }

    #[test]
    fn test_collapse_config_activity() {
        assert!(!CollapseConfig::default().is_active());
        assert!(CollapseConfig::new(CollapseMode::Full, "site", 1).is_active());

        let no_field = CollapseConfig {
            mode: CollapseMode::Optimized,
            field: None,
            max: 2,
        };
        assert!(!no_field.is_active());
    }

    #[test]
    fn test_search_request_builder() {
        let req = SearchRequest::new(PageWindow::from_rows(0, 10))
            .with_facet_fields(vec!["lang".to_string()])
            .with_spell_check_fields(vec!["title".to_string()])
            .with_collapse(CollapseConfig::new(CollapseMode::Optimized, "site", 2));

        assert!(req.wants_facets());
        assert!(req.wants_spell_check());
        assert_eq!(req.facet_fields(), &["lang".to_string()]);
        assert_eq!(req.spell_check_fields(), &["title".to_string()]);
        assert_eq!(req.collapse().mode, CollapseMode::Optimized);
    }

    #[test]
    fn test_search_request_defaults() {
        let req = SearchRequest::new(PageWindow::default());
        assert!(!req.wants_facets());
        assert!(!req.wants_spell_check());
        assert!(!req.collapse().is_active());
    }
}
