//! Collapse state attached to a result container
//!
//! The collapsing engine itself runs outside this crate. A container only
//! holds the state object produced for its request so the producer can keep
//! folding hits while populating it. The state is never serialized: a
//! decoded container has no collapse state.

use crate::request::{CollapseMode, SearchRequest};

/// Per-result collapsing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseState {
    mode: CollapseMode,
    field: String,
    max: u32,
    /// Number of candidates folded so far
    folded: u64,
}

impl CollapseState {
    /// Factory: build the state a request asks for, if any
    ///
    /// Returns `None` when collapsing is off or no collapse field is set.
    pub fn for_request(request: &SearchRequest) -> Option<Self> {
        let config = request.collapse();
        if !config.is_active() {
            return None;
        }
        let field = config.field.clone()?;
        Some(CollapseState {
            mode: config.mode,
            field,
            max: config.max,
            folded: 0,
        })
    }

    /// Collapsing strategy
    pub fn mode(&self) -> CollapseMode {
        self.mode
    }

    /// Field used to detect near-duplicates
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Fold threshold
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Record `count` candidates folded away by the engine
    pub fn record_folded(&mut self, count: u64) {
        self.folded += count;
    }

    /// Total candidates folded so far
    pub fn folded(&self) -> u64 {
        self.folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{CollapseConfig, PageWindow};

    #[test]
    fn test_no_state_without_collapse() {
        let req = SearchRequest::new(PageWindow::default());
        assert!(CollapseState::for_request(&req).is_none());
    }

    #[test]
    fn test_state_for_active_collapse() {
        let req = SearchRequest::new(PageWindow::default())
            .with_collapse(CollapseConfig::new(CollapseMode::Full, "host", 3));
        let state = CollapseState::for_request(&req).unwrap();

        assert_eq!(state.mode(), CollapseMode::Full);
        assert_eq!(state.field(), "host");
        assert_eq!(state.max(), 3);
        assert_eq!(state.folded(), 0);
    }

    #[test]
    fn test_record_folded() {
        let req = SearchRequest::new(PageWindow::default())
            .with_collapse(CollapseConfig::new(CollapseMode::Optimized, "host", 1));
        let mut state = CollapseState::for_request(&req).unwrap();
        state.record_folded(4);
        state.record_folded(2);
        assert_eq!(state.folded(), 6);
    }
}
