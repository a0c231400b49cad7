//! Core types for searchwire
//!
//! This crate defines the in-memory side of a paginated search result:
//! - PageWindow / SearchRequest: the window and options a result is built for
//! - RankedHit / RankedHits: scored candidates, possibly populated only
//!   inside the transmitted window
//! - ResultDocument: materialized content of one window position
//! - FacetList / SpellCheckList: optional side-lists
//! - CollapseState: per-result collapsing state (never serialized)
//! - ResultContainer: the container tying it all together
//! - Error: error type shared with the wire codec

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collapse;
pub mod container;
pub mod document;
pub mod error;
pub mod facet;
pub mod hit;
pub mod request;
pub mod spellcheck;

pub use collapse::CollapseState;
pub use container::{ResultContainer, ResultContainerBuilder};
pub use document::ResultDocument;
pub use error::{Error, Result};
pub use facet::{Facet, FacetList};
pub use hit::{RankedHit, RankedHits};
pub use request::{CollapseConfig, CollapseMode, PageWindow, SearchRequest};
pub use spellcheck::{SpellCheck, SpellCheckList, Suggestion};
