//! Searchwire - windowed binary transfer format for paginated search results
//!
//! A result carries the full ranked candidate list of a query, the
//! materialized documents of the requested page, aggregate counters and
//! optional facet and spell-check side-lists. On the wire only the part of
//! the ranked list the page needs is transmitted.
//!
//! # Quick Start
//!
//! ```ignore
//! use searchwire::{PageWindow, ResultCodec, ResultContainer, SearchRequest};
//!
//! let request = SearchRequest::new(PageWindow::from_rows(0, 10));
//! let result = ResultContainer::for_request(&request)
//!     .with_ranked_hits(hits)
//!     .with_documents(documents)
//!     .with_num_found(total)
//!     .build()?;
//!
//! let codec = ResultCodec::default();
//! let bytes = codec.to_bytes(&result, &request.window())?;
//! let decoded = codec.from_bytes(&bytes)?;
//! let first = decoded.document_at(0, &request.window());
//! ```
//!
//! # Architecture
//!
//! [`searchwire_core`] holds the data model, [`searchwire_wire`] the byte
//! codec. Both are re-exported here.

pub use searchwire_core::*;
pub use searchwire_wire::{
    decode_ranked_hits, encode_ranked_hits, transmitted_length, ObjectInput, ObjectOutput,
    ResultCodec, WireConfig, WireConfigError, ABSENT_MARKER,
};

/// Module-level access to the wire crate
pub mod wire {
    pub use searchwire_wire::*;
}
