//! Binary wire format for searchwire result containers
//!
//! # Module Structure
//!
//! - `stream`: int32 / float32 / nested object primitives over `Read`/`Write`
//! - `window`: the windowed ranked-hit codec
//! - `result`: the full result message
//! - `config`: decode limits
//!
//! # Example
//!
//! ```
//! use searchwire_core::{PageWindow, RankedHit, ResultContainer, SearchRequest};
//! use searchwire_wire::ResultCodec;
//!
//! let request = SearchRequest::new(PageWindow::from_rows(20, 10));
//! let hits: Vec<RankedHit> = (0..25).map(|i| RankedHit::new(i, 1.0)).collect();
//! let result = ResultContainer::for_request(&request)
//!     .with_ranked_hits(hits)
//!     .with_num_found(25)
//!     .build()
//!     .unwrap();
//!
//! let codec = ResultCodec::default();
//! let bytes = codec.to_bytes(&result, &request.window()).unwrap();
//! let decoded = codec.from_bytes(&bytes).unwrap();
//!
//! assert_eq!(decoded.num_found(), 25);
//! assert_eq!(decoded.document_count(&request.window()), 5);
//! assert!(decoded.hit_at(19).is_none());
//! assert!(decoded.hit_at(20).is_some());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod result;
pub mod stream;
pub mod window;

pub use config::{WireConfig, WireConfigError};
pub use result::ResultCodec;
pub use stream::{ObjectInput, ObjectOutput, ABSENT_MARKER};
pub use window::{decode_ranked_hits, encode_ranked_hits, transmitted_length};
