//! Windowed ranked-hit codec
//!
//! The ranked list of a result can be far longer than the page a client
//! asked for. Only the slice the page needs goes on the wire, while the
//! decoded list keeps absolute positions.
//!
//! ## Format
//!
//! ```text
//! [transmitted_len: int32]
//! if transmitted_len > 0:
//!   [start: int32]
//!   (transmitted_len - start) x [RankedHit: nested object]
//! ```
//!
//! `transmitted_len = start + document_count`: everything up to the end of
//! the window. An absent list always transmits 0.
//!
//! ## Lossy by construction
//!
//! The decoded list has length `transmitted_len`, not the producer's
//! length: the tail past the window is dropped and the head below `start`
//! comes back unpopulated. The result is only meaningful to readers that
//! apply the same window as the encoder. Nothing here stops a reader from
//! asking for a position outside it; the container accessors do.

use searchwire_core::error::{Error, Result};
use searchwire_core::{RankedHit, RankedHits};
use std::io::{Read, Write};
use tracing::warn;

use crate::stream::{ObjectInput, ObjectOutput};

/// Upper bound on hits reserved up front; the header alone is not trusted
const PREALLOC_HITS: usize = 1024;

/// Number of slots a window transmits
///
/// `start + document_count`, or 0 for an absent list. Fails with
/// [`Error::InvalidOperation`] if the sum overflows.
pub fn transmitted_length(
    hits: &RankedHits,
    start: usize,
    document_count: usize,
) -> Result<usize> {
    if hits.is_empty() {
        return Ok(0);
    }
    start.checked_add(document_count).ok_or_else(|| {
        Error::InvalidOperation(format!(
            "window of {} hits at {} overflows the transmitted length",
            document_count, start
        ))
    })
}

/// Encode the window `[start, start + document_count)` of a ranked list
///
/// `document_count` must already be clamped to the available hits. Every
/// slot inside the window must be populated. Returns the transmitted
/// length.
pub fn encode_ranked_hits<W: Write>(
    out: &mut ObjectOutput<W>,
    hits: &RankedHits,
    start: usize,
    document_count: usize,
) -> Result<usize> {
    let len = transmitted_length(hits, start, document_count)?;
    if document_count > 0 && len > hits.len() {
        return Err(Error::InvalidOperation(format!(
            "window of {} hits at {} overruns ranked list of length {}",
            document_count,
            start,
            hits.len()
        )));
    }

    out.write_i32(to_wire_int(len, "transmitted length")?)?;
    if len == 0 {
        return Ok(0);
    }

    out.write_i32(to_wire_int(start, "window start")?)?;
    if len > start {
        let from = hits.populated_from();
        if start < from {
            return Err(Error::InvalidOperation(format!(
                "ranked hit {} is not populated (populated from {})",
                start, from
            )));
        }
        for hit in &hits.populated()[start - from..len - from] {
            out.write_object(Some(hit))?;
        }
    }
    Ok(len)
}

/// Decode a ranked list written by [`encode_ranked_hits`]
///
/// Fails with [`Error::Format`] on an inconsistent header (start past the
/// transmitted length, negative start, length over the configured limit)
/// or an absent marker in place of a hit. A truncated stream fails with
/// [`Error::Io`]. No partially filled list is ever returned.
pub fn decode_ranked_hits<R: Read>(input: &mut ObjectInput<R>) -> Result<RankedHits> {
    let len = input.read_i32()?;
    if len <= 0 {
        return Ok(RankedHits::absent());
    }
    let len = len as usize;
    let limit = input.config().max_transmitted_length;
    if len > limit {
        warn!(len, limit, "ranked hit array too long");
        return Err(Error::Format(format!(
            "transmitted length {} exceeds limit {}",
            len, limit
        )));
    }

    let start = input.read_i32()?;
    if start < 0 {
        warn!(start, "negative window start");
        return Err(Error::Format(format!("negative window start {}", start)));
    }
    let start = start as usize;
    if start > len {
        warn!(start, len, "window start past transmitted length");
        return Err(Error::Format(format!(
            "window start {} exceeds transmitted length {}",
            start, len
        )));
    }

    let mut window = Vec::with_capacity((len - start).min(PREALLOC_HITS));
    for position in start..len {
        match input.read_object::<RankedHit>()? {
            Some(hit) => window.push(hit),
            None => {
                warn!(position, "absent marker in place of a ranked hit");
                return Err(Error::Format(format!(
                    "ranked hit {} is missing from the window",
                    position
                )));
            }
        }
    }
    RankedHits::from_window(len, start, window)
}

fn to_wire_int(value: usize, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        Error::InvalidOperation(format!("{} {} does not fit an int32", what, value))
    })
}
