//! Result container codec
//!
//! # Message Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Facet list            (nested object)        │
//! ├──────────────────────────────────────────────┤
//! │ Ranked hit window     (see `window` module)  │
//! ├──────────────────────────────────────────────┤
//! │ num_found             (int32)                │
//! │ max_score             (float32)              │
//! │ collapsed_doc_count   (int32)                │
//! ├──────────────────────────────────────────────┤
//! │ Window documents      (nested object)        │
//! ├──────────────────────────────────────────────┤
//! │ Spell-check list      (nested object)        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The page window is not part of the message. The encoder takes it as a
//! parameter and a reader must apply the same window to the decoded
//! container. Collapse state is never transmitted.

use searchwire_core::error::{Error, Result};
use searchwire_core::{FacetList, PageWindow, ResultContainer, ResultDocument, SpellCheckList};
use std::io::{Cursor, Read, Write};
use tracing::{debug, warn};

use crate::config::{WireConfig, WireConfigError};
use crate::stream::{ObjectInput, ObjectOutput};
use crate::window::{decode_ranked_hits, encode_ranked_hits};

/// Encoder/decoder for [`ResultContainer`] messages
#[derive(Debug, Clone, Default)]
pub struct ResultCodec {
    config: WireConfig,
}

impl ResultCodec {
    /// Create a codec with a validated configuration
    pub fn new(config: WireConfig) -> std::result::Result<Self, WireConfigError> {
        config.validate()?;
        Ok(ResultCodec { config })
    }

    /// Configuration in effect
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Encode a container for the given page window
    ///
    /// Returns the number of bytes written.
    pub fn encode<W: Write>(
        &self,
        result: &ResultContainer,
        window: &PageWindow,
        writer: W,
    ) -> Result<u64> {
        let mut out = ObjectOutput::new(writer);

        out.write_object(result.facet_list())?;

        let start = window.start();
        let transmitted_len = encode_ranked_hits(
            &mut out,
            result.ranked_hits(),
            start,
            result.document_count(window),
        )?;

        out.write_i32(count_to_wire(result.num_found(), "num_found")?)?;
        out.write_f32(result.max_score())?;
        out.write_i32(count_to_wire(
            result.collapsed_doc_count(),
            "collapsed_doc_count",
        )?)?;

        out.write_object(Some(result.documents()))?;
        out.write_object(result.spell_check_list())?;
        out.flush()?;

        let bytes = out.bytes_written();
        debug!(
            transmitted_len,
            start,
            bytes,
            num_found = result.num_found(),
            documents = result.documents().len(),
            "encoded result"
        );
        Ok(bytes)
    }

    /// Decode a container
    ///
    /// The ranked list comes back populated only inside the window the
    /// encoder used; see the `window` module.
    pub fn decode<R: Read>(&self, reader: R) -> Result<ResultContainer> {
        let mut input = ObjectInput::new(reader, &self.config);

        let facet_list = input.read_object::<FacetList>()?;
        let ranked_hits = decode_ranked_hits(&mut input)?;

        let num_found = count_from_wire(input.read_i32()?, "num_found")?;
        let max_score = input.read_f32()?;
        let collapsed_doc_count = count_from_wire(input.read_i32()?, "collapsed_doc_count")?;

        let documents = input
            .read_object::<Vec<ResultDocument>>()?
            .unwrap_or_default();
        let spell_check_list = input.read_object::<SpellCheckList>()?;

        debug!(
            transmitted_len = ranked_hits.len(),
            start = ranked_hits.populated_from(),
            bytes = input.bytes_read(),
            num_found,
            documents = documents.len(),
            "decoded result"
        );

        ResultContainer::builder()
            .with_facet_list(facet_list)
            .with_ranked_hits(ranked_hits)
            .with_num_found(num_found)
            .with_max_score(max_score)
            .with_collapsed_doc_count(collapsed_doc_count)
            .with_documents(documents)
            .with_spell_check_list(spell_check_list)
            .build()
    }

    /// Encode into a fresh buffer
    pub fn to_bytes(&self, result: &ResultContainer, window: &PageWindow) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(result, window, &mut buf)?;
        Ok(buf)
    }

    /// Decode a buffer holding exactly one message
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<ResultContainer> {
        let mut cursor = Cursor::new(bytes);
        let result = self.decode(&mut cursor)?;
        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            warn!(consumed, len = bytes.len(), "trailing bytes after result");
            return Err(Error::Format(format!(
                "{} trailing bytes after result message",
                bytes.len() - consumed
            )));
        }
        Ok(result)
    }
}

fn count_to_wire(value: u32, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        Error::InvalidOperation(format!("{} {} does not fit an int32", what, value))
    })
}

fn count_from_wire(value: i32, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        warn!(value, what, "negative counter");
        Error::Format(format!("negative {} {}", what, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchwire_core::{Facet, RankedHit, SearchRequest, SpellCheck};

    fn window(start: usize, end: usize) -> PageWindow {
        PageWindow::new(start, end).unwrap()
    }

    fn container(n: u32, w: PageWindow) -> ResultContainer {
        let hits: Vec<RankedHit> = (0..n).map(|i| RankedHit::new(i, 10.0 - i as f32)).collect();
        let available = w.clamped_count(n as usize);
        let documents = (w.start()..w.start() + available)
            .map(|i| ResultDocument::new().with_value("id", i.to_string()))
            .collect();
        ResultContainer::for_request(&SearchRequest::new(w))
            .with_ranked_hits(hits)
            .with_documents(documents)
            .with_num_found(n)
            .with_max_score(10.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_codec_rejects_invalid_config() {
        let err = ResultCodec::new(WireConfig::new().with_max_object_bytes(0)).unwrap_err();
        assert_eq!(err, WireConfigError::ZeroObjectBytes);
        assert!(ResultCodec::new(WireConfig::for_testing()).is_ok());
    }

    #[test]
    fn test_encode_reports_bytes_written() {
        let codec = ResultCodec::default();
        let w = window(0, 10);
        let result = container(25, w);

        let mut buf = Vec::new();
        let written = codec.encode(&result, &w, &mut buf).unwrap();
        assert_eq!(written, buf.len() as u64);
    }

    #[test]
    fn test_field_order_on_the_wire() {
        let codec = ResultCodec::default();
        let w = window(0, 0);
        let result = ResultContainer::builder()
            .with_num_found(7)
            .with_max_score(2.0)
            .with_collapsed_doc_count(3)
            .build()
            .unwrap();
        let bytes = codec.to_bytes(&result, &w).unwrap();

        // facets absent, hits absent, counters, empty document list, spell-check absent
        assert_eq!(&bytes[0..4], &[0, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &7i32.to_be_bytes());
        assert_eq!(&bytes[12..16], &2.0f32.to_be_bytes());
        assert_eq!(&bytes[16..20], &3i32.to_be_bytes());
        assert_eq!(&bytes[20..24], &1i32.to_be_bytes());
        assert_eq!(bytes[24], 0x90); // MessagePack empty array
        assert_eq!(&bytes[25..29], &[0, 0, 0, 0]);
        assert_eq!(bytes.len(), 29);
    }

    #[test]
    fn test_round_trip_side_lists() {
        let req = SearchRequest::new(window(0, 10))
            .with_facet_fields(vec!["lang".to_string()])
            .with_spell_check_fields(vec!["title".to_string()]);
        let mut builder = ResultContainer::for_request(&req);
        if let Some(facets) = builder.facet_list_mut() {
            facets.add(Facet::new("lang").with_term("en", 12).with_term("de", 1));
        }
        if let Some(spelling) = builder.spell_check_list_mut() {
            spelling.push(SpellCheck::new("title", "serach").with_suggestion("search", 30));
        }
        let result = builder.build().unwrap();

        let codec = ResultCodec::default();
        let decoded = codec
            .from_bytes(&codec.to_bytes(&result, &req.window()).unwrap())
            .unwrap();

        assert_eq!(decoded.facet_list(), result.facet_list());
        assert_eq!(decoded.spell_check_list(), result.spell_check_list());
    }

    #[test]
    fn test_collapse_state_is_not_transmitted() {
        use searchwire_core::{CollapseConfig, CollapseMode};

        let req = SearchRequest::new(window(0, 10))
            .with_collapse(CollapseConfig::new(CollapseMode::Full, "site", 1));
        let result = ResultContainer::for_request(&req)
            .with_collapsed_doc_count(4)
            .build()
            .unwrap();
        assert!(result.collapse().is_some());

        let codec = ResultCodec::default();
        let decoded = codec
            .from_bytes(&codec.to_bytes(&result, &req.window()).unwrap())
            .unwrap();
        assert!(decoded.collapse().is_none());
        assert_eq!(decoded.collapsed_doc_count(), 4);
    }

    #[test]
    fn test_num_found_over_int32_is_rejected() {
        let result = ResultContainer::builder()
            .with_num_found(u32::MAX)
            .build()
            .unwrap();
        let err = ResultCodec::default()
            .to_bytes(&result, &window(0, 10))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }

    #[test]
    fn test_negative_num_found_is_format_error() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0i32.to_be_bytes()); // facets
        bytes.extend_from_slice(&0i32.to_be_bytes()); // hits
        bytes.extend_from_slice(&(-1i32).to_be_bytes());
        bytes.extend_from_slice(&0f32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes());

        let err = ResultCodec::default().from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_absent_document_list_decodes_empty() {
        let mut bytes = Vec::new();
        for _ in 0..2 {
            bytes.extend_from_slice(&0i32.to_be_bytes());
        }
        bytes.extend_from_slice(&5i32.to_be_bytes());
        bytes.extend_from_slice(&1.5f32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&0i32.to_be_bytes()); // documents absent
        bytes.extend_from_slice(&0i32.to_be_bytes());

        let decoded = ResultCodec::default().from_bytes(&bytes).unwrap();
        assert!(decoded.documents().is_empty());
        assert_eq!(decoded.num_found(), 5);
        assert_eq!(decoded.max_score(), 1.5);
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let codec = ResultCodec::default();
        let w = window(0, 10);
        let mut bytes = codec.to_bytes(&container(3, w), &w).unwrap();
        bytes.push(0);
        assert!(matches!(codec.from_bytes(&bytes), Err(Error::Format(_))));
    }
}
