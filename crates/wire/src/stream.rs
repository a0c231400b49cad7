//! Object stream primitives
//!
//! [`ObjectOutput`] and [`ObjectInput`] wrap a byte stream with the three
//! primitives the result format is made of.
//!
//! ## Primitive Format
//!
//! ```text
//! int32:   4 bytes, big-endian two's complement
//! float32: 4 bytes, big-endian IEEE-754 binary32
//! object:  [length: int32][payload: length bytes of MessagePack]
//! ```
//!
//! An object length of 0 is the absent marker: no payload follows. MessagePack
//! never encodes a value in zero bytes, so a present object always has a
//! positive length. A negative length is malformed.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use searchwire_core::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{trace, warn};

use crate::config::WireConfig;

/// Length value marking an absent nested object
pub const ABSENT_MARKER: i32 = 0;

/// Writing half of the object stream
pub struct ObjectOutput<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> ObjectOutput<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        ObjectOutput { inner, written: 0 }
    }

    /// Write a big-endian int32
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.inner.write_i32::<BigEndian>(value)?;
        self.written += 4;
        Ok(())
    }

    /// Write a big-endian float32
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.inner.write_f32::<BigEndian>(value)?;
        self.written += 4;
        Ok(())
    }

    /// Write a nested object, or the absent marker for `None`
    pub fn write_object<T: Serialize + ?Sized>(&mut self, value: Option<&T>) -> Result<()> {
        let value = match value {
            Some(value) => value,
            None => {
                trace!("nested object absent");
                return self.write_i32(ABSENT_MARKER);
            }
        };

        let payload =
            rmp_serde::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))?;
        let len = i32::try_from(payload.len()).map_err(|_| {
            Error::InvalidOperation(format!(
                "nested object of {} bytes does not fit an int32 length",
                payload.len()
            ))
        })?;
        trace!(len, "nested object");

        self.write_i32(len)?;
        self.inner.write_all(&payload)?;
        self.written += payload.len() as u64;
        Ok(())
    }

    /// Total bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reading half of the object stream
pub struct ObjectInput<R: Read> {
    inner: R,
    config: WireConfig,
    read: u64,
}

impl<R: Read> ObjectInput<R> {
    /// Wrap a reader, applying the decode limits from `config`
    pub fn new(inner: R, config: &WireConfig) -> Self {
        ObjectInput {
            inner,
            config: config.clone(),
            read: 0,
        }
    }

    /// Decode limits in effect
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Read a big-endian int32
    pub fn read_i32(&mut self) -> Result<i32> {
        let value = self.inner.read_i32::<BigEndian>()?;
        self.read += 4;
        Ok(value)
    }

    /// Read a big-endian float32
    pub fn read_f32(&mut self) -> Result<f32> {
        let value = self.inner.read_f32::<BigEndian>()?;
        self.read += 4;
        Ok(value)
    }

    /// Read a nested object; `None` for the absent marker
    pub fn read_object<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        let len = self.read_i32()?;
        if len == ABSENT_MARKER {
            trace!("nested object absent");
            return Ok(None);
        }
        if len < 0 {
            warn!(len, "negative nested object length");
            return Err(Error::Format(format!(
                "negative nested object length {}",
                len
            )));
        }

        let len = len as usize;
        let limit = self.config.max_object_bytes;
        if len > limit {
            warn!(len, limit, "nested object too large");
            return Err(Error::Format(format!(
                "nested object of {} bytes exceeds limit of {} bytes",
                len, limit
            )));
        }

        let mut payload = vec![0u8; len];
        self.inner.read_exact(&mut payload)?;
        self.read += len as u64;
        trace!(len, "nested object");

        let value =
            rmp_serde::from_slice(&payload).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Some(value))
    }

    /// Total bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.read
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}
