//! Codec configuration.
//!
//! Limits applied while decoding untrusted input.

/// Largest ranked-hit array length the int32 header can express.
const MAX_WIRE_LENGTH: usize = i32::MAX as usize;

/// Wire codec configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireConfig {
    /// Maximum ranked-hit array length accepted on decode (default: 16M slots).
    ///
    /// A header announcing a longer array is rejected before any allocation.
    pub max_transmitted_length: usize,

    /// Maximum nested object payload in bytes (default: 64MB).
    pub max_object_bytes: usize,
}

impl Default for WireConfig {
    fn default() -> Self {
        WireConfig {
            max_transmitted_length: 16 * 1024 * 1024,
            max_object_bytes: 64 * 1024 * 1024, // 64MB
        }
    }
}

impl WireConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum ranked-hit array length (builder pattern).
    pub fn with_max_transmitted_length(mut self, len: usize) -> Self {
        self.max_transmitted_length = len;
        self
    }

    /// Set maximum nested object size (builder pattern).
    pub fn with_max_object_bytes(mut self, bytes: usize) -> Self {
        self.max_object_bytes = bytes;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), WireConfigError> {
        if self.max_transmitted_length == 0 {
            return Err(WireConfigError::ZeroTransmittedLength);
        }
        if self.max_transmitted_length > MAX_WIRE_LENGTH {
            return Err(WireConfigError::TransmittedLengthExceedsWire);
        }
        if self.max_object_bytes == 0 {
            return Err(WireConfigError::ZeroObjectBytes);
        }
        Ok(())
    }

    /// Create a configuration with small limits for tests.
    pub fn for_testing() -> Self {
        WireConfig {
            max_transmitted_length: 4096,
            max_object_bytes: 64 * 1024, // 64KB
        }
    }
}

/// Wire configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireConfigError {
    /// Ranked-hit length limit is zero.
    #[error("Maximum transmitted length must be non-zero")]
    ZeroTransmittedLength,

    /// Ranked-hit length limit does not fit the int32 header.
    #[error("Maximum transmitted length cannot exceed i32::MAX")]
    TransmittedLengthExceedsWire,

    /// Nested object size limit is zero.
    #[error("Maximum object size must be non-zero")]
    ZeroObjectBytes,
}
