//! Error types for flvread.

use std::io;
use thiserror::Error;

/// Result type for flvread operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for flvread operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with the FLV signature.
    #[error("Incorrect signature: 0x{}", hex(.0))]
    InvalidSignature([u8; 3]),

    /// The header declares a version other than 1.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u8),

    /// The header declares a length shorter than the header itself.
    #[error("Invalid header length: {0}")]
    InvalidHeaderLength(u32),

    /// A tag declares a payload larger than the configured bound.
    #[error("Tag payload of {size} bytes exceeds maximum {max}")]
    TagTooLarge { size: u32, max: u32 },

    /// Input ended inside a tag header.
    #[error("Truncated tag header: {available} of 15 bytes")]
    TruncatedTag { available: usize },

    /// No more tags remain.
    #[error("End of input")]
    EndOfInput,

    /// Invalid reader configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this marks the clean end of the tag sequence.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Whether the input was readable but not valid FLV.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignature(_)
                | Self::UnsupportedVersion(_)
                | Self::InvalidHeaderLength(_)
                | Self::TagTooLarge { .. }
        )
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
