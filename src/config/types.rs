use serde::{Deserialize, Serialize};

/// Largest payload size the 24-bit size field can declare.
pub const MAX_TAG_SIZE: u32 = 0xFF_FFFF;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReaderConfig {
    /// Read-ahead buffer size in bytes.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,

    /// Tags declaring a larger payload are rejected.
    #[serde(default = "default_max_tag_size")]
    pub max_tag_size: u32,

    /// Reject headers declaring a length below 9 instead of ignoring it.
    #[serde(default)]
    pub strict_header_length: bool,

    /// Seek past skipped payloads when the source supports it.
    #[serde(default = "default_true")]
    pub seek: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            max_tag_size: default_max_tag_size(),
            strict_header_length: false,
            seek: true,
        }
    }
}

fn default_buffer_capacity() -> usize {
    flvread_io::DEFAULT_CAPACITY
}

fn default_max_tag_size() -> u32 {
    MAX_TAG_SIZE
}

fn default_true() -> bool {
    true
}
