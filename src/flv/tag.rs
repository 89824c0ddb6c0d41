//! FLV tag definitions.

use flvread_io::codec::{get_timestamp, get_u24};
use std::fmt;

/// Tag type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Audio,
    Video,
    Script,
    Other(u8),
}

impl TagType {
    pub const AUDIO: u8 = 8;
    pub const VIDEO: u8 = 9;
    pub const SCRIPT: u8 = 18;

    /// Get the raw type byte.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Audio => Self::AUDIO,
            Self::Video => Self::VIDEO,
            Self::Script => Self::SCRIPT,
            Self::Other(b) => *b,
        }
    }
}

impl From<u8> for TagType {
    fn from(b: u8) -> Self {
        match b {
            Self::AUDIO => Self::Audio,
            Self::VIDEO => Self::Video,
            Self::SCRIPT => Self::Script,
            _ => Self::Other(b),
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
            Self::Script => write!(f, "script"),
            Self::Other(b) => write!(f, "unknown({b})"),
        }
    }
}

/// Tag header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Tag type.
    pub tag_type: TagType,
    /// Payload length in bytes.
    pub size: u32,
    /// Presentation timestamp in milliseconds.
    pub time: u32,
    /// Stream ID, always 0 in conforming files.
    pub stream: u32,
}

impl Tag {
    /// Parse the fixed 15-byte tag region. The leading previous tag size
    /// field is ignored.
    pub(crate) fn from_region(b: &[u8]) -> Self {
        Self {
            tag_type: TagType::from(b[4]),
            size: get_u24(&b[5..8]),
            time: get_timestamp(&b[8..12]),
            stream: get_u24(&b[12..15]),
        }
    }
}
