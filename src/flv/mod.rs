//! FLV container parsing.
//!
//! An FLV file is a 9-byte header followed by tags. Every tag is preceded
//! by a 4-byte "previous tag size" field, so the reader treats each tag as
//! a 15-byte fixed region followed by the payload.

mod reader;
mod tag;

pub use reader::{FlvReader, Payload};
pub use tag::{Tag, TagType};

/// File signature, "FLV".
pub const SIGNATURE: [u8; 3] = *b"FLV";

/// The only supported format version.
pub const VERSION: u8 = 1;

/// Size of the fixed file header.
pub const HEADER_SIZE: usize = 9;

/// Size of the region read for each tag: previous tag size plus tag header.
pub const TAG_REGION_SIZE: usize = 15;

/// Size of the "previous tag size" field leading each tag region.
pub const PREVIOUS_TAG_SIZE_LEN: usize = 4;

const FLAG_VIDEO: u8 = 0x01;
const FLAG_AUDIO: u8 = 0x04;

/// Parsed FLV file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Type flags; bit 0 marks video, bit 2 marks audio.
    pub flags: u8,
}

impl Header {
    pub fn has_video(&self) -> bool {
        self.flags & FLAG_VIDEO != 0
    }

    pub fn has_audio(&self) -> bool {
        self.flags & FLAG_AUDIO != 0
    }
}
