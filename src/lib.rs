//! Flvread: a forward-only reader for FLV files.
//!
//! The reader parses the 9-byte file header and then walks the tag sequence
//! one tag at a time. Each tag comes with a bounded payload stream; payload
//! bytes the caller leaves unread are skipped when the next tag is requested,
//! by seeking when the source is seekable and by reading otherwise.
//!
//! # Modules
//!
//! - `flv` - header and tag types, and the [`FlvReader`]
//! - `config` - [`ReaderConfig`] (buffer size, payload bound, strictness)
//! - `error` - error type and result alias
//!
//! # Examples
//!
//! ```
//! use flvread::{FlvReader, TagType};
//! use std::io::{Cursor, Read};
//!
//! let mut data = vec![0x46, 0x4C, 0x56, 0x01, 0x05, 0, 0, 0, 9];
//! data.extend_from_slice(&[0, 0, 0, 0]); // previous tag size
//! data.extend_from_slice(&[9, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0]);
//! data.extend_from_slice(&[0x17, 0x01]);
//!
//! let mut reader = FlvReader::seekable(Cursor::new(data));
//! let header = reader.read_header().unwrap();
//! assert!(header.has_audio() && header.has_video());
//!
//! let (tag, mut payload) = reader.read_tag().unwrap();
//! assert_eq!(tag.tag_type, TagType::Video);
//! let mut body = Vec::new();
//! payload.read_to_end(&mut body).unwrap();
//! assert_eq!(body, [0x17, 0x01]);
//!
//! assert!(reader.read_tag().unwrap_err().is_end_of_input());
//! ```

pub mod config;
pub mod error;
pub mod flv;

pub use config::ReaderConfig;
pub use error::{Error, Result};
pub use flv::{FlvReader, Header, Payload, Tag, TagType};
pub use flvread_io::{codec, PeekReader};
