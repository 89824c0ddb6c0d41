//! FLV reader over a peek/skip buffer.

use super::{Header, Tag, HEADER_SIZE, PREVIOUS_TAG_SIZE_LEN, SIGNATURE, TAG_REGION_SIZE, VERSION};
use crate::{Error, ReaderConfig, Result};
use bytes::{Bytes, BytesMut};
use flvread_io::codec::get_u32;
use flvread_io::{Bounded, PeekReader};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Payload stream of the most recently read tag.
///
/// Yields exactly `Tag::size` bytes. It borrows the reader, so it must be
/// dropped before the next tag is read; unread bytes are skipped then.
pub type Payload<'a, R> = Bounded<'a, R>;

/// Forward-only FLV reader.
///
/// Call [`read_header`](Self::read_header) once, then
/// [`read_tag`](Self::read_tag) until it returns [`Error::EndOfInput`].
#[derive(Debug)]
pub struct FlvReader<R> {
    inner: PeekReader<R>,
    config: ReaderConfig,
}

impl<R: Read> FlvReader<R> {
    /// Create a reader over a streaming source with the default config.
    pub fn new(source: R) -> Self {
        let config = ReaderConfig::default();
        Self {
            inner: PeekReader::with_capacity(config.buffer_capacity, source),
            config,
        }
    }

    /// Create a reader over a streaming source.
    pub fn with_config(source: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: PeekReader::with_capacity(config.buffer_capacity, source),
            config,
        })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Whether skipped payloads are passed over by seeking.
    pub fn is_seekable(&self) -> bool {
        self.inner.is_seekable()
    }

    /// Get a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Unwrap the source. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Read the file header.
    ///
    /// Header bytes beyond the first 9 are skipped before the first tag.
    pub fn read_header(&mut self) -> Result<Header> {
        let (signature, version, flags, header_len) = {
            let b = self.inner.peek(HEADER_SIZE)?;
            ([b[0], b[1], b[2]], b[3], b[4], get_u32(&b[5..9]))
        };

        if signature != SIGNATURE {
            return Err(Error::InvalidSignature(signature));
        }
        if version != VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let extra = match header_len.checked_sub(HEADER_SIZE as u32) {
            Some(extra) => extra,
            None if self.config.strict_header_length => {
                return Err(Error::InvalidHeaderLength(header_len));
            }
            None => {
                tracing::warn!(header_len, "Header length shorter than header, ignoring");
                0
            }
        };
        self.inner.skip(u64::from(extra));

        tracing::debug!(flags, header_len, extra, "Read FLV header");
        Ok(Header { flags })
    }

    /// Read the next tag and return it with its payload stream.
    ///
    /// Any unread bytes of the previous payload are skipped first. Returns
    /// [`Error::EndOfInput`] when the input ends at a tag boundary, with at
    /// most the trailing previous tag size field left.
    pub fn read_tag(&mut self) -> Result<(Tag, Payload<'_, R>)> {
        let tag = {
            let region = self.inner.peek_available(TAG_REGION_SIZE)?;
            let available = region.len();
            if available < TAG_REGION_SIZE {
                if available <= PREVIOUS_TAG_SIZE_LEN {
                    return Err(Error::EndOfInput);
                }
                return Err(Error::TruncatedTag { available });
            }
            Tag::from_region(region)
        };

        if tag.size > self.config.max_tag_size {
            return Err(Error::TagTooLarge {
                size: tag.size,
                max: self.config.max_tag_size,
            });
        }

        tracing::trace!(
            tag_type = %tag.tag_type,
            size = tag.size,
            time = tag.time,
            "Read FLV tag"
        );

        let payload = self.inner.take(u64::from(tag.size))?;
        Ok((tag, payload))
    }

    /// Read the next tag with its payload copied into memory.
    pub fn read_tag_bytes(&mut self) -> Result<(Tag, Bytes)> {
        let (tag, mut payload) = self.read_tag()?;
        let mut data = BytesMut::zeroed(tag.size as usize);
        payload.read_exact(&mut data)?;
        Ok((tag, data.freeze()))
    }
}

impl<R: Read + Seek> FlvReader<R> {
    /// Create a reader over a seekable source with the default config.
    pub fn seekable(source: R) -> Self {
        let config = ReaderConfig::default();
        Self {
            inner: PeekReader::seekable_with_capacity(config.buffer_capacity, source),
            config,
        }
    }

    /// Create a reader over a seekable source.
    ///
    /// With `config.seek` off the source is read like a stream.
    pub fn seekable_with_config(source: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let inner = if config.seek {
            PeekReader::seekable_with_capacity(config.buffer_capacity, source)
        } else {
            PeekReader::with_capacity(config.buffer_capacity, source)
        };
        Ok(Self { inner, config })
    }
}

impl FlvReader<File> {
    /// Open an FLV file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::seekable(file))
    }
}
