//! Shared helpers for integration tests.
//!
//! Provides [`FlvBuilder`] for assembling FLV byte streams in memory, plus
//! source wrappers that hide `Seek` ([`Stream`]) or fail reads inside a
//! guarded byte range ([`Tripwire`]).

#![allow(dead_code)]

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use flvread::codec::{put_timestamp, put_u24, put_u32};

/// Install a test subscriber once; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds FLV files tag by tag, tracking where each tag region starts.
pub struct FlvBuilder {
    data: Vec<u8>,
    last_tag_size: u32,
    pub tag_offsets: Vec<u64>,
}

impl FlvBuilder {
    /// Start a file with a 9-byte header.
    pub fn new(flags: u8) -> Self {
        Self::with_header_len(flags, 9)
    }

    /// Start a file declaring `header_len`; bytes past 9 are filled with 0xEE.
    pub fn with_header_len(flags: u8, header_len: u32) -> Self {
        let mut data = vec![b'F', b'L', b'V', 1, flags, 0, 0, 0, 0];
        put_u32(&mut data[5..9], header_len);
        data.resize((header_len as usize).max(9), 0xEE);
        Self {
            data,
            last_tag_size: 0,
            tag_offsets: Vec::new(),
        }
    }

    /// Append a tag with the given payload.
    pub fn tag(mut self, tag_type: u8, time: u32, payload: &[u8]) -> Self {
        self.tag_offsets.push(self.data.len() as u64);

        let mut region = [0u8; 15];
        put_u32(&mut region[0..4], self.last_tag_size);
        region[4] = tag_type;
        put_u24(&mut region[5..8], payload.len() as u32);
        put_timestamp(&mut region[8..12], time);
        self.data.extend_from_slice(&region);
        self.data.extend_from_slice(payload);

        self.last_tag_size = 11 + payload.len() as u32;
        self
    }

    /// Finish the file, appending the trailing previous tag size field.
    pub fn build(mut self) -> Vec<u8> {
        let mut trailer = [0u8; 4];
        put_u32(&mut trailer, self.last_tag_size);
        self.data.extend_from_slice(&trailer);
        self.data
    }

    /// Finish the file without the trailing field.
    pub fn build_bare(self) -> Vec<u8> {
        self.data
    }
}

/// Payload filled with a recognizable pattern.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_add(seed)).collect()
}

/// Read-only source; never seeks.
pub struct Stream<R>(pub R);

impl<R: Read> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

/// Seekable source that fails any read starting inside `[start, end)`
/// and never returns bytes from that range.
pub struct Tripwire {
    data: Cursor<Vec<u8>>,
    start: u64,
    end: u64,
    pub seeks: usize,
}

impl Tripwire {
    pub fn new(data: Vec<u8>, start: u64, end: u64) -> Self {
        Self {
            data: Cursor::new(data),
            start,
            end,
            seeks: 0,
        }
    }
}

impl Read for Tripwire {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let pos = self.data.position();
        if pos >= self.start && pos < self.end {
            return Err(io::Error::other(format!(
                "read inside guarded range at offset {pos}"
            )));
        }
        let max = if pos < self.start {
            buf.len().min((self.start - pos) as usize)
        } else {
            buf.len()
        };
        self.data.read(&mut buf[..max])
    }
}

impl Seek for Tripwire {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seeks += 1;
        self.data.seek(pos)
    }
}
