//! Buffered reader with peek and lazily resolved skips.
//!
//! [`PeekReader`] keeps a read-ahead buffer over a source and a single
//! pending-skip counter. Bytes handed out by [`PeekReader::peek`],
//! [`PeekReader::skip`] or [`PeekReader::take`] are only counted; they are
//! physically removed at the start of the next peek or take. When more
//! bytes are pending than are buffered and the source was opened with
//! [`PeekReader::seekable`], the remainder is skipped with a relative seek
//! instead of being read and thrown away.
//!
//! The bounded payload reader returned by `take` borrows the parent
//! mutably and shares its counter, so whatever the caller leaves unread is
//! exactly what the next call skips.

use bytes::{Buf, BytesMut};
use std::fmt;
use std::io::{self, BufRead, Read, Seek, SeekFrom};

/// Default read-ahead size.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Seek, captured at construction for seekable sources.
type SeekFn<R> = fn(&mut R, SeekFrom) -> io::Result<u64>;

fn seek_source<R: Seek>(inner: &mut R, pos: SeekFrom) -> io::Result<u64> {
    inner.seek(pos)
}

/// Buffered reader supporting peek, deferred skip and bounded sub-reads.
pub struct PeekReader<R> {
    inner: R,
    buf: BytesMut,
    capacity: usize,
    seek: Option<SeekFn<R>>,
    /// Offset the last skip seeked to, until a read confirms it exists.
    seek_target: Option<u64>,
    pending: u64,
}

impl<R: Read> PeekReader<R> {
    /// Wrap a streaming source with the default buffer size.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Wrap a streaming source. Skips always read and discard.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            buf: BytesMut::with_capacity(capacity),
            capacity,
            seek: None,
            seek_target: None,
            pending: 0,
        }
    }

    /// Whether skips past the buffer are resolved by seeking.
    pub fn is_seekable(&self) -> bool {
        self.seek.is_some()
    }

    /// Number of bytes currently held in the buffer, including bytes that
    /// are pending a skip.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes handed out but not yet removed.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Get a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the source. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Return the next `n` bytes without consuming them.
    ///
    /// The bytes count as consumed once the next peek or take begins.
    /// Fails with `UnexpectedEof` if the source ends first.
    pub fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        let available = self.peek_available(n)?.len();
        if available < n {
            self.pending = 0;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("wanted {n} bytes, input ended after {available}"),
            ));
        }
        Ok(&self.buf[..n])
    }

    /// Like [`peek`](Self::peek), but returns fewer than `n` bytes instead
    /// of failing when the source ends.
    pub fn peek_available(&mut self, n: usize) -> io::Result<&[u8]> {
        self.resolve_pending()?;
        self.fill_to(n)?;
        let len = n.min(self.buf.len());
        self.pending = len as u64;
        Ok(&self.buf[..len])
    }

    /// Mark `n` more bytes to be skipped before the next peek or take.
    pub fn skip(&mut self, n: u64) {
        self.pending = self.pending.saturating_add(n);
    }

    /// Return a reader over exactly the next `n` bytes.
    ///
    /// Bytes the caller does not read are skipped by the next peek or take.
    pub fn take(&mut self, n: u64) -> io::Result<Bounded<'_, R>> {
        self.resolve_pending()?;
        self.pending = n;
        Ok(Bounded { reader: self })
    }

    fn resolve_pending(&mut self) -> io::Result<()> {
        if self.pending == 0 {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.pending);
        let buffered = self.buf.len() as u64;

        if buffered < pending {
            if let Some(seek) = self.seek {
                let distance = i64::try_from(pending - buffered).map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("skip of {pending} bytes does not fit a seek offset"),
                    )
                })?;
                tracing::debug!(pending, buffered, distance, "Seeking past unbuffered bytes");
                self.buf.clear();
                self.seek_target = Some(seek(&mut self.inner, SeekFrom::Current(distance))?);
                return Ok(());
            }
        }

        self.discard(pending)
    }

    fn discard(&mut self, n: u64) -> io::Result<()> {
        let buffered = self.buf.len() as u64;
        if n <= buffered {
            self.buf.advance(n as usize);
            return Ok(());
        }

        self.buf.clear();
        let rest = n - buffered;
        tracing::trace!(rest, "Discarding unbuffered bytes by reading");
        let copied = io::copy(&mut (&mut self.inner).take(rest), &mut io::sink())?;
        if copied < rest {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended {} bytes short of skip target", rest - copied),
            ));
        }
        Ok(())
    }

    /// Read until at least `n` bytes are buffered or the source ends.
    fn fill_to(&mut self, n: usize) -> io::Result<()> {
        while self.buf.len() < n {
            let start = self.buf.len();
            self.buf.resize(n.max(self.capacity), 0);
            let read = loop {
                match self.inner.read(&mut self.buf[start..]) {
                    Ok(read) => break read,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.buf.truncate(start);
                        return Err(e);
                    }
                }
            };
            self.buf.truncate(start + read);
            if read == 0 {
                self.check_seek_target()?;
                break;
            }
            self.seek_target = None;
        }
        Ok(())
    }

    /// Called when the source reports EOF. A seek past the end succeeds on
    /// most sources, so a skip that overran the input only shows up here.
    fn check_seek_target(&mut self) -> io::Result<()> {
        let (Some(target), Some(seek)) = (self.seek_target.take(), self.seek) else {
            return Ok(());
        };
        let end = seek(&mut self.inner, SeekFrom::End(0))?;
        if target > end {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended {} bytes short of skip target", target - end),
            ));
        }
        Ok(())
    }
}

impl<R: Read + Seek> PeekReader<R> {
    /// Wrap a seekable source with the default buffer size.
    pub fn seekable(inner: R) -> Self {
        Self::seekable_with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Wrap a seekable source. Skips past the buffer seek instead of reading.
    pub fn seekable_with_capacity(capacity: usize, inner: R) -> Self {
        let mut reader = Self::with_capacity(capacity, inner);
        reader.seek = Some(seek_source::<R>);
        reader
    }
}

impl<R: fmt::Debug> fmt::Debug for PeekReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeekReader")
            .field("inner", &self.inner)
            .field("buffered", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("seekable", &self.seek.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

/// Reader over a fixed number of bytes from a [`PeekReader`].
///
/// Its remaining count is the parent's pending-skip counter, so dropping it
/// early leaves the rest to be skipped by the parent's next call.
pub struct Bounded<'a, R> {
    reader: &'a mut PeekReader<R>,
}

impl<R> Bounded<'_, R> {
    /// Bytes left to read.
    pub fn remaining(&self) -> u64 {
        self.reader.pending
    }

    /// Give up on the rest of the bytes without reading them.
    ///
    /// Equivalent to dropping the reader; the parent skips what is left.
    pub fn discard(self) {
        drop(self);
    }
}

impl<R: Read> Read for Bounded<'_, R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let limit = usize::try_from(self.reader.pending)
            .unwrap_or(usize::MAX)
            .min(out.len());
        if limit == 0 {
            return Ok(0);
        }

        // Large reads on an empty buffer go straight to the source.
        if self.reader.buf.is_empty() && limit >= self.reader.capacity {
            let read = self.reader.inner.read(&mut out[..limit])?;
            if read == 0 {
                self.reader.check_seek_target()?;
            } else {
                self.reader.seek_target = None;
            }
            self.reader.pending -= read as u64;
            return Ok(read);
        }

        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(out.len());
            out[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl<R: Read> BufRead for Bounded<'_, R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.reader.pending == 0 {
            return Ok(&[]);
        }
        if self.reader.buf.is_empty() {
            self.reader.fill_to(1)?;
        }
        let len = usize::try_from(self.reader.pending)
            .unwrap_or(usize::MAX)
            .min(self.reader.buf.len());
        Ok(&self.reader.buf[..len])
    }

    fn consume(&mut self, amt: usize) {
        let amt = usize::try_from(self.reader.pending)
            .unwrap_or(usize::MAX)
            .min(self.reader.buf.len())
            .min(amt);
        self.reader.buf.advance(amt);
        self.reader.pending -= amt as u64;
    }
}

impl<R> fmt::Debug for Bounded<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounded")
            .field("remaining", &self.reader.pending)
            .finish()
    }
}
