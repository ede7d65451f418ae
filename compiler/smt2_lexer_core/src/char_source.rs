//! Buffered pull source of bytes over an arbitrary reader.
//!
//! The source keeps one chunk of input in an owned buffer and exposes the
//! byte under the read cursor without consuming it. When the chunk runs out
//! the next [`current()`](CharSource::current) call refills it.
//!
//! # Interactive Sources
//!
//! An interactive source (a REPL on standard input, a pipe fed by another
//! process) reads one byte per refill so that it never consumes input past
//! the token being scanned: the caller may drop the source after a command
//! and rebind the scanner to a fresh reader without losing buffered bytes.
//!
//! The two modes differ only where a read returns no data:
//!
//! | Read result               | Batch           | Interactive       |
//! |---------------------------|-----------------|-------------------|
//! | `Ok(0)`                   | end of input    | end of input      |
//! | `ErrorKind::Interrupted`  | retry           | retry             |
//! | `ErrorKind::WouldBlock`   | I/O error       | wait and retry    |
//! | any other error           | I/O error       | I/O error         |
//!
//! End of input is sticky: once reached, the reader is never polled again.

use std::io::{self, ErrorKind, Read};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

/// Chunk size for batch (non-interactive) sources.
pub const BATCH_CHUNK_SIZE: usize = 1024;

/// Pause between polls of an interactive source that has no data ready.
const INTERACTIVE_RETRY_DELAY: Duration = Duration::from_millis(2);

/// Buffered byte source with one byte of lookahead.
#[derive(Debug)]
pub struct CharSource<R> {
    reader: R,
    /// Chunk buffer. Only `buf[pos..end]` holds unread input.
    buf: Vec<u8>,
    pos: usize,
    end: usize,
    interactive: bool,
    at_eof: bool,
}

impl<R: Read> CharSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R, interactive: bool) -> Self {
        let chunk = if interactive { 1 } else { BATCH_CHUNK_SIZE };
        Self {
            reader,
            buf: vec![0; chunk],
            pos: 0,
            end: 0,
            interactive,
            at_eof: false,
        }
    }

    /// Returns the byte under the cursor without consuming it.
    ///
    /// Returns `Ok(None)` at end of input. May block on the underlying
    /// reader when the buffered chunk is exhausted.
    #[inline]
    pub fn current(&mut self) -> io::Result<Option<u8>> {
        if self.pos < self.end {
            return Ok(Some(self.buf[self.pos]));
        }
        if self.at_eof || !self.refill()? {
            return Ok(None);
        }
        Ok(Some(self.buf[self.pos]))
    }

    /// Consume the byte returned by the last [`current()`](Self::current).
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.end, "advance past buffered input");
        self.pos += 1;
    }

    /// Consume buffered bytes up to, not including, the first `stop` byte.
    ///
    /// Stops at the end of the buffered chunk as well; the caller loops with
    /// [`current()`](Self::current) to continue into the next chunk. Returns
    /// the consumed bytes.
    pub fn take_until(&mut self, stop: u8) -> &[u8] {
        let start = self.pos;
        let window = &self.buf[start..self.end];
        let len = memchr::memchr(stop, window).unwrap_or(window.len());
        self.pos += len;
        &self.buf[start..start + len]
    }

    /// Was this source created in interactive mode?
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Has the underlying reader reported end of input?
    ///
    /// Bytes may still be pending in the buffer when this is `false`; it only
    /// becomes `true` after a read returned no data.
    pub fn is_at_eof(&self) -> bool {
        self.at_eof
    }

    /// Number of bytes read from the reader but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.end - self.pos
    }

    /// Read the next chunk. Returns `false` at end of input.
    fn refill(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    trace!(interactive = self.interactive, "end of input");
                    self.at_eof = true;
                    self.pos = 0;
                    self.end = 0;
                    return Ok(false);
                }
                Ok(n) => {
                    self.pos = 0;
                    self.end = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::WouldBlock && self.interactive => {
                    debug!("interactive input not ready, waiting");
                    thread::sleep(INTERACTIVE_RETRY_DELAY);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
