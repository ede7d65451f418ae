//! Verbatim recording of consumed input.
//!
//! While recording is enabled, every byte the scanner consumes is appended
//! to the cache. A caller brackets a region of interest with two
//! [`len()`](InputCache::len) readings and later retrieves the exact source
//! text between them, e.g. to keep a user's formatting of a named term.
//!
//! Offsets are positions in the cache, not in the scanned input. The cache
//! is only emptied by [`start()`](InputCache::start) and
//! [`reset()`](InputCache::reset); long sessions must reset it themselves.

/// Side buffer mirroring consumed input.
#[derive(Clone, Debug, Default)]
pub struct InputCache {
    bytes: Vec<u8>,
    recording: bool,
}

impl InputCache {
    /// Create an empty, disabled cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable recording and drop anything recorded earlier.
    pub fn start(&mut self) {
        self.recording = true;
        self.bytes.clear();
    }

    /// Disable recording. Recorded bytes stay retrievable.
    pub fn stop(&mut self) {
        self.recording = false;
    }

    /// Drop recorded bytes without changing whether recording is enabled.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Is recording enabled?
    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Number of recorded bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Record one consumed byte, if recording is enabled.
    #[inline]
    pub fn record(&mut self, byte: u8) {
        if self.recording {
            self.bytes.push(byte);
        }
    }

    /// Record a run of consumed bytes, if recording is enabled.
    #[inline]
    pub fn record_slice(&mut self, bytes: &[u8]) {
        if self.recording {
            self.bytes.extend_from_slice(bytes);
        }
    }

    /// Recorded bytes in the half-open range `begin..end`.
    ///
    /// Returns `None` if the range is reversed or extends past the recorded
    /// content.
    pub fn get(&self, begin: usize, end: usize) -> Option<&[u8]> {
        self.bytes.get(begin..end)
    }

    /// Like [`get()`](Self::get), with leading and trailing ASCII whitespace
    /// removed.
    ///
    /// A span taken around a sub-expression usually starts with the
    /// separator that preceded it; this variant yields just the expression.
    pub fn get_trimmed(&self, begin: usize, end: usize) -> Option<&[u8]> {
        self.get(begin, end).map(<[u8]>::trim_ascii)
    }
}

#[cfg(test)]
mod tests;
