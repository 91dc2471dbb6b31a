//! Fixed-capacity line buffer used by every composition stage.
//!
//! `LineBuffer` is a plain byte array plus a length. It implements
//! `core::fmt::Write` so `write!` can target it directly, and it truncates
//! silently instead of erroring: a formatted line that does not fit is cut at
//! the last whole character that does. No allocation, no panic paths.
//!
//! A buffer of capacity `CAP` stores at most `CAP - 1` bytes, so the length of
//! any composed output is strictly below its capacity.

use core::fmt::{Result as FmtResult, Write};

/// Fixed-size message/line buffer with truncating append.
pub struct LineBuffer<const CAP: usize> {
    len: usize,
    buf: [u8; CAP],
}

impl<const CAP: usize> LineBuffer<CAP> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { len: 0, buf: [0; CAP] }
    }

    /// Number of bytes currently stored. Always `< CAP`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Stored bytes as a string slice. The buffer only ever stores whole
    /// UTF-8 characters, so this cannot fail in practice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Append a string, truncating at the last whole character that fits.
    /// Characters beyond the limit are dropped without error.
    pub fn push_str(&mut self, s: &str) {
        for ch in s.chars() {
            let width = ch.len_utf8();
            if self.len + width > CAP - 1 {
                break;
            }
            let mut encoded = [0u8; 4];
            ch.encode_utf8(&mut encoded);
            self.buf[self.len..self.len + width].copy_from_slice(&encoded[..width]);
            self.len += width;
        }
    }
}

impl<const CAP: usize> Write for LineBuffer<CAP> {
    fn write_str(&mut self, s: &str) -> FmtResult {
        self.push_str(s);
        Ok(())
    }
}
