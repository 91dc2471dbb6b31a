//! # Capture Sink - In-Memory Device for Testing
//!
//! The simplest possible sink implementation: composed lines are appended to a
//! fixed-size in-memory buffer instead of leaving the device. It exists so the
//! composition pipeline can be exercised byte-for-byte on a host without
//! hardware, and doubles as a crash-log scratch area in firmware builds.
//!
//! The backing [`CaptureBuffer`] lives in a `static` supplied by the caller,
//! mirroring how hardware sinks reference a peripheral with `'static`
//! lifetime. It uses `UnsafeCell` with a manual `Sync` impl and relies on the
//! crate-wide single-caller-stream contract; there is no internal locking.

use core::cell::UnsafeCell;

/// Storage capacity of a capture buffer, sized for a handful of full lines.
pub const CAPTURE_CAP: usize = 4096;

struct CaptureInner {
    len: usize,
    buf: [u8; CAPTURE_CAP],
}

/// Fixed-size byte store a capture [`SinkDevice`] writes into.
pub struct CaptureBuffer {
    inner: UnsafeCell<CaptureInner>,
}

// Single logical caller stream only; see the crate-level concurrency note.
unsafe impl Sync for CaptureBuffer {}

impl CaptureBuffer {
    pub const fn new() -> Self {
        Self {
            inner: UnsafeCell::new(CaptureInner {
                len: 0,
                buf: [0; CAPTURE_CAP],
            }),
        }
    }

    /// Run `f` over everything captured so far.
    pub fn contents<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let inner = unsafe { &*self.inner.get() };
        f(&inner.buf[..inner.len])
    }

    /// Number of bytes captured so far.
    pub fn len(&self) -> usize {
        let inner = unsafe { &*self.inner.get() };
        inner.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        let inner = unsafe { &mut *self.inner.get() };
        inner.len = 0;
    }

    fn append(&self, bytes: &[u8]) {
        let inner = unsafe { &mut *self.inner.get() };
        let remaining = CAPTURE_CAP - inner.len;
        let take = bytes.len().min(remaining);
        inner.buf[inner.len..inner.len + take].copy_from_slice(&bytes[..take]);
        inner.len += take;
    }
}

/// Sink device writing composed lines into a [`CaptureBuffer`].
pub struct SinkDevice {
    buffer: &'static CaptureBuffer,
}

impl SinkDevice {
    pub const fn new(buffer: &'static CaptureBuffer) -> Self {
        Self { buffer }
    }

    /// Append the whole line to the capture buffer. Bytes beyond the buffer
    /// capacity are dropped, matching the fail-silent transport contract.
    pub(crate) fn write_all(&mut self, bytes: &[u8]) {
        self.buffer.append(bytes);
    }
}
