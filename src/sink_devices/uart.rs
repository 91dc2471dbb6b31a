//! # UART Sink - Blocking Serial Transmit
//!
//! Sink device backed by a blocking embassy-rp UART. Each composed line is
//! handed to `Uart::blocking_write`, which busy-waits until the TX FIFO has
//! accepted every byte. There is no queuing and no retry: the call returns
//! once the hardware owns the bytes, and a write error is discarded because
//! the logging path has no fault channel.
//!
//! Construction happens once at startup from the application's peripheral
//! set:
//!
//! ```rust,ignore
//! use embassy_rp::uart::{Config, Uart};
//! use serial_debug_lib::SinkDevice;
//!
//! let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, Config::default());
//! let sink = SinkDevice::new(uart);
//! ```
//!
//! The calling context blocks for the full transmission time of the line at
//! the configured baud rate, so avoid logging from contexts that cannot
//! tolerate that wait.

use embassy_rp::uart::{Blocking, Uart};

/// Sink device transmitting over a blocking UART.
pub struct SinkDevice {
    uart: Uart<'static, Blocking>,
}

impl SinkDevice {
    pub fn new(uart: Uart<'static, Blocking>) -> Self {
        Self { uart }
    }

    /// Transmit the whole line, blocking until the driver has taken every byte.
    pub(crate) fn write_all(&mut self, bytes: &[u8]) {
        let _ = self.uart.blocking_write(bytes);
    }
}
