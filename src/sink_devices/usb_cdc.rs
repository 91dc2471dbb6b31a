//! # USB CDC Sink - Blocking Transmit over a CDC ACM Interface
//!
//! Sink device backed by an embassy-usb CDC ACM sender on the RP2040 USB
//! peripheral. Each composed line is fragmented into `PACKET_SIZE` (64) byte
//! packets and every packet write is driven to completion with
//! `embassy_futures::block_on`, preserving the same blocking contract as the
//! UART sink. A failed packet write abandons the rest of the line; the
//! logging path has no fault channel.
//!
//! The USB device state machine (`UsbDevice::run`) must be serviced from a
//! different execution context than the one doing the logging, for example a
//! task on the second core or an interrupt-mode executor; otherwise the
//! blocking write never completes.
//!
//! ```rust,ignore
//! use embassy_usb::class::cdc_acm::CdcAcmClass;
//! use serial_debug_lib::SinkDevice;
//!
//! let class = CdcAcmClass::new(&mut builder, state, 64);
//! let (sender, _receiver) = class.split();
//! // builder.build() -> spawn UsbDevice::run() elsewhere
//! let sink = SinkDevice::new(sender);
//! ```

use embassy_futures::block_on;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::Sender;

/// Size of each USB packet fragment.
pub const PACKET_SIZE: usize = 64;

/// Sink device transmitting over a USB CDC ACM interface.
pub struct SinkDevice {
    sender: Sender<'static, Driver<'static, USB>>,
}

impl SinkDevice {
    pub fn new(sender: Sender<'static, Driver<'static, USB>>) -> Self {
        Self { sender }
    }

    /// Transmit the whole line as 64-byte packets, blocking on each packet
    /// until the class accepts it.
    pub(crate) fn write_all(&mut self, bytes: &[u8]) {
        block_on(async {
            for packet in bytes.chunks(PACKET_SIZE) {
                if self.sender.write_packet(packet).await.is_err() {
                    break;
                }
            }
        });
    }
}
