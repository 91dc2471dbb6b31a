//! Sink device implementations
//!
//! This module contains the transport backends a logger can be configured
//! with. Exactly one is selected at build time through a feature flag:
//!
//! - `uart`: blocking UART transmit (embassy-rp)
//! - `usb_cdc`: blocking USB CDC ACM transmit (embassy-rp + embassy-usb)
//! - `capture`: in-memory capture buffer for tests and host-side simulation

#[cfg(feature = "sink-uart")]
pub mod uart;

#[cfg(feature = "sink-usb-cdc")]
pub mod usb_cdc;

#[cfg(feature = "sink-capture")]
pub mod capture;

// Re-export the active sink device implementation
#[cfg(feature = "sink-uart")]
pub use uart::SinkDevice;

#[cfg(feature = "sink-usb-cdc")]
pub use usb_cdc::SinkDevice;

#[cfg(feature = "sink-capture")]
pub use capture::{CaptureBuffer, SinkDevice};
