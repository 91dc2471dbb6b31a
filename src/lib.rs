//! ANSI-colored formatted debug logging for microcontroller firmware.
//!
//! The crate composes printf-style messages into fixed-capacity line buffers
//! - optionally prefixed with a `[HH:MM:SS.mmm]` timestamp, a colored severity
//! tag, and the caller's `[file:line]` - and hands each finished line to a
//! blocking byte sink. No allocation, no queuing, no error surface: a log
//! call either transmits, truncates, or silently does nothing.
//!
//! The transport backend is selected at build time with a feature flag
//! (`sink-uart`, `sink-usb-cdc`, or `sink-capture` for host-side testing);
//! each backend exports the same `SinkDevice` type.
//!
//! ```rust,ignore
//! use embassy_rp::uart::{Config, Uart};
//! use serial_debug_lib::{global, DebugConfig, SinkDevice, TickSource};
//!
//! let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, Config::default());
//! global::init(DebugConfig::default(), SinkDevice::new(uart), TickSource::Counter(&MS_TICK));
//!
//! serial_debug_lib::debug_info!("firmware {} up\r\n", VERSION);
//! serial_debug_lib::debug_error!("sensor {} timed out\r\n", id);
//! ```
//!
//! # Concurrency
//!
//! The logger holds its configuration and sink without any locking, the same
//! way a bare-metal C logger keeps them in file-scope statics. All logging
//! must come from a single logical caller stream (one core, one priority
//! context). Callers on multi-threaded hosts or preemptive RTOSes must add
//! their own serialization around the whole call; the crate deliberately does
//! not take a lock, which could deadlock or invert priorities if logging
//! happens inside an interrupt handler.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(
    all(feature = "sink-uart", any(feature = "sink-usb-cdc", feature = "sink-capture")),
    all(feature = "sink-usb-cdc", any(feature = "sink-uart", feature = "sink-capture")),
    all(feature = "sink-capture", any(feature = "sink-uart", feature = "sink-usb-cdc")),
))]
compile_error!("Only one sink implementation feature can be enabled at a time");

#[cfg(all(not(test), not(any(feature = "sink-uart", feature = "sink-usb-cdc", feature = "sink-capture"))))]
compile_error!("At least one sink implementation feature must be enabled");

pub mod ansi;
mod composer;
pub mod global;
mod log_bridge;
mod log_line;
mod macros;
mod severity;
pub mod sink_devices;

use core::fmt;
use core::panic::Location;
use core::sync::atomic::{AtomicU32, Ordering};

use log_line::LineBuffer;
use severity::Severity;

pub use log_bridge::init_log_bridge;
pub use sink_devices::SinkDevice;

#[cfg(feature = "sink-capture")]
pub use sink_devices::CaptureBuffer;

/// Capacity of the message formatting buffer. A single formatted message is
/// truncated to at most `MSG_CAP - 1` bytes.
pub const MSG_CAP: usize = 256;

/// Capacity of the composed line buffer, sized to fit a full message plus
/// timestamp, severity, and file/line prefixes.
pub const LINE_CAP: usize = 2 * MSG_CAP;

/// Millisecond tick source for the timestamp stage.
///
/// `None` renders every timestamp as `00:00:00.000`. `Counter` reads a
/// caller-maintained counter, typically incremented from a 1 kHz timer
/// interrupt. The counter wraps at the `u32` width.
pub enum TickSource {
    None,
    Counter(&'static AtomicU32),
    /// Read the embassy time driver instead of a caller-maintained counter.
    #[cfg(feature = "tick-embassy")]
    Embassy,
}

impl TickSource {
    pub(crate) fn now_ms(&self) -> u32 {
        match self {
            TickSource::None => 0,
            TickSource::Counter(counter) => counter.load(Ordering::Relaxed),
            #[cfg(feature = "tick-embassy")]
            TickSource::Embassy => embassy_time::Instant::now().as_millis() as u32,
        }
    }
}

/// Output toggles for a logger.
///
/// All three take effect per call; the runtime setters on [`DebugLogger`]
/// change them for subsequent calls only.
pub struct DebugConfig {
    /// Prefix every line with `[HH:MM:SS.mmm] `.
    pub timestamp_enabled: bool,
    /// Use the ANSI-colored severity prefixes instead of the plain ones.
    pub color_enabled: bool,
    /// Include the caller's `[file:line] ` on error and warning lines.
    pub file_line_enabled: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            timestamp_enabled: true,
            color_enabled: true,
            file_line_enabled: false,
        }
    }
}

enum LoggerState {
    Uninitialized,
    Initialized {
        sink: SinkDevice,
        tick: TickSource,
        timestamp_enabled: bool,
        color_enabled: bool,
        file_line_enabled: bool,
    },
}

/// A debug logger bound to one sink device.
///
/// Every operation on an uninitialized logger is a silent no-op, so the
/// logger can be declared (including in a `static`) long before the sink
/// hardware exists.
pub struct DebugLogger {
    state: LoggerState,
}

impl DebugLogger {
    pub const fn new() -> Self {
        DebugLogger {
            state: LoggerState::Uninitialized,
        }
    }

    /// Bind the logger to a sink and tick source and set the output toggles.
    /// Must be called before any logging call that should produce output.
    pub fn initialize(&mut self, config: DebugConfig, sink: SinkDevice, tick: TickSource) {
        self.state = LoggerState::Initialized {
            sink,
            tick,
            timestamp_enabled: config.timestamp_enabled,
            color_enabled: config.color_enabled,
            file_line_enabled: config.file_line_enabled,
        };
    }

    /// Log a message with no severity prefix.
    pub fn log(&mut self, args: fmt::Arguments<'_>) {
        self.dispatch(None, None, args);
    }

    /// Log a message with a caller-supplied type label and ANSI style token
    /// (pass `""` for no style).
    pub fn log_with_type(&mut self, label: &str, style: &str, args: fmt::Arguments<'_>) {
        self.dispatch(Some(&Severity::Custom { label, style }), None, args);
    }

    /// Log an error, capturing the caller's file and line for the file/line
    /// stage.
    #[track_caller]
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        self.dispatch(Some(&Severity::Error), Some((location.file(), location.line())), args);
    }

    /// Log a warning, capturing the caller's file and line for the file/line
    /// stage.
    #[track_caller]
    pub fn warning(&mut self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        self.dispatch(Some(&Severity::Warning), Some((location.file(), location.line())), args);
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.dispatch(Some(&Severity::Info), None, args);
    }

    pub fn ok(&mut self, args: fmt::Arguments<'_>) {
        self.dispatch(Some(&Severity::Ok), None, args);
    }

    pub fn success(&mut self, args: fmt::Arguments<'_>) {
        self.dispatch(Some(&Severity::Success), None, args);
    }

    pub fn set_timestamp_enabled(&mut self, enabled: bool) {
        if let LoggerState::Initialized { timestamp_enabled, .. } = &mut self.state {
            *timestamp_enabled = enabled;
        }
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        if let LoggerState::Initialized { color_enabled, .. } = &mut self.state {
            *color_enabled = enabled;
        }
    }

    pub fn set_file_line_enabled(&mut self, enabled: bool) {
        if let LoggerState::Initialized { file_line_enabled, .. } = &mut self.state {
            *file_line_enabled = enabled;
        }
    }

    /// Compose and transmit one line: format the message, then prepend the
    /// enabled stages in order and hand the result to the sink.
    pub(crate) fn dispatch(&mut self, severity: Option<&Severity<'_>>, call_site: Option<(&str, u32)>, args: fmt::Arguments<'_>) {
        let LoggerState::Initialized {
            sink,
            tick,
            timestamp_enabled,
            color_enabled,
            file_line_enabled,
        } = &mut self.state
        else {
            return;
        };

        let mut message = LineBuffer::<MSG_CAP>::new();
        let _ = fmt::Write::write_fmt(&mut message, args);

        let mut line = LineBuffer::<LINE_CAP>::new();
        if *timestamp_enabled {
            composer::write_timestamp(&mut line, tick.now_ms());
        }
        if let Some(severity) = severity {
            composer::write_severity(&mut line, severity, *color_enabled);
        }
        if *file_line_enabled {
            if let Some((file, line_number)) = call_site {
                composer::write_file_line(&mut line, file, line_number);
            }
        }
        line.push_str(message.as_str());

        sink.write_all(line.as_bytes());
    }
}

#[cfg(all(test, feature = "std", feature = "sink-capture"))]
mod tests {
    use super::*;

    fn initialized(sink: SinkDevice, config: DebugConfig) -> DebugLogger {
        let mut logger = DebugLogger::new();
        logger.initialize(config, sink, TickSource::None);
        logger
    }

    fn no_prefix_config() -> DebugConfig {
        DebugConfig {
            timestamp_enabled: false,
            color_enabled: false,
            file_line_enabled: false,
        }
    }

    #[test]
    fn calls_before_initialize_are_no_ops() {
        let mut logger = DebugLogger::new();
        logger.log(format_args!("dropped"));
        logger.error(format_args!("dropped"));
        logger.set_color_enabled(false);
        logger.set_timestamp_enabled(true);
        // Nothing to observe and nothing to fault; the logger stays usable.
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        logger.initialize(no_prefix_config(), SinkDevice::new(&BUFFER), TickSource::None);
        logger.log(format_args!("first"));
        BUFFER.contents(|bytes| assert_eq!(bytes, b"first"));
    }

    #[test]
    fn plain_log_transmits_the_exact_rendering() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = initialized(SinkDevice::new(&BUFFER), no_prefix_config());
        logger.log(format_args!("temp = {:.2} C\r\n", 36.75));
        BUFFER.contents(|bytes| assert_eq!(bytes, b"temp = 36.75 C\r\n"));
    }

    #[test]
    fn timestamp_stage_reads_the_counter() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        static TICK: AtomicU32 = AtomicU32::new(3_723_456);
        let mut logger = DebugLogger::new();
        logger.initialize(
            DebugConfig {
                timestamp_enabled: true,
                color_enabled: false,
                file_line_enabled: false,
            },
            SinkDevice::new(&BUFFER),
            TickSource::Counter(&TICK),
        );
        logger.log(format_args!("tick"));
        BUFFER.contents(|bytes| assert_eq!(bytes, b"[01:02:03.456] tick"));
    }

    #[test]
    fn missing_tick_source_renders_zero_timestamp() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = DebugLogger::new();
        logger.initialize(
            DebugConfig {
                timestamp_enabled: true,
                color_enabled: false,
                file_line_enabled: false,
            },
            SinkDevice::new(&BUFFER),
            TickSource::None,
        );
        logger.info(format_args!("boot"));
        BUFFER.contents(|bytes| assert_eq!(bytes, b"[00:00:00.000] [INFO] boot"));
    }

    #[test]
    fn error_carries_the_call_site_when_enabled() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = DebugLogger::new();
        logger.initialize(
            DebugConfig {
                timestamp_enabled: false,
                color_enabled: false,
                file_line_enabled: true,
            },
            SinkDevice::new(&BUFFER),
            TickSource::None,
        );
        logger.error(format_args!("bus fault"));
        BUFFER.contents(|bytes| {
            let line = core::str::from_utf8(bytes).unwrap();
            assert!(line.starts_with("[ERROR] [src"), "got: {line}");
            assert!(line.contains("lib.rs:"), "got: {line}");
            assert!(line.ends_with("] bus fault"), "got: {line}");
        });
    }

    #[test]
    fn info_never_carries_a_call_site() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = DebugLogger::new();
        logger.initialize(
            DebugConfig {
                timestamp_enabled: false,
                color_enabled: false,
                file_line_enabled: true,
            },
            SinkDevice::new(&BUFFER),
            TickSource::None,
        );
        logger.info(format_args!("ready"));
        logger.ok(format_args!("ready"));
        logger.success(format_args!("ready"));
        BUFFER.contents(|bytes| {
            let all = core::str::from_utf8(bytes).unwrap();
            assert_eq!(all, "[INFO] ready[OK] ready[SUCCESS] ready");
        });
    }

    #[test]
    fn color_setter_affects_only_subsequent_calls() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = initialized(
            SinkDevice::new(&BUFFER),
            DebugConfig {
                timestamp_enabled: false,
                color_enabled: true,
                file_line_enabled: false,
            },
        );
        logger.warning(format_args!("one\n"));
        logger.set_color_enabled(false);
        logger.warning(format_args!("two\n"));
        BUFFER.contents(|bytes| {
            let all = core::str::from_utf8(bytes).unwrap();
            assert_eq!(all, "\x1b[93m\x1b[1m[WARNING]\x1b[0m one\n[WARNING] two\n");
        });
    }

    #[test]
    fn custom_type_line_is_present_regardless_of_color() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        for color in [true, false] {
            BUFFER.clear();
            let mut logger = initialized(
                SinkDevice::new(&BUFFER),
                DebugConfig {
                    timestamp_enabled: false,
                    color_enabled: color,
                    file_line_enabled: false,
                },
            );
            logger.log_with_type("CUSTOM", "", format_args!("ok: {}", "done"));
            BUFFER.contents(|bytes| {
                let line = core::str::from_utf8(bytes).unwrap();
                assert!(line.contains("[CUSTOM] ok: done"), "color={color}, got: {line}");
            });
        }
    }

    #[test]
    fn message_truncates_at_msg_cap() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        let mut logger = initialized(SinkDevice::new(&BUFFER), no_prefix_config());
        let long = "a".repeat(MSG_CAP + 100);
        logger.log(format_args!("{long}"));
        assert_eq!(BUFFER.len(), MSG_CAP - 1);
    }

    #[test]
    fn composed_line_stays_below_line_cap_with_every_stage_enabled() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();
        static TICK: AtomicU32 = AtomicU32::new(u32::MAX);
        let mut logger = DebugLogger::new();
        logger.initialize(
            DebugConfig {
                timestamp_enabled: true,
                color_enabled: true,
                file_line_enabled: true,
            },
            SinkDevice::new(&BUFFER),
            TickSource::Counter(&TICK),
        );
        let long = "z".repeat(MSG_CAP + 100);
        logger.error(format_args!("{long}"));
        assert!(BUFFER.len() < LINE_CAP);
        assert!(!BUFFER.is_empty());
    }
}
