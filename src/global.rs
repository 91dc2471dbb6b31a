//! Process-wide logger instance and its free-function surface.
//!
//! Firmware that wants a single logger without threading a `DebugLogger`
//! through every module uses this surface, usually through the `debug_*!`
//! macros. It is the moral equivalent of a file-scope static in a C logger:
//! one instance, initialized once at startup, mutated in place.
//!
//! The instance sits in an `UnsafeCell` marked `Sync` by hand. That is sound
//! only under the crate's concurrency contract: a single logical caller
//! stream, with any cross-context use serialized by the application. No lock
//! is taken here on purpose; see the crate-level documentation.

use core::cell::UnsafeCell;
use core::fmt;
use core::panic::Location;

use crate::severity::Severity;
use crate::{DebugConfig, DebugLogger, SinkDevice, TickSource};

struct GlobalLogger(UnsafeCell<DebugLogger>);

// Single logical caller stream only; see the crate-level concurrency note.
unsafe impl Sync for GlobalLogger {}

static LOGGER: GlobalLogger = GlobalLogger(UnsafeCell::new(DebugLogger::new()));

fn with<R>(f: impl FnOnce(&mut DebugLogger) -> R) -> R {
    f(unsafe { &mut *LOGGER.0.get() })
}

/// Initialize the process-wide logger. Logging calls issued before this are
/// silent no-ops.
pub fn init(config: DebugConfig, sink: SinkDevice, tick: TickSource) {
    with(|logger| logger.initialize(config, sink, tick));
}

/// Log a message with no severity prefix.
pub fn log(args: fmt::Arguments<'_>) {
    with(|logger| logger.log(args));
}

/// Log a message with a caller-supplied type label and ANSI style token.
pub fn log_with_type(label: &str, style: &str, args: fmt::Arguments<'_>) {
    with(|logger| logger.log_with_type(label, style, args));
}

/// Log an error. The caller's file and line are captured here and included
/// when the file/line toggle is enabled.
#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    let location = Location::caller();
    with(|logger| logger.dispatch(Some(&Severity::Error), Some((location.file(), location.line())), args));
}

/// Log a warning. The caller's file and line are captured here and included
/// when the file/line toggle is enabled.
#[track_caller]
pub fn warning(args: fmt::Arguments<'_>) {
    let location = Location::caller();
    with(|logger| logger.dispatch(Some(&Severity::Warning), Some((location.file(), location.line())), args));
}

pub fn info(args: fmt::Arguments<'_>) {
    with(|logger| logger.info(args));
}

pub fn ok(args: fmt::Arguments<'_>) {
    with(|logger| logger.ok(args));
}

pub fn success(args: fmt::Arguments<'_>) {
    with(|logger| logger.success(args));
}

pub fn set_timestamp_enabled(enabled: bool) {
    with(|logger| logger.set_timestamp_enabled(enabled));
}

pub fn set_color_enabled(enabled: bool) {
    with(|logger| logger.set_color_enabled(enabled));
}

pub fn set_file_line_enabled(enabled: bool) {
    with(|logger| logger.set_file_line_enabled(enabled));
}

/// Dispatch with an explicit severity and call site, for adapters that carry
/// their own source location (for example the `log` crate bridge).
pub(crate) fn dispatch(severity: Option<&Severity<'_>>, call_site: Option<(&str, u32)>, args: fmt::Arguments<'_>) {
    with(|logger| logger.dispatch(severity, call_site, args));
}

#[cfg(all(test, feature = "std", feature = "sink-capture"))]
mod tests {
    use super::*;
    use crate::CaptureBuffer;

    // The process-wide instance is shared state, so the whole free-function
    // surface (macros and log bridge included) is exercised in one
    // sequential test instead of several racing ones.
    #[test]
    fn global_surface_end_to_end() {
        static BUFFER: CaptureBuffer = CaptureBuffer::new();

        // Before init every call is a silent no-op.
        crate::debug_log!("dropped {}", 1);
        crate::debug_error!("dropped");
        set_color_enabled(false);
        assert!(BUFFER.is_empty());

        init(
            DebugConfig {
                timestamp_enabled: false,
                color_enabled: false,
                file_line_enabled: false,
            },
            SinkDevice::new(&BUFFER),
            TickSource::None,
        );

        crate::debug_log!("a={} ", 1);
        crate::debug_info!("up ");
        crate::debug_ok!("ok ");
        crate::debug_success!("done ");
        crate::debug_log_with_type!("BOOT", "", "stage {} ", 2);
        BUFFER.contents(|bytes| {
            let all = core::str::from_utf8(bytes).unwrap();
            assert_eq!(all, "a=1 [INFO] up [OK] ok [SUCCESS] done [BOOT] stage 2 ");
        });
        BUFFER.clear();

        set_file_line_enabled(true);
        crate::debug_warning!("w");
        BUFFER.contents(|bytes| {
            let line = core::str::from_utf8(bytes).unwrap();
            assert!(line.starts_with("[WARNING] [src"), "got: {line}");
            assert!(line.contains("global.rs:"), "got: {line}");
            assert!(line.ends_with("] w"), "got: {line}");
        });
        BUFFER.clear();
        set_file_line_enabled(false);

        // `log` records flow through the bridge into the same sink.
        crate::init_log_bridge(log::LevelFilter::Trace);
        log::info!("via log");
        BUFFER.contents(|bytes| {
            assert_eq!(core::str::from_utf8(bytes).unwrap(), "[INFO] via log");
        });
        BUFFER.clear();
        log::debug!("d");
        BUFFER.contents(|bytes| {
            assert_eq!(core::str::from_utf8(bytes).unwrap(), "[DEBUG] d");
        });
    }
}
