//! Bridge from the `log` facade into the process-wide logger.
//!
//! Crates that already emit through `log` macros get routed to the same sink
//! and composition pipeline as the native surface: `error!`/`warn!` map to the
//! error and warning severities and carry the record's own file/line,
//! `info!` maps to the info severity, and `debug!`/`trace!` render as custom
//! `[DEBUG]`/`[TRACE]` types. Level filtering is left to `log::max_level`.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::ansi::{COLOR_CYAN, COLOR_GRAY};
use crate::global;
use crate::severity::Severity;

struct LogBridge;

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let call_site = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some((file, line)),
            _ => None,
        };
        match record.level() {
            Level::Error => global::dispatch(Some(&Severity::Error), call_site, *record.args()),
            Level::Warn => global::dispatch(Some(&Severity::Warning), call_site, *record.args()),
            Level::Info => global::dispatch(Some(&Severity::Info), None, *record.args()),
            Level::Debug => global::dispatch(
                Some(&Severity::Custom {
                    label: "DEBUG",
                    style: COLOR_CYAN,
                }),
                None,
                *record.args(),
            ),
            Level::Trace => global::dispatch(
                Some(&Severity::Custom {
                    label: "TRACE",
                    style: COLOR_GRAY,
                }),
                None,
                *record.args(),
            ),
        }
    }

    fn flush(&self) {}
}

static BRIDGE: LogBridge = LogBridge;

/// Install the bridge as the `log` crate's logger.
///
/// Uses the racy setter variants on `no_std` targets without atomic pointer
/// support (e.g. thumbv6m), so call it once, before any other context could
/// emit a `log` record. Installing a second logger is ignored.
pub fn init_log_bridge(level: LevelFilter) {
    #[cfg(feature = "std")]
    {
        let _ = log::set_logger(&BRIDGE).map(|()| log::set_max_level(level));
    }
    #[cfg(not(feature = "std"))]
    unsafe {
        if log::set_logger_racy(&BRIDGE).is_ok() {
            log::set_max_level_racy(level);
        }
    }
}
