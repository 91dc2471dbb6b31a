//! Line composition stages.
//!
//! A transmittable line is built by appending, in order: an optional
//! `[HH:MM:SS.mmm] ` timestamp, an optional severity prefix, an optional
//! `[file:line] ` tag, and finally the formatted message. Every stage writes
//! through [`LineBuffer`], so overlong content truncates instead of faulting
//! and the composed line always stays below `LINE_CAP`.

use core::fmt::Write;

use crate::ansi::{BOLD, CLR};
use crate::log_line::LineBuffer;
use crate::severity::Severity;
use crate::LINE_CAP;

/// Append `[HH:MM:SS.mmm] ` derived from a millisecond tick count.
///
/// Hours are unbounded rather than wrapped at 24, since the tick count itself
/// is unbounded below the counter width.
pub(crate) fn write_timestamp(line: &mut LineBuffer<LINE_CAP>, ms: u32) {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let _ = write!(line, "[{:02}:{:02}:{:02}.{:03}] ", hours, minutes, seconds, ms % 1000);
}

/// Append the severity prefix, colored or plain per `color_enabled`.
///
/// The custom variant renders `{style}{bold}[{label}]{reset} ` when color is
/// enabled and a style token was supplied, and a bare `[{label}] ` otherwise.
/// An empty style token always takes the bare form, so a styleless custom
/// line carries the literal `[{label}] ` tag under either color setting.
pub(crate) fn write_severity(line: &mut LineBuffer<LINE_CAP>, severity: &Severity<'_>, color_enabled: bool) {
    match severity.prefix(color_enabled) {
        Some(prefix) => line.push_str(prefix),
        None => {
            if let Severity::Custom { label, style } = severity {
                if color_enabled && !style.is_empty() {
                    let _ = write!(line, "{}{}[{}]{} ", style, BOLD, label, CLR);
                } else {
                    let _ = write!(line, "[{}] ", label);
                }
            }
        }
    }
}

/// Append the `[file:line] ` call-site tag.
pub(crate) fn write_file_line(line: &mut LineBuffer<LINE_CAP>, file: &str, line_number: u32) {
    let _ = write!(line, "[{}:{}] ", file, line_number);
}
