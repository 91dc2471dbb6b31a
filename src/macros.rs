//! Printf-style logging macros over the process-wide logger.
//!
//! Each macro forwards its format string and arguments through
//! `format_args!` to the matching free function in [`crate::global`], so the
//! formatted message never touches the heap. Line terminators are the
//! caller's responsibility; none is appended.
//!
//! ```rust,ignore
//! serial_debug_lib::debug_log!("raw value: {:#06x}\r\n", raw);
//! serial_debug_lib::debug_warning!("battery at {}%\r\n", pct);
//! serial_debug_lib::debug_log_with_type!("BOOT", serial_debug_lib::ansi::COLOR_CYAN, "stage {}\r\n", stage);
//! ```

/// Log a message with no severity prefix.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::log(core::format_args!($($arg)*))
    };
}

/// Log a message with a caller-supplied type label and ANSI style token.
#[macro_export]
macro_rules! debug_log_with_type {
    ($label:expr, $style:expr, $($arg:tt)*) => {
        $crate::global::log_with_type($label, $style, core::format_args!($($arg)*))
    };
}

/// Log an error, capturing this call site for the file/line stage.
#[macro_export]
macro_rules! debug_error {
    ($($arg:tt)*) => {
        $crate::global::error(core::format_args!($($arg)*))
    };
}

/// Log a warning, capturing this call site for the file/line stage.
#[macro_export]
macro_rules! debug_warning {
    ($($arg:tt)*) => {
        $crate::global::warning(core::format_args!($($arg)*))
    };
}

/// Log an informational message.
#[macro_export]
macro_rules! debug_info {
    ($($arg:tt)*) => {
        $crate::global::info(core::format_args!($($arg)*))
    };
}

/// Log an OK status message.
#[macro_export]
macro_rules! debug_ok {
    ($($arg:tt)*) => {
        $crate::global::ok(core::format_args!($($arg)*))
    };
}

/// Log a success message.
#[macro_export]
macro_rules! debug_success {
    ($($arg:tt)*) => {
        $crate::global::success(core::format_args!($($arg)*))
    };
}
