//! ANSI escape sequences for terminal color and style.
//!
//! All tokens are plain `&str` constants so they can be embedded directly in
//! format strings, typically as a (style-on, style-off) pair around a
//! substring:
//!
//! ```rust
//! use serial_debug_lib::ansi::{COLOR_CYAN, CLR};
//!
//! // renders "status: <cyan>linked<reset>"
//! let _ = format_args!("status: {}{}{}", COLOR_CYAN, "linked", CLR);
//! ```
//!
//! Arbitrary 24-bit colors are available through [`Rgb`] and [`BgRgb`], which
//! implement `Display` and compose the same way.

use core::fmt;

// Standard text colors
pub const COLOR_BLACK: &str = "\x1b[30m";
pub const COLOR_DARK_RED: &str = "\x1b[31m";
pub const COLOR_DARK_GREEN: &str = "\x1b[32m";
pub const COLOR_DARK_YELLOW: &str = "\x1b[33m";
pub const COLOR_DARK_BLUE: &str = "\x1b[34m";
pub const COLOR_DARK_MAGENTA: &str = "\x1b[35m";
pub const COLOR_DARK_CYAN: &str = "\x1b[36m";
pub const COLOR_DARK_WHITE: &str = "\x1b[37m";

// Bright text colors
pub const COLOR_GRAY: &str = "\x1b[90m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_GREEN: &str = "\x1b[92m";
pub const COLOR_YELLOW: &str = "\x1b[93m";
pub const COLOR_BLUE: &str = "\x1b[94m";
pub const COLOR_MAGENTA: &str = "\x1b[95m";
pub const COLOR_CYAN: &str = "\x1b[96m";
pub const COLOR_WHITE: &str = "\x1b[97m";

// Standard background colors
pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_DARK_RED: &str = "\x1b[41m";
pub const BG_DARK_GREEN: &str = "\x1b[42m";
pub const BG_DARK_YELLOW: &str = "\x1b[43m";
pub const BG_DARK_BLUE: &str = "\x1b[44m";
pub const BG_DARK_MAGENTA: &str = "\x1b[45m";
pub const BG_DARK_CYAN: &str = "\x1b[46m";
pub const BG_DARK_WHITE: &str = "\x1b[47m";

// Bright background colors
pub const BG_GRAY: &str = "\x1b[100m";
pub const BG_RED: &str = "\x1b[101m";
pub const BG_GREEN: &str = "\x1b[102m";
pub const BG_YELLOW: &str = "\x1b[103m";
pub const BG_BLUE: &str = "\x1b[104m";
pub const BG_MAGENTA: &str = "\x1b[105m";
pub const BG_CYAN: &str = "\x1b[106m";
pub const BG_WHITE: &str = "\x1b[107m";

// Styles
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";
pub const CONCEAL: &str = "\x1b[8m";

// Clear everything / clear a specific attribute
pub const CLR: &str = "\x1b[0m";
pub const CLR_TEXT_COLOR: &str = "\x1b[39m";
pub const CLR_BG_COLOR: &str = "\x1b[49m";
pub const CLR_BOLD: &str = "\x1b[21m";
pub const CLR_DIM: &str = "\x1b[22m";
pub const CLR_ITALIC: &str = "\x1b[23m";
pub const CLR_UNDERLINE: &str = "\x1b[24m";
pub const CLR_BLINK: &str = "\x1b[25m";
pub const CLR_REVERSE: &str = "\x1b[27m";
pub const CLR_CONCEAL: &str = "\x1b[28m";

/// 24-bit text color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// 24-bit background color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BgRgb(pub u8, pub u8, pub u8);

impl fmt::Display for BgRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn rgb_tokens_format_as_escape_sequences() {
        assert_eq!(format!("{}", Rgb(255, 128, 0)), "\x1b[38;2;255;128;0m");
        assert_eq!(format!("{}", BgRgb(0, 0, 1)), "\x1b[48;2;0;0;1m");
    }

    #[test]
    fn tokens_compose_in_format_strings() {
        let rendered = format!("{}{}hot{}", BOLD, Rgb(255, 0, 0), CLR);
        assert_eq!(rendered, "\x1b[1m\x1b[38;2;255;0;0mhot\x1b[0m");
    }
}
