//! Log message categories and their visual prefixes.

/// Category of a log message. Each fixed variant has a colored and a plain
/// prefix string; `Custom` carries a caller-supplied label and an optional
/// ANSI style token rendered into the same bracketed template.
pub enum Severity<'a> {
    Error,
    Warning,
    Info,
    Ok,
    Success,
    Custom { label: &'a str, style: &'a str },
}

const ERROR_PREFIX: &str = "\x1b[91m\x1b[1m[ERROR]\x1b[0m ";
const WARNING_PREFIX: &str = "\x1b[93m\x1b[1m[WARNING]\x1b[0m ";
const INFO_PREFIX: &str = "\x1b[94m\x1b[1m[INFO]\x1b[0m ";
const OK_PREFIX: &str = "\x1b[92m\x1b[1m[OK]\x1b[0m ";
const SUCCESS_PREFIX: &str = "\x1b[92m\x1b[1m[SUCCESS]\x1b[0m ";

const ERROR_PREFIX_PLAIN: &str = "[ERROR] ";
const WARNING_PREFIX_PLAIN: &str = "[WARNING] ";
const INFO_PREFIX_PLAIN: &str = "[INFO] ";
const OK_PREFIX_PLAIN: &str = "[OK] ";
const SUCCESS_PREFIX_PLAIN: &str = "[SUCCESS] ";

impl<'a> Severity<'a> {
    /// Fixed prefix string for the non-custom variants.
    pub(crate) fn prefix(&self, color_enabled: bool) -> Option<&'static str> {
        let prefix = match (self, color_enabled) {
            (Severity::Error, true) => ERROR_PREFIX,
            (Severity::Error, false) => ERROR_PREFIX_PLAIN,
            (Severity::Warning, true) => WARNING_PREFIX,
            (Severity::Warning, false) => WARNING_PREFIX_PLAIN,
            (Severity::Info, true) => INFO_PREFIX,
            (Severity::Info, false) => INFO_PREFIX_PLAIN,
            (Severity::Ok, true) => OK_PREFIX,
            (Severity::Ok, false) => OK_PREFIX_PLAIN,
            (Severity::Success, true) => SUCCESS_PREFIX,
            (Severity::Success, false) => SUCCESS_PREFIX_PLAIN,
            (Severity::Custom { .. }, _) => return None,
        };
        Some(prefix)
    }
}
