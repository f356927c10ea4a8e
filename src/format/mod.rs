//! Display formatting for feed values.
//!
//! Formatting never fails a page render: values that do not fit the
//! expected shape pass through unchanged with a data-quality warning.

use regex::Regex;
use std::sync::LazyLock;

use crate::log;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// Format a feed phone value for display as `(AAA) BBB-CCCC`.
///
/// Strips a leading `+1` country code and all non-digit characters, then
/// applies the mask when exactly 10 digits remain. Anything else is a
/// data-quality problem in the feed: the raw value is returned unchanged
/// and a warning is logged.
///
/// # Examples
///
/// ```
/// use locpages::format::format_phone;
/// assert_eq!(format_phone("+16103638020"), "(610) 363-8020");
/// assert_eq!(format_phone("6103638020"), "(610) 363-8020");
/// // 9 digits: documented passthrough, not a crash
/// assert_eq!(format_phone("610363802"), "610363802");
/// ```
pub fn format_phone(raw: &str) -> String {
    let stripped = raw.strip_prefix("+1").unwrap_or(raw);
    let digits = NON_DIGITS.replace_all(stripped, "");

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        log!(
            "warning";
            "phone '{}' has {} digits after stripping, leaving unformatted",
            raw,
            digits.len()
        );
        raw.to_string()
    }
}
