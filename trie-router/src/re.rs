//! Abstraction over `regex` and `regex-lite` depending on whether we have `unicode` crate feature
//! enabled.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "unicode")] {
        pub(crate) use regex::Regex;

        /// Error returned when a validator pattern fails to compile.
        pub type RegexError = regex::Error;
    } else {
        pub(crate) use regex_lite::Regex;

        /// Error returned when a validator pattern fails to compile.
        pub type RegexError = regex_lite::Error;
    }
}

/// Regex flags to allow '.' in regex to match '\n' and to make `$` match only at end of input.
///
/// See the docs under: https://docs.rs/regex/1/regex/#grouping-and-flags
const REGEX_FLAGS: &str = "(?s-m)";

/// Compiles `pattern` so that it only accepts inputs it matches in full.
///
/// Patterns that already carry their own `^`/`$` anchors are unaffected.
pub(crate) fn anchored(pattern: &str) -> Result<Regex, RegexError> {
    Regex::new(&format!("{}^(?:{})$", REGEX_FLAGS, pattern))
}
