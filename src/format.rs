//! String padding and elapsed-time formatting.
//!
//! Durations use `M:SS` below one hour and `H:MM:SS` from one hour up. Hours
//! and the leading minutes field are never padded; every field after the
//! first is zero-padded to two digits.
//!
//! # Example
//!
//! ```
//! use videoframes::format::{format_seconds, format_seconds_f64, sfill, zfill};
//!
//! assert_eq!(zfill("7", 3), "007");
//! assert_eq!(sfill("7", 3), "  7");
//! assert_eq!(format_seconds(3661), "1:01:01");
//! assert_eq!(format_seconds_f64(125.4), "2:05.400");
//! ```

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Left-pad `value` with `fill_char` until it is `width` characters long.
///
/// Width is counted in `char`s. Strings already at or beyond `width` are
/// returned unchanged; nothing is ever truncated.
pub fn fill(value: &str, fill_char: char, width: usize) -> String {
    let missing = width.saturating_sub(value.chars().count());
    let mut padded = String::with_capacity(value.len() + missing * fill_char.len_utf8());
    padded.extend(std::iter::repeat_n(fill_char, missing));
    padded.push_str(value);
    padded
}

/// Left-pad a numeral string with `'0'`.
pub fn zfill(value: &str, width: usize) -> String {
    fill(value, '0', width)
}

/// Left-pad a numeral string with spaces.
pub fn sfill(value: &str, width: usize) -> String {
    fill(value, ' ', width)
}

/// Format whole seconds as `M:SS` or `H:MM:SS`.
pub fn format_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Format fractional seconds as `M:SS.mmm` or `H:MM:SS.mmm`.
///
/// Milliseconds are truncated, not rounded. Negative and NaN inputs are
/// treated as zero.
pub fn format_seconds_f64(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let milliseconds = (seconds.fract() * 1000.0) as u64;
    format!(
        "{}.{}",
        format_seconds(seconds.trunc() as u64),
        zfill(&milliseconds.to_string(), 3),
    )
}
