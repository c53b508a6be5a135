//! Locale-independent fixed-point parsing of metric pseudo-file text.
//!
//! Parsing is deliberately best-effort: the sources are trusted once they
//! open, so malformed content degrades to zeros (or NaN downstream) instead
//! of failing the iteration.

/// Parses the longest leading fixed-point prefix of `text`, after skipping
/// leading whitespace. Returns `0.0` if no digit leads the text.
///
/// Mirrors `strtod`-family semantics for the decimal forms the kernel emits:
/// an optional sign, digits, and at most one decimal point. Trailing
/// non-numeric bytes are ignored.
pub fn leading_f64(text: &str) -> f64 {
    let t = text.trim_start();
    let bytes = t.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }

    t[..end].parse().unwrap_or(0.0)
}

/// Parses the three leading whitespace-separated load averages
/// (1/5/15-minute) from a `/proc/loadavg`-shaped line.
///
/// Missing or malformed tokens yield `0.0` in their position.
pub fn load_averages(text: &str) -> (f64, f64, f64) {
    let mut tokens = text.split_ascii_whitespace();
    let mut next = || tokens.next().map_or(0.0, leading_f64);

    (next(), next(), next())
}
