//! Fixed-width status line formatting.
//!
//! The published line is `HH:MM:SS  L1 L5 L15  FRAC`: UTC time zero-padded
//! to two digits per field, the three load averages and the battery fraction
//! at two decimal places, fields joined by two spaces.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Timelike, Utc};

use crate::sources::MetricSample;

/// Capacity of the formatted line buffer in bytes.
pub const STATUS_CAP: usize = 128;

/// A bounded, truncation-safe text buffer for one formatted status line.
///
/// Writes past the capacity are silently dropped at a character boundary;
/// the buffer always holds valid text regardless of how much was written.
pub struct StatusLine {
    buf: [u8; STATUS_CAP],
    len: usize,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            buf: [0; STATUS_CAP],
            len: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for StatusLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = STATUS_CAP - self.len;
        let take = if s.len() <= space {
            s.len()
        } else {
            let mut cut = space;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;

        // Truncation is not an error; overflow is silently dropped.
        Ok(())
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders one status line from a UTC instant and a parsed metric sample.
pub fn render(now: DateTime<Utc>, sample: &MetricSample) -> StatusLine {
    let mut line = StatusLine::new();

    let _ = write!(
        line,
        "{:02}:{:02}:{:02}  {:.2} {:.2} {:.2}  {:.2}",
        now.hour(),
        now.minute(),
        now.second(),
        sample.load1,
        sample.load5,
        sample.load15,
        sample.battery_fraction(),
    );

    line
}
