//! Bounded reads from the start of an open file.
//!
//! Pseudo-files under `/proc` and `/sys` regenerate their content on every
//! access, so a long-lived handle must always read from byte offset 0 rather
//! than a shared cursor. `read_head` does a single positioned read and
//! zero-terminates the destination buffer, C-string style, so callers can
//! hand the leading bytes to the fixed-point parser without tracking length
//! separately.

use std::fs::File;
use std::io;
use std::os::unix::fs::FileExt;

/// Reads up to `buf.len() - 1` bytes from the start of `file` into `buf`.
///
/// On success the byte immediately after the bytes read is set to zero and
/// the count of bytes read is returned. The file's own cursor is never used
/// or advanced, so repeated calls on the same handle each observe the
/// source's current content.
///
/// # Errors
/// Returns `ErrorKind::InvalidInput` without touching `buf` if the buffer is
/// empty. Propagates the underlying error if the positioned read fails; the
/// buffer is left unmodified in that case.
pub fn read_head(file: &File, buf: &mut [u8]) -> io::Result<usize> {
    if buf.is_empty() {
        return Err(io::Error::from(io::ErrorKind::InvalidInput));
    }

    let capacity = buf.len();
    let n = file.read_at(&mut buf[..capacity - 1], 0)?;
    buf[n] = 0;

    Ok(n)
}

/// Returns the leading text of a zero-terminated sample buffer.
///
/// Content past the first zero byte (or past a UTF-8 decode error) is
/// dropped; metric pseudo-files are plain ASCII, so in practice this is the
/// whole read.
pub fn as_text(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    match std::str::from_utf8(&buf[..end]) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&buf[..e.valid_up_to()]).unwrap_or(""),
    }
}
