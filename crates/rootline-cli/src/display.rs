//! X display session: connection, root window, publish and teardown.

use anyhow::{Context, Result};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, PropMode, Window};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

/// One connection to the display server plus the default screen's root
/// window.
///
/// Dropping the session restores the empty root window title and closes the
/// connection. Construction only succeeds with a live connection, so the
/// teardown runs exactly once on any exit path reached after `connect`, and
/// never if the connection was refused.
pub struct DisplaySession {
    conn: RustConnection,
    root: Window,
}

impl DisplaySession {
    /// Connects to the default display and resolves the default screen's
    /// root window.
    ///
    /// # Errors
    /// Returns an error naming the resolved display target if the server is
    /// unavailable.
    pub fn connect() -> Result<Self> {
        let target = std::env::var("DISPLAY").unwrap_or_default();
        let (conn, screen_num) =
            x11rb::connect(None).with_context(|| format!("open display “{target}”"))?;
        let root = conn.setup().roots[screen_num].root;

        Ok(Self { conn, root })
    }

    /// Sets the root window title and flushes immediately, so each publish
    /// reaches the server before the next sleep.
    ///
    /// # Errors
    /// Returns an error if the request or the flush fails.
    pub fn publish(&self, title: &str) -> Result<()> {
        self.set_root_title(title).context("publish status line")
    }

    fn set_root_title(&self, title: &str) -> Result<(), x11rb::errors::ConnectionError> {
        self.conn.change_property8(
            PropMode::REPLACE,
            self.root,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            title.as_bytes(),
        )?;
        self.conn.flush()
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        // Restore the empty title; the connection closes when it drops.
        // Errors are moot at this point.
        let _ = self.set_root_title("");
    }
}
