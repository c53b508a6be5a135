//! Signal handling for clean shutdown.
//!
//! SIGHUP, SIGINT and SIGTERM all request the same thing: stop publishing,
//! restore the root window title and exit successfully. The handlers only
//! set a process-wide flag; the publisher loop polls it at its single
//! blocking point and unwinds normally, so resource teardown stays on the
//! main thread.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

static TERMINATE: AtomicBool = AtomicBool::new(false);

/// Installs the shutdown signal handlers.
///
/// Ctrl+C (SIGINT) goes through `ctrlc`; SIGTERM and SIGHUP are registered
/// directly. All three set the terminate flag and nothing else.
///
/// # Errors
/// Returns an error if any handler registration fails.
pub fn init() -> Result<()> {
    ctrlc::set_handler(request_termination).context("register Ctrl+C handler")?;

    #[cfg(unix)]
    {
        use signal_hook::consts::{SIGHUP, SIGTERM};

        // SAFETY: These closures only set an AtomicBool, which is async-signal-safe.
        unsafe {
            signal_hook::low_level::register(SIGTERM, request_termination)
                .context("register SIGTERM handler")?;
            signal_hook::low_level::register(SIGHUP, request_termination)
                .context("register SIGHUP handler")?;
        }
    }

    Ok(())
}

/// Requests a clean shutdown at the loop's next poll.
pub fn request_termination() {
    TERMINATE.store(true, Ordering::SeqCst);
}

/// Checks whether a shutdown signal has been received.
pub fn should_terminate() -> bool {
    TERMINATE.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::{request_termination, should_terminate};

    #[test]
    fn termination_request_is_observed() {
        assert!(!should_terminate());
        request_termination();
        assert!(should_terminate());
    }
}
