//! Raw mode RAII guard and key reading.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { enabled: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.enabled {
            let _ = disable_raw_mode();
            self.enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Wait for the next key press.
///
/// With a timeout, returns `Ok(None)` once it elapses without a key.
/// Raw mode must already be enabled.
pub fn read_key(timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
    let deadline = timeout.map(|t| Instant::now() + t);
    loop {
        if let Some(deadline) = deadline {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() || !event::poll(left)? {
                return Ok(None);
            }
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(Some(key));
        }
    }
}
