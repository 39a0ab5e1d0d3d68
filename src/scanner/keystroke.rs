//! Keyboard-wedge barcode detection.
//!
//! USB scanners type the code as a burst of keystrokes followed by Enter. A
//! burst is recognised by timing alone: every key must arrive within the
//! threshold of the previous one. A slower gap means a human is typing and
//! restarts the buffer.

use crate::entities::product::MAX_BARCODE_LEN;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Shortest code accepted from a scanner.
pub const MIN_BARCODE_LEN: usize = 3;

const MAX_BUFFER_LEN: usize = 512;

/// A key event as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Enter / Return, which terminates a scan
    Enter,
    /// Modifiers and anything else; ignored
    Other,
}

/// Stateful keystroke-timing detector.
#[derive(Debug, Clone)]
pub struct KeystrokeScanner {
    threshold: Duration,
    buffer: String,
    last_key: Option<Instant>,
}

impl KeystrokeScanner {
    /// Creates a detector with the given inter-key threshold.
    #[must_use]
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            buffer: String::new(),
            last_key: None,
        }
    }

    /// Characters collected in the current burst.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feeds one key pressed at `at`.
    ///
    /// Returns the scanned code when Enter closes a fast burst of 3 to 50
    /// characters. Shorter or longer bursts are discarded.
    pub fn feed(&mut self, key: Key, at: Instant) -> Option<String> {
        let fast = self
            .last_key
            .is_some_and(|last| at.saturating_duration_since(last) <= self.threshold);

        match key {
            Key::Other => None,
            Key::Char(ch) => {
                self.last_key = Some(at);
                if !fast {
                    self.buffer.clear();
                }
                self.buffer.push(ch);
                if self.buffer.len() > MAX_BUFFER_LEN {
                    self.buffer.clear();
                }
                None
            }
            Key::Enter => {
                self.last_key = None;
                let code = std::mem::take(&mut self.buffer);
                if !fast {
                    trace!("Enter after a slow gap, treating as manual input");
                    return None;
                }
                let len = code.chars().count();
                if !(MIN_BARCODE_LEN..=MAX_BARCODE_LEN).contains(&len) {
                    debug!(len, "Discarded keystroke burst outside barcode length limits");
                    return None;
                }
                debug!(barcode = %code, "Keystroke scanner: barcode detected");
                Some(code)
            }
        }
    }
}
