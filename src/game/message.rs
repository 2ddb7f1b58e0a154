//! Transient user-facing message
//!
//! One slot, last write wins. A message disappears `MESSAGE_TTL` after it was
//! shown unless a newer one replaces it first. The clock is passed in so the
//! slot stays deterministic under test.

use std::time::{Duration, Instant};

/// How long a message stays visible
pub const MESSAGE_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Default)]
pub struct MessageSlot {
    current: Option<(String, Instant)>,
}

impl MessageSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, replacing whatever was there
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some((text.into(), now));
    }

    /// Text visible at `now`, if any
    #[must_use]
    pub fn visible(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| now.saturating_duration_since(*shown_at) < MESSAGE_TTL)
            .map(|(text, _)| text.as_str())
    }

    /// Drop the message once it has expired
    ///
    /// Returns true if something was cleared.
    pub fn clear_expired(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }
}
