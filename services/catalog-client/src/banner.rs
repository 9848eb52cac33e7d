use std::time::{Duration, Instant};

/// How long a success banner stays up before dismissing itself.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Banner {
    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
            ttl: SUCCESS_BANNER_TTL,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }
}
