use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays visible by default.
pub const DEFAULT_COPY_CONFIRMATION: Duration = Duration::from_secs(2);

/// Transient confirmation shown after a successful clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    confirmation: Duration,
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(confirmation: Duration) -> Self {
        Self { confirmation, copied_at: None }
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn clear(&mut self) {
        self.copied_at = None;
    }

    /// True while `now` is inside the confirmation window.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.confirmation)
    }

    pub fn confirmation(&self) -> Duration {
        self.confirmation
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_CONFIRMATION)
    }
}
