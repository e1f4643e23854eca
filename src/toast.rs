//! Transient notifications shown over the current screen.

use std::time::{Duration, Instant};

pub const DEFAULT_VISIBILITY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    expires_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

/// Queue of live toasts, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: ToastKind, title: &str, body: &str, now: Instant) {
        self.show_for(kind, title, body, now, DEFAULT_VISIBILITY);
    }

    pub fn show_for(
        &mut self,
        kind: ToastKind,
        title: &str,
        body: &str,
        now: Instant,
        visibility: Duration,
    ) {
        log::debug!("toast [{:?}] {}: {}", kind, title, body);
        self.queue.push(Toast {
            kind,
            title: title.to_string(),
            body: body.to_string(),
            expires_at: now + visibility,
        });
    }

    pub fn success(&mut self, title: &str, body: &str, now: Instant) {
        self.show(ToastKind::Success, title, body, now);
    }

    pub fn error(&mut self, title: &str, body: &str, now: Instant) {
        self.show(ToastKind::Error, title, body, now);
    }

    pub fn info(&mut self, title: &str, body: &str, now: Instant) {
        self.show(ToastKind::Info, title, body, now);
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.queue.retain(|t| t.expires_at > now);
    }

    /// Toast to display, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.queue.last()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_shown_and_expiry() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.error("Missing Info", "Please complete all fields to continue.", t0);
        toasts.show_for(
            ToastKind::Success,
            "Profile Initialized",
            "AI Models Calibrating...",
            t0,
            Duration::from_secs(1),
        );
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Success));

        toasts.tick(t0 + Duration::from_secs(2));
        assert_eq!(toasts.current().map(|t| t.title.as_str()), Some("Missing Info"));

        toasts.tick(t0 + DEFAULT_VISIBILITY);
        assert!(toasts.is_empty());
    }
}
