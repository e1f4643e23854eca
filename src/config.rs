//! Application settings.
//!
//! Defaults match the shipped app; builders exist for tests and for
//! alternative window sizes. Logging is configured separately via `RUST_LOG`.

use std::time::Duration;

use crate::coach::Topic;
use crate::tabbar::TabBarConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Initial window size (phone-like portrait by default)
    pub window_size: [f32; 2],
    pub tab_bar: TabBarConfig,
    pub dark_theme: bool,
    /// Topic the coach greets with
    pub coach_topic: Topic,
    /// Pause between saving the profile and opening Home
    pub calibration_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [400.0, 820.0],
            tab_bar: TabBarConfig::default(),
            dark_theme: true,
            coach_topic: Topic::Question,
            calibration_delay: Duration::from_millis(1500),
        }
    }
}

impl AppConfig {
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = [width, height];
        self
    }

    pub fn with_tab_bar(mut self, tab_bar: TabBarConfig) -> Self {
        self.tab_bar = tab_bar;
        self
    }

    pub fn with_dark_theme(mut self, dark: bool) -> Self {
        self.dark_theme = dark;
        self
    }

    pub fn with_coach_topic(mut self, topic: Topic) -> Self {
        self.coach_topic = topic;
        self
    }
}
