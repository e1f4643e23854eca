//! Pointer tracking for drag-to-switch.
//!
//! A `DragSession` lives from pointer-down on the bar to release/cancel.
//! While it exists the bar owns the pointer; the host must not hand the
//! gesture to another recognizer (e.g. a parent scroll area).

use std::time::Instant;

/// One pointer sample in viewport coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub time: Instant,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            time: Instant::now(),
        }
    }
}

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    Released,
    Cancelled,
}

/// Active drag on the tab bar.
#[derive(Debug, Clone)]
pub struct DragSession {
    start: PointerSample,
    current: PointerSample,
    /// Number of move samples delivered so far
    moves: usize,
    /// Total horizontal travel (for distinguishing tap from drag)
    travel: f32,
}

impl DragSession {
    pub fn begin(sample: PointerSample) -> Self {
        Self {
            start: sample,
            current: sample,
            moves: 0,
            travel: 0.0,
        }
    }

    pub fn start(&self) -> PointerSample {
        self.start
    }

    pub fn current(&self) -> PointerSample {
        self.current
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn travel(&self) -> f32 {
        self.travel
    }

    /// Signed horizontal distance from the start point.
    pub fn dx(&self) -> f32 {
        self.current.x - self.start.x
    }

    /// Record a move sample.
    pub fn track(&mut self, sample: PointerSample) {
        self.travel += (sample.x - self.current.x).abs();
        self.current = sample;
        self.moves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_accumulates_travel() {
        let mut session = DragSession::begin(PointerSample::new(100.0, 10.0));
        session.track(PointerSample::new(130.0, 12.0));
        session.track(PointerSample::new(110.0, 12.0));
        assert_eq!(session.moves(), 2);
        assert!((session.travel() - 50.0).abs() < 1e-6);
        assert!((session.dx() - 10.0).abs() < 1e-6);
        assert!((session.start().x - 100.0).abs() < 1e-6);
        assert!((session.current().x - 110.0).abs() < 1e-6);
    }
}
