//! Slot geometry: bar width, slot width and the pointer → slot mapping.

/// Horizontal layout of a bar with `tab_count` equal slots.
///
/// Coordinates are in the viewport's space: the bar starts at `margin` and
/// ends at `margin + bar_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabGeometry {
    pub margin: f32,
    pub bar_width: f32,
    pub tab_count: usize,
}

impl TabGeometry {
    /// Bar spanning the viewport minus `margin` on both sides.
    pub fn from_viewport(viewport_width: f32, margin: f32, tab_count: usize) -> Self {
        Self {
            margin,
            bar_width: (viewport_width - margin * 2.0).max(0.0),
            tab_count: tab_count.max(1),
        }
    }

    /// Width of one slot, derived from the real slot count.
    pub fn tab_width(&self) -> f32 {
        self.bar_width / self.tab_count as f32
    }

    /// Indicator offset (relative to the bar's left edge) for slot `index`.
    pub fn slot_offset(&self, index: usize) -> f32 {
        index as f32 * self.tab_width()
    }

    /// Slot under `pointer_x`, clamped to `[0, tab_count - 1]`.
    pub fn slot_at(&self, pointer_x: f32) -> usize {
        let tab_width = self.tab_width();
        if tab_width <= 0.0 || pointer_x.is_nan() {
            return 0;
        }
        let relative_x = pointer_x - self.margin;
        let candidate = (relative_x / tab_width).floor();
        if candidate <= 0.0 {
            0
        } else {
            (candidate as usize).min(self.tab_count - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5 tabs of 60 px starting at x = 20
    fn five_by_sixty() -> TabGeometry {
        TabGeometry::from_viewport(340.0, 20.0, 5)
    }

    #[test]
    fn test_tab_width_from_route_count() {
        let g = five_by_sixty();
        assert!((g.tab_width() - 60.0).abs() < 1e-6);

        let four = TabGeometry::from_viewport(340.0, 20.0, 4);
        assert!((four.tab_width() - 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_slot_scenario() {
        let g = five_by_sixty();
        assert_eq!(g.slot_at(25.0), 0);
        assert_eq!(g.slot_at(100.0), 1);
        assert_eq!(g.slot_at(1000.0), 4);
    }

    #[test]
    fn test_slot_clamps_before_bar() {
        let g = five_by_sixty();
        assert_eq!(g.slot_at(0.0), 0);
        assert_eq!(g.slot_at(-500.0), 0);
        assert_eq!(g.slot_at(19.9), 0);
    }

    #[test]
    fn test_slot_boundaries() {
        let g = five_by_sixty();
        assert_eq!(g.slot_at(79.9), 0);
        assert_eq!(g.slot_at(80.0), 1);
        assert_eq!(g.slot_at(319.9), 4);
        assert_eq!(g.slot_at(320.0), 4);
    }

    #[test]
    fn test_slot_offset() {
        let g = five_by_sixty();
        assert_eq!(g.slot_offset(0), 0.0);
        assert!((g.slot_offset(3) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_viewport() {
        let g = TabGeometry::from_viewport(10.0, 20.0, 5);
        assert_eq!(g.bar_width, 0.0);
        assert_eq!(g.slot_at(50.0), 0);
    }
}
