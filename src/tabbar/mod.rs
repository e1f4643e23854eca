//! Gesture-driven tab bar.
//!
//! A floating bar of equal-width slots with a spring-animated indicator
//! under the active slot. Tabs switch on tap, and also continuously while a
//! finger is dragged across the bar: every slot boundary crossed issues one
//! navigation request, not only the final position on release.
//!
//! ```text
//!   margin        bar_width = viewport - 2 * margin         margin
//!  |<---->|<----------------------------------------------->|<---->|
//!         [  home  ][ coach  ][  diet  ][  game  ][ nearby ]
//!         |<------>|
//!          tab_width = bar_width / tab_count
//! ```
//!
//! The active index belongs to the host (`TabHost`). The bar only observes
//! it and animates its indicator toward `active_index * tab_width`.

pub mod geometry;
pub mod host;
pub mod session;
pub mod spring;
pub mod view;

use self::geometry::TabGeometry;
use self::host::TabHost;
use self::session::{DragEnd, DragSession, PointerSample};
use self::spring::{Spring, SpringConfig};

/// Icon reference for a tab slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    Home,
    Coach,
    Diet,
    Trophy,
    MapPin,
    Profile,
}

impl IconToken {
    /// Glyph drawn for the icon (covered by egui's bundled emoji font).
    pub fn glyph(self) -> &'static str {
        match self {
            IconToken::Home => "🏠",
            IconToken::Coach => "🤖",
            IconToken::Diet => "🍎",
            IconToken::Trophy => "🏆",
            IconToken::MapPin => "📍",
            IconToken::Profile => "👤",
        }
    }
}

/// One navigable destination.
#[derive(Debug, Clone, PartialEq)]
pub struct TabDescriptor {
    /// Stable identifier, unique within the tab set
    pub key: String,
    /// Route name used for navigation
    pub name: String,
    /// Label shown under the icon while active
    pub display_label: String,
    pub icon: IconToken,
}

impl TabDescriptor {
    /// Descriptor whose key equals its route name.
    pub fn new(name: &str, display_label: &str, icon: IconToken) -> Self {
        Self {
            key: name.to_string(),
            name: name.to_string(),
            display_label: display_label.to_string(),
            icon,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }
}

/// Tab bar layout and animation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarConfig {
    /// Gap between the viewport edge and the bar, each side
    pub margin: f32,
    /// Bar height
    pub height: f32,
    /// Gap between the bar and the bottom of the viewport
    pub bottom_inset: f32,
    pub icon_size: f32,
    /// Active icon is drawn smaller to make room for the label
    pub active_icon_size: f32,
    pub label_size: f32,
    /// Diameter of the glowing indicator pill
    pub indicator_size: f32,
    pub spring: SpringConfig,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            height: 70.0,
            bottom_inset: 20.0,
            icon_size: 24.0,
            active_icon_size: 22.0,
            label_size: 10.0,
            indicator_size: 60.0,
            spring: SpringConfig::default(),
        }
    }
}

impl TabBarConfig {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }
}

/// Errors building a tab bar. The running bar itself never fails.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TabBarError {
    #[error("tab bar needs at least one tab")]
    NoTabs,
    #[error("duplicate tab key '{0}'")]
    DuplicateKey(String),
    #[error("initial index {index} out of range for {count} tabs")]
    InitialIndexOutOfRange { index: usize, count: usize },
}

/// What a `select` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Target was already active; nothing requested
    Unchanged,
    /// Host accepted the switch
    Navigated { from: usize, to: usize },
    /// Host vetoed the switch
    Prevented,
}

/// Tab bar state. Lives as long as the bar is shown.
pub struct TabBar {
    tabs: Vec<TabDescriptor>,
    config: TabBarConfig,
    geometry: TabGeometry,
    /// Last active index read from the host
    observed_index: usize,
    /// Indicator offset from the bar's left edge
    indicator: Spring,
    drag: Option<DragSession>,
}

impl TabBar {
    /// Create a bar for `tabs` with the indicator resting under
    /// `initial_index`.
    pub fn new(
        tabs: Vec<TabDescriptor>,
        viewport_width: f32,
        initial_index: usize,
        config: TabBarConfig,
    ) -> Result<Self, TabBarError> {
        if tabs.is_empty() {
            return Err(TabBarError::NoTabs);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|t| t.key == tab.key) {
                return Err(TabBarError::DuplicateKey(tab.key.clone()));
            }
        }
        if initial_index >= tabs.len() {
            return Err(TabBarError::InitialIndexOutOfRange {
                index: initial_index,
                count: tabs.len(),
            });
        }

        let geometry = TabGeometry::from_viewport(viewport_width, config.margin, tabs.len());
        let indicator = Spring::at_rest(geometry.slot_offset(initial_index), config.spring);

        Ok(Self {
            tabs,
            config,
            geometry,
            observed_index: initial_index,
            indicator,
            drag: None,
        })
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    pub fn geometry(&self) -> &TabGeometry {
        &self.geometry
    }

    pub fn tab_width(&self) -> f32 {
        self.geometry.tab_width()
    }

    pub fn observed_index(&self) -> usize {
        self.observed_index
    }

    /// Current (possibly mid-flight) indicator offset.
    pub fn indicator_offset(&self) -> f32 {
        self.indicator.position()
    }

    /// Where the indicator is heading.
    pub fn indicator_target(&self) -> f32 {
        self.indicator.target()
    }

    pub fn is_animating(&self) -> bool {
        !self.indicator.is_settled()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pick up the host's active index. Starts (or retargets) the indicator
    /// animation when it changed. Returns `true` on change.
    pub fn observe(&mut self, active_index: usize) -> bool {
        let active_index = active_index.min(self.tabs.len() - 1);
        if active_index == self.observed_index {
            return false;
        }
        log::debug!(
            "tab bar: active {} -> {}",
            self.observed_index,
            active_index
        );
        self.observed_index = active_index;
        self.indicator
            .retarget(self.geometry.slot_offset(active_index));
        true
    }

    /// Ask the host to switch to `index`.
    pub fn select<H: TabHost + ?Sized>(&mut self, index: usize, host: &mut H) -> SelectOutcome {
        let index = index.min(self.tabs.len() - 1);
        let from = host.active_index();
        if index == from {
            return SelectOutcome::Unchanged;
        }

        let outcome = host.request_navigate(&self.tabs[index].key);
        if outcome.default_prevented {
            log::debug!("tab bar: switch to '{}' prevented", self.tabs[index].name);
            return SelectOutcome::Prevented;
        }

        let to = host.active_index();
        self.observe(to);
        SelectOutcome::Navigated { from, to }
    }

    /// Pointer went down on the bar; the bar owns the gesture from here on.
    pub fn begin_drag(&mut self, pointer_x: f32, pointer_y: f32) {
        self.drag = Some(DragSession::begin(PointerSample::new(pointer_x, pointer_y)));
    }

    /// Pointer moved during a drag. Selects the slot under the finger as
    /// soon as it differs from the active one.
    ///
    /// Call `begin_drag` first. A move without one still selects, but no
    /// drag session is started.
    pub fn handle_drag_move<H: TabHost + ?Sized>(
        &mut self,
        pointer_x: f32,
        host: &mut H,
    ) -> SelectOutcome {
        match self.drag.as_mut() {
            Some(session) => {
                let y = session.current().y;
                session.track(PointerSample::new(pointer_x, y));
            }
            // No press was seen, so there is no start point to record
            None => log::debug!("tab bar: drag move at {:.0} without begin_drag", pointer_x),
        }

        let candidate = self.geometry.slot_at(pointer_x);
        if candidate == host.active_index() {
            return SelectOutcome::Unchanged;
        }
        self.select(candidate, host)
    }

    /// Release or cancellation. Whatever was selected during the drag stays.
    pub fn end_drag(&mut self, end: DragEnd) {
        if let Some(session) = self.drag.take() {
            log::debug!(
                "tab bar: drag {:?} after {} moves, {:.0}px travel",
                end,
                session.moves(),
                session.travel()
            );
        }
    }

    /// Advance the indicator by one frame. Returns `true` while animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.indicator.step(dt)
    }

    /// Viewport width changed: recompute slots and scale the indicator.
    pub fn resize(&mut self, viewport_width: f32) {
        let geometry =
            TabGeometry::from_viewport(viewport_width, self.config.margin, self.tabs.len());
        let old_width = self.geometry.tab_width();
        let new_width = geometry.tab_width();
        self.geometry = geometry;
        if old_width > 0.0 {
            self.indicator.rescale(new_width / old_width);
        } else {
            self.indicator
                .snap_to(self.geometry.slot_offset(self.observed_index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::host::NavigationOutcome;
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    /// Host that records every request and can veto all of them.
    struct RecordingHost {
        keys: Vec<String>,
        active: usize,
        requests: Vec<String>,
        veto: bool,
    }

    impl RecordingHost {
        fn new(bar: &TabBar) -> Self {
            Self {
                keys: bar.tabs().iter().map(|t| t.key.clone()).collect(),
                active: bar.observed_index(),
                requests: Vec::new(),
                veto: false,
            }
        }
    }

    impl TabHost for RecordingHost {
        fn active_index(&self) -> usize {
            self.active
        }

        fn request_navigate(&mut self, route_key: &str) -> NavigationOutcome {
            self.requests.push(route_key.to_string());
            if self.veto {
                return NavigationOutcome::prevented();
            }
            if let Some(i) = self.keys.iter().position(|k| k == route_key) {
                self.active = i;
            }
            NavigationOutcome::accepted()
        }
    }

    fn five_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("home", "Home", IconToken::Home),
            TabDescriptor::new("chat", "Coach", IconToken::Coach),
            TabDescriptor::new("diet", "Diet", IconToken::Diet),
            TabDescriptor::new("gamification", "Game", IconToken::Trophy),
            TabDescriptor::new("nearby", "NearBy", IconToken::MapPin),
        ]
    }

    /// 5 tabs, tab_width 60, margin 20
    fn bar() -> TabBar {
        match TabBar::new(five_tabs(), 340.0, 0, TabBarConfig::default()) {
            Ok(bar) => bar,
            Err(e) => panic!("Expected a tab bar, got {}", e),
        }
    }

    fn settle(bar: &mut TabBar) {
        for _ in 0..1200 {
            if !bar.tick(FRAME) {
                return;
            }
        }
        panic!("indicator never settled");
    }

    #[test]
    fn test_construction_errors() {
        let cfg = TabBarConfig::default();
        assert_eq!(
            TabBar::new(Vec::new(), 340.0, 0, cfg).err(),
            Some(TabBarError::NoTabs)
        );

        let mut dup = five_tabs();
        dup[4] = dup[4].clone().with_key("home");
        assert_eq!(
            TabBar::new(dup, 340.0, 0, cfg).err(),
            Some(TabBarError::DuplicateKey("home".to_string()))
        );

        assert_eq!(
            TabBar::new(five_tabs(), 340.0, 5, cfg).err(),
            Some(TabBarError::InitialIndexOutOfRange { index: 5, count: 5 })
        );
    }

    #[test]
    fn test_initial_indicator_at_rest() {
        let bar = match TabBar::new(five_tabs(), 340.0, 3, TabBarConfig::default()) {
            Ok(bar) => bar,
            Err(e) => panic!("Expected a tab bar, got {}", e),
        };
        assert!(!bar.is_animating());
        assert!((bar.indicator_offset() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_select_active_is_noop() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        for _ in 0..3 {
            assert_eq!(bar.select(0, &mut host), SelectOutcome::Unchanged);
        }
        assert!(host.requests.is_empty());
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_select_requests_once() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        let outcome = bar.select(2, &mut host);
        assert_eq!(outcome, SelectOutcome::Navigated { from: 0, to: 2 });
        assert_eq!(host.requests, vec!["diet".to_string()]);
        assert!(bar.is_animating());
        assert!((bar.indicator_target() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_vetoed_select_changes_nothing() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        host.veto = true;
        assert_eq!(bar.select(4, &mut host), SelectOutcome::Prevented);
        assert_eq!(host.requests.len(), 1);
        assert_eq!(host.active_index(), 0);
        assert_eq!(bar.observed_index(), 0);
        assert!(!bar.is_animating());
        assert_eq!(bar.indicator_offset(), 0.0);
    }

    #[test]
    fn test_settles_on_every_index() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        for index in [3, 1, 4, 0, 2] {
            bar.select(index, &mut host);
            settle(&mut bar);
            assert_eq!(bar.indicator_offset(), index as f32 * bar.tab_width());
        }
    }

    #[test]
    fn test_drag_clamps() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        host.active = 2;
        bar.observe(2);

        bar.begin_drag(150.0, 0.0);
        bar.handle_drag_move(-40.0, &mut host);
        assert_eq!(host.active_index(), 0);
        bar.handle_drag_move(5000.0, &mut host);
        assert_eq!(host.active_index(), 4);
        bar.end_drag(DragEnd::Released);
        assert_eq!(host.requests, vec!["home".to_string(), "nearby".to_string()]);
    }

    #[test]
    fn test_drag_scenario_points() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        bar.begin_drag(25.0, 0.0);
        assert_eq!(bar.handle_drag_move(25.0, &mut host), SelectOutcome::Unchanged);
        assert_eq!(
            bar.handle_drag_move(100.0, &mut host),
            SelectOutcome::Navigated { from: 0, to: 1 }
        );
        assert_eq!(
            bar.handle_drag_move(1000.0, &mut host),
            SelectOutcome::Navigated { from: 1, to: 4 }
        );
    }

    #[test]
    fn test_continuous_drag_requests_each_slot_once() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        bar.begin_drag(30.0, 0.0);
        // Slot 0 centre to slot 3 centre in 1px samples
        let mut x = 30.0;
        while x <= 230.0 {
            bar.handle_drag_move(x, &mut host);
            x += 1.0;
        }
        bar.end_drag(DragEnd::Released);

        assert_eq!(
            host.requests,
            vec!["chat".to_string(), "diet".to_string(), "gamification".to_string()]
        );
        assert_eq!(host.active_index(), 3);
        assert!(!bar.is_dragging());
    }

    #[test]
    fn test_move_without_press_selects_but_tracks_nothing() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        assert_eq!(
            bar.handle_drag_move(150.0, &mut host),
            SelectOutcome::Navigated { from: 0, to: 2 }
        );
        assert!(!bar.is_dragging());
    }

    #[test]
    fn test_drag_end_keeps_selection() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        bar.begin_drag(30.0, 0.0);
        bar.handle_drag_move(150.0, &mut host);
        bar.end_drag(DragEnd::Cancelled);
        assert_eq!(host.active_index(), 2);
        assert_eq!(bar.observed_index(), 2);
        assert!((bar.indicator_target() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_retarget_mid_flight_is_continuous() {
        let mut bar = bar();
        let mut host = RecordingHost::new(&bar);
        let tab_width = bar.tab_width();

        bar.select(1, &mut host);
        for _ in 0..6 {
            bar.tick(FRAME);
        }
        let before = bar.indicator_offset();
        assert!(before > 0.0 && before < tab_width);

        bar.select(2, &mut host);
        let mut previous = before;
        let mut min_seen = before;
        for _ in 0..1200 {
            let moving = bar.tick(FRAME);
            min_seen = min_seen.min(bar.indicator_offset());
            previous = bar.indicator_offset();
            if !moving {
                break;
            }
        }
        assert!(min_seen >= before - 1e-3, "indicator jumped back to {}", min_seen);
        assert_eq!(previous, 2.0 * tab_width);
    }

    #[test]
    fn test_observe_programmatic_change() {
        let mut bar = bar();
        assert!(bar.observe(3));
        assert!(!bar.observe(3));
        assert!(bar.is_animating());
        settle(&mut bar);
        assert_eq!(bar.indicator_offset(), 3.0 * bar.tab_width());
    }

    #[test]
    fn test_resize_scales_indicator() {
        let mut bar = bar();
        bar.observe(2);
        settle(&mut bar);
        bar.resize(640.0);
        assert!((bar.tab_width() - 120.0).abs() < 1e-4);
        assert!((bar.indicator_offset() - 240.0).abs() < 1e-3);
    }
}
