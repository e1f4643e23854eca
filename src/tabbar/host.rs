//! Host side of the tab bar: who owns the active index.
//!
//! The tab bar never stores the selection itself. It asks the host to
//! navigate and then reads back `active_index()`.

use super::TabDescriptor;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationOutcome {
    /// The host (or one of its listeners) refused the switch
    pub default_prevented: bool,
}

impl NavigationOutcome {
    pub fn accepted() -> Self {
        Self {
            default_prevented: false,
        }
    }

    pub fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }
}

/// Navigation container hosting the tab bar.
pub trait TabHost {
    /// Index of the active route, always `< routes.len()`.
    fn active_index(&self) -> usize;

    /// Ask to switch to the route with `route_key`. Synchronous.
    fn request_navigate(&mut self, route_key: &str) -> NavigationOutcome;
}

/// Event passed to tab-press listeners before a switch happens.
#[derive(Debug)]
pub struct TabPressEvent<'a> {
    pub target: &'a TabDescriptor,
    default_prevented: bool,
}

impl<'a> TabPressEvent<'a> {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type TabPressListener = Box<dyn FnMut(&mut TabPressEvent<'_>)>;

/// Tab navigation state owned by the application.
pub struct TabNavigator {
    routes: Vec<TabDescriptor>,
    active: usize,
    listeners: Vec<TabPressListener>,
}

impl TabNavigator {
    pub fn new(routes: Vec<TabDescriptor>) -> Self {
        Self {
            routes,
            active: 0,
            listeners: Vec::new(),
        }
    }

    pub fn routes(&self) -> &[TabDescriptor] {
        &self.routes
    }

    pub fn active_route(&self) -> Option<&TabDescriptor> {
        self.routes.get(self.active)
    }

    /// Register a listener that may veto tab presses.
    pub fn add_listener(&mut self, listener: impl FnMut(&mut TabPressEvent<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Programmatic navigation by route name. Listeners are not consulted.
    /// Returns `false` for an unknown name.
    pub fn navigate(&mut self, name: &str) -> bool {
        match self.routes.iter().position(|r| r.name == name) {
            Some(index) => {
                if index != self.active {
                    log::debug!("navigate: {} -> {}", self.routes[self.active].name, name);
                }
                self.active = index;
                true
            }
            None => {
                log::warn!("navigate: unknown route '{}'", name);
                false
            }
        }
    }
}

impl TabHost for TabNavigator {
    fn active_index(&self) -> usize {
        self.active
    }

    fn request_navigate(&mut self, route_key: &str) -> NavigationOutcome {
        let Some(index) = self.routes.iter().position(|r| r.key == route_key) else {
            log::warn!("tab press for unknown route key '{}'", route_key);
            return NavigationOutcome::prevented();
        };

        let mut event = TabPressEvent {
            target: &self.routes[index],
            default_prevented: false,
        };
        for listener in self.listeners.iter_mut() {
            listener(&mut event);
        }
        if event.default_prevented() {
            log::debug!("tab press on '{}' prevented", route_key);
            return NavigationOutcome::prevented();
        }

        self.active = index;
        NavigationOutcome::accepted()
    }
}
