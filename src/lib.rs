pub mod config;
pub mod tabbar;

// Screens' state, kept out of the egui layer so it can be tested headless
pub mod account;
pub mod coach;
pub mod demo;
pub mod onboarding;
pub mod profile;
pub mod toast;

use tabbar::{IconToken, TabDescriptor};

/// The five tabs of the main screen, in bar order.
pub fn main_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new("home", "Home", IconToken::Home),
        TabDescriptor::new("chat", "Coach", IconToken::Coach),
        TabDescriptor::new("diet", "Diet", IconToken::Diet),
        TabDescriptor::new("gamification", "Game", IconToken::Trophy),
        TabDescriptor::new("nearby", "NearBy", IconToken::MapPin),
    ]
}
