//! `FitApp`: the top-level egui application state.
//!
//! This module declares the `FitApp` struct, its constructor and the frame
//! loop. Screen drawing is split across the sibling sub-modules:
//!
//! - `auth`   : login / sign-up and the start-up auth gate
//! - `setup`  : four-step onboarding form
//! - `home`   : dashboard and the hidden profile screen
//! - `coach`  : simulated chat
//! - `diet`, `game`, `nearby`: demo-data tabs

pub mod auth;
pub mod coach;
pub mod diet;
pub mod game;
pub mod home;
pub mod nearby;
pub mod setup;

use std::time::{Duration, Instant};

use eframe::egui;

use fitquest::account::{AccountService, InMemoryAccounts, LoginForm, SignupForm};
use fitquest::coach::CoachChat;
use fitquest::config::AppConfig;
use fitquest::demo::{sample_places, DietDay, Place, PlaceFilter, PlayerState};
use fitquest::onboarding::ProfileForm;
use fitquest::profile::{display_name_from_email, format_goal};
use fitquest::tabbar::host::{TabHost, TabNavigator};
use fitquest::tabbar::TabBar;
use fitquest::toast::Toasts;

use crate::ui;

/// Top-level screens. `Main` hosts the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gate,
    Login,
    Signup,
    SetupProfile,
    Main,
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct FitApp {
    pub config: AppConfig,
    pub accounts: Box<dyn AccountService>,
    pub screen: Screen,
    pub toasts: Toasts,
    /// Delayed screen switch (e.g. after profile calibration)
    pub pending_screen: Option<(Instant, Screen)>,
    // Auth
    pub login: LoginForm,
    pub signup: SignupForm,
    pub busy: bool,
    // Onboarding
    pub onboarding: ProfileForm,
    // Tabs
    pub tabs: TabNavigator,
    pub tab_bar: Option<TabBar>,
    pub showing_profile: bool,
    // Home
    pub user_name: String,
    pub user_goal: String,
    // Coach
    pub chat: CoachChat,
    pub chat_input: String,
    // Demo tabs
    pub diet: DietDay,
    pub player: PlayerState,
    pub places: Vec<Place>,
    pub place_filter: PlaceFilter,
    pub selected_place: Option<u32>,
    pub place_search: String,
    // Profile screen
    pub body_weight_kg: f32,
    pub body_height_cm: f32,
    pub location: String,
    pub dark_mode: bool,
}

impl FitApp {
    pub fn new(config: AppConfig) -> Self {
        let mut tabs = TabNavigator::new(fitquest::main_tabs());
        tabs.add_listener(|event| log::debug!("tab press: {}", event.target.name));

        Self {
            config,
            accounts: Box::new(InMemoryAccounts::new()),
            screen: Screen::Gate,
            toasts: Toasts::new(),
            pending_screen: None,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            busy: false,
            onboarding: ProfileForm::new(),
            tabs,
            tab_bar: None,
            showing_profile: false,
            user_name: "Athlete".to_string(),
            user_goal: "Stay Fit".to_string(),
            chat: CoachChat::open(config.coach_topic, Instant::now()),
            chat_input: String::new(),
            diet: DietDay::sample(),
            player: PlayerState::sample(),
            places: sample_places(),
            place_filter: PlaceFilter::All,
            selected_place: None,
            place_search: String::new(),
            body_weight_kg: 75.0,
            body_height_cm: 180.0,
            location: "New York, USA".to_string(),
            dark_mode: config.dark_theme,
        }
    }

    /// Switch top-level screen, resetting per-screen state where needed.
    pub fn go_to(&mut self, screen: Screen) {
        log::debug!("screen: {:?} -> {:?}", self.screen, screen);
        self.pending_screen = None;
        self.busy = false;
        self.showing_profile = false;
        if screen == Screen::Main {
            self.tabs.navigate("home");
            // The account/profile check may redirect elsewhere
            self.screen = self.load_home();
        } else {
            self.screen = screen;
        }
        if self.screen != Screen::Main {
            // Unmounted: the next bar starts at rest under the active tab
            self.tab_bar = None;
        }
    }

    /// Switch screen after `delay`.
    pub fn go_to_after(&mut self, screen: Screen, delay: Duration) {
        self.pending_screen = Some((Instant::now() + delay, screen));
    }

    /// Fill the Home header from the account and profile document.
    /// Returns where the user should land: Login without a signed-in user,
    /// onboarding without a profile document, otherwise Main.
    fn load_home(&mut self) -> Screen {
        let Some(user) = self.accounts.current_user().cloned() else {
            return Screen::Login;
        };
        self.user_name = display_name_from_email(&user.email);

        match self.accounts.load_profile(&user.uid) {
            Ok(Some(doc)) => {
                self.user_goal = format_goal(doc.profile.goal.slug());
                self.body_weight_kg = doc.profile.weight_kg;
                self.body_height_cm = doc.profile.height_cm;
                Screen::Main
            }
            Ok(None) => {
                log::info!("no profile for {}, starting onboarding", user.uid);
                self.onboarding = ProfileForm::new();
                Screen::SetupProfile
            }
            Err(e) => {
                log::error!("profile load failed: {}", e);
                Screen::Main
            }
        }
    }

    fn poll_pending_screen(&mut self, now: Instant) {
        if let Some((due, screen)) = self.pending_screen {
            if now >= due {
                self.go_to(screen);
            }
        }
    }

    /// Tab content plus the floating bar.
    fn draw_main(&mut self, ctx: &egui::Context) {
        if self.tab_bar.is_none() {
            match TabBar::new(
                fitquest::main_tabs(),
                ctx.screen_rect().width(),
                self.tabs.active_index(),
                self.config.tab_bar,
            ) {
                Ok(bar) => self.tab_bar = Some(bar),
                Err(e) => log::error!("tab bar unavailable: {}", e),
            }
        }

        let palette = ui::Palette::new(self.dark_mode);
        // Keep content clear of the floating bar
        let bar_space = self.config.tab_bar.height + self.config.tab_bar.bottom_inset + 12.0;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.background)
                    .inner_margin(egui::Margin {
                        left: 16.0,
                        right: 16.0,
                        top: 16.0,
                        bottom: bar_space,
                    }),
            )
            .show(ctx, |ui| {
                if self.showing_profile {
                    self.draw_profile(ui);
                    return;
                }
                let route = self
                    .tabs
                    .active_route()
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                match route.as_str() {
                    "chat" => self.draw_coach(ui, ctx),
                    "diet" => self.draw_diet(ui),
                    "gamification" => self.draw_game(ui),
                    "nearby" => self.draw_nearby(ui, ctx),
                    _ => self.draw_home(ui),
                }
            });

        if let Some(bar) = self.tab_bar.as_mut() {
            bar.show(ctx, &mut self.tabs);
        }
    }
}

impl eframe::App for FitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.toasts.tick(now);
        self.poll_pending_screen(now);
        self.chat.tick(now);

        ui::apply_theme(ctx, self.dark_mode);

        match self.screen {
            Screen::Gate => {
                self.resolve_gate();
                ctx.request_repaint();
            }
            Screen::Login => self.draw_login(ctx),
            Screen::Signup => self.draw_signup(ctx),
            Screen::SetupProfile => self.draw_setup(ctx),
            Screen::Main => self.draw_main(ctx),
        }

        if let Some(toast) = self.toasts.current() {
            ui::draw_toast(ctx, toast);
        }

        // Timers: wake up for the next chat message, toast expiry or redirect
        let deadlines = [
            self.chat.next_deadline(),
            self.toasts.current().map(|t| t.expires_at()),
            self.pending_screen.map(|(due, _)| due),
        ];
        if let Some(next) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }
    }
}
