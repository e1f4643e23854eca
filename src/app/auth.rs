//! Login, sign-up and the start-up auth gate for `FitApp`.

use std::time::Instant;

use eframe::egui;

use super::{FitApp, Screen};
use crate::ui;

impl FitApp {
    /// First frame: signed-in users go straight to Home, others to Login.
    pub fn resolve_gate(&mut self) {
        let next = if self.accounts.current_user().is_some() {
            Screen::Main
        } else {
            Screen::Login
        };
        self.go_to(next);
    }

    pub fn draw_login(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut to_signup = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(80.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("F.I.T.").size(40.0).strong().color(ui::PRIMARY));
                ui.label(egui::RichText::new("Welcome back, athlete.").color(ui::TEXT_SUB));
            });
            ui.add_space(32.0);

            ui::card(ui, ui::CARD, |ui| {
                ui::labeled_input(ui, "Email", "you@example.com", &mut self.login.email, false);
                ui::labeled_input(ui, "Password", "••••••", &mut self.login.password, true);
                ui.add_space(8.0);
                let label = if self.busy { "Signing in..." } else { "Log In" };
                submit = ui::primary_button(ui, label, !self.busy).clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter));
            });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("New here?").color(ui::TEXT_SUB));
                    to_signup = ui.link("Create an account").clicked();
                });
            });
        });

        if submit && !self.busy {
            self.submit_login();
        }
        if to_signup {
            self.go_to(Screen::Signup);
        }
    }

    fn submit_login(&mut self) {
        let now = Instant::now();
        self.busy = true;
        match self.login.submit(self.accounts.as_mut()) {
            Ok(user) => {
                self.toasts.success(
                    "Welcome Back!",
                    &format!("Signed in as {}", user.email),
                    now,
                );
                self.login = Default::default();
                self.go_to(Screen::Main);
            }
            Err(e) => {
                log::warn!("login failed: {}", e);
                self.toasts.error(e.title(), &e.to_string(), now);
                self.busy = false;
            }
        }
    }

    pub fn draw_signup(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(48.0);
            ui.label(egui::RichText::new("Join the team").size(30.0).strong());
            ui.label(egui::RichText::new("Create your account to start training.").color(ui::TEXT_SUB));
            ui.add_space(24.0);

            ui::card(ui, ui::CARD, |ui| {
                ui::labeled_input(ui, "Full Name", "Alex Doe", &mut self.signup.full_name, false);
                ui::labeled_input(ui, "Email", "you@example.com", &mut self.signup.email, false);
                ui::labeled_input(ui, "Password", "At least 6 characters", &mut self.signup.password, true);
                ui::labeled_input(
                    ui,
                    "Confirm Password",
                    "Repeat password",
                    &mut self.signup.confirm_password,
                    true,
                );
                ui.add_space(8.0);
                let label = if self.busy { "Creating..." } else { "Sign Up" };
                submit = ui::primary_button(ui, label, !self.busy).clicked();
            });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                back = ui.link("Already have an account? Log in").clicked();
            });
        });

        if submit && !self.busy {
            self.submit_signup();
        }
        if back {
            self.go_to(Screen::Login);
        }
    }

    fn submit_signup(&mut self) {
        let now = Instant::now();
        self.busy = true;
        match self.signup.submit(self.accounts.as_mut()) {
            Ok(user) => {
                let name = user.display_name.clone().unwrap_or_else(|| user.email.clone());
                self.toasts.success(
                    "Profile Initialized",
                    &format!("Welcome to the team, {}.", name),
                    now,
                );
                self.signup = Default::default();
                // Home sends users without a profile document to onboarding
                self.go_to(Screen::Main);
            }
            Err(e) => {
                log::warn!("sign up failed: {}", e);
                let title = match e {
                    fitquest::account::AccountError::MissingFields
                    | fitquest::account::AccountError::PasswordMismatch => e.title(),
                    _ => "Sign Up Failed",
                };
                self.toasts.error(title, &e.to_string(), now);
                self.busy = false;
            }
        }
    }

    pub fn sign_out(&mut self) {
        let now = Instant::now();
        match self.accounts.sign_out() {
            Ok(()) => {
                self.toasts.success("Signed out", "You have been logged out.", now);
                self.go_to(Screen::Login);
            }
            Err(e) => self.toasts.error("Logout Failed", &e.to_string(), now),
        }
    }
}
