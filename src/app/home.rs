//! Home dashboard and the profile screen it opens.

use std::time::Instant;

use eframe::egui;

use fitquest::profile::{bmi, BmiCategory};

use super::{FitApp, Screen};
use crate::ui;

const SHORTCUTS: [(&str, &str); 4] = [
    ("🏋", "Workout"),
    ("🥗", "Meal"),
    ("💧", "Water"),
    ("😴", "Sleep"),
];

impl FitApp {
    pub fn draw_home(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Welcome back,").color(ui::TEXT_SUB));
                ui.label(egui::RichText::new(&self.user_name).size(26.0).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(egui::RichText::new("👤").size(20.0)).clicked() {
                    self.showing_profile = true;
                }
            });
        });
        ui.add_space(8.0);

        // Goal chip reopens onboarding
        let chip = egui::Button::new(
            egui::RichText::new(format!("🎯 {}", self.user_goal)).color(ui::PRIMARY),
        )
        .fill(ui::PRIMARY.gamma_multiply(0.15))
        .rounding(20.0);
        if ui.add(chip).clicked() {
            self.onboarding = Default::default();
            self.go_to(Screen::SetupProfile);
            return;
        }

        ui.add_space(12.0);
        ui::card(ui, ui::CARD, |ui| {
            ui.label(egui::RichText::new("Today's Focus").color(ui::TEXT_SUB));
            ui.label(egui::RichText::new(self.player.campaign.today_mission).size(20.0).strong());
            ui.label(format!(
                "Level {} · {} XP to next",
                self.player.level,
                self.player.xp_to_next.saturating_sub(self.player.xp)
            ));
            ui.add_space(6.0);
            ui::progress_bar(ui, self.player.xp_fraction(), ui::ACCENT);
        });

        ui::section_title(ui, "Quick Log");
        ui.columns(SHORTCUTS.len(), |cols| {
            for (col, (icon, kind)) in cols.iter_mut().zip(SHORTCUTS) {
                let button = egui::Button::new(egui::RichText::new(format!("{}\n{}", icon, kind)))
                    .fill(ui::CARD)
                    .rounding(14.0)
                    .min_size(egui::vec2(col.available_width(), 64.0));
                if col.add(button).clicked() {
                    self.toasts.info(
                        &format!("Logging {}", kind),
                        "Entry added to today's diary.",
                        now,
                    );
                }
            }
        });

        ui::section_title(ui, "Shortcuts");
        ui.horizontal(|ui| {
            if ui.button("💬 Ask the coach").clicked() {
                self.tabs.navigate("chat");
            }
            if ui.button("🍽 Diet plan").clicked() {
                self.tabs.navigate("diet");
            }
        });

        ui.add_space(12.0);
        ui::card(ui, ui::CARD, |ui| {
            ui.label(egui::RichText::new("Calories").color(ui::TEXT_SUB));
            ui.label(format!(
                "{} / {} kcal",
                self.diet.calories_consumed(),
                self.diet.calories_target
            ));
            ui::progress_bar(ui, self.diet.progress(), ui::SUCCESS);
        });
    }

    pub fn draw_profile(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                self.showing_profile = false;
            }
            ui.label(egui::RichText::new("Profile").size(22.0).strong());
        });
        ui.add_space(12.0);

        ui::card(ui, ui::CARD, |ui| {
            ui.label(egui::RichText::new(&self.user_name).size(20.0).strong());
            ui.label(egui::RichText::new(&self.user_goal).color(ui::PRIMARY));
        });

        ui::section_title(ui, "Body Metrics");
        ui::card(ui, ui::CARD, |ui| {
            ui.add(egui::Slider::new(&mut self.body_weight_kg, 30.0..=200.0).text("Weight (kg)"));
            ui.add(egui::Slider::new(&mut self.body_height_cm, 120.0..=220.0).text("Height (cm)"));
            ui.add_space(6.0);
            match bmi(self.body_weight_kg, self.body_height_cm) {
                Some(value) => {
                    let category = BmiCategory::of(value);
                    let color = match category {
                        BmiCategory::Healthy => ui::SUCCESS,
                        BmiCategory::Underweight | BmiCategory::Overweight => ui::WARNING,
                        BmiCategory::Obese => ui::DANGER,
                    };
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(format!("BMI {:.1}", value)).strong());
                        ui.label(egui::RichText::new(category.label()).color(color));
                    });
                }
                None => {
                    ui.label("BMI unavailable");
                }
            }
        });

        ui::section_title(ui, "Settings");
        ui::card(ui, ui::CARD, |ui| {
            ui::labeled_input(ui, "Location", "City, Country", &mut self.location, false);
            ui.checkbox(&mut self.dark_mode, "Dark mode");
        });

        ui.add_space(16.0);
        let sign_out = egui::Button::new(egui::RichText::new("Sign out").color(ui::DANGER))
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add(sign_out).clicked() {
            self.sign_out();
        }
    }
}
