//! Onboarding screen: four steps of profile questions.

use std::time::Instant;

use eframe::egui;

use fitquest::onboarding::{step_title, TOTAL_STEPS};
use fitquest::profile::{
    Equipment, Experience, Goal, Injury, JobActivity, Sex, SleepHours, StressLevel, TrainingDays,
};

use super::{FitApp, Screen};
use crate::ui;

/// One single-choice question: a caption plus an option button per answer.
fn choice<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    caption: &str,
    answers: &[T],
    label: fn(T) -> &'static str,
    selected: &mut Option<T>,
) {
    ui.label(egui::RichText::new(caption).size(13.0).color(ui::TEXT_SUB));
    for &answer in answers {
        if ui::option_button(ui, label(answer), *selected == Some(answer)).clicked() {
            *selected = Some(answer);
        }
        ui.add_space(4.0);
    }
    ui.add_space(10.0);
}

impl FitApp {
    pub fn draw_setup(&mut self, ctx: &egui::Context) {
        let mut back = false;
        let mut next = false;
        let step = self.onboarding.step();

        egui::CentralPanel::default().show(ctx, |ui| {
            // Progress dots
            ui.horizontal(|ui| {
                for i in 1..=TOTAL_STEPS {
                    let color = if i <= step { ui::PRIMARY } else { ui::CARD };
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(40.0, 6.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 3.0, color);
                }
            });
            ui.add_space(16.0);

            let (title, subtitle) = step_title(step);
            ui.label(egui::RichText::new(title).size(24.0).strong());
            ui.label(egui::RichText::new(subtitle).color(ui::TEXT_SUB));
            ui.add_space(16.0);

            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 64.0)
                .show(ui, |ui| self.draw_setup_step(ui, step));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if step > 1 && ui.button("Back").clicked() {
                    back = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.onboarding.is_last_step() {
                        "Finish"
                    } else {
                        "Next"
                    };
                    let button = egui::Button::new(
                        egui::RichText::new(label).strong().color(ui::BACKGROUND),
                    )
                    .fill(ui::PRIMARY)
                    .rounding(12.0)
                    .min_size(egui::vec2(120.0, 40.0));
                    next = ui.add_enabled(!self.busy, button).clicked();
                });
            });
        });

        if back {
            self.onboarding.prev_step();
        }
        if next {
            self.advance_setup();
        }
    }

    fn draw_setup_step(&mut self, ui: &mut egui::Ui, step: u8) {
        let form = &mut self.onboarding;
        match step {
            1 => {
                ui::labeled_input(ui, "Age", "e.g. 25", &mut form.age, false);
                ui::labeled_input(ui, "Height (cm)", "e.g. 175", &mut form.height, false);
                ui::labeled_input(ui, "Weight (kg)", "e.g. 70", &mut form.weight, false);
                choice(ui, "Biological Sex", Sex::ALL, Sex::label, &mut form.sex);
            }
            2 => {
                choice(ui, "Job Activity", JobActivity::ALL, JobActivity::label, &mut form.job_activity);
                choice(ui, "Average Sleep", SleepHours::ALL, SleepHours::label, &mut form.sleep);
                choice(ui, "Stress Level", StressLevel::ALL, StressLevel::label, &mut form.stress);
                choice(ui, "Training Experience", Experience::ALL, Experience::label, &mut form.experience);
            }
            3 => {
                choice(ui, "Equipment Access", Equipment::ALL, Equipment::label, &mut form.equipment);
                ui.label(egui::RichText::new("Injuries (optional)").size(13.0).color(ui::TEXT_SUB));
                ui.horizontal_wrapped(|ui| {
                    for &injury in Injury::ALL {
                        let selected = form.injuries.contains(&injury);
                        if ui.selectable_label(selected, injury.label()).clicked() {
                            form.toggle_injury(injury);
                        }
                    }
                });
            }
            _ => {
                choice(ui, "Primary Goal", Goal::ALL, Goal::label, &mut form.goal);
                choice(ui, "Training Days / Week", TrainingDays::ALL, TrainingDays::label, &mut form.training_days);
            }
        }
    }

    fn advance_setup(&mut self) {
        let now = Instant::now();
        if !self.onboarding.is_step_valid() {
            self.toasts.error("Missing Info", "Please complete all fields to continue.", now);
            return;
        }
        if !self.onboarding.is_last_step() {
            if let Err(e) = self.onboarding.next_step() {
                self.toasts.error("Missing Info", &e.to_string(), now);
            }
            return;
        }
        self.finish_setup(now);
    }

    fn finish_setup(&mut self, now: Instant) {
        let Some(uid) = self.accounts.current_user().map(|u| u.uid.clone()) else {
            self.go_to(Screen::Login);
            return;
        };

        self.busy = true;
        let saved = self
            .onboarding
            .finish(&uid)
            .map_err(|e| e.to_string())
            .and_then(|doc| {
                self.accounts
                    .save_profile(&uid, doc)
                    .map_err(|e| e.to_string())
            });

        match saved {
            Ok(()) => {
                log::info!("profile saved for {}", uid);
                self.toasts.success("Profile Initialized", "AI Models Calibrating...", now);
                self.go_to_after(Screen::Main, self.config.calibration_delay);
            }
            Err(msg) => {
                log::error!("profile save failed: {}", msg);
                self.toasts.error("Error Saving", &msg, now);
                self.busy = false;
            }
        }
    }
}
