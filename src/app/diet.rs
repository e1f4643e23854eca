use eframe::egui;

use super::FitApp;
use crate::ui;

impl FitApp {
    pub fn draw_diet(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(egui::RichText::new("Diet Plan").size(24.0).strong());
            ui.label(
                egui::RichText::new(format!("{} · {}", self.diet.goal, self.diet.preference))
                    .color(ui::TEXT_SUB),
            );
            ui.add_space(10.0);

            // Week strip
            let mut picked = None;
            ui.horizontal(|ui| {
                for chip in &self.diet.week {
                    let selected = chip.date == self.diet.selected_date;
                    let text = egui::RichText::new(format!("{}\n{}", chip.day, chip.date))
                        .color(if selected { ui::BACKGROUND } else { ui::TEXT });
                    let button = egui::Button::new(text)
                        .fill(if selected { ui::PRIMARY } else { ui::CARD })
                        .rounding(12.0)
                        .min_size(egui::vec2(42.0, 48.0));
                    if ui.add(button).clicked() {
                        picked = Some(chip.date);
                    }
                }
            });
            if let Some(date) = picked {
                self.diet.select_date(date);
            }

            ui.add_space(12.0);
            ui::card(ui, ui::CARD, |ui| {
                let left = self.diet.calories_left();
                ui.label(egui::RichText::new("Calories left").color(ui::TEXT_SUB));
                let color = if left < 0 { ui::DANGER } else { ui::SUCCESS };
                ui.label(egui::RichText::new(format!("{} kcal", left)).size(28.0).strong().color(color));
                ui.label(format!(
                    "{} eaten of {}",
                    self.diet.calories_consumed(),
                    self.diet.calories_target
                ));
                ui::progress_bar(ui, self.diet.progress(), ui::PRIMARY);
            });

            ui::section_title(ui, "Macros");
            for m in &self.diet.macros {
                ui.horizontal(|ui| {
                    ui.label(m.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} / {} g", m.grams, m.target_grams))
                                .color(ui::TEXT_SUB),
                        );
                    });
                });
                let fraction = if m.target_grams == 0 {
                    1.0
                } else {
                    m.grams as f32 / m.target_grams as f32
                };
                ui::progress_bar(ui, fraction, ui::ACCENT);
                ui.add_space(4.0);
            }

            ui::section_title(ui, "Meals");
            for meal in &self.diet.meals {
                ui::card(ui, ui::CARD, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(meal.title).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if meal.logged {
                                ui.label(egui::RichText::new(format!("{} kcal", meal.calories)).color(ui::SUCCESS));
                            } else {
                                ui.label(egui::RichText::new("Not logged").color(ui::WARNING));
                            }
                        });
                    });
                    for item in &meal.items {
                        ui.label(egui::RichText::new(format!("• {}", item)).color(ui::TEXT_SUB));
                    }
                });
                ui.add_space(6.0);
            }
        });
    }
}
