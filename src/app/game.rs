use eframe::egui;

use fitquest::demo::QuestIcon;

use super::FitApp;
use crate::ui;

fn quest_glyph(icon: QuestIcon) -> &'static str {
    match icon {
        QuestIcon::Water => "💧",
        QuestIcon::Steps => "👣",
        QuestIcon::Cardio => "❤",
        QuestIcon::Stand => "🧍",
    }
}

impl FitApp {
    pub fn draw_game(&mut self, ui: &mut egui::Ui) {
        let mut toggled = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            let player = &self.player;
            ui::card(ui, ui::CARD, |ui| {
                ui.label(egui::RichText::new(player.name).size(22.0).strong());
                ui.label(egui::RichText::new(player.title).color(ui::ACCENT));
                ui.label(format!("Level {} · {} / {} XP", player.level, player.xp, player.xp_to_next));
                ui::progress_bar(ui, player.xp_fraction(), ui::ACCENT);
            });

            ui::section_title(ui, "Campaign");
            let campaign = &player.campaign;
            ui::card(ui, ui::CARD, |ui| {
                ui.label(egui::RichText::new(campaign.name).size(18.0).strong());
                ui.label(egui::RichText::new(campaign.chapter).color(ui::TEXT_SUB));
                ui.label(format!(
                    "Level {} of {} · 🔥 {} day streak",
                    campaign.current_level, campaign.total_levels, campaign.streak_days
                ));
                ui::progress_bar(
                    ui,
                    campaign.current_level as f32 / campaign.total_levels.max(1) as f32,
                    ui::WARNING,
                );
                ui.add_space(6.0);
                ui.label(format!("Today: {} ({})", campaign.today_mission, campaign.difficulty));
                ui.label(egui::RichText::new(format!("Loot: {}", campaign.loot)).color(ui::SUCCESS));
            });

            ui::section_title(
                ui,
                &format!("Daily Quests ({}/{})", player.completed_quests(), player.quests.len()),
            );
            for quest in &player.quests {
                ui::card(ui, ui::CARD, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(quest_glyph(quest.icon)).size(22.0));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(quest.title).strong());
                            ui.label(egui::RichText::new(quest.subtitle).size(12.0).color(ui::TEXT_SUB));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mark = if quest.completed { "✔" } else { "○" };
                            if ui.button(mark).clicked() {
                                toggled = Some(quest.id);
                            }
                        });
                    });
                    ui::progress_bar(ui, quest.fraction(), if quest.completed { ui::SUCCESS } else { ui::PRIMARY });
                    ui.label(
                        egui::RichText::new(format!(
                            "{}{} / {}{} · 🔥 {}",
                            quest.progress, quest.unit, quest.target, quest.unit, quest.streak
                        ))
                        .size(11.0)
                        .color(ui::TEXT_SUB),
                    );
                });
                ui.add_space(6.0);
            }
        });

        if let Some(id) = toggled {
            if let Some(done) = self.player.toggle_quest(id) {
                log::debug!("quest {} completed={}", id, done);
            }
        }
    }
}
