//! Nearby screen: category chips, a stylised map and place cards.

use std::time::Instant;

use eframe::egui;

use fitquest::demo::{filter_places, PlaceFilter, PlaceKind};

use super::FitApp;
use crate::ui;

fn marker_color(kind: PlaceKind) -> egui::Color32 {
    match kind {
        PlaceKind::Gym => ui::DANGER,
        PlaceKind::Park => ui::SUCCESS,
        PlaceKind::Path => ui::PRIMARY,
    }
}

enum PlaceAction {
    Select(u32),
    Remind(u32),
    Go(u32),
}

impl FitApp {
    pub fn draw_nearby(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut action = None;

        ui.label(egui::RichText::new("Nearby").size(24.0).strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.place_search)
                .hint_text("Search gyms, parks, trails...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for chip in PlaceFilter::CHIPS {
                if ui.selectable_label(self.place_filter == chip, chip.label()).clicked() {
                    self.place_filter = chip;
                }
            }
        });
        ui.add_space(8.0);

        let query = self.place_search.trim().to_lowercase();
        let visible: Vec<_> = filter_places(&self.places, self.place_filter)
            .into_iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect();

        // Map
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 180.0),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 16.0, egui::Color32::from_rgb(22, 33, 52));
        for i in 1..4 {
            let y = rect.top() + rect.height() * i as f32 / 4.0;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(1.0, egui::Color32::from_gray(45)),
            );
        }
        painter.circle_filled(rect.center(), 6.0, ui::PRIMARY);
        for place in &visible {
            let pos = rect.left_top()
                + egui::vec2(rect.width() * place.map_pos.0, rect.height() * place.map_pos.1);
            let selected = self.selected_place == Some(place.id);
            let radius = if selected { 11.0 } else { 8.0 };
            painter.circle_filled(pos, radius, marker_color(place.kind));
            let hit = egui::Rect::from_center_size(pos, egui::vec2(24.0, 24.0));
            let response = ui.interact(hit, ui.id().with(("marker", place.id)), egui::Sense::click());
            if response.on_hover_text(place.name).clicked() {
                action = Some(PlaceAction::Select(place.id));
            }
        }
        ui.add_space(10.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            if visible.is_empty() {
                ui.label(egui::RichText::new("No places match.").color(ui::TEXT_SUB));
            }
            for place in &visible {
                let selected = self.selected_place == Some(place.id);
                let fill = if selected { ui::PRIMARY.gamma_multiply(0.2) } else { ui::CARD };
                ui::card(ui, fill, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(place.name).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(ui::rating_text(place.rating)).color(ui::WARNING));
                        });
                    });
                    ui.label(
                        egui::RichText::new(format!(
                            "{} · {:.1} km · {}",
                            place.kind.label(),
                            place.distance_km,
                            place.address
                        ))
                        .size(12.0)
                        .color(ui::TEXT_SUB),
                    );
                    ui.horizontal(|ui| {
                        if ui.button("⏰ Remind").clicked() {
                            action = Some(PlaceAction::Remind(place.id));
                        }
                        if ui.button("➡ Go Now").clicked() {
                            action = Some(PlaceAction::Go(place.id));
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });

        match action {
            Some(PlaceAction::Select(id)) => {
                self.selected_place = if self.selected_place == Some(id) { None } else { Some(id) };
            }
            Some(PlaceAction::Remind(id)) => {
                if let Some(place) = self.places.iter().find(|p| p.id == id) {
                    self.toasts.info("Reminder Set", &place.reminder_message(), Instant::now());
                }
            }
            Some(PlaceAction::Go(id)) => {
                let Some(place) = self.places.iter().find(|p| p.id == id) else {
                    return;
                };
                match place.directions_url() {
                    Ok(url) => {
                        log::info!("opening directions: {}", url);
                        ctx.open_url(egui::OpenUrl::new_tab(url.as_str()));
                    }
                    Err(e) => {
                        log::error!("directions link for {} failed: {}", place.name, e);
                        self.toasts.error("Navigation Failed", &e.to_string(), Instant::now());
                    }
                }
            }
            None => {}
        }
    }
}
