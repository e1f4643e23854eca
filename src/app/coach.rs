use std::time::Instant;

use eframe::egui;

use fitquest::coach::{Sender, Topic};

use super::FitApp;
use crate::ui;

const TOPICS: [(Topic, &str); 4] = [
    (Topic::Workout, "💪 Workout"),
    (Topic::Diet, "🥑 Diet"),
    (Topic::Question, "❓ Question"),
    (Topic::Motivation, "🧠 Motivation"),
];

impl FitApp {
    pub fn draw_coach(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let now = Instant::now();

        ui.label(egui::RichText::new("AI Coach").size(24.0).strong());
        ui.horizontal_wrapped(|ui| {
            for (topic, label) in TOPICS {
                if ui.selectable_label(self.chat.topic() == topic, label).clicked() {
                    self.chat.set_topic(topic, now);
                }
            }
        });
        ui.add_space(8.0);

        let input_height = 44.0;
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - input_height)
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for message in self.chat.messages() {
                    let (layout, fill, text_color) = match message.sender {
                        Sender::User => (
                            egui::Layout::right_to_left(egui::Align::TOP),
                            ui::PRIMARY,
                            ui::BACKGROUND,
                        ),
                        Sender::Bot => (
                            egui::Layout::left_to_right(egui::Align::TOP),
                            ui::CARD,
                            ui::TEXT,
                        ),
                    };
                    ui.with_layout(layout, |ui| {
                        egui::Frame::none()
                            .fill(fill)
                            .rounding(14.0)
                            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                            .show(ui, |ui| {
                                ui.set_max_width(260.0);
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(&message.text).color(text_color));
                                    ui.label(
                                        egui::RichText::new(&message.timestamp)
                                            .size(10.0)
                                            .color(text_color.gamma_multiply(0.7)),
                                    );
                                });
                            });
                    });
                    ui.add_space(6.0);
                }
                if self.chat.is_typing() {
                    ui.label(egui::RichText::new("Coach is typing…").italics().color(ui::TEXT_SUB));
                }
            });

        let mut send = false;
        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("Ask your coach...")
                    .desired_width(ui.available_width() - 60.0),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send = true;
                edit.request_focus();
            }
            if ui.button("Send").clicked() {
                send = true;
            }
        });

        if send && self.chat.send(&self.chat_input, now) {
            self.chat_input.clear();
            ctx.request_repaint();
        }
    }
}
