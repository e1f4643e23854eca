//! egui rendering and input wiring for `TabBar`.
//!
//! The bar floats above the screen content in a foreground `Area`. The whole
//! bar is one click-and-drag widget, so egui routes the entire gesture to it
//! once it starts on the bar and nothing underneath can take it over.

use eframe::egui;

use super::host::TabHost;
use super::session::DragEnd;
use super::TabBar;

const BAR_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(26, 35, 50, 217);
const BAR_BORDER: egui::Color32 = egui::Color32::from_rgba_premultiplied(26, 26, 26, 26);
const GLOW: egui::Color32 = egui::Color32::from_rgb(56, 189, 248);
const ICON_ACTIVE: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
const ICON_IDLE: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);

impl TabBar {
    /// Advance the animation, handle input and paint the bar.
    ///
    /// Call once per frame after the screen content so the bar sits on top.
    pub fn show<H: TabHost + ?Sized>(&mut self, ctx: &egui::Context, host: &mut H) {
        let screen = ctx.screen_rect();
        let expected_width = self.geometry.bar_width + self.config.margin * 2.0;
        if (expected_width - screen.width()).abs() > 0.5 {
            self.resize(screen.width());
        }

        // Programmatic navigation since the last frame
        self.observe(host.active_index());

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        if self.tick(dt) {
            ctx.request_repaint();
        }

        let bar_rect = egui::Rect::from_min_size(
            egui::pos2(
                screen.min.x + self.config.margin,
                screen.max.y - self.config.bottom_inset - self.config.height,
            ),
            egui::vec2(self.geometry.bar_width, self.config.height),
        );

        egui::Area::new(egui::Id::new("fitquest_tab_bar"))
            .order(egui::Order::Foreground)
            .fixed_pos(bar_rect.min)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(bar_rect.size(), egui::Sense::click_and_drag());

                // Slot math works in viewport x, with the bar starting at `margin`
                let to_viewport_x = |p: egui::Pos2| p.x - screen.min.x;

                if response.drag_started() {
                    if let Some(p) = response.interact_pointer_pos() {
                        self.begin_drag(to_viewport_x(p), p.y);
                    }
                }
                if response.dragged() {
                    if let Some(p) = response.interact_pointer_pos() {
                        self.handle_drag_move(to_viewport_x(p), host);
                    }
                }
                if response.drag_stopped() {
                    self.end_drag(DragEnd::Released);
                }
                if response.clicked() {
                    if let Some(p) = response.interact_pointer_pos() {
                        let index = self.geometry.slot_at(to_viewport_x(p));
                        self.select(index, host);
                    }
                }

                self.paint(ui, rect);
            });
    }

    fn paint(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter().with_clip_rect(rect);
        let rounding = rect.height() * 0.5;
        painter.rect(
            rect,
            rounding,
            BAR_FILL,
            egui::Stroke::new(1.0, BAR_BORDER),
        );

        let tab_width = self.geometry.tab_width();
        let glow_center = egui::pos2(
            rect.left() + self.indicator_offset() + tab_width * 0.5,
            rect.center().y,
        );
        let radius = self.config.indicator_size * 0.5;
        painter.circle_filled(glow_center, radius + 6.0, GLOW.gamma_multiply(0.25));
        painter.circle_filled(glow_center, radius, GLOW.gamma_multiply(0.9));

        for (index, tab) in self.tabs.iter().enumerate() {
            let center = egui::pos2(
                rect.left() + self.geometry.slot_offset(index) + tab_width * 0.5,
                rect.center().y,
            );
            if index == self.observed_index {
                painter.text(
                    center - egui::vec2(0.0, 6.0),
                    egui::Align2::CENTER_CENTER,
                    tab.icon.glyph(),
                    egui::FontId::proportional(self.config.active_icon_size),
                    ICON_ACTIVE,
                );
                painter.text(
                    center + egui::vec2(0.0, self.config.active_icon_size * 0.5 + 2.0),
                    egui::Align2::CENTER_CENTER,
                    &tab.display_label,
                    egui::FontId::proportional(self.config.label_size),
                    ICON_ACTIVE,
                );
            } else {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    tab.icon.glyph(),
                    egui::FontId::proportional(self.config.icon_size),
                    ICON_IDLE,
                );
            }
        }
    }
}
