//! Shared egui widgets and theme colours for the screens.
//!
//! Stateless helpers only; screen state lives on `FitApp`.

use eframe::egui;
use fitquest::toast::{Toast, ToastKind};

// ─── Theme ────────────────────────────────────────────────────────────────────

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(56, 189, 248);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const TEXT_SUB: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);

const LIGHT_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
const LIGHT_CARD: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);

/// Colours for the active theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub background: egui::Color32,
    pub card: egui::Color32,
    pub text: egui::Color32,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        if dark {
            Self {
                background: BACKGROUND,
                card: CARD,
                text: TEXT,
            }
        } else {
            Self {
                background: LIGHT_BACKGROUND,
                card: LIGHT_CARD,
                text: BACKGROUND,
            }
        }
    }
}

/// Apply dark/light visuals.
pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    let mut visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let palette = Palette::new(dark);
    visuals.panel_fill = palette.background;
    visuals.override_text_color = Some(palette.text);
    visuals.selection.bg_fill = PRIMARY;
    ctx.set_visuals(visuals);
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// Rounded card with padding.
pub fn card<R>(
    ui: &mut egui::Ui,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(fill)
        .rounding(16.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(text).size(18.0).strong());
    ui.add_space(6.0);
}

/// Thin progress bar filled to `fraction`.
pub fn progress_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 8.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(51));
    let mut filled = rect;
    filled.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    painter.rect_filled(filled, 4.0, color);
}

/// Full-width selectable option with a check mark when selected.
pub fn option_button(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let text = if selected {
        format!("✔  {}", label)
    } else {
        label.to_string()
    };
    let fill = if selected {
        PRIMARY.gamma_multiply(0.25)
    } else {
        CARD
    };
    ui.add_sized(
        [ui.available_width(), 40.0],
        egui::Button::new(egui::RichText::new(text).color(if selected { PRIMARY } else { TEXT }))
            .fill(fill)
            .rounding(12.0),
    )
}

/// Large primary action button.
pub fn primary_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(label).strong().color(BACKGROUND))
            .fill(PRIMARY)
            .rounding(14.0)
            .min_size(egui::vec2(ui.available_width(), 44.0)),
    )
}

/// Text input with a caption above it.
pub fn labeled_input(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String, password: bool) {
    ui.label(egui::RichText::new(label).size(12.0).color(TEXT_SUB));
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
}

/// Draw the current toast at the top of the screen.
pub fn draw_toast(ctx: &egui::Context, toast: &Toast) {
    let stripe = match toast.kind {
        ToastKind::Success => SUCCESS,
        ToastKind::Error => DANGER,
        ToastKind::Info => PRIMARY,
    };
    egui::Area::new(egui::Id::new("fitquest_toast"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::WHITE)
                .rounding(10.0)
                .stroke(egui::Stroke::new(4.0, stripe))
                .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                .show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.label(egui::RichText::new(&toast.title).strong().color(BACKGROUND));
                    if !toast.body.is_empty() {
                        ui.label(egui::RichText::new(&toast.body).size(12.0).color(CARD));
                    }
                });
        });
}

/// Star rating text, e.g. `★ 4.8`.
pub fn rating_text(rating: f32) -> String {
    format!("★ {:.1}", rating)
}
