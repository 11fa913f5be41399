//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

pub const FIELD_WIDTH: f32 = 320.0;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(13.0));
    ui.add_sized(
        [FIELD_WIDTH, 28.0],
        egui::TextEdit::singleline(value).password(password).hint_text(hint),
    )
}

/// Render a labelled multi-line text input
pub fn render_text_area(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(egui::RichText::new(label).size(13.0));
    ui.add_sized(
        [FIELD_WIDTH, 64.0],
        egui::TextEdit::multiline(value).hint_text(hint),
    )
}

/// Render a button, filled with the accent colour when `primary`
pub fn render_button(ui: &mut egui::Ui, text: &str, theme: &Theme, primary: bool, enabled: bool) -> egui::Response {
    let mut button = egui::Button::new(if primary {
        egui::RichText::new(text).color(egui::Color32::WHITE).strong()
    } else {
        egui::RichText::new(text)
    })
    .min_size(egui::vec2(120.0, 32.0));

    if primary {
        button = button.fill(theme.selected);
    }
    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).size(22.0).strong().color(theme.selected));
    ui.add_space(16.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(12.0).color(theme.dim));
}

/// True when Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
