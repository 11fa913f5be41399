//! # Badges and Empty States

use crate::ui::theme::Theme;

/// Render a small coloured status pill
pub fn render_status_badge(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).size(12.0).color(color).strong());
        });
}

/// Render an empty state message
pub fn render_empty_state(ui: &mut egui::Ui, primary_text: &str, secondary_text: Option<&str>, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(6.0);
            ui.colored_label(theme.dim, egui::RichText::new(secondary).size(12.0));
        }
    });
}

/// Spinner with a caption
pub fn render_loading(ui: &mut egui::Ui, caption: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(theme.dim, caption);
    });
}

/// White rounded card used for every list entry
pub fn card<R>(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme.colors.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}
