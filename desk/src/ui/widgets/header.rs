//! # Dashboard Header
//!
//! Title, greeting and logout button shown on every dashboard.

use crate::app::App;
use crate::ui::theme::Theme;

/// Render the dashboard header. The greeting uses the part of the session
/// email before the `@`.
pub fn render_dashboard_header(ui: &mut egui::Ui, title: &str, session_email: &str, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).size(22.0).strong().color(theme.selected));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Déconnexion").clicked() {
                app.logout();
            }
            ui.add_space(8.0);
            let name = shared::utils::greeting_name(session_email);
            ui.colored_label(theme.dim, format!("Bonjour, {name}"));
        });
    });
    ui.separator();
    ui.add_space(6.0);
}

/// Render a row of tabs; returns the tab that was clicked, if any.
pub fn render_tabs<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    tabs: &[T],
    active: T,
    title: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for tab in tabs {
            if ui.selectable_label(*tab == active, title(tab)).clicked() && *tab != active {
                clicked = Some(*tab);
            }
        }
    });
    ui.add_space(8.0);
    clicked
}
