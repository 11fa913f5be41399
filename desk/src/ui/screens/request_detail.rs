//! # Request Detail
//!
//! Placeholder view for `/request/:id`.

use crate::app::{App, AppState, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::badges;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, request_id: i64) {
    let theme = Theme::default();

    ui.heading(format!("Demande n°{request_id}"));
    ui.add_space(8.0);
    badges::render_empty_state(ui, "Le détail des demandes sera bientôt disponible.", None, &theme);
    ui.add_space(16.0);

    let back = state
        .session
        .get()
        .and_then(|session| session.user_type)
        .map(Route::dashboard_for)
        .unwrap_or(Route::Home);
    if ui.button("Retour").clicked() {
        app.navigate(back);
    }
}
