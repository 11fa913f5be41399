//! # Home Screen
//!
//! Landing page with entry points to login and registration.

use crate::app::{App, AppState, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(egui::RichText::new("TransportEasy").size(34.0).strong().color(theme.selected));
        ui.add_space(8.0);
        ui.colored_label(theme.dim, "La place de marché qui relie expéditeurs et transporteurs");
        ui.add_space(40.0);

        if let Some(session) = state.session.get() {
            let dashboard = session.user_type.map(Route::dashboard_for);
            if let Some(route) = dashboard {
                if forms::render_button(ui, "Accéder à mon espace", &theme, true, true).clicked() {
                    app.navigate(route);
                }
                return;
            }
        }

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 260.0).max(0.0) / 2.0);
            if forms::render_button(ui, "Se connecter", &theme, true, true).clicked() {
                app.navigate(Route::Login);
            }
            ui.add_space(12.0);
            if forms::render_button(ui, "Créer un compte", &theme, false, true).clicked() {
                app.navigate(Route::Register);
            }
        });

        ui.add_space(48.0);
        ui.columns(2, |columns| {
            columns[0].vertical_centered(|ui| {
                ui.strong("Expéditeurs");
                ui.colored_label(theme.dim, "Publiez une demande et recevez des offres.");
            });
            columns[1].vertical_centered(|ui| {
                ui.strong("Transporteurs");
                ui.colored_label(theme.dim, "Trouvez des chargements sur votre trajet.");
            });
        });
    });
}
