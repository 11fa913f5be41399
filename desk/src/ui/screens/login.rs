//! # Login Screen

use crate::app::{App, AppState, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let pending = state.auth.login_pending;

    // Local copy, written back below
    let mut form = state.auth.login.clone();
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        forms::render_form_heading(ui, "Connexion", &theme);

        forms::render_text_input(ui, "Email", &mut form.email, "votre@email.com", false);
        ui.add_space(8.0);

        let password = forms::render_text_input(
            ui,
            "Mot de passe",
            &mut form.password,
            "Votre mot de passe",
            !form.show_password,
        );
        submit |= forms::submitted(ui, &password);
        ui.checkbox(&mut form.show_password, "Afficher le mot de passe");
        ui.add_space(12.0);

        if let Some(error) = &state.auth.login_error {
            forms::render_error(ui, error, &theme);
        }

        let label = if pending { "Connexion..." } else { "Se connecter" };
        submit |= forms::render_button(ui, label, &theme, true, !pending).clicked();

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 240.0).max(0.0) / 2.0);
            ui.colored_label(theme.dim, "Pas encore de compte ?");
            if ui.link("Inscrivez-vous").clicked() {
                app.navigate(Route::Register);
            }
        });
        if ui.link("Retour à l'accueil").clicked() {
            app.navigate(Route::Home);
        }
    });

    if form != state.auth.login {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.auth.login = form;
        }
    }
    if submit && !pending {
        app.submit_login();
    }
}
