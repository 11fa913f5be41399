//! # Profile Tab
//!
//! Shared by the client and transporter dashboards.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, forms};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let profile = &state.profile;

    ui.heading("Mon profil");
    ui.add_space(8.0);

    if profile.loading {
        badges::render_loading(ui, "Chargement du profil...", &theme);
    }

    let mut form = profile.form.clone();
    let mut phone = form.phone.clone();
    let mut submit = false;

    ui.add_enabled_ui(!profile.loading && !profile.saving, |ui| {
        forms::render_text_input(ui, "Prénom", &mut form.first_name, "", false);
        forms::render_text_input(ui, "Nom", &mut form.last_name, "", false);
        forms::render_text_input(ui, "Email", &mut form.email, "", false);

        forms::render_text_input(ui, "Téléphone", &mut phone, "+33123456789", false);
        if let Some(error) = &form.phone_error {
            forms::render_error(ui, error, &theme);
        }

        forms::render_text_input(ui, "Adresse", &mut form.address, "", false);
        forms::render_text_input(
            ui,
            "Nouveau mot de passe",
            &mut form.password,
            "Laisser vide pour ne pas changer",
            true,
        );
        ui.add_space(12.0);

        if let Some(error) = &profile.error {
            forms::render_error(ui, error, &theme);
        }

        let label = if profile.saving { "Enregistrement..." } else { "Enregistrer" };
        submit = forms::render_button(ui, label, &theme, true, true).clicked();
    });

    if form != profile.form {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.profile.form = form;
        }
    }
    if phone != profile.form.phone {
        app.change_profile_phone(&phone);
    }
    if submit {
        app.submit_profile();
    }
}
