//! # Registration Screen
//!
//! Role selector, identity fields and the role-specific block.

use shared::dto::UserType;

use crate::app::{App, AppState, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let pending = state.auth.registration_pending;

    let mut draft = state.auth.registration.clone();
    let mut submit = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            forms::render_form_heading(ui, "Inscription", &theme);

            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 260.0).max(0.0) / 2.0);
                ui.selectable_value(&mut draft.user_type, UserType::Client, "Je suis client");
                ui.selectable_value(&mut draft.user_type, UserType::Transporter, "Je suis transporteur");
            });
            ui.add_space(12.0);

            forms::render_text_input(ui, "Prénom *", &mut draft.first_name, "Jean", false);
            forms::render_text_input(ui, "Nom *", &mut draft.last_name, "Dupont", false);
            forms::render_text_input(ui, "Email *", &mut draft.email, "votre@email.com", false);
            forms::render_text_input(ui, "Téléphone *", &mut draft.phone, "+33123456789", false);
            forms::render_text_input(
                ui,
                "Mot de passe *",
                &mut draft.password,
                "6 caractères minimum",
                !draft.show_password,
            );
            ui.checkbox(&mut draft.show_password, "Afficher le mot de passe");
            ui.add_space(8.0);

            match draft.user_type {
                UserType::Transporter => {
                    forms::render_text_input(ui, "Numéro de licence *", &mut draft.license_number, "LIC-...", false);
                    forms::render_text_input(
                        ui,
                        "Expiration de la licence *",
                        &mut draft.license_expiry,
                        "AAAA-MM-JJ",
                        false,
                    );
                    forms::render_text_input(
                        ui,
                        "Numéro d'assurance *",
                        &mut draft.insurance_number,
                        "ASS-...",
                        false,
                    );
                }
                UserType::Client | UserType::Admin => {
                    forms::render_text_input(ui, "Adresse *", &mut draft.address, "1 rue de la Paix, Paris", false);
                }
            }

            ui.add_space(8.0);
            ui.checkbox(&mut draft.accept_terms, "J'accepte les conditions d'utilisation");
            ui.add_space(12.0);

            if let Some(error) = &state.auth.registration_error {
                forms::render_error(ui, error, &theme);
            }

            let label = if pending { "Inscription..." } else { "Créer mon compte" };
            submit = forms::render_button(ui, label, &theme, true, !pending).clicked();

            ui.add_space(12.0);
            if ui.link("Déjà inscrit ? Se connecter").clicked() {
                app.navigate(Route::Login);
            }
            forms::render_hint(ui, "* champs obligatoires", &theme);
            ui.add_space(20.0);
        });
    });

    if draft != state.auth.registration {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.auth.registration = draft;
        }
    }
    if submit && !pending {
        app.submit_registration();
    }
}
