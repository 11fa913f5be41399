//! # Client Dashboard
//!
//! Own requests, the new-request form and the profile tab.

use shared::dto::ShipmentRequest;
use shared::utils::{date_part, format_amount, format_volume, format_weight};

use crate::app::{App, AppState, ClientTab, Route};
use crate::forms::{ShipmentDraft, Urgency};
use crate::ui::screens::profile;
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, forms, header};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    header::render_dashboard_header(ui, "Espace client", &state.session_email(), app, &theme);

    if let Some(tab) = header::render_tabs(ui, ClientTab::all(), state.client.tab, ClientTab::title) {
        app.select_client_tab(tab);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| match state.client.tab {
        ClientTab::Requests => render_requests(ui, state, app, &theme),
        ClientTab::NewRequest => render_new_request(ui, state, app, &theme),
        ClientTab::Profile => profile::render(ui, state, app),
    });
}

fn render_requests(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Mes demandes d'expédition");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!state.client.loading, egui::Button::new("Actualiser")).clicked() {
                app.refresh_client_tab();
            }
        });
    });
    ui.add_space(8.0);

    if let Some(error) = &state.client.list_error {
        forms::render_error(ui, error, theme);
    }

    if state.client.loading {
        badges::render_loading(ui, "Chargement des demandes...", theme);
        return;
    }

    if state.client.requests.is_empty() {
        badges::render_empty_state(
            ui,
            "Aucune demande pour le moment",
            Some("Créez votre première demande depuis l'onglet « Nouvelle demande »."),
            theme,
        );
        return;
    }

    for request in &state.client.requests {
        render_request_card(ui, request, app, theme);
        ui.add_space(8.0);
    }
}

fn render_request_card(ui: &mut egui::Ui, request: &ShipmentRequest, app: &mut App, theme: &Theme) {
    badges::card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.strong(request.title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badges::render_status_badge(ui, request.status.label(), theme.request_status_color(&request.status));
            });
        });
        ui.label(request.route_label());

        ui.horizontal_wrapped(|ui| {
            if let Some(date) = &request.preferred_date {
                ui.colored_label(theme.dim, format!("Date souhaitée : {}", date_part(date)));
            }
            if let Some(max_price) = request.max_price {
                ui.colored_label(theme.dim, format!("Prix max : {}", format_amount(max_price)));
            }
            if let Some(weight) = request.weight {
                ui.colored_label(theme.dim, format_weight(weight));
            }
            if let Some(volume) = request.volume {
                ui.colored_label(theme.dim, format_volume(volume));
            }
        });

        ui.horizontal(|ui| {
            ui.colored_label(theme.info, format!("{} offre(s) reçue(s)", request.offer_count));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Détails").clicked() {
                    app.navigate(Route::RequestDetail(request.id));
                }
            });
        });
    });
}

fn render_new_request(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut draft = state.client.draft.clone();
    let submitting = state.client.submitting;
    let mut submit = false;

    ui.heading("Nouvelle demande d'expédition");
    ui.add_space(8.0);

    forms::render_text_input(ui, "Titre *", &mut draft.title, "Transport de meubles", false);
    forms::render_text_area(ui, "Description *", &mut draft.description, "Que faut-il transporter ?");
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        render_location(&mut columns[0], "Départ", LocationFields::origin(&mut draft));
        render_location(&mut columns[1], "Arrivée", LocationFields::destination(&mut draft));
    });
    ui.add_space(8.0);

    forms::render_text_input(ui, "Date souhaitée *", &mut draft.preferred_date, "AAAA-MM-JJ", false);
    ui.horizontal(|ui| {
        ui.label("Urgence");
        for urgency in Urgency::all() {
            ui.selectable_value(&mut draft.urgency, *urgency, urgency.label());
        }
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        forms::render_text_input(&mut columns[0], "Poids (kg)", &mut draft.weight, "500", false);
        forms::render_text_input(&mut columns[1], "Volume (m³)", &mut draft.volume, "3.5", false);
        forms::render_text_input(&mut columns[0], "Prix maximum (€)", &mut draft.max_price, "400", false);
        forms::render_text_input(
            &mut columns[1],
            "Dimensions (cm) *",
            &mut draft.dimensions,
            "longueur,largeur,hauteur",
            false,
        );
    });

    ui.horizontal(|ui| {
        ui.checkbox(&mut draft.fragile, "Fragile");
        ui.checkbox(&mut draft.refrigerated, "Réfrigéré");
    });
    ui.add_space(12.0);

    if let Some(error) = &state.client.form_error {
        forms::render_error(ui, error, theme);
    }

    ui.horizontal(|ui| {
        let label = if submitting { "Envoi..." } else { "Publier la demande" };
        submit = forms::render_button(ui, label, theme, true, !submitting).clicked();
        if forms::render_button(ui, "Réinitialiser", theme, false, !submitting).clicked() {
            draft.reset();
        }
    });
    forms::render_hint(ui, "* champs obligatoires", theme);

    if draft != state.client.draft {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.client.draft = draft;
        }
    }
    if submit {
        app.submit_shipment_request();
    }
}

/// Mutable view over one side (origin or destination) of the draft
struct LocationFields<'a> {
    address: &'a mut String,
    city: &'a mut String,
    zipcode: &'a mut String,
    country: &'a mut String,
    latitude: &'a mut String,
    longitude: &'a mut String,
}

impl<'a> LocationFields<'a> {
    fn origin(draft: &'a mut ShipmentDraft) -> Self {
        Self {
            address: &mut draft.origin_address,
            city: &mut draft.origin_city,
            zipcode: &mut draft.origin_zipcode,
            country: &mut draft.origin_country,
            latitude: &mut draft.origin_latitude,
            longitude: &mut draft.origin_longitude,
        }
    }

    fn destination(draft: &'a mut ShipmentDraft) -> Self {
        Self {
            address: &mut draft.destination_address,
            city: &mut draft.destination_city,
            zipcode: &mut draft.destination_zipcode,
            country: &mut draft.destination_country,
            latitude: &mut draft.destination_latitude,
            longitude: &mut draft.destination_longitude,
        }
    }
}

fn render_location(ui: &mut egui::Ui, title: &str, fields: LocationFields<'_>) {
    ui.strong(title);
    forms::render_text_input(ui, "Adresse *", fields.address, "12 rue de Rivoli", false);
    forms::render_text_input(ui, "Ville *", fields.city, "Paris", false);
    forms::render_text_input(ui, "Code postal *", fields.zipcode, "75001", false);
    forms::render_text_input(ui, "Pays *", fields.country, "France", false);
    forms::render_text_input(ui, "Latitude", fields.latitude, "48.8566", false);
    forms::render_text_input(ui, "Longitude", fields.longitude, "2.3522", false);
}
