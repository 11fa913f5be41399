//! # Transporter Dashboard
//!
//! Available requests with the city filter, own offers, active transports
//! and the profile tab. The offer dialog is rendered as a window on top.

use shared::dto::{Offer, ShipmentRequest};
use shared::utils::{date_part, format_amount, format_weight};

use crate::app::{App, AppState, TransporterTab};
use crate::ui::screens::profile;
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, forms, header};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    header::render_dashboard_header(ui, "Espace transporteur", &state.session_email(), app, &theme);

    if let Some(tab) = header::render_tabs(ui, TransporterTab::all(), state.transporter.tab, TransporterTab::title) {
        app.select_transporter_tab(tab);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| match state.transporter.tab {
        TransporterTab::Available => render_available(ui, state, app, &theme),
        TransporterTab::MyOffers => render_offers(ui, state, &theme),
        TransporterTab::Active => {
            badges::render_empty_state(ui, "Aucun transport en cours", None, &theme);
        }
        TransporterTab::Profile => profile::render(ui, state, app),
    });

    if state.transporter.offer_dialog.is_open() {
        render_offer_dialog(ui.ctx(), state, app, &theme);
    }
}

fn render_available(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let transporter = &state.transporter;
    let mut city = transporter.city_filter.clone();
    let mut search = false;

    ui.horizontal(|ui| {
        ui.label("Ville");
        let response = ui.add_sized([220.0, 26.0], egui::TextEdit::singleline(&mut city).hint_text("Paris, Lyon..."));
        search |= forms::submitted(ui, &response);
        search |= ui.add_enabled(!transporter.available_loading, egui::Button::new("Filtrer")).clicked();
    });
    ui.add_space(8.0);

    if city != transporter.city_filter {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.transporter.city_filter = city;
        }
    }
    if search {
        app.apply_city_filter();
    }

    if let Some(error) = &transporter.available_error {
        forms::render_error(ui, error, theme);
    }
    if transporter.available_loading {
        badges::render_loading(ui, "Recherche des demandes...", theme);
        return;
    }
    if transporter.available.is_empty() {
        badges::render_empty_state(ui, "Aucune demande disponible", Some("Essayez une autre ville."), theme);
        return;
    }

    for request in &transporter.available {
        render_available_card(ui, request, app, theme);
        ui.add_space(8.0);
    }
}

fn render_available_card(ui: &mut egui::Ui, request: &ShipmentRequest, app: &mut App, theme: &Theme) {
    badges::card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.strong(request.title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badges::render_status_badge(ui, request.status.label(), theme.request_status_color(&request.status));
            });
        });
        ui.label(request.route_label());

        ui.horizontal_wrapped(|ui| {
            ui.colored_label(theme.dim, format!("Client : {}", request.client_name()));
            if let Some(rating) = request.client_rating() {
                ui.colored_label(theme.warning, format!("★ {rating:.1}"));
            }
            if let Some(distance) = &request.distance {
                ui.colored_label(theme.dim, distance.as_str());
            }
            if let Some(date) = &request.preferred_date {
                ui.colored_label(theme.dim, date_part(date));
            }
            if let Some(weight) = request.weight {
                ui.colored_label(theme.dim, format_weight(weight));
            }
            if let Some(max_price) = request.max_price {
                ui.colored_label(theme.dim, format!("Budget : {}", format_amount(max_price)));
            }
        });

        ui.horizontal(|ui| {
            if request.fragile {
                badges::render_status_badge(ui, "Fragile", theme.warning);
            }
            if request.refrigerated {
                badges::render_status_badge(ui, "Réfrigéré", theme.info);
            }
            ui.colored_label(theme.info, format!("{} offre(s)", request.offer_count));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if forms::render_button(ui, "Faire une offre", theme, true, true).clicked() {
                    app.open_offer_dialog(request.id);
                }
            });
        });
    });
}

fn render_offers(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let transporter = &state.transporter;

    if let Some(error) = &transporter.offers_error {
        forms::render_error(ui, error, theme);
    }
    if transporter.offers_loading {
        badges::render_loading(ui, "Chargement des offres...", theme);
        return;
    }
    if transporter.offers.is_empty() {
        badges::render_empty_state(ui, "Vous n'avez encore fait aucune offre", None, theme);
        return;
    }

    for offer in &transporter.offers {
        render_offer_card(ui, offer, theme);
        ui.add_space(8.0);
    }
}

fn render_offer_card(ui: &mut egui::Ui, offer: &Offer, theme: &Theme) {
    badges::card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.strong(offer.request_title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badges::render_status_badge(ui, offer.status.label(), theme.offer_status_color(&offer.status));
            });
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(offer.display_price()).strong());
            ui.colored_label(theme.dim, format!("Client : {}", offer.client_name()));
            let departure = offer.departure_day();
            if !departure.is_empty() {
                ui.colored_label(theme.dim, format!("Départ : {departure}"));
            }
        });
    });
}

fn render_offer_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let dialog = &state.transporter.offer_dialog;
    let Some(request_id) = dialog.request_id() else {
        return;
    };

    let mut price = dialog.price().to_string();
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Faire une offre")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let title = state
                .transporter
                .available
                .iter()
                .find(|request| request.id == request_id)
                .map(|request| request.title().to_string())
                .unwrap_or_else(|| format!("Demande n°{request_id}"));
            ui.label(title);
            ui.add_space(8.0);

            let editable = !dialog.is_submitting();
            ui.add_enabled_ui(editable, |ui| {
                let response = forms::render_text_input(ui, "Prix par kg (€)", &mut price, "2.50", false);
                submit |= forms::submitted(ui, &response);
            });

            if let Some(error) = dialog.error() {
                ui.add_space(6.0);
                forms::render_error(ui, error, theme);
            }
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let label = if dialog.is_submitting() { "Envoi..." } else { "Envoyer l'offre" };
                submit |= forms::render_button(ui, label, theme, true, dialog.can_submit()).clicked();
                cancel = forms::render_button(ui, "Annuler", theme, false, editable).clicked();
            });
        });

    if price != dialog.price() {
        let mut current = app.state.write();
        if current.mount_id == state.mount_id {
            current.transporter.offer_dialog.set_price(&price);
        }
    }
    if cancel {
        app.cancel_offer_dialog();
    } else if submit {
        app.submit_offer();
    }
}

