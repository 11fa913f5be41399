//! In-window debug overlay (toggle with Ctrl+D)

use crate::app::AppState;

/// Render debug overlay as an egui window
pub fn render_debug_overlay(ctx: &egui::Context, state: &AppState, pending_events: usize) {
    egui::Window::new("Debug")
        .collapsible(true)
        .resizable(false)
        .default_pos([16.0, 480.0])
        .show(ctx, |ui| {
            ui.heading("Navigation");
            ui.label(format!("Route: {}", state.route.path()));
            ui.label(format!("Mount: {}", state.mount_id));
            ui.label(format!("Queued events: {pending_events}"));

            ui.separator();
            ui.heading("Session");
            match state.session.get() {
                Some(session) => {
                    ui.label(format!("User: {} ({})", session.user_id, session.email));
                    ui.label(format!(
                        "Type: {}",
                        session.user_type.map(|t| t.as_str()).unwrap_or("inconnu")
                    ));
                }
                None => {
                    ui.label("No session");
                }
            }

            ui.separator();
            ui.heading("Pending");
            ui.label(format!("login: {}", state.auth.login_pending));
            ui.label(format!("signup: {}", state.auth.registration_pending));
            ui.label(format!("client list: {}", state.client.loading));
            ui.label(format!("request submit: {}", state.client.submitting));
            ui.label(format!("available list: {}", state.transporter.available_loading));
            ui.label(format!("offer list: {}", state.transporter.offers_loading));
            ui.label(format!("offer: {:?}", state.transporter.offer_dialog.request_id()));
            ui.label(format!("profile: {}", state.profile.loading || state.profile.saving));
        });
}
