//! # GUI Rendering
//!
//! Frame entry point: snapshot the state, apply the session gate, dispatch to
//! the screen of the current route.

pub mod debug_overlay;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Route};
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager, debug_visible: &mut bool) {
    for notice in app.take_notifications() {
        notifications.push(notice);
    }

    // Read state for rendering
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    if ctx.input(|i| i.key_pressed(egui::Key::D) && i.modifiers.ctrl) {
        *debug_visible = !*debug_visible;
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        // A session that disappeared (logout elsewhere, 401) sends gated routes to login
        if state.route.requires_session() && !state.is_authenticated() {
            app.navigate(state.route);
            return;
        }

        match state.route {
            Route::Home => screens::home::render(ui, &state, app),
            Route::Login => screens::login::render(ui, &state, app),
            Route::Register => screens::register::render(ui, &state, app),
            Route::ClientDashboard => screens::client_dashboard::render(ui, &state, app),
            Route::TransporterDashboard => screens::transporter_dashboard::render(ui, &state, app),
            Route::AdminDashboard => screens::admin_dashboard::render(ui, &state, app),
            Route::RequestDetail(id) => screens::request_detail::render(ui, &state, app, id),
        }
    });

    if *debug_visible {
        debug_overlay::render_debug_overlay(ctx, &state, app.event_rx.len());
    }

    notifications.show(ctx);
}
