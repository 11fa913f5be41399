//! # Navigation Handlers
//!
//! Route changes, the session gate, logout and forced session termination.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::TaggedEvent;
use crate::app::handlers::{client, transporter};
use crate::app::state::{AppState, NoticeLevel, Route};

pub const LOGIN_REQUIRED: &str = "Veuillez vous connecter";
pub const SESSION_EXPIRED: &str = "Session expirée. Veuillez vous reconnecter.";
pub const LOGOUT_SUCCESS: &str = "Déconnexion réussie";

/// Switch route with the session gate, then run the page's mount work.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<TaggedEvent>,
    route: Route,
) {
    let target = {
        let mut state = state.write();
        let target = if route.requires_session() && !state.is_authenticated() {
            tracing::info!(route = %route.path(), "Access denied without session, redirecting to login");
            state.notify(NoticeLevel::Error, LOGIN_REQUIRED);
            Route::Login
        } else {
            route
        };
        mount(&mut state, target);
        target
    };

    match target {
        Route::ClientDashboard => client::load_active_tab(state, event_tx),
        Route::TransporterDashboard => transporter::load_active_tab(state, event_tx),
        _ => {}
    }
}

/// Send the user to the login route without touching the session.
///
/// Used when an action needs a token and none is stored.
pub(crate) fn redirect_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    tracing::warn!(route = %state.route.path(), "No session for an authenticated action");
    state.notify(NoticeLevel::Error, LOGIN_REQUIRED);
    mount(&mut state, Route::Login);
}

/// Clear the session after an authorization failure and return to login.
pub(crate) fn end_session(state: Arc<RwLock<AppState>>, message: &str) {
    let mut state = state.write();
    if let Err(e) = state.session.clear() {
        tracing::error!(error = %e, "Failed to clear session after authorization failure");
    }
    state.notify(NoticeLevel::Error, message);
    mount(&mut state, Route::Login);
}

/// Logout button.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    match state.session.clear() {
        Ok(()) => state.notify(NoticeLevel::Success, LOGOUT_SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "Failed to clear session on logout");
            state.notify(NoticeLevel::Error, e.to_string());
        }
    }
    mount(&mut state, Route::Login);
}

/// Make `route` current with fresh page state. Bumps the mount counter so
/// results of work started on the previous page are discarded.
fn mount(state: &mut AppState, route: Route) {
    let previous = state.route;
    state.route = route;
    state.mount_id += 1;
    state.auth = Default::default();
    state.reset_pages();

    if route == Route::AdminDashboard {
        state.admin.snapshot = crate::services::mock::demo_admin_snapshot();
    }
    if matches!(route, Route::ClientDashboard | Route::TransporterDashboard) {
        let email = state.session_email();
        state.profile.form = crate::forms::ProfileForm::with_email(&email);
    }

    tracing::info!(
        from = %previous.path(),
        to = %route.path(),
        mount_id = state.mount_id,
        "Route mounted"
    );
}
