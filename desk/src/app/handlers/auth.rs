//! # Authentication Handlers
//!
//! Handlers for login and signup.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::state::AppState;
use crate::app::tasks::send_tagged;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::submit_login`] instead.
pub(crate) fn handle_login_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let (api, mount_id, email, password) = {
        let mut state = state.write();
        if state.auth.login_pending {
            return;
        }
        let (email, password) = match state.auth.login.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                state.auth.login_error = Some(e.to_string());
                return;
            }
        };
        state.auth.login_error = None;
        state.auth.login_pending = true;
        (state.api.clone(), state.mount_id, email, password)
    };

    tokio::spawn(async move {
        tracing::info!(email = %email, "Logging in");
        let result = api.login(email, password).await;
        send_tagged(&event_tx, mount_id, AppEvent::LoginResult(result)).await;
    });
}

/// Handle signup button click
///
/// Internal handler function - use [`crate::app::App::submit_registration`] instead.
pub(crate) fn handle_register_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let (api, mount_id, request) = {
        let mut state = state.write();
        if state.auth.registration_pending {
            return;
        }
        let request = match state.auth.registration.to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Registration rejected locally");
                state.auth.registration_error = Some(e.to_string());
                return;
            }
        };
        state.auth.registration_error = None;
        state.auth.registration_pending = true;
        (state.api.clone(), state.mount_id, request)
    };

    tokio::spawn(async move {
        tracing::info!(user_type = %request.user_type(), "Submitting registration");
        let result = api.register(request).await;
        send_tagged(&event_tx, mount_id, AppEvent::SignupResult(result)).await;
    });
}
