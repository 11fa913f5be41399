//! # Profile Handlers
//!
//! Profile tab of the client and transporter dashboards.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::TaggedEvent;
use crate::app::handlers::navigation;
use crate::app::state::AppState;
use crate::app::tasks;

/// Internal handler function - use [`crate::app::App::change_profile_phone`] instead.
pub(crate) fn handle_phone_change(state: Arc<RwLock<AppState>>, raw: &str) {
    state.write().profile.form.on_phone_change(raw);
}

/// Internal handler function - use [`crate::app::App::submit_profile`] instead.
pub(crate) fn handle_profile_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    if !state.read().is_authenticated() {
        navigation::redirect_to_login(state);
        return;
    }

    let update = {
        let mut state = state.write();
        if state.profile.saving {
            return;
        }
        match state.profile.form.to_update() {
            Ok(update) => {
                state.profile.error = None;
                update
            }
            Err(e) => {
                state.profile.error = Some(e.to_string());
                return;
            }
        }
    };

    tasks::profile::update_profile(state, event_tx, update);
}
