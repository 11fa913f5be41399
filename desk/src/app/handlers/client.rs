//! # Client Dashboard Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::TaggedEvent;
use crate::app::handlers::navigation;
use crate::app::state::{AppState, ClientTab};
use crate::app::tasks;

/// Fetch what the active tab shows.
pub(crate) fn load_active_tab(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let tab = state.read().client.tab;
    match tab {
        ClientTab::Requests => tasks::shipments::fetch_client_requests(state, event_tx),
        ClientTab::Profile => tasks::profile::fetch_profile(state, event_tx),
        ClientTab::NewRequest => {}
    }
}

/// Internal handler function - use [`crate::app::App::select_client_tab`] instead.
pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>, tab: ClientTab) {
    {
        let mut state = state.write();
        if state.client.tab == tab {
            return;
        }
        state.client.tab = tab;
    }
    load_active_tab(state, event_tx);
}

/// Validate the draft and post it.
///
/// Internal handler function - use [`crate::app::App::submit_shipment_request`] instead.
pub(crate) fn handle_create_request_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    if !state.read().is_authenticated() {
        navigation::redirect_to_login(state);
        return;
    }

    let payload = {
        let mut state = state.write();
        if state.client.submitting {
            return;
        }
        match state.client.draft.to_payload() {
            Ok(payload) => {
                state.client.form_error = None;
                payload
            }
            Err(e) => {
                tracing::debug!(error = %e, "Shipment request rejected locally");
                state.client.form_error = Some(e.to_string());
                return;
            }
        }
    };

    tasks::shipments::create_shipment_request(state, event_tx, payload);
}
