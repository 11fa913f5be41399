//! # Transporter Dashboard Handlers
//!
//! Tab changes, the city filter and the offer dialog.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::TaggedEvent;
use crate::app::handlers::navigation;
use crate::app::offer_dialog::OfferDialog;
use crate::app::state::{AppState, TransporterTab};
use crate::app::tasks;

pub(crate) fn load_active_tab(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let tab = state.read().transporter.tab;
    match tab {
        TransporterTab::Available => tasks::shipments::fetch_available_shipments(state, event_tx),
        TransporterTab::MyOffers => tasks::offers::fetch_offers(state, event_tx),
        TransporterTab::Profile => tasks::profile::fetch_profile(state, event_tx),
        TransporterTab::Active => {}
    }
}

/// Internal handler function - use [`crate::app::App::select_transporter_tab`] instead.
pub(crate) fn handle_tab_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<TaggedEvent>,
    tab: TransporterTab,
) {
    {
        let mut state = state.write();
        if state.transporter.tab == tab {
            return;
        }
        state.transporter.tab = tab;
    }
    load_active_tab(state, event_tx);
}

/// Re-run the available search with the current city filter.
///
/// Internal handler function - use [`crate::app::App::apply_city_filter`] instead.
pub(crate) fn handle_city_filter_apply(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    tasks::shipments::fetch_available_shipments(state, event_tx);
}

/// Internal handler function - use [`crate::app::App::open_offer_dialog`] instead.
pub(crate) fn handle_offer_open(state: Arc<RwLock<AppState>>, request_id: i64) {
    let mut state = state.write();
    if state.transporter.offer_dialog.is_submitting() {
        return;
    }
    state.transporter.offer_dialog = OfferDialog::open(request_id);
}

/// Internal handler function - use [`crate::app::App::cancel_offer_dialog`] instead.
pub(crate) fn handle_offer_cancel(state: Arc<RwLock<AppState>>) {
    state.write().transporter.offer_dialog.cancel();
}

/// Internal handler function - use [`crate::app::App::submit_offer`] instead.
pub(crate) fn handle_offer_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    if !state.read().is_authenticated() {
        navigation::redirect_to_login(state);
        return;
    }

    let payload = {
        let mut state = state.write();
        match state.transporter.offer_dialog.begin_submit() {
            Some(payload) => payload,
            None => return,
        }
    };

    tasks::offers::submit_offer(state, event_tx, payload);
}
