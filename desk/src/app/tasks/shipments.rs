//! # Shipment Request Tasks
//!
//! Client request list and creation; available requests for transporters.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::CreateShipmentRequest;
use tracing::{info, warn};

use super::{spawn_traced, TaskContext};
use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::state::AppState;

/// Fetch the client's own requests.
pub(crate) fn fetch_client_requests(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    state.write().client.loading = true;

    spawn_traced("fetch_client_requests", ctx.mount_id, async move {
        let result = ctx.api.list_shipment_requests(&ctx.token).await;
        match &result {
            Ok(requests) => info!(count = requests.len(), "Client requests loaded"),
            Err(e) => warn!(error = %e, "Client requests fetch failed"),
        }
        ctx.send(AppEvent::ClientRequestsLoaded(result)).await;
    });
}

/// Create a request, then refetch the list.
///
/// The creation result is delivered first so the UI switches tab and resets
/// the draft before the refreshed list arrives.
pub(crate) fn create_shipment_request(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<TaggedEvent>,
    payload: CreateShipmentRequest,
) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    state.write().client.submitting = true;

    spawn_traced("create_shipment_request", ctx.mount_id, async move {
        let created = ctx.api.create_shipment_request(&ctx.token, payload).await;
        let succeeded = created.is_ok();
        match &created {
            Ok(request) => info!(request_id = request.id, "Shipment request created"),
            Err(e) => warn!(error = %e, "Shipment request creation failed"),
        }
        ctx.send(AppEvent::ShipmentRequestCreated(created)).await;
        if !succeeded {
            return;
        }

        let refreshed = ctx.api.list_shipment_requests(&ctx.token).await;
        if let Err(e) = &refreshed {
            warn!(error = %e, "Refetch after creation failed");
        }
        ctx.send(AppEvent::ClientRequestsLoaded(refreshed)).await;
    });
}

/// Fetch open requests, filtered server side by `city` when non-empty.
pub(crate) fn fetch_available_shipments(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    let city = {
        let mut state = state.write();
        state.transporter.available_loading = true;
        city_filter(&state)
    };

    spawn_traced("fetch_available_shipments", ctx.mount_id, async move {
        let result = ctx.api.list_available_shipments(&ctx.token, city.clone()).await;
        match &result {
            Ok(requests) => info!(count = requests.len(), city = ?city, "Available shipments loaded"),
            Err(e) => warn!(error = %e, city = ?city, "Available shipments fetch failed"),
        }
        ctx.send(AppEvent::AvailableShipmentsLoaded(result)).await;
    });
}

/// Current city filter, `None` when blank.
pub(crate) fn city_filter(state: &AppState) -> Option<String> {
    let city = state.transporter.city_filter.trim();
    (!city.is_empty()).then(|| city.to_string())
}
