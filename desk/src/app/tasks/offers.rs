//! # Offer Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::CreateOfferRequest;
use tracing::{info, warn};

use super::shipments::city_filter;
use super::{spawn_traced, TaskContext};
use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::state::AppState;

/// Fetch the transporter's offers.
pub(crate) fn fetch_offers(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    state.write().transporter.offers_loading = true;

    spawn_traced("fetch_offers", ctx.mount_id, async move {
        let result = ctx.api.list_my_offers(&ctx.token).await;
        match &result {
            Ok(offers) => info!(count = offers.len(), "Offers loaded"),
            Err(e) => warn!(error = %e, "Offers fetch failed"),
        }
        ctx.send(AppEvent::OffersLoaded(result)).await;
    });
}

/// Post an offer, then refetch available requests (same city filter) and offers.
///
/// Both refreshed lists are delivered before [`AppEvent::OfferSubmitted`], so
/// the dialog closes on up-to-date counts. An authorization failure stops the
/// sequence.
pub(crate) fn submit_offer(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<TaggedEvent>,
    payload: CreateOfferRequest,
) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    let city = city_filter(&state.read());

    spawn_traced("submit_offer", ctx.mount_id, async move {
        info!(
            shipment_request_id = payload.shipment_request_id,
            price_per_kg = payload.price_per_kg,
            "Submitting offer"
        );
        let offer = match ctx.api.create_offer(&ctx.token, payload).await {
            Ok(offer) => offer,
            Err(e) => {
                warn!(error = %e, "Offer submission failed");
                ctx.send(AppEvent::OfferSubmitted(Err(e))).await;
                return;
            }
        };

        let available = ctx.api.list_available_shipments(&ctx.token, city).await;
        let stop = matches!(&available, Err(e) if e.is_auth());
        ctx.send(AppEvent::AvailableShipmentsLoaded(available)).await;
        if stop {
            return;
        }

        let offers = ctx.api.list_my_offers(&ctx.token).await;
        let stop = matches!(&offers, Err(e) if e.is_auth());
        ctx.send(AppEvent::OffersLoaded(offers)).await;
        if stop {
            return;
        }

        info!(offer_id = offer.id, "Offer submitted and lists refreshed");
        ctx.send(AppEvent::OfferSubmitted(Ok(offer))).await;
    });
}
