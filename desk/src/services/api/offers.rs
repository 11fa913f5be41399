//! # Offer Endpoints

use shared::dto::{CreateOfferRequest, Offer};

use super::client::{self, ApiClient};
use crate::core::Result;

/// List the signed-in transporter's offers.
#[tracing::instrument(skip(client, token))]
pub async fn list_my_offers(client: &ApiClient, token: &str) -> Result<Vec<Offer>> {
    let (response, elapsed) = client::send(
        client.client.get(client.url("/shipments/offers")).bearer_auth(token),
        "list_my_offers",
    )
    .await?;

    client::decode(response, elapsed, "list_my_offers", "Erreur lors du chargement des offres.").await
}

/// Submit a price offer against a shipment request.
#[tracing::instrument(skip(client, token, payload), fields(shipment_request_id = payload.shipment_request_id, price_per_kg = payload.price_per_kg))]
pub async fn create_offer(client: &ApiClient, token: &str, payload: CreateOfferRequest) -> Result<Offer> {
    let (response, elapsed) = client::send(
        client
            .client
            .post(client.url("/shipments/offers"))
            .bearer_auth(token)
            .json(&payload),
        "create_offer",
    )
    .await?;

    client::decode(response, elapsed, "create_offer", "Erreur lors de la soumission de l'offre.").await
}
