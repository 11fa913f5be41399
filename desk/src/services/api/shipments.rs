//! # Shipment Request Endpoints
//!
//! Client-side listing and creation, plus the transporter's view of open requests.

use shared::dto::{CreateShipmentRequest, ShipmentRequest};

use super::client::{self, ApiClient};
use crate::core::Result;

/// List the signed-in client's shipment requests.
#[tracing::instrument(skip(client, token))]
pub async fn list_shipment_requests(client: &ApiClient, token: &str) -> Result<Vec<ShipmentRequest>> {
    let (response, elapsed) = client::send(
        client.client.get(client.url("/shipment-requests")).bearer_auth(token),
        "list_shipment_requests",
    )
    .await?;

    client::decode(
        response,
        elapsed,
        "list_shipment_requests",
        "Erreur lors de la récupération des demandes",
    )
    .await
}

/// Create a shipment request.
#[tracing::instrument(skip(client, token, payload), fields(origin = %payload.origin_city, destination = %payload.destination_city))]
pub async fn create_shipment_request(
    client: &ApiClient,
    token: &str,
    payload: CreateShipmentRequest,
) -> Result<ShipmentRequest> {
    let (response, elapsed) = client::send(
        client
            .client
            .post(client.url("/shipment-requests"))
            .bearer_auth(token)
            .json(&payload),
        "create_shipment_request",
    )
    .await?;

    client::decode(
        response,
        elapsed,
        "create_shipment_request",
        "Erreur lors de la création de la demande",
    )
    .await
}

/// List requests open to transporters, optionally filtered by city on the server.
#[tracing::instrument(skip(client, token))]
pub async fn list_available_shipments(
    client: &ApiClient,
    token: &str,
    city: Option<String>,
) -> Result<Vec<ShipmentRequest>> {
    let mut request = client
        .client
        .get(client.url("/shipments/available"))
        .bearer_auth(token);
    if let Some(city) = city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        request = request.query(&[("city", city)]);
    }

    let (response, elapsed) = client::send(request, "list_available_shipments").await?;

    client::decode(
        response,
        elapsed,
        "list_available_shipments",
        "Erreur lors du chargement des demandes.",
    )
    .await
}
