//! Transporter offer DTOs.

use serde::{Deserialize, Serialize};

use super::shipment::ClientSummary;

/// Status of a transporter's bid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OfferStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Other(String),
}

impl OfferStatus {
    /// Display label. Only pending and accepted offers are translated;
    /// every other status is shown as sent by the server.
    pub fn label(&self) -> &str {
        match self {
            OfferStatus::Pending => "En attente",
            OfferStatus::Accepted => "Accepté",
            OfferStatus::Rejected => "REJECTED",
            OfferStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for OfferStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => OfferStatus::Pending,
            "ACCEPTED" => OfferStatus::Accepted,
            "REJECTED" => OfferStatus::Rejected,
            _ => OfferStatus::Other(value),
        }
    }
}

impl From<OfferStatus> for String {
    fn from(value: OfferStatus) -> Self {
        match value {
            OfferStatus::Pending => "PENDING".to_string(),
            OfferStatus::Accepted => "ACCEPTED".to_string(),
            OfferStatus::Rejected => "REJECTED".to_string(),
            OfferStatus::Other(raw) => raw,
        }
    }
}

/// Request context embedded in an offer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequestSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<ClientSummary>,
}

/// A transporter's priced bid against a shipment request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    #[serde(default)]
    pub shipment_request_id: i64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub price_per_kg: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub available_weight: f64,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_request: Option<OfferRequestSummary>,
}

impl Offer {
    /// Total price, `pricePerKg * availableWeight` with two decimals.
    pub fn display_price(&self) -> String {
        crate::utils::format_price(self.price_per_kg * self.available_weight)
    }

    /// Title of the request this offer targets.
    pub fn request_title(&self) -> &str {
        let from_request = self
            .shipment_request
            .as_ref()
            .and_then(|request| request.description.as_deref());
        match from_request.or(self.description.as_deref()) {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Transport",
        }
    }

    pub fn client_name(&self) -> String {
        self.shipment_request
            .as_ref()
            .and_then(|request| request.client.as_ref())
            .map(ClientSummary::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Client inconnu".to_string())
    }

    /// Departure day as `YYYY-MM-DD`, empty when unknown.
    pub fn departure_day(&self) -> String {
        self.departure_date
            .as_deref()
            .map(crate::utils::date_part)
            .unwrap_or_default()
    }
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(super::lenient_number(deserializer)?.unwrap_or(0.0))
}

/// Creation payload for `POST /shipments/offers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub shipment_request_id: i64,
    pub price_per_kg: f64,
    pub description: String,
}

impl CreateOfferRequest {
    pub const DEFAULT_DESCRIPTION: &'static str = "Offre pour transport";

    pub fn new(shipment_request_id: i64, price_per_kg: f64) -> Self {
        Self {
            shipment_request_id,
            price_per_kg,
            description: Self::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(price_per_kg: f64, available_weight: f64) -> Offer {
        Offer {
            id: 1,
            shipment_request_id: 7,
            price_per_kg,
            available_weight,
            ..Default::default()
        }
    }

    #[test]
    fn test_display_price_multiplies_and_rounds() {
        assert_eq!(offer(2.5, 72.0).display_price(), "180.00€");
        assert_eq!(offer(1.333, 3.0).display_price(), "4.00€");
        assert_eq!(offer(0.0, 10.0).display_price(), "0.00€");
    }

    #[test]
    fn test_offer_status_labels() {
        assert_eq!(OfferStatus::from("PENDING".to_string()).label(), "En attente");
        assert_eq!(OfferStatus::from("ACCEPTED".to_string()).label(), "Accepté");
        assert_eq!(OfferStatus::from("REJECTED".to_string()).label(), "REJECTED");
        assert_eq!(OfferStatus::from("EXPIRED".to_string()).label(), "EXPIRED");
    }

    #[test]
    fn test_offer_decoding_with_embedded_request() {
        let json = r#"{
            "id": 9,
            "shipmentRequestId": 3,
            "pricePerKg": "2.5",
            "availableWeight": 72,
            "status": "ACCEPTED",
            "departureDate": "2024-01-15T10:00:00.000Z",
            "shipmentRequest": {
                "description": "Transport de meubles",
                "client": {"firstName": "Jean", "lastName": "Dupont"}
            }
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();

        assert_eq!(offer.display_price(), "180.00€");
        assert_eq!(offer.status.label(), "Accepté");
        assert_eq!(offer.request_title(), "Transport de meubles");
        assert_eq!(offer.client_name(), "Jean Dupont");
        assert_eq!(offer.departure_day(), "2024-01-15");
    }

    #[test]
    fn test_offer_fallbacks() {
        let bare = offer(1.0, 1.0);
        assert_eq!(bare.request_title(), "Transport");
        assert_eq!(bare.client_name(), "Client inconnu");
        assert_eq!(bare.departure_day(), "");
    }

    #[test]
    fn test_create_offer_wire_shape() {
        let json = serde_json::to_value(CreateOfferRequest::new(3, 2.5)).unwrap();
        assert_eq!(json["shipmentRequestId"], 3);
        assert_eq!(json["pricePerKg"], 2.5);
        assert_eq!(json["description"], "Offre pour transport");
    }
}
