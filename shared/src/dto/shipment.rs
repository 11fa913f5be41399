//! Shipment request DTOs.

use serde::{Deserialize, Deserializer, Serialize};

/// Pickup or drop-off location of a shipment request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub zipcode: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub country: String,
    #[serde(default, alias = "lat", deserialize_with = "super::lenient_number", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lon", deserialize_with = "super::lenient_number", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Lifecycle status of a shipment request. Transitions happen server side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    #[default]
    Pending,
    Matched,
    Cancelled,
    /// Any status this client does not know about, kept verbatim
    Other(String),
}

impl RequestStatus {
    /// Display label shown on request cards.
    pub fn label(&self) -> &str {
        match self {
            RequestStatus::Pending => "En attente",
            RequestStatus::Matched => "Accepté",
            RequestStatus::Cancelled => "Annulé",
            RequestStatus::Other(raw) => raw,
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Matched => "MATCHED",
            RequestStatus::Cancelled => "CANCELLED",
            RequestStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => RequestStatus::Pending,
            "MATCHED" => RequestStatus::Matched,
            "CANCELLED" => RequestStatus::Cancelled,
            _ => RequestStatus::Other(value),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(value: RequestStatus) -> Self {
        value.as_wire().to_string()
    }
}

/// Public part of the shipper attached to requests seen by transporters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "super::lenient_number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl ClientSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// A shipper's transport job posting
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origin: Location,
    #[serde(default)]
    pub destination: Location,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_number")]
    pub volume: Option<f64>,
    #[serde(default)]
    pub dimensions: Vec<f64>,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default)]
    pub refrigerated: bool,
    #[serde(default, deserialize_with = "super::lenient_number")]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, alias = "offers", deserialize_with = "count_or_len")]
    pub offer_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientSummary>,
    #[serde(default, deserialize_with = "super::lenient_text", skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ShipmentRequest {
    /// Card title: the description, or a generic "Transport".
    pub fn title(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => "Transport",
        }
    }

    /// "Paris → Lyon"
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin.city, self.destination.city)
    }

    pub fn client_name(&self) -> String {
        self.client
            .as_ref()
            .map(ClientSummary::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Client inconnu".to_string())
    }

    /// Client rating out of 5, when the API sends one.
    pub fn client_rating(&self) -> Option<f64> {
        self.client.as_ref().and_then(|c| c.rating)
    }
}

/// The API reports offers either as a count or as the embedded offer list.
fn count_or_len<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(number)) => number.as_u64().unwrap_or(0) as u32,
        Some(serde_json::Value::Array(items)) => items.len() as u32,
        _ => 0,
    })
}

/// Flat creation payload sent by the "new request" form.
///
/// Absent numeric values are omitted so the server applies its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub origin_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_longitude: Option<f64>,
    pub origin_city: String,
    pub origin_zipcode: String,
    pub origin_country: String,
    pub destination_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_longitude: Option<f64>,
    pub destination_city: String,
    pub destination_zipcode: String,
    pub destination_country: String,
    pub preferred_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub dimensions: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fragile: bool,
    pub refrigerated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_status_labels() {
        assert_eq!(RequestStatus::from("PENDING".to_string()).label(), "En attente");
        assert_eq!(RequestStatus::from("MATCHED".to_string()).label(), "Accepté");
        assert_eq!(RequestStatus::from("CANCELLED".to_string()).label(), "Annulé");
        assert_eq!(RequestStatus::from("IN_TRANSIT".to_string()).label(), "IN_TRANSIT");
    }

    #[test]
    fn test_shipment_request_lenient_decoding() {
        let json = r#"{
            "id": 3,
            "description": null,
            "origin": {"city": "Paris", "lat": 48.85},
            "destination": {"city": "Lyon", "address": null},
            "preferredDate": "2024-03-01T00:00:00.000Z",
            "weight": "72.5",
            "maxPrice": 180,
            "status": "MATCHED",
            "offers": [{"id": 1}, {"id": 2}],
            "client": {"firstName": "Jean", "lastName": "Dupont", "rating": 4.5},
            "distance": 465
        }"#;
        let request: ShipmentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title(), "Transport");
        assert_eq!(request.route_label(), "Paris → Lyon");
        assert_eq!(request.origin.latitude, Some(48.85));
        assert_eq!(request.destination.address, "");
        assert_eq!(request.weight, Some(72.5));
        assert_eq!(request.max_price, Some(180.0));
        assert_eq!(request.status, RequestStatus::Matched);
        assert_eq!(request.offer_count, 2);
        assert_eq!(request.client_name(), "Jean Dupont");
        assert_eq!(request.client_rating(), Some(4.5));
        assert_eq!(request.distance.as_deref(), Some("465"));
    }

    #[test]
    fn test_create_payload_omits_absent_numbers() {
        let payload = CreateShipmentRequest {
            origin_city: "Paris".to_string(),
            dimensions: vec![120.0, 80.0, 100.0],
            weight: Some(50.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["originCity"], "Paris");
        assert_eq!(json["dimensions"], serde_json::json!([120.0, 80.0, 100.0]));
        assert_eq!(json["weight"], 50.0);
        assert!(json.get("volume").is_none());
        assert!(json.get("maxPrice").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["fragile"], false);
    }
}
