//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the marketplace API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, signup (client / transporter) and session user DTOs
//! - [`shipment`] - Shipment requests and their creation payload
//! - [`offer`] - Transporter offers and their creation payload
//! - [`profile`] - User profile and partial update payload
//! - [`admin`] - Back-office snapshot rendered by the admin console
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "jean@example.com",
//!   "password": "secret123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": 12, "email": "jean@example.com", "type": "client", "status": "ACTIVE" }
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! Content-Type: application/json
//!
//! { "message": "Unauthorized", "statusCode": 401 }
//! ```

pub mod admin;
pub mod auth;
pub mod offer;
pub mod profile;
pub mod shipment;

pub use admin::*;
pub use auth::*;
pub use offer::*;
pub use profile::*;
pub use shipment::*;

use serde::{Deserialize, Deserializer};

/// Accepts an identifier sent either as a JSON string or as a JSON number.
///
/// The API returns numeric ids, but the session store keeps them as strings.
pub(crate) fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Accepts a JSON number or a numeric string; `null`, empty or unparsable
/// strings become `None`.
///
/// Decimal columns are frequently serialized as strings by the API.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accepts a JSON string or number and keeps its textual form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// Maps a missing or `null` string field to an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
