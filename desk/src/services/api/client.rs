//! # API Client
//!
//! Main HTTP client for the marketplace API, plus the response handling shared
//! by every endpoint module.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::dto::{
    CreateOfferRequest, CreateShipmentRequest, ErrorResponse, LoginResponse, Offer, ProfileUpdate,
    ShipmentRequest, SignupOutcome, SignupRequest, UserProfile,
};

use crate::config::DeskConfig;
use crate::core::service::ApiService;
use crate::core::{AppError, Result};

/// HTTP client for the marketplace REST API.
///
/// Holds a pooled `reqwest::Client`; cloning the `Arc` around it is how
/// background tasks share it.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// With `timeout: None` requests are awaited until the transport resolves.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "HTTP client builder failed, using defaults");
            Client::new()
        });

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Send a request, turning transport failures into [`AppError::Network`].
pub(crate) async fn send(request: RequestBuilder, operation: &'static str) -> Result<(Response, Duration)> {
    let start = Instant::now();
    let response = request.send().await.map_err(|e| {
        tracing::error!(operation, error = %e, "Network error");
        AppError::Network(e.to_string())
    })?;
    Ok((response, start.elapsed()))
}

/// Decode a 2xx body as `T`, or convert the failure with [`error_from_response`].
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    elapsed: Duration,
    operation: &'static str,
    fallback: &str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(response, elapsed, operation, fallback).await);
    }

    let body = response.json::<T>().await.map_err(|e| {
        tracing::error!(operation, status = status.as_u16(), error = %e, "Response parse error");
        AppError::Api {
            status: status.as_u16(),
            message: format!("Réponse invalide du serveur: {}", e),
        }
    })?;

    tracing::info!(operation, status = status.as_u16(), duration_ms = elapsed.as_millis() as u64, "Request succeeded");
    Ok(body)
}

/// Convert a non-2xx response into an [`AppError`].
///
/// - `401` becomes [`AppError::Auth`]
/// - a JSON body with `message` surfaces that message
/// - a JSON body without one surfaces `fallback`
/// - anything else surfaces `"HTTP <status>: <reason>"`
pub(crate) async fn error_from_response(
    response: Response,
    elapsed: Duration,
    operation: &'static str,
    fallback: &str,
) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body, fallback);

    tracing::warn!(
        operation,
        status = status.as_u16(),
        error = %message,
        duration_ms = elapsed.as_millis() as u64,
        "Request failed"
    );

    if status == StatusCode::UNAUTHORIZED {
        AppError::Auth(message)
    } else {
        AppError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

pub(crate) fn error_message(status: StatusCode, body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error.message_text().unwrap_or_else(|| fallback.to_string()),
        Err(_) => format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse> {
        super::auth::login(self, email, password).await
    }

    async fn register(&self, request: SignupRequest) -> Result<SignupOutcome> {
        super::auth::register(self, request).await
    }

    async fn list_shipment_requests(&self, token: &str) -> Result<Vec<ShipmentRequest>> {
        super::shipments::list_shipment_requests(self, token).await
    }

    async fn create_shipment_request(
        &self,
        token: &str,
        payload: CreateShipmentRequest,
    ) -> Result<ShipmentRequest> {
        super::shipments::create_shipment_request(self, token, payload).await
    }

    async fn list_available_shipments(
        &self,
        token: &str,
        city: Option<String>,
    ) -> Result<Vec<ShipmentRequest>> {
        super::shipments::list_available_shipments(self, token, city).await
    }

    async fn list_my_offers(&self, token: &str) -> Result<Vec<Offer>> {
        super::offers::list_my_offers(self, token).await
    }

    async fn create_offer(&self, token: &str, payload: CreateOfferRequest) -> Result<Offer> {
        super::offers::create_offer(self, token, payload).await
    }

    async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        super::profile::get_profile(self, token).await
    }

    async fn update_profile(&self, token: &str, update: ProfileUpdate) -> Result<UserProfile> {
        super::profile::update_profile(self, token, update).await
    }
}
