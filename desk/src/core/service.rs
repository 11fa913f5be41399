//! # Service Traits
//!
//! The data-source seam of the desk. Every dashboard talks to the marketplace
//! through [`ApiService`]; the live HTTP client and the in-memory mock backend
//! both implement it, so screens and flows never know which one they run on.

use async_trait::async_trait;
use shared::dto::{
    CreateOfferRequest, CreateShipmentRequest, LoginResponse, Offer, ProfileUpdate,
    ShipmentRequest, SignupOutcome, SignupRequest, UserProfile,
};

use super::error::Result;

/// Trait for marketplace API operations
///
/// Authenticated operations take the bearer token explicitly; the session
/// store owns it and callers must never issue them without one.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /auth/login`. Any rejection is an [`AppError::Auth`](super::AppError::Auth).
    async fn login(&self, email: String, password: String) -> Result<LoginResponse>;

    /// `POST /auth/signup`
    async fn register(&self, request: SignupRequest) -> Result<SignupOutcome>;

    /// `GET /shipment-requests`: the client's own requests
    async fn list_shipment_requests(&self, token: &str) -> Result<Vec<ShipmentRequest>>;

    /// `POST /shipment-requests`
    async fn create_shipment_request(
        &self,
        token: &str,
        payload: CreateShipmentRequest,
    ) -> Result<ShipmentRequest>;

    /// `GET /shipments/available[?city=]`: open requests for transporters
    async fn list_available_shipments(
        &self,
        token: &str,
        city: Option<String>,
    ) -> Result<Vec<ShipmentRequest>>;

    /// `GET /shipments/offers`: the transporter's own offers
    async fn list_my_offers(&self, token: &str) -> Result<Vec<Offer>>;

    /// `POST /shipments/offers`
    async fn create_offer(&self, token: &str, payload: CreateOfferRequest) -> Result<Offer>;

    /// `GET /auth/profile`
    async fn get_profile(&self, token: &str) -> Result<UserProfile>;

    /// `PATCH /auth/profile`
    async fn update_profile(&self, token: &str, update: ProfileUpdate) -> Result<UserProfile>;
}
