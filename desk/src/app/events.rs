//! # Application Events
//!
//! Results of background tasks, sent to the UI thread. Every event travels in a
//! [`TaggedEvent`] carrying the mount counter captured when the work started.

use shared::dto::{LoginResponse, Offer, ShipmentRequest, SignupOutcome, UserProfile};

use crate::core::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, AppError>),
    /// Signup completed
    SignupResult(Result<SignupOutcome, AppError>),
    /// Delayed redirect after a `201` signup
    SignupRedirectDue,
    /// Client's own requests fetched
    ClientRequestsLoaded(Result<Vec<ShipmentRequest>, AppError>),
    /// New shipment request accepted by the server
    ShipmentRequestCreated(Result<ShipmentRequest, AppError>),
    /// Open requests fetched (transporter)
    AvailableShipmentsLoaded(Result<Vec<ShipmentRequest>, AppError>),
    /// Transporter's offers fetched
    OffersLoaded(Result<Vec<Offer>, AppError>),
    /// Offer posted; the refetches it triggers have already been delivered
    OfferSubmitted(Result<Offer, AppError>),
    /// Profile fetched
    ProfileLoaded(Result<UserProfile, AppError>),
    /// Profile update applied
    ProfileUpdated(Result<UserProfile, AppError>),
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::SignupResult(_) => "SignupResult",
            AppEvent::SignupRedirectDue => "SignupRedirectDue",
            AppEvent::ClientRequestsLoaded(_) => "ClientRequestsLoaded",
            AppEvent::ShipmentRequestCreated(_) => "ShipmentRequestCreated",
            AppEvent::AvailableShipmentsLoaded(_) => "AvailableShipmentsLoaded",
            AppEvent::OffersLoaded(_) => "OffersLoaded",
            AppEvent::OfferSubmitted(_) => "OfferSubmitted",
            AppEvent::ProfileLoaded(_) => "ProfileLoaded",
            AppEvent::ProfileUpdated(_) => "ProfileUpdated",
        }
    }
}

/// An event plus the mount counter of the page that dispatched the work
#[derive(Debug, Clone)]
pub struct TaggedEvent {
    pub mount_id: u64,
    pub event: AppEvent,
}

impl TaggedEvent {
    pub fn new(mount_id: u64, event: AppEvent) -> Self {
        Self { mount_id, event }
    }
}
