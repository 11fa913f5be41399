//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the freight desk client and the
//! marketplace REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup and session user DTOs
//!   - **[`dto::shipment`]**: Shipment requests, locations and request status
//!   - **[`dto::offer`]**: Carrier offers and offer status
//!   - **[`dto::profile`]**: User profile and partial profile update
//!   - **[`dto::admin`]**: Back-office figures shown on the admin console
//! - **[`utils`]**: Display helpers shared by every screen
//!
//! ## Wire Format
//!
//! The marketplace API speaks **camelCase** JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Optional request fields are omitted when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Response fields the server may leave out carry `#[serde(default)]`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::offer::{Offer, OfferStatus};
//!
//! let offer = Offer {
//!     id: 1,
//!     shipment_request_id: 7,
//!     price_per_kg: 2.5,
//!     available_weight: 72.0,
//!     status: OfferStatus::Pending,
//!     departure_date: None,
//!     description: None,
//!     shipment_request: None,
//! };
//!
//! assert_eq!(offer.display_price(), "180.00€");
//! assert_eq!(offer.status.label(), "En attente");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
