//! # Marketplace API Client Module
//!
//! HTTP gateway to the marketplace REST API. No raw `reqwest` or JSON types
//! leave this module: every operation returns a typed DTO or an
//! [`AppError`](crate::core::AppError).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct, response decoding, error policy
//! ├── auth.rs       - Login and signup
//! ├── shipments.rs  - Shipment requests (client) and available shipments (transporter)
//! ├── offers.rs     - Transporter offers
//! └── profile.rs    - Profile fetch and partial update
//! ```

pub mod auth;
pub mod client;
pub mod offers;
pub mod profile;
pub mod shipments;

pub use client::ApiClient;
