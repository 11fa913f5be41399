//! # Form State Controllers
//!
//! Mutable drafts behind each form. They hold raw text as typed and validate
//! before anything is sent; failures are [`AppError::Validation`](crate::core::AppError)
//! shown inline by the screens.
//!
//! - [`shipment`]: "new request" draft, dimension and numeric field parsing
//! - [`registration`]: signup draft with first-failure validation
//! - [`profile`]: profile editing, phone reformatting
//! - [`login`]: credentials

pub mod login;
pub mod profile;
pub mod registration;
pub mod shipment;

pub use login::LoginForm;
pub use profile::ProfileForm;
pub use registration::RegistrationDraft;
pub use shipment::{ShipmentDraft, Urgency};
