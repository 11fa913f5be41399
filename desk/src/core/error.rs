//! # Common Error Types
//!
//! Consolidated error handling for the freight desk.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure the client can surface to the user.
//!
//! ## Error Categories
//!
//! Errors are categorized by how they are surfaced, not by where they occur:
//!
//! - **Validation**: detected locally, blocks submission, shown inline next to the form
//! - **Auth**: `401` from the API, clears the session and returns to the login route
//! - **Api**: any other non-2xx response, shown as a notification, state unchanged
//! - **Network**: the request never produced a response (DNS, refused, timeout, bad body)
//! - **Storage**: the persisted session file could not be read or written
//! - **Config**: invalid start-up configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use freight_desk::core::error::AppError;
//!
//! fn parse_price(input: &str) -> Result<f64, AppError> {
//!     input
//!         .trim()
//!         .parse::<f64>()
//!         .map_err(|_| AppError::Validation("Prix invalide".to_string()))
//! }
//!
//! assert!(parse_price("2.5").is_ok());
//! assert!(parse_price("abc").unwrap_err().is_validation());
//! ```

use thiserror::Error;

/// Application-wide error type covering every error the desk reports.
///
/// `AppError` is `Clone` so it can travel inside [`crate::app::AppEvent`]
/// from background tasks to the UI thread.
///
/// # Example
///
/// ```rust
/// use freight_desk::core::error::AppError;
///
/// let auth = AppError::Auth("Unauthorized".to_string());
/// let api = AppError::Api { status: 500, message: "HTTP 500: Internal Server Error".to_string() };
///
/// assert!(auth.is_auth());
/// assert_eq!(api.to_string(), "HTTP 500: Internal Server Error");
/// assert_eq!(api.status(), Some(500));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Locally detected invalid input.
    ///
    /// The message is user facing and shown inline; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The API rejected the credentials (HTTP 401, or a failed login).
    ///
    /// Callers must clear the session and navigate to the login route.
    #[error("{0}")]
    Auth(String),

    /// Any other non-2xx response.
    ///
    /// `message` is the server-provided `message` when the body was JSON,
    /// otherwise `"HTTP <status>: <reason>"`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport failure: no usable response was received.
    #[error("Erreur réseau: {0}")]
    Network(String),

    /// Session persistence failure.
    #[error("Erreur de stockage: {0}")]
    Storage(String),

    /// Invalid configuration detected at start-up.
    #[error("Configuration invalide: {0}")]
    Config(String),
}

impl AppError {
    /// True for authorization failures, which end the session.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// HTTP status carried by the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Auth(_) => Some(401),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use freight_desk::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("ok".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
