//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The marketplace data-source trait (`ApiService`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use freight_desk::core::ApiService;
//! use freight_desk::services::{api::ApiClient, mock::MockBackend};
//!
//! // In production: the HTTP gateway
//! let live: Arc<dyn ApiService> = Arc::new(ApiClient::new("http://localhost:3001", None));
//!
//! // In tests and demo mode: the in-memory backend
//! let mock: Arc<dyn ApiService> = Arc::new(MockBackend::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
