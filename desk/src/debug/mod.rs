//! # Logging Infrastructure
//!
//! File-based structured logging for the freight desk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! let config = freight_desk::debug::init_logger();
//!
//! tracing::info!(route = "/login", "Route mounted");
//! # let _ = config;
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `freight_desk=debug,info`)
//! - `FREIGHT_DESK_LOG_DIR`: Log directory (default: `logs`)
//! - `FREIGHT_DESK_LOG_FORMAT`: `text` (default) or `json`
//! - `FREIGHT_DESK_DEBUG_UI`: Show the in-window debug overlay (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::{DebugConfig, LogFormat};
pub use logger::init as init_logger;
