//! # Freight Desk - Library Root
//!
//! Native desktop client for the TransportEasy freight marketplace: shippers
//! post shipment requests, transporters bid on them with offers, and an admin
//! console summarises the platform. This library crate contains every module
//! used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              freight-desk (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  Tokio          - Async runtime for network tasks      │
//! │  Reqwest        - HTTP client                          │
//! │  tracing        - Structured file logging              │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (Bearer token)
//!          ▼
//! ┌─────────────────────────┐
//! │  Marketplace REST API   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, routes, per-page state, events, handlers, tasks
//! - **config**: Start-up configuration from the environment
//! - **core**: `AppError` and the `ApiService` data-source trait
//! - **debug**: Logging initialization
//! - **forms**: Form drafts and their validation
//! - **services**: HTTP gateway, in-memory mock backend, session store
//! - **ui**: Theme, widgets and one screen per route
//! - **utils**: The global Tokio runtime
//!
//! ## Data Flow
//!
//! ```text
//! click ─▶ App action ─▶ handler (validate, set pending) ─▶ tokio task
//!                                                              │
//!   screen ◀── AppState ◀── event handler ◀── TaggedEvent ◀────┘
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod forms;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::DeskConfig;
pub use core::{ApiService, AppError, Result};
