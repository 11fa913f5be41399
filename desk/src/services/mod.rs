//! # Services Module
//!
//! Data sources and persistence behind the [`ApiService`](crate::core::ApiService) seam.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - HTTP gateway to the marketplace REST API
//! ├── mock.rs     - In-memory backend (demo mode and flow tests)
//! └── session.rs  - Session store over a persisted key/value store
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Freight desk                        │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  ApiClient       │  or   │  MockBackend     │        │
//! │  │  (api/)          │       │  (mock.rs)       │        │
//! │  └────────┬─────────┘       └──────────────────┘        │
//! │           │                                             │
//! │  ┌────────┴─────────┐                                   │
//! │  │  SessionStore    │ token attached to every call      │
//! │  └──────────────────┘                                   │
//! └───────────┼─────────────────────────────────────────────┘
//!             │ HTTP/JSON (Bearer)
//!             ▼
//!      Marketplace API
//! ```

pub mod api;
pub mod mock;
pub mod session;
