//! # Event Handlers
//!
//! User action handlers organized by page.

pub mod auth;
pub mod client;
pub mod navigation;
pub mod profile;
pub mod transporter;
