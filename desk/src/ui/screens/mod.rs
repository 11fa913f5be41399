//! # Application Screens
//!
//! One module per route, plus the profile tab shared by two dashboards.
//!
//! Every screen takes a cloned [`AppState`](crate::app::AppState) snapshot to
//! read from and the [`App`](crate::app::App) to act on.

pub mod admin_dashboard;
pub mod client_dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod request_detail;
pub mod transporter_dashboard;
