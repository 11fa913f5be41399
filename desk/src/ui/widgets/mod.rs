//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod badges;
pub mod forms;
pub mod header;
pub mod notifications;
