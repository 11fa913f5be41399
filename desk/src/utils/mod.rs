//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: The process-wide Tokio runtime
//!
//! ## Related Modules
//!
//! - [`lib_utils`]: Environment, time and input validation helpers
//! - [`shared::utils`]: Display formatting shared with the DTOs

pub mod runtime;
