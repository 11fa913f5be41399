//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse};
pub use time::{calendar_day, format_time, now_utc};
pub use validation::{
    format_phone_number, is_valid_email, is_valid_phone, validate_email, validate_min_length,
    validate_phone,
};
