//! # Shared Utility Functions
//!
//! Display helpers used by every dashboard.
//!
//! ## Money and Quantities
//!
//! - [`format_price`] - two-decimal euro amount (`"180.00€"`)
//! - [`format_amount`] - plain euro amount, no forced decimals (`"180€"`)
//! - [`format_weight`] / [`format_volume`] - `"72kg"`, `"3.5m³"`
//!
//! ## Dates and Names
//!
//! - [`date_part`] - calendar day of an ISO timestamp
//! - [`greeting_name`] - local part of an email address
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{date_part, format_amount, greeting_name};
//!
//! assert_eq!(format_amount(180.0), "180€");
//! assert_eq!(date_part("2024-01-15T10:00:00.000Z"), "2024-01-15");
//! assert_eq!(greeting_name("jean.dupont@example.com"), "jean.dupont");
//! ```

/// Format an amount with exactly two decimals and a euro sign.
pub fn format_price(amount: f64) -> String {
    format!("{:.2}€", amount)
}

/// Format a number the way it was typed: no trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format an amount with a euro sign and no forced decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{}€", format_number(amount))
}

pub fn format_weight(weight: f64) -> String {
    format!("{}kg", format_number(weight))
}

pub fn format_volume(volume: f64) -> String {
    format!("{}m³", format_number(volume))
}

/// Calendar day (`YYYY-MM-DD`, UTC) of an RFC 3339 timestamp.
///
/// Plain dates pass through; anything unparsable is returned unchanged.
pub fn date_part(moment: &str) -> String {
    match lib_utils::calendar_day(moment) {
        Ok(day) => day.format("%Y-%m-%d").to_string(),
        Err(_) => moment.to_string(),
    }
}

/// Name used in dashboard greetings: everything before the `@`.
pub fn greeting_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_price(180.0), "180.00€");
        assert_eq!(format_price(45.678), "45.68€");
        assert_eq!(format_amount(95.5), "95.5€");
        assert_eq!(format_weight(72.0), "72kg");
        assert_eq!(format_volume(3.5), "3.5m³");
    }

    #[test]
    fn test_date_part_normalizes_to_utc_day() {
        assert_eq!(date_part("2024-01-15T23:30:00+02:00"), "2024-01-15");
        assert_eq!(date_part("2024-01-15T23:30:00-02:00"), "2024-01-16");
        assert_eq!(date_part("2024-01-15"), "2024-01-15");
        assert_eq!(date_part("demain"), "demain");
    }

    #[test]
    fn test_greeting_name() {
        assert_eq!(greeting_name("marie@x.fr"), "marie");
        assert_eq!(greeting_name("Utilisateur"), "Utilisateur");
    }
}
