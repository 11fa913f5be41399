//! # Validation Utilities
//!
//! Input validation helpers shared by the registration, profile and login forms.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@` per side.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `+`, 1-4 country-code digits, 6-14 subscriber digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]{1,4}[0-9]{6,14}$").expect("phone pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate email format.
pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Format d'email invalide".to_string())
    }
}

/// Validate minimum length, counted in characters.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} doit contenir au moins {} caractères", field_name, min))
    } else {
        Ok(())
    }
}

/// Normalize a phone number as it is typed: keep ASCII digits and `+`,
/// then make sure a non-empty result starts with `+`.
///
/// ```rust
/// use lib_utils::format_phone_number;
///
/// assert_eq!(format_phone_number("33123456789"), "+33123456789");
/// assert_eq!(format_phone_number("+33 1 23"), "+33123");
/// assert_eq!(format_phone_number("abc"), "");
/// ```
pub fn format_phone_number(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !cleaned.is_empty() && !cleaned.starts_with('+') {
        format!("+{}", cleaned)
    } else {
        cleaned
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validate an international phone number.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(
            "Le numéro doit commencer par + suivi du code pays et des chiffres (ex: +33123456789)"
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("jean@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.fr"));
        assert!(!is_valid_email("jean@example"));
        assert!(!is_valid_email("jean example@x.fr"));
        assert!(!is_valid_email("@x.fr"));
        assert!(!is_valid_email("a@@x.fr"));
    }

    #[test]
    fn test_phone_formatting() {
        assert_eq!(format_phone_number("33123456789"), "+33123456789");
        assert_eq!(format_phone_number("+33 1 23"), "+33123");
        assert_eq!(format_phone_number("06 12 34 56"), "+06123456");
        assert_eq!(format_phone_number("tel: (0)6-12"), "+0612");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("+33123456789"));
        assert!(is_valid_phone("+212612345678"));
        assert!(!is_valid_phone("0033123456789"));
        assert!(!is_valid_phone("+33123"));
        assert!(!is_valid_phone("+1234567890123456789"));
        assert!(validate_phone(&format_phone_number("0033123456789")).is_ok());
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(validate_min_length("éééééé", 6, "Le mot de passe").is_ok());
        assert_eq!(
            validate_min_length("abc", 6, "Le mot de passe").unwrap_err(),
            "Le mot de passe doit contenir au moins 6 caractères"
        );
    }
}
