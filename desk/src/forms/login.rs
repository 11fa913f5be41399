//! # Login Form

use crate::core::{AppError, Result};

pub const MISSING_CREDENTIALS: &str = "Veuillez saisir votre email et votre mot de passe";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    /// Both fields are required; the email is sent trimmed.
    pub fn credentials(&self) -> Result<(String, String)> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(AppError::Validation(MISSING_CREDENTIALS.to_string()));
        }
        Ok((email.to_string(), self.password.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        let mut form = LoginForm {
            email: " jean@example.com ".into(),
            ..Default::default()
        };
        assert!(form.credentials().unwrap_err().is_validation());

        form.password = "secret".into();
        assert_eq!(
            form.credentials().unwrap(),
            ("jean@example.com".to_string(), "secret".to_string())
        );
    }
}
