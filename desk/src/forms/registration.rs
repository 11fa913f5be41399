//! # Registration Draft
//!
//! Validated in a fixed order; the first failing rule wins and only its
//! message is reported.

use shared::dto::{SignupIdentity, SignupRequest, UserType};

use crate::core::{AppError, Result};

pub const MISSING_FIELDS: &str = "Veuillez remplir tous les champs obligatoires";
pub const TERMS_NOT_ACCEPTED: &str = "Veuillez accepter les conditions d'utilisation";
pub const CLIENT_ADDRESS_REQUIRED: &str = "L'adresse est obligatoire pour les clients";
pub const TRANSPORTER_FIELDS_REQUIRED: &str = "Tous les champs transporteur sont obligatoires";

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// Only `Client` and `Transporter` can sign up.
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub license_number: String,
    pub license_expiry: String,
    pub insurance_number: String,
    pub accept_terms: bool,
    pub show_password: bool,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            user_type: UserType::Client,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            address: String::new(),
            license_number: String::new(),
            license_expiry: String::new(),
            insurance_number: String::new(),
            accept_terms: false,
            show_password: false,
        }
    }
}

impl RegistrationDraft {
    /// Run every rule in order and stop at the first failure.
    pub fn validate(&self) -> Result<()> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.phone, &self.password];
        if required.iter().any(|value| value.is_empty()) {
            return Err(AppError::Validation(MISSING_FIELDS.to_string()));
        }

        if !self.accept_terms {
            return Err(AppError::Validation(TERMS_NOT_ACCEPTED.to_string()));
        }

        lib_utils::validate_email(&self.email).map_err(AppError::Validation)?;
        lib_utils::validate_min_length(&self.password, MIN_PASSWORD_LENGTH, "Le mot de passe")
            .map_err(AppError::Validation)?;

        match self.user_type {
            UserType::Transporter => {
                if self.license_number.is_empty()
                    || self.license_expiry.is_empty()
                    || self.insurance_number.is_empty()
                {
                    return Err(AppError::Validation(TRANSPORTER_FIELDS_REQUIRED.to_string()));
                }
            }
            UserType::Client | UserType::Admin => {
                if self.address.is_empty() {
                    return Err(AppError::Validation(CLIENT_ADDRESS_REQUIRED.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Validate, then build the signup payload with trimmed text fields.
    /// The password and the licence expiry date are sent as typed.
    pub fn to_request(&self) -> Result<SignupRequest> {
        self.validate()?;

        let identity = SignupIdentity {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        };

        Ok(match self.user_type {
            UserType::Transporter => SignupRequest::Transporter {
                identity,
                license_number: self.license_number.trim().to_string(),
                license_expiry: self.license_expiry.clone(),
                insurance_number: self.insurance_number.trim().to_string(),
            },
            UserType::Client | UserType::Admin => SignupRequest::Client {
                identity,
                address: self.address.trim().to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_client() -> RegistrationDraft {
        RegistrationDraft {
            first_name: " Jean ".into(),
            last_name: "Dupont".into(),
            email: "jean@example.com".into(),
            phone: "+33123456789".into(),
            password: "secret1".into(),
            address: " 1 rue de Paris ".into(),
            accept_terms: true,
            ..Default::default()
        }
    }

    fn message(draft: &RegistrationDraft) -> String {
        draft.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_missing_fields_reported_first() {
        let draft = RegistrationDraft {
            email: "not-an-email".into(),
            password: "123".into(),
            ..Default::default()
        };
        assert_eq!(message(&draft), MISSING_FIELDS);
    }

    #[test]
    fn test_rule_order() {
        let mut draft = valid_client();
        draft.accept_terms = false;
        draft.email = "bad".into();
        assert_eq!(message(&draft), TERMS_NOT_ACCEPTED);

        draft.accept_terms = true;
        draft.password = "123".into();
        assert_eq!(message(&draft), "Format d'email invalide");

        draft.email = "jean@example.com".into();
        assert_eq!(message(&draft), "Le mot de passe doit contenir au moins 6 caractères");

        draft.password = "secret1".into();
        draft.address.clear();
        assert_eq!(message(&draft), CLIENT_ADDRESS_REQUIRED);
    }

    #[test]
    fn test_transporter_fields_required() {
        let mut draft = valid_client();
        draft.user_type = UserType::Transporter;
        draft.license_number = "LIC-1".into();
        assert_eq!(message(&draft), TRANSPORTER_FIELDS_REQUIRED);

        draft.license_expiry = "2027-01-01".into();
        draft.insurance_number = "INS-9".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_request_is_trimmed() {
        let request = valid_client().to_request().unwrap();
        assert_eq!(request.user_type(), UserType::Client);
        assert_eq!(request.identity().first_name, "Jean");
        match request {
            SignupRequest::Client { address, .. } => assert_eq!(address, "1 rue de Paris"),
            other => panic!("unexpected variant {other:?}"),
        }
    }
}
