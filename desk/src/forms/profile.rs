//! # Profile Form
//!
//! Editable copy of the user profile. The phone field is reformatted on every
//! keystroke and carries its own inline error.

use shared::dto::{ProfileUpdate, UserProfile};

use crate::core::{AppError, Result};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// New password; empty means unchanged
    pub password: String,
    pub phone_error: Option<String>,
}

impl ProfileForm {
    /// Form prefilled with the session email, shown before the profile loads.
    pub fn with_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }

    /// Reset from a server profile. An empty email falls back to the session email.
    pub fn from_profile(profile: &UserProfile, session_email: &str) -> Self {
        let email = if profile.email.is_empty() {
            session_email.to_string()
        } else {
            profile.email.clone()
        };

        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email,
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            password: String::new(),
            phone_error: None,
        }
    }

    /// Apply a keystroke to the phone field. Never blocks input.
    pub fn on_phone_change(&mut self, raw: &str) {
        self.phone = lib_utils::format_phone_number(raw);
        self.phone_error = if self.phone.is_empty() {
            None
        } else {
            lib_utils::validate_phone(&self.phone).err()
        };
    }

    /// Build the partial update. The password is only sent when typed.
    pub fn to_update(&self) -> Result<ProfileUpdate> {
        let password = if self.password.is_empty() {
            None
        } else {
            lib_utils::validate_min_length(&self.password, MIN_PASSWORD_LENGTH, "Le mot de passe")
                .map_err(AppError::Validation)?;
            Some(self.password.clone())
        };

        Ok(ProfileUpdate {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            address: Some(self.address.clone()),
            password,
        })
    }
}
