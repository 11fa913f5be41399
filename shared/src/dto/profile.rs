//! User profile DTOs.

use serde::{Deserialize, Serialize};

/// Profile returned by `GET /auth/profile` and `PATCH /auth/profile`.
///
/// Fields the server leaves `null` decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub address: String,
}

/// Partial update. Only `Some` fields are sent; `password` is only
/// present when the user typed a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Apply this update on top of an existing profile (password is ignored).
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(value) = &self.first_name {
            profile.first_name = value.clone();
        }
        if let Some(value) = &self.last_name {
            profile.last_name = value.clone();
        }
        if let Some(value) = &self.email {
            profile.email = value.clone();
        }
        if let Some(value) = &self.phone {
            profile.phone = value.clone();
        }
        if let Some(value) = &self.address {
            profile.address = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_nulls_become_empty() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"firstName":"Marie","lastName":null,"email":"m@x.fr"}"#).unwrap();

        assert_eq!(profile.first_name, "Marie");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn test_update_without_password_omits_key() {
        let update = ProfileUpdate {
            first_name: Some("Marie".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["firstName"], "Marie");
        assert!(json.get("password").is_none());
        assert!(json.get("email").is_none());
    }
}
