use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account role. Drives which dashboard a session may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserType {
    Client,
    Transporter,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Client => "client",
            UserType::Transporter => "transporter",
            UserType::Admin => "admin",
        }
    }

    /// French display name used by the admin console.
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Client => "Client",
            UserType::Transporter => "Transporteur",
            UserType::Admin => "Administrateur",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(UserType::Client),
            "transporter" => Ok(UserType::Transporter),
            "admin" => Ok(UserType::Admin),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

impl TryFrom<String> for UserType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserType> for String {
    fn from(value: UserType) -> Self {
        value.as_str().to_string()
    }
}

/// User information returned alongside the access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    #[serde(deserialize_with = "super::id_as_string")]
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AuthUser,
}

/// Identity fields shared by both signup variants
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupIdentity {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Signup request, discriminated on the `type` field.
///
/// ```rust
/// use shared::dto::auth::{SignupIdentity, SignupRequest};
///
/// let request = SignupRequest::Client {
///     identity: SignupIdentity::default(),
///     address: "1 rue de Paris".to_string(),
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["type"], "client");
/// assert_eq!(json["address"], "1 rue de Paris");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SignupRequest {
    Client {
        #[serde(flatten)]
        identity: SignupIdentity,
        address: String,
    },
    Transporter {
        #[serde(flatten)]
        identity: SignupIdentity,
        #[serde(rename = "licenseNumber")]
        license_number: String,
        #[serde(rename = "licenseExpiry")]
        license_expiry: String,
        #[serde(rename = "insuranceNumber")]
        insurance_number: String,
    },
}

impl SignupRequest {
    pub fn identity(&self) -> &SignupIdentity {
        match self {
            SignupRequest::Client { identity, .. } | SignupRequest::Transporter { identity, .. } => {
                identity
            }
        }
    }

    pub fn user_type(&self) -> UserType {
        match self {
            SignupRequest::Client { .. } => UserType::Client,
            SignupRequest::Transporter { .. } => UserType::Transporter,
        }
    }
}

/// Signup result: raw response body plus the HTTP status the server chose
/// (201 means the account is usable immediately).
#[derive(Debug, Clone, PartialEq)]
pub struct SignupOutcome {
    pub data: serde_json::Value,
    pub status: u16,
}

/// Error body returned by the API.
///
/// Validation failures may send `message` as an array of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Flatten `message` into a single human readable line, if present.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_numeric_user_id() {
        let json = r#"{"accessToken":"tok","user":{"id":42,"email":"a@b.fr","type":"transporter","status":"ACTIVE"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token, "tok");
        assert_eq!(response.user.id, "42");
        assert_eq!(response.user.user_type, UserType::Transporter);
    }

    #[test]
    fn test_user_type_parse_is_case_insensitive() {
        assert_eq!("CLIENT".parse::<UserType>().unwrap(), UserType::Client);
        assert_eq!("Admin".parse::<UserType>().unwrap(), UserType::Admin);
        assert!("shipper".parse::<UserType>().is_err());
    }

    #[test]
    fn test_transporter_signup_wire_shape() {
        let request = SignupRequest::Transporter {
            identity: SignupIdentity {
                email: "t@x.fr".to_string(),
                password: "secret1".to_string(),
                first_name: "Luc".to_string(),
                last_name: "Bernard".to_string(),
                phone: "+33123456789".to_string(),
            },
            license_number: "LIC-1".to_string(),
            license_expiry: "2027-01-01".to_string(),
            insurance_number: "INS-9".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "transporter");
        assert_eq!(json["firstName"], "Luc");
        assert_eq!(json["licenseNumber"], "LIC-1");
        assert_eq!(json["licenseExpiry"], "2027-01-01");
        assert_eq!(json["insuranceNumber"], "INS-9");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_error_response_message_variants() {
        let single: ErrorResponse = serde_json::from_str(r#"{"message":"Email déjà utilisé"}"#).unwrap();
        assert_eq!(single.message_text().as_deref(), Some("Email déjà utilisé"));

        let list: ErrorResponse =
            serde_json::from_str(r#"{"message":["email must be an email","phone too short"]}"#).unwrap();
        assert_eq!(list.message_text().as_deref(), Some("email must be an email, phone too short"));

        let missing: ErrorResponse = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
        assert_eq!(missing.message_text(), None);
    }
}
