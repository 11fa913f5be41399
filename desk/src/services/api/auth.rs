//! # Authentication Endpoints
//!
//! Handles login and account registration.

use shared::dto::{LoginRequest, LoginResponse, SignupOutcome, SignupRequest};

use super::client::{self, ApiClient};
use crate::core::{AppError, Result};

/// Login with email and password.
///
/// Every rejection, whatever its status, is an [`AppError::Auth`].
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse> {
    tracing::info!("Attempting login");

    let request = LoginRequest { email, password };
    let (response, elapsed) = client::send(
        client.client.post(client.url("/auth/login")).json(&request),
        "login",
    )
    .await?;

    if !response.status().is_success() {
        let error = client::error_from_response(response, elapsed, "login", "Échec de la connexion").await;
        return Err(match error {
            AppError::Api { message, .. } => AppError::Auth(message),
            other => other,
        });
    }

    client::decode(response, elapsed, "login", "Échec de la connexion").await
}

/// Register a client or transporter account.
///
/// The caller needs the status code: `201` means the account can log in right away.
#[tracing::instrument(skip(client, request), fields(user_type = %request.user_type()))]
pub async fn register(client: &ApiClient, request: SignupRequest) -> Result<SignupOutcome> {
    let (response, elapsed) = client::send(
        client.client.post(client.url("/auth/signup")).json(&request),
        "register",
    )
    .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(
            client::error_from_response(response, elapsed, "register", "Erreur lors de l'inscription").await,
        );
    }

    let body = response.text().await.map_err(AppError::from)?;
    let data = if body.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
    };

    tracing::info!(status = status.as_u16(), duration_ms = elapsed.as_millis() as u64, "Registration accepted");
    Ok(SignupOutcome {
        data,
        status: status.as_u16(),
    })
}
