//! # Profile Endpoints

use shared::dto::{ProfileUpdate, UserProfile};

use super::client::{self, ApiClient};
use crate::core::Result;

/// Fetch the signed-in user's profile.
#[tracing::instrument(skip(client, token))]
pub async fn get_profile(client: &ApiClient, token: &str) -> Result<UserProfile> {
    let (response, elapsed) = client::send(
        client.client.get(client.url("/auth/profile")).bearer_auth(token),
        "get_profile",
    )
    .await?;

    client::decode(response, elapsed, "get_profile", "Erreur lors de la récupération du profil").await
}

/// Apply a partial profile update and return the stored profile.
#[tracing::instrument(skip(client, token, update), fields(password_change = update.password.is_some()))]
pub async fn update_profile(client: &ApiClient, token: &str, update: ProfileUpdate) -> Result<UserProfile> {
    let (response, elapsed) = client::send(
        client
            .client
            .patch(client.url("/auth/profile"))
            .bearer_auth(token)
            .json(&update),
        "update_profile",
    )
    .await?;

    client::decode(response, elapsed, "update_profile", "Erreur lors de la mise à jour du profil").await
}
