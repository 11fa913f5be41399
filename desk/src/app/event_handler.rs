//! # Event Handler
//!
//! Applies background task results to the application state.
//!
//! Results tagged with a mount counter other than the current one belong to a
//! page the user already left and are dropped without touching state.

use std::time::Duration;

use shared::dto::{LoginResponse, Offer, ShipmentRequest, SignupOutcome, UserProfile};

use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::handlers::navigation;
use crate::app::state::{ClientTab, NoticeLevel, Route};
use crate::app::tasks::send_tagged;
use crate::app::App;
use crate::core::AppError;

pub const LOGIN_SUCCESS: &str = "Connexion réussie";
pub const SIGNUP_REDIRECTING: &str = "Inscription réussie ! Redirection vers la page de connexion...";
pub const SIGNUP_CHECK_EMAIL: &str = "Inscription réussie ! Vérifiez votre email pour activer votre compte.";
pub const REQUEST_CREATED: &str = "Demande d'expédition créée avec succès !";
pub const OFFER_SUBMITTED: &str = "Offre soumise avec succès";
pub const PROFILE_UPDATED: &str = "Profil mis à jour avec succès !";

/// Delay between a `201` signup and the switch to the login route
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: TaggedEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, tagged: TaggedEvent) {
        let name = tagged.event.name();
        {
            let state = self.state.read();
            if tagged.mount_id != state.mount_id {
                tracing::debug!(
                    event = name,
                    event_mount = tagged.mount_id,
                    current_mount = state.mount_id,
                    "Discarding result from an unmounted page"
                );
                return;
            }
        }
        tracing::debug!(event = name, "Processing event");

        match tagged.event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SignupResult(result) => self.handle_signup_result(result),
            AppEvent::SignupRedirectDue => self.navigate(Route::Login),
            AppEvent::ClientRequestsLoaded(result) => self.handle_client_requests_loaded(result),
            AppEvent::ShipmentRequestCreated(result) => self.handle_shipment_request_created(result),
            AppEvent::AvailableShipmentsLoaded(result) => self.handle_available_shipments_loaded(result),
            AppEvent::OffersLoaded(result) => self.handle_offers_loaded(result),
            AppEvent::OfferSubmitted(result) => self.handle_offer_submitted(result),
            AppEvent::ProfileLoaded(result) => self.handle_profile_loaded(result),
            AppEvent::ProfileUpdated(result) => self.handle_profile_updated(result),
        }
    }
}

/// Outcome of surfacing a failed authenticated call
enum Surfaced {
    /// The session was ended and the login route mounted
    SessionEnded,
    /// A notification was queued; the message may also be shown inline
    Notified(String),
}

impl App {
    /// Common failure path of authenticated calls. A `401` ends the session,
    /// anything else becomes an error notification.
    fn surface_failure(&self, operation: &str, error: AppError) -> Surfaced {
        if error.is_auth() {
            tracing::warn!(operation, error = %error, "Authorization rejected, ending session");
            navigation::end_session(self.state.clone(), navigation::SESSION_EXPIRED);
            return Surfaced::SessionEnded;
        }

        tracing::error!(operation, status = ?error.status(), error = %error, "Request failed");
        let message = error.to_string();
        self.state.write().notify(NoticeLevel::Error, message.clone());
        Surfaced::Notified(message)
    }

    fn handle_login_result(&mut self, result: Result<LoginResponse, AppError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                let mut state = self.state.write();
                state.auth.login_pending = false;
                state.auth.login_error = Some(e.to_string());
                state.notify(NoticeLevel::Error, e.to_string());
                return;
            }
        };

        let user = &response.user;
        {
            let mut state = self.state.write();
            state.auth.login_pending = false;
            if let Err(e) = state
                .session
                .set(&response.access_token, &user.id, user.user_type, &user.email)
            {
                tracing::error!(error = %e, "Failed to persist session");
                state.auth.login_error = Some(e.to_string());
                state.notify(NoticeLevel::Error, e.to_string());
                return;
            }
            state.notify(NoticeLevel::Success, LOGIN_SUCCESS);
        }

        tracing::info!(user_id = %user.id, user_type = %user.user_type, "Session opened");
        self.navigate(Route::dashboard_for(user.user_type));
    }

    fn handle_signup_result(&mut self, result: Result<SignupOutcome, AppError>) {
        tracing::info!(event = "SignupResult", success = result.is_ok(), "Processing signup result");

        let mut state = self.state.write();
        state.auth.registration_pending = false;

        match result {
            Ok(outcome) if outcome.status == 201 => {
                state.notify(NoticeLevel::Success, SIGNUP_REDIRECTING);
                let mount_id = state.mount_id;
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(SIGNUP_REDIRECT_DELAY).await;
                    send_tagged(&event_tx, mount_id, AppEvent::SignupRedirectDue).await;
                });
            }
            Ok(outcome) => {
                tracing::info!(status = outcome.status, "Signup accepted, activation pending");
                state.notify(NoticeLevel::Info, SIGNUP_CHECK_EMAIL);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Signup failed");
                state.auth.registration_error = Some(e.to_string());
                state.notify(NoticeLevel::Error, e.to_string());
            }
        }
    }

    fn handle_client_requests_loaded(&mut self, result: Result<Vec<ShipmentRequest>, AppError>) {
        match result {
            Ok(requests) => {
                tracing::debug!(count = requests.len(), "Client requests loaded");
                let mut state = self.state.write();
                state.client.requests = requests;
                state.client.loading = false;
                state.client.list_error = None;
            }
            Err(e) => {
                self.state.write().client.loading = false;
                if let Surfaced::Notified(message) = self.surface_failure("list_shipment_requests", e) {
                    self.state.write().client.list_error = Some(message);
                }
            }
        }
    }

    fn handle_shipment_request_created(&mut self, result: Result<ShipmentRequest, AppError>) {
        match result {
            Ok(created) => {
                tracing::info!(request_id = created.id, "Shipment request created");
                let mut state = self.state.write();
                state.client.submitting = false;
                state.client.draft.reset();
                state.client.form_error = None;
                state.client.tab = ClientTab::Requests;
                state.notify(NoticeLevel::Success, REQUEST_CREATED);
            }
            Err(e) => {
                self.state.write().client.submitting = false;
                if let Surfaced::Notified(message) = self.surface_failure("create_shipment_request", e) {
                    self.state.write().client.form_error = Some(message);
                }
            }
        }
    }

    fn handle_available_shipments_loaded(&mut self, result: Result<Vec<ShipmentRequest>, AppError>) {
        match result {
            Ok(available) => {
                tracing::debug!(count = available.len(), "Available shipments loaded");
                let mut state = self.state.write();
                state.transporter.available = available;
                state.transporter.available_loading = false;
                state.transporter.available_error = None;
            }
            Err(e) => {
                self.state.write().transporter.available_loading = false;
                if let Surfaced::Notified(message) = self.surface_failure("list_available_shipments", e) {
                    self.state.write().transporter.available_error = Some(message);
                }
            }
        }
    }

    fn handle_offers_loaded(&mut self, result: Result<Vec<Offer>, AppError>) {
        match result {
            Ok(offers) => {
                tracing::debug!(count = offers.len(), "Offers loaded");
                let mut state = self.state.write();
                state.transporter.offers = offers;
                state.transporter.offers_loading = false;
                state.transporter.offers_error = None;
            }
            Err(e) => {
                self.state.write().transporter.offers_loading = false;
                if let Surfaced::Notified(message) = self.surface_failure("list_my_offers", e) {
                    self.state.write().transporter.offers_error = Some(message);
                }
            }
        }
    }

    fn handle_offer_submitted(&mut self, result: Result<Offer, AppError>) {
        match result {
            Ok(offer) => {
                tracing::info!(offer_id = offer.id, price_per_kg = offer.price_per_kg, "Offer submitted");
                let mut state = self.state.write();
                state.transporter.offer_dialog.succeed();
                state.notify(NoticeLevel::Success, OFFER_SUBMITTED);
            }
            Err(e) => {
                if let Surfaced::Notified(message) = self.surface_failure("create_offer", e) {
                    self.state.write().transporter.offer_dialog.fail(message);
                }
            }
        }
    }

    fn handle_profile_loaded(&mut self, result: Result<UserProfile, AppError>) {
        match result {
            Ok(profile) => {
                let mut state = self.state.write();
                let session_email = state.session_email();
                if !profile.email.is_empty() && profile.email != session_email {
                    tracing::warn!(
                        profile_email = %profile.email,
                        session_email = %session_email,
                        "Profile email differs from session email"
                    );
                }
                state.profile.form = crate::forms::ProfileForm::from_profile(&profile, &session_email);
                state.profile.loading = false;
                state.profile.error = None;
            }
            Err(e) => {
                self.state.write().profile.loading = false;
                self.surface_failure("get_profile", e);
            }
        }
    }

    fn handle_profile_updated(&mut self, result: Result<UserProfile, AppError>) {
        match result {
            Ok(profile) => {
                let mut state = self.state.write();
                state.profile.saving = false;
                state.profile.error = None;

                let session_email = state.session_email();
                if !profile.email.is_empty() && profile.email != session_email {
                    tracing::warn!(
                        profile_email = %profile.email,
                        session_email = %session_email,
                        "Email changed, updating session"
                    );
                    if let Err(e) = state.session.set_email(&profile.email) {
                        tracing::error!(error = %e, "Failed to persist new session email");
                    }
                }

                let email = state.session_email();
                state.profile.form = crate::forms::ProfileForm::from_profile(&profile, &email);
                state.notify(NoticeLevel::Success, PROFILE_UPDATED);
            }
            Err(e) => {
                self.state.write().profile.saving = false;
                if let Surfaced::Notified(message) = self.surface_failure("update_profile", e) {
                    self.state.write().profile.error = Some(message);
                }
            }
        }
    }
}
