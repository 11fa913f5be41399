//! Page flows driven end to end over the in-memory backend.

use std::sync::Arc;
use std::time::Duration;

use freight_desk::app::{
    App, ClientTab, Route, TaggedEvent, TransporterTab, LOGIN_SUCCESS, OFFER_SUBMITTED, PROFILE_UPDATED, REQUEST_CREATED,
    SESSION_EXPIRED, SIGNUP_CHECK_EMAIL, SIGNUP_REDIRECTING,
};
use freight_desk::core::AppError;
use freight_desk::forms::ShipmentDraft;
use freight_desk::services::mock::{MockBackend, MockCall, MockOperation};
use freight_desk::services::session::SessionStore;
use shared::dto::UserType;

const CLIENT_ID: i64 = 101;
const TRANSPORTER_ID: i64 = 102;

fn app_with(backend: &Arc<MockBackend>) -> App {
    App::new(backend.clone(), SessionStore::in_memory())
}

fn sign_in(app: &App, id: i64, user_type: UserType, email: &str) {
    app.state
        .read()
        .session
        .set(&MockBackend::token_for(id), &id.to_string(), user_type, email)
        .unwrap();
}

fn unauthorized() -> AppError {
    AppError::Auth("Unauthorized".to_string())
}

fn server_error() -> AppError {
    AppError::Api {
        status: 500,
        message: "HTTP 500: Internal Server Error".to_string(),
    }
}

/// Mount the client dashboard and wait for the first list load.
async fn open_client_dashboard(app: &mut App) {
    sign_in(app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");
    app.navigate(Route::ClientDashboard);
    pump(app).await;
}

/// Open the profile tab of the client dashboard with the fetched profile.
async fn open_client_profile(app: &mut App) {
    open_client_dashboard(app).await;
    app.select_client_tab(ClientTab::Profile);
    pump(app).await;
}

/// Wait for the next task result and apply it; returns it for inspection.
async fn pump(app: &mut App) -> TaggedEvent {
    let tagged = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
        .await
        .expect("no event within 5s")
        .expect("event channel closed");
    app.handle_event(tagged.clone());
    tagged
}

fn messages(app: &App) -> Vec<String> {
    app.take_notifications().into_iter().map(|n| n.message).collect()
}

fn filled_draft() -> ShipmentDraft {
    ShipmentDraft {
        title: "Déménagement studio".to_string(),
        description: "Cartons et petit mobilier".to_string(),
        origin_address: "1 rue de Rivoli".to_string(),
        origin_city: "Paris".to_string(),
        origin_zipcode: "75001".to_string(),
        origin_country: "France".to_string(),
        destination_address: "2 place Bellecour".to_string(),
        destination_city: "Lyon".to_string(),
        destination_zipcode: "69002".to_string(),
        destination_country: "France".to_string(),
        preferred_date: "2024-03-15".to_string(),
        weight: "300".to_string(),
        dimensions: "120,80,100".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_login_opens_role_dashboard() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    app.navigate(Route::Login);
    {
        let mut state = app.state.write();
        state.auth.login.email = "transporteur@transporteasy.fr".to_string();
        state.auth.login.password = "transport123".to_string();
    }

    app.submit_login();
    assert!(app.state.read().auth.login_pending);
    pump(&mut app).await;

    assert_eq!(app.route(), Route::TransporterDashboard);
    let session = app.state.read().session.get().unwrap();
    assert_eq!(session.user_id, TRANSPORTER_ID.to_string());
    assert_eq!(session.user_type, Some(UserType::Transporter));
    assert!(messages(&app).contains(&LOGIN_SUCCESS.to_string()));
}

#[tokio::test]
async fn test_failed_login_stays_on_page() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    app.navigate(Route::Login);
    {
        let mut state = app.state.write();
        state.auth.login.email = "client@transporteasy.fr".to_string();
        state.auth.login.password = "wrong".to_string();
    }

    app.submit_login();
    pump(&mut app).await;

    let state = app.state.read();
    assert_eq!(state.route, Route::Login);
    assert!(!state.auth.login_pending);
    assert_eq!(state.auth.login_error.as_deref(), Some("Email ou mot de passe incorrect"));
    assert!(state.session.get().is_none());
}

#[tokio::test]
async fn test_unauthorized_request_list_ends_session() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::ListShipmentRequests, unauthorized());
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Login);
    assert!(app.state.read().session.get().is_none());
    assert!(messages(&app).contains(&SESSION_EXPIRED.to_string()));
}

#[tokio::test]
async fn test_unauthorized_profile_fetch_ends_session() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::GetProfile, unauthorized());
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;
    app.select_client_tab(ClientTab::Profile);
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Login);
    assert!(app.state.read().session.get().is_none());
}

#[tokio::test]
async fn test_unauthorized_offer_ends_session_without_refetch() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::CreateOffer, unauthorized());
    let mut app = app_with(&backend);
    sign_in(&app, TRANSPORTER_ID, UserType::Transporter, "transporteur@transporteasy.fr");

    app.navigate(Route::TransporterDashboard);
    pump(&mut app).await;
    let request_id = app.state.read().transporter.available[0].id;

    app.open_offer_dialog(request_id);
    app.state.write().transporter.offer_dialog.set_price("1.5");
    app.submit_offer();
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Login);
    assert!(app.state.read().session.get().is_none());
    assert_eq!(backend.call_count(MockOperation::ListAvailableShipments), 1);
    assert_eq!(backend.call_count(MockOperation::ListMyOffers), 0);
}

#[tokio::test]
async fn test_unauthorized_request_creation_ends_session_without_refetch() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::CreateShipmentRequest, unauthorized());
    let mut app = app_with(&backend);
    open_client_dashboard(&mut app).await;

    app.select_client_tab(ClientTab::NewRequest);
    app.state.write().client.draft = filled_draft();
    app.submit_shipment_request();
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Login);
    assert!(app.state.read().session.get().is_none());
    assert_eq!(backend.call_count(MockOperation::ListShipmentRequests), 1);
}

#[tokio::test]
async fn test_unauthorized_profile_update_ends_session() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::UpdateProfile, unauthorized());
    let mut app = app_with(&backend);
    open_client_profile(&mut app).await;

    app.submit_profile();
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Login);
    assert!(app.state.read().session.get().is_none());
    assert!(messages(&app).contains(&SESSION_EXPIRED.to_string()));
}

#[tokio::test]
async fn test_rejected_request_creation_shows_inline_error() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(
        MockOperation::CreateShipmentRequest,
        AppError::Api {
            status: 422,
            message: "Adresse invalide".to_string(),
        },
    );
    let mut app = app_with(&backend);
    open_client_dashboard(&mut app).await;

    app.select_client_tab(ClientTab::NewRequest);
    app.state.write().client.draft = filled_draft();
    app.submit_shipment_request();
    pump(&mut app).await;

    let state = app.state.read();
    assert_eq!(state.route, Route::ClientDashboard);
    assert!(state.session.get().is_some());
    assert!(!state.client.submitting);
    assert_eq!(state.client.tab, ClientTab::NewRequest);
    assert_eq!(state.client.form_error.as_deref(), Some("Adresse invalide"));
    assert_eq!(state.client.draft, filled_draft());
    drop(state);
    assert!(messages(&app).contains(&"Adresse invalide".to_string()));
    assert_eq!(backend.call_count(MockOperation::ListShipmentRequests), 1);
}

#[tokio::test]
async fn test_failed_profile_update_shows_inline_error() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::UpdateProfile, server_error());
    let mut app = app_with(&backend);
    open_client_profile(&mut app).await;

    app.submit_profile();
    pump(&mut app).await;

    let state = app.state.read();
    assert_eq!(state.route, Route::ClientDashboard);
    assert!(state.session.get().is_some());
    assert!(!state.profile.saving);
    assert_eq!(state.profile.error.as_deref(), Some("HTTP 500: Internal Server Error"));
}

#[tokio::test]
async fn test_server_error_on_offer_keeps_dialog_open() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::CreateOffer, server_error());
    let mut app = app_with(&backend);
    sign_in(&app, TRANSPORTER_ID, UserType::Transporter, "transporteur@transporteasy.fr");

    app.navigate(Route::TransporterDashboard);
    pump(&mut app).await;
    let request_id = app.state.read().transporter.available[0].id;

    app.open_offer_dialog(request_id);
    app.state.write().transporter.offer_dialog.set_price("1.5");
    app.submit_offer();
    let tagged = pump(&mut app).await;
    assert_eq!(tagged.event.name(), "OfferSubmitted");

    {
        let state = app.state.read();
        let dialog = &state.transporter.offer_dialog;
        assert!(dialog.is_open());
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.request_id(), Some(request_id));
        assert_eq!(dialog.price(), "1.5");
        assert_eq!(dialog.error(), Some("HTTP 500: Internal Server Error"));
        assert_eq!(state.route, Route::TransporterDashboard);
        assert!(state.session.get().is_some());
    }
    assert_eq!(backend.call_count(MockOperation::ListAvailableShipments), 1);
    assert_eq!(backend.call_count(MockOperation::ListMyOffers), 0);

    backend.recover(MockOperation::CreateOffer);
    app.submit_offer();
    assert!(app.state.read().transporter.offer_dialog.is_submitting());
    for _ in 0..3 {
        pump(&mut app).await;
    }
    assert!(!app.state.read().transporter.offer_dialog.is_open());
}

#[tokio::test]
async fn test_transporter_lists_keep_separate_status() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(MockOperation::ListAvailableShipments, server_error());
    let mut app = app_with(&backend);
    sign_in(&app, TRANSPORTER_ID, UserType::Transporter, "transporteur@transporteasy.fr");

    app.navigate(Route::TransporterDashboard);
    app.select_transporter_tab(TransporterTab::MyOffers);
    {
        let state = app.state.read();
        assert!(state.transporter.available_loading);
        assert!(state.transporter.offers_loading);
    }

    for _ in 0..2 {
        pump(&mut app).await;
    }

    let state = app.state.read();
    assert!(!state.transporter.available_loading);
    assert!(!state.transporter.offers_loading);
    assert_eq!(
        state.transporter.available_error.as_deref(),
        Some("HTTP 500: Internal Server Error")
    );
    assert_eq!(state.transporter.offers_error, None);
}

#[tokio::test]
async fn test_server_error_on_list_keeps_session() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.fail(
        MockOperation::ListShipmentRequests,
        AppError::Api {
            status: 500,
            message: "HTTP 500: Internal Server Error".to_string(),
        },
    );
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;

    let state = app.state.read();
    assert_eq!(state.route, Route::ClientDashboard);
    assert!(state.session.get().is_some());
    assert!(!state.client.loading);
    assert_eq!(state.client.list_error.as_deref(), Some("HTTP 500: Internal Server Error"));
}

#[tokio::test]
async fn test_create_request_then_refetch() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;
    let before = app.state.read().client.requests.len();

    app.select_client_tab(ClientTab::NewRequest);
    app.state.write().client.draft = filled_draft();
    app.submit_shipment_request();
    assert!(app.state.read().client.submitting);

    pump(&mut app).await;
    {
        let state = app.state.read();
        assert_eq!(state.client.tab, ClientTab::Requests);
        assert!(!state.client.submitting);
        assert_eq!(state.client.draft, ShipmentDraft::default());
    }
    assert!(messages(&app).contains(&REQUEST_CREATED.to_string()));

    pump(&mut app).await;
    assert_eq!(app.state.read().client.requests.len(), before + 1);
    assert_eq!(backend.call_count(MockOperation::ListShipmentRequests), 2);

    let created = backend
        .calls()
        .into_iter()
        .find_map(|call| match call {
            MockCall::CreateShipmentRequest(payload) => Some(payload),
            _ => None,
        })
        .unwrap();
    assert_eq!(created.dimensions, vec![120.0, 80.0, 100.0]);
    assert_eq!(created.weight, Some(300.0));
    assert_eq!(created.description.as_deref(), Some("Déménagement studio"));
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;
    app.select_client_tab(ClientTab::NewRequest);
    app.state.write().client.draft = ShipmentDraft {
        dimensions: "120,80".to_string(),
        ..filled_draft()
    };
    app.submit_shipment_request();

    let state = app.state.read();
    assert!(!state.client.submitting);
    assert!(state.client.form_error.is_some());
    assert_eq!(backend.call_count(MockOperation::CreateShipmentRequest), 0);
}

#[tokio::test]
async fn test_result_for_left_page_is_discarded() {
    let backend = Arc::new(MockBackend::with_demo_data().with_latency(Duration::from_millis(100)));
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    let dispatched_on = app.state.read().mount_id;
    app.navigate(Route::Home);

    let tagged = pump(&mut app).await;

    assert_eq!(tagged.mount_id, dispatched_on);
    let state = app.state.read();
    assert_eq!(state.route, Route::Home);
    assert!(state.client.requests.is_empty());
    assert!(!state.client.loading);
}

#[tokio::test]
async fn test_offer_submission_refreshes_lists_then_closes() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    sign_in(&app, TRANSPORTER_ID, UserType::Transporter, "transporteur@transporteasy.fr");

    app.navigate(Route::TransporterDashboard);
    pump(&mut app).await;
    let request_id = app.state.read().transporter.available[0].id;

    app.open_offer_dialog(request_id);
    app.state.write().transporter.offer_dialog.set_price("0");
    app.submit_offer();
    assert!(!app.state.read().transporter.offer_dialog.is_submitting());

    app.state.write().transporter.offer_dialog.set_price("2,5");
    app.submit_offer();
    assert!(app.state.read().transporter.offer_dialog.is_submitting());

    for expected in ["AvailableShipmentsLoaded", "OffersLoaded", "OfferSubmitted"] {
        let tagged = pump(&mut app).await;
        assert_eq!(tagged.event.name(), expected);
    }

    let state = app.state.read();
    assert!(!state.transporter.offer_dialog.is_open());
    assert_eq!(state.transporter.offers.len(), 1);
    assert_eq!(state.transporter.offers[0].price_per_kg, 2.5);
    let target = state.transporter.available.iter().find(|r| r.id == request_id).unwrap();
    assert_eq!(target.offer_count, 1);
    drop(state);
    assert!(messages(&app).contains(&OFFER_SUBMITTED.to_string()));
}

#[tokio::test]
async fn test_city_filter_is_forwarded() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    sign_in(&app, TRANSPORTER_ID, UserType::Transporter, "transporteur@transporteasy.fr");

    app.navigate(Route::TransporterDashboard);
    pump(&mut app).await;
    app.state.write().transporter.city_filter = " Lyon ".to_string();
    app.apply_city_filter();
    pump(&mut app).await;

    let available = app.state.read().transporter.available.clone();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].destination.city, "Lyon");
    assert!(backend.calls().contains(&MockCall::ListAvailableShipments {
        city: Some("Lyon".to_string())
    }));
}

#[tokio::test]
async fn test_profile_update_syncs_session_email() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    sign_in(&app, CLIENT_ID, UserType::Client, "client@transporteasy.fr");

    app.navigate(Route::ClientDashboard);
    pump(&mut app).await;
    app.select_client_tab(ClientTab::Profile);
    pump(&mut app).await;
    assert_eq!(app.state.read().profile.form.first_name, "Jean");

    app.state.write().profile.form.email = "jean.dupont@transporteasy.fr".to_string();
    app.submit_profile();
    pump(&mut app).await;

    let state = app.state.read();
    assert!(!state.profile.saving);
    assert_eq!(state.session_email(), "jean.dupont@transporteasy.fr");
    assert_eq!(state.profile.form.email, "jean.dupont@transporteasy.fr");
    drop(state);
    assert!(messages(&app).contains(&PROFILE_UPDATED.to_string()));
}

#[tokio::test]
async fn test_signup_created_redirects_after_delay() {
    let backend = Arc::new(MockBackend::with_demo_data());
    let mut app = app_with(&backend);
    app.navigate(Route::Register);
    {
        let mut state = app.state.write();
        let draft = &mut state.auth.registration;
        draft.first_name = "Marie".to_string();
        draft.last_name = "Curie".to_string();
        draft.email = "marie@transporteasy.fr".to_string();
        draft.phone = "0612345678".to_string();
        draft.password = "secret123".to_string();
        draft.address = "12 rue des Écoles".to_string();
        draft.accept_terms = true;
    }

    app.submit_registration();
    pump(&mut app).await;
    assert_eq!(app.route(), Route::Register);
    assert!(messages(&app).contains(&SIGNUP_REDIRECTING.to_string()));

    let tagged = pump(&mut app).await;
    assert_eq!(tagged.event.name(), "SignupRedirectDue");
    assert_eq!(app.route(), Route::Login);
}

#[tokio::test]
async fn test_signup_pending_activation_stays_on_page() {
    let backend = Arc::new(MockBackend::with_demo_data());
    backend.set_signup_status(200);
    let mut app = app_with(&backend);
    app.navigate(Route::Register);
    {
        let mut state = app.state.write();
        let draft = &mut state.auth.registration;
        draft.user_type = UserType::Transporter;
        draft.first_name = "Luc".to_string();
        draft.last_name = "Martin".to_string();
        draft.email = "luc@transporteasy.fr".to_string();
        draft.phone = "0611111111".to_string();
        draft.password = "secret123".to_string();
        draft.license_number = "LIC-42".to_string();
        draft.license_expiry = "2030-06-30".to_string();
        draft.insurance_number = "INS-42".to_string();
        draft.accept_terms = true;
    }

    app.submit_registration();
    pump(&mut app).await;

    assert_eq!(app.route(), Route::Register);
    assert!(messages(&app).contains(&SIGNUP_CHECK_EMAIL.to_string()));
    assert!(!app.state.read().auth.registration_pending);
}
