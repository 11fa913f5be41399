//! HTTP gateway tests against a local mock server.

use freight_desk::core::{ApiService, AppError};
use freight_desk::services::api::ApiClient;
use serde_json::json;
use shared::dto::{CreateOfferRequest, CreateShipmentRequest, ProfileUpdate, UserType};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri(), None);
    (server, client)
}

fn payload() -> CreateShipmentRequest {
    CreateShipmentRequest {
        origin_address: "1 rue de Rivoli".to_string(),
        origin_city: "Paris".to_string(),
        origin_zipcode: "75001".to_string(),
        origin_country: "France".to_string(),
        destination_address: "2 place Bellecour".to_string(),
        destination_city: "Lyon".to_string(),
        destination_zipcode: "69002".to_string(),
        destination_country: "France".to_string(),
        preferred_date: "2024-02-01".to_string(),
        weight: Some(250.0),
        dimensions: vec![120.0, 80.0, 100.0],
        description: Some("Transport de meubles".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_login_decodes_session_fields() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "client@transporteasy.fr", "password": "client123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "tok-1",
            "user": { "id": 42, "email": "client@transporteasy.fr", "type": "client", "status": "ACTIVE" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .login("client@transporteasy.fr".to_string(), "client123".to_string())
        .await
        .unwrap();

    assert_eq!(response.access_token, "tok-1");
    assert_eq!(response.user.id, "42");
    assert_eq!(response.user.user_type, UserType::Client);
}

#[tokio::test]
async fn test_login_rejection_is_auth_error_with_server_message() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Email ou mot de passe incorrect" })),
        )
        .mount(&server)
        .await;

    let err = client
        .login("x@y.fr".to_string(), "bad".to_string())
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Auth("Email ou mot de passe incorrect".to_string()));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/shipment-requests"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
        .mount(&server)
        .await;

    let err = client.list_shipment_requests("expired").await.unwrap_err();

    assert!(err.is_auth());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_json_error_message_is_surfaced() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "message": "Cet email est déjà utilisé" })))
        .mount(&server)
        .await;

    let request = shared::dto::SignupRequest::Client {
        identity: Default::default(),
        address: "1 rue de Paris".to_string(),
    };
    let err = client.register(request).await.unwrap_err();

    assert_eq!(
        err,
        AppError::Api {
            status: 409,
            message: "Cet email est déjà utilisé".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_json_error_body_uses_status_line() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/shipments/offers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_my_offers("tok").await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_signup_reports_status_and_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_partial_json(json!({ "type": "transporter", "licenseNumber": "LIC-1" })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let request = shared::dto::SignupRequest::Transporter {
        identity: Default::default(),
        license_number: "LIC-1".to_string(),
        license_expiry: "2030-01-01".to_string(),
        insurance_number: "INS-1".to_string(),
    };
    let outcome = client.register(request).await.unwrap();

    assert_eq!(outcome.status, 202);
    assert_eq!(outcome.data["id"], 7);
}

#[tokio::test]
async fn test_create_request_sends_bearer_and_dimensions() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/shipment-requests"))
        .and(header("authorization", "Bearer tok-client"))
        .and(body_partial_json(json!({
            "originCity": "Paris",
            "destinationCity": "Lyon",
            "dimensions": [120.0, 80.0, 100.0],
            "fragile": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 55,
            "description": "Transport de meubles",
            "origin": { "city": "Paris" },
            "destination": { "city": "Lyon" },
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_shipment_request("tok-client", payload()).await.unwrap();

    assert_eq!(created.id, 55);
    assert_eq!(created.origin.city, "Paris");
    assert_eq!(created.title(), "Transport de meubles");
}

#[tokio::test]
async fn test_available_shipments_pass_city_filter() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/shipments/available"))
        .and(query_param("city", "Lyon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "origin": { "city": "Paris" }, "destination": { "city": "Lyon" }, "weight": "250" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let available = client
        .list_available_shipments("tok", Some("  Lyon ".to_string()))
        .await
        .unwrap();

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].weight, Some(250.0));
}

#[tokio::test]
async fn test_offer_posts_to_offers_endpoint() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/shipments/offers"))
        .and(header("authorization", "Bearer tok-transporter"))
        .and(body_partial_json(json!({ "shipmentRequestId": 12, "pricePerKg": 1.5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "shipmentRequestId": 12,
            "pricePerKg": 1.5,
            "availableWeight": 100,
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let offer = client
        .create_offer(
            "tok-transporter",
            CreateOfferRequest {
                shipment_request_id: 12,
                price_per_kg: 1.5,
                description: "Offre pour la demande 12".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(offer.id, 9);
    assert_eq!(offer.display_price(), "150.00€");
}

#[tokio::test]
async fn test_profile_update_sends_only_present_fields() {
    let (server, client) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/auth/profile"))
        .and(body_json(json!({ "phone": "06 12 34 56 78" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "firstName": "Jean",
            "lastName": "Dupont",
            "email": "client@transporteasy.fr",
            "phone": "06 12 34 56 78"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        phone: Some("06 12 34 56 78".to_string()),
        ..Default::default()
    };
    let profile = client.update_profile("tok", update).await.unwrap();

    assert_eq!(profile.phone, "06 12 34 56 78");
    assert_eq!(profile.address, "");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new("http://127.0.0.1:9", Some(std::time::Duration::from_secs(2)));

    let err = client.get_profile("tok").await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}
