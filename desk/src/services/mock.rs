//! # Mock Backend
//!
//! In-memory implementation of [`ApiService`], used when
//! `FREIGHT_DESK_BACKEND=mock` and as the data source of the flow tests.
//!
//! - Seeded with demo accounts, requests and offers ([`MockBackend::with_demo_data`])
//! - Records every call ([`MockBackend::calls`]) so tests can assert on payloads
//! - Can force any operation to fail ([`MockBackend::fail`]), e.g. with a 401
//! - Optional artificial latency to exercise loading and stale-result paths

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{
    AdminRequestRow, AdminSnapshot, AdminUserRow, AuthUser, ClientSummary, CreateOfferRequest,
    CreateShipmentRequest, Location, LoginResponse, Offer, OfferRequestSummary, OfferStatus,
    PlatformStats, ProfileUpdate, ReportedIssue, RequestStatus, ShipmentRequest, SignupOutcome,
    SignupRequest, UserProfile, UserType,
};

use crate::core::service::ApiService;
use crate::core::{AppError, Result};

/// Operations that can be forced to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    Login,
    Register,
    ListShipmentRequests,
    CreateShipmentRequest,
    ListAvailableShipments,
    ListMyOffers,
    CreateOffer,
    GetProfile,
    UpdateProfile,
}

/// A recorded call, with the payload it carried
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Login { email: String },
    Register(SignupRequest),
    ListShipmentRequests,
    CreateShipmentRequest(CreateShipmentRequest),
    ListAvailableShipments { city: Option<String> },
    ListMyOffers,
    CreateOffer(CreateOfferRequest),
    GetProfile,
    UpdateProfile(ProfileUpdate),
}

impl MockCall {
    pub fn operation(&self) -> MockOperation {
        match self {
            MockCall::Login { .. } => MockOperation::Login,
            MockCall::Register(_) => MockOperation::Register,
            MockCall::ListShipmentRequests => MockOperation::ListShipmentRequests,
            MockCall::CreateShipmentRequest(_) => MockOperation::CreateShipmentRequest,
            MockCall::ListAvailableShipments { .. } => MockOperation::ListAvailableShipments,
            MockCall::ListMyOffers => MockOperation::ListMyOffers,
            MockCall::CreateOffer(_) => MockOperation::CreateOffer,
            MockCall::GetProfile => MockOperation::GetProfile,
            MockCall::UpdateProfile(_) => MockOperation::UpdateProfile,
        }
    }
}

#[derive(Debug, Clone)]
struct MockAccount {
    id: i64,
    password: String,
    user_type: UserType,
    profile: UserProfile,
}

impl MockAccount {
    fn summary(&self) -> ClientSummary {
        ClientSummary {
            first_name: self.profile.first_name.clone(),
            last_name: self.profile.last_name.clone(),
            rating: Some(4.5),
        }
    }
}

#[derive(Debug, Default)]
struct MockData {
    accounts: Vec<MockAccount>,
    requests: Vec<ShipmentRequest>,
    offers: Vec<Offer>,
    failures: HashMap<MockOperation, AppError>,
    calls: Vec<MockCall>,
    next_id: i64,
    signup_status: u16,
}

impl MockData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn account_for_token(&self, token: &str) -> Result<&MockAccount> {
        token
            .strip_prefix("mock-token-")
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| self.accounts.iter().find(|a| a.id == id))
            .ok_or_else(|| AppError::Auth("Unauthorized".to_string()))
    }

    fn account_for_token_mut(&mut self, token: &str) -> Result<&mut MockAccount> {
        let id = self.account_for_token(token)?.id;
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::Auth("Unauthorized".to_string()))
    }
}

/// In-memory marketplace
pub struct MockBackend {
    data: Mutex<MockData>,
    latency: Option<Duration>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Empty backend: no accounts, no requests. Signup answers `201`.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(MockData {
                next_id: 100,
                signup_status: 201,
                ..Default::default()
            }),
            latency: None,
        }
    }

    /// Backend seeded with one account per role and a few open requests.
    ///
    /// | Email | Password | Role |
    /// |---|---|---|
    /// | `client@transporteasy.fr` | `client123` | client |
    /// | `transporteur@transporteasy.fr` | `transport123` | transporter |
    /// | `admin@transporteasy.fr` | `admin123` | admin |
    pub fn with_demo_data() -> Self {
        let backend = Self::new();
        let client = backend.add_account(
            "client@transporteasy.fr",
            "client123",
            UserType::Client,
            "Jean",
            "Dupont",
        );
        backend.add_account(
            "transporteur@transporteasy.fr",
            "transport123",
            UserType::Transporter,
            "Luc",
            "Bernard",
        );
        backend.add_account("admin@transporteasy.fr", "admin123", UserType::Admin, "Alice", "Martin");

        let now = lib_utils::format_time(lib_utils::now_utc());
        let seeds = [
            ("Transport de meubles", "Paris", "Lyon", 250.0, 8.0, 180.0, "465"),
            ("Livraison matériel informatique", "Marseille", "Nice", 40.0, 0.5, 95.0, "200"),
            ("Transport électroménager", "Toulouse", "Bordeaux", 120.0, 2.0, 120.0, "245"),
        ];
        {
            let mut data = backend.data.lock();
            let owner = data
                .accounts
                .iter()
                .find(|a| a.id == client)
                .map(MockAccount::summary)
                .unwrap_or_default();
            for (title, from, to, weight, volume, price, distance) in seeds {
                let id = data.next_id();
                data.requests.push(ShipmentRequest {
                    id,
                    description: Some(title.to_string()),
                    origin: Location { city: from.to_string(), country: "France".to_string(), ..Default::default() },
                    destination: Location { city: to.to_string(), country: "France".to_string(), ..Default::default() },
                    preferred_date: Some("2024-02-01".to_string()),
                    weight: Some(weight),
                    volume: Some(volume),
                    dimensions: vec![120.0, 80.0, 100.0],
                    max_price: Some(price),
                    client: Some(owner.clone()),
                    distance: Some(format!("{distance} km")),
                    created_at: Some(now.clone()),
                    ..Default::default()
                });
            }
        }
        backend
    }

    /// Add an account and return its id.
    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
        first_name: &str,
        last_name: &str,
    ) -> i64 {
        let mut data = self.data.lock();
        let id = data.next_id();
        data.accounts.push(MockAccount {
            id,
            password: password.to_string(),
            user_type,
            profile: UserProfile {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                ..Default::default()
            },
        });
        id
    }

    /// Bearer token the backend accepts for account `id`.
    pub fn token_for(id: i64) -> String {
        format!("mock-token-{id}")
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Status code returned by successful signups.
    pub fn set_signup_status(&self, status: u16) {
        self.data.lock().signup_status = status;
    }

    /// Make `operation` fail with `error` until [`MockBackend::recover`] is called.
    pub fn fail(&self, operation: MockOperation, error: AppError) {
        self.data.lock().failures.insert(operation, error);
    }

    pub fn recover(&self, operation: MockOperation) {
        self.data.lock().failures.remove(&operation);
    }

    pub fn seed_request(&self, request: ShipmentRequest) {
        self.data.lock().requests.push(request);
    }

    pub fn seed_offer(&self, offer: Offer) {
        self.data.lock().offers.push(offer);
    }

    pub fn set_profile(&self, account_id: i64, profile: UserProfile) {
        if let Some(account) = self.data.lock().accounts.iter_mut().find(|a| a.id == account_id) {
            account.profile = profile;
        }
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.data.lock().calls.clone()
    }

    pub fn call_count(&self, operation: MockOperation) -> usize {
        self.data
            .lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Record the call, then apply latency and forced failures.
    async fn enter(&self, call: MockCall) -> Result<()> {
        let operation = call.operation();
        self.data.lock().calls.push(call);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.data.lock().failures.get(&operation) {
            Some(error) => {
                tracing::debug!(?operation, error = %error, "Mock backend forced failure");
                Err(error.clone())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ApiService for MockBackend {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse> {
        self.enter(MockCall::Login { email: email.clone() }).await?;
        let data = self.data.lock();
        let account = data
            .accounts
            .iter()
            .find(|a| a.profile.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .ok_or_else(|| AppError::Auth("Email ou mot de passe incorrect".to_string()))?;

        Ok(LoginResponse {
            access_token: Self::token_for(account.id),
            user: AuthUser {
                id: account.id.to_string(),
                email: account.profile.email.clone(),
                user_type: account.user_type,
                status: Some("ACTIVE".to_string()),
            },
        })
    }

    async fn register(&self, request: SignupRequest) -> Result<SignupOutcome> {
        self.enter(MockCall::Register(request.clone())).await?;
        let mut data = self.data.lock();
        let identity = request.identity();
        if data
            .accounts
            .iter()
            .any(|a| a.profile.email.eq_ignore_ascii_case(&identity.email))
        {
            return Err(AppError::Api {
                status: 409,
                message: "Cet email est déjà utilisé".to_string(),
            });
        }

        let id = data.next_id();
        let address = match &request {
            SignupRequest::Client { address, .. } => address.clone(),
            SignupRequest::Transporter { .. } => String::new(),
        };
        data.accounts.push(MockAccount {
            id,
            password: identity.password.clone(),
            user_type: request.user_type(),
            profile: UserProfile {
                first_name: identity.first_name.clone(),
                last_name: identity.last_name.clone(),
                email: identity.email.clone(),
                phone: identity.phone.clone(),
                address,
            },
        });

        Ok(SignupOutcome {
            data: serde_json::json!({ "id": id, "email": identity.email, "type": request.user_type() }),
            status: data.signup_status,
        })
    }

    async fn list_shipment_requests(&self, token: &str) -> Result<Vec<ShipmentRequest>> {
        self.enter(MockCall::ListShipmentRequests).await?;
        let data = self.data.lock();
        let owner = data.account_for_token(token)?.summary();
        Ok(data
            .requests
            .iter()
            .filter(|r| r.client.as_ref() == Some(&owner))
            .cloned()
            .collect())
    }

    async fn create_shipment_request(
        &self,
        token: &str,
        payload: CreateShipmentRequest,
    ) -> Result<ShipmentRequest> {
        self.enter(MockCall::CreateShipmentRequest(payload.clone())).await?;
        let mut data = self.data.lock();
        let owner = data.account_for_token(token)?.summary();
        let id = data.next_id();
        let request = ShipmentRequest {
            id,
            description: payload.description,
            origin: Location {
                city: payload.origin_city,
                address: payload.origin_address,
                zipcode: payload.origin_zipcode,
                country: payload.origin_country,
                latitude: payload.origin_latitude,
                longitude: payload.origin_longitude,
            },
            destination: Location {
                city: payload.destination_city,
                address: payload.destination_address,
                zipcode: payload.destination_zipcode,
                country: payload.destination_country,
                latitude: payload.destination_latitude,
                longitude: payload.destination_longitude,
            },
            preferred_date: Some(payload.preferred_date).filter(|d| !d.is_empty()),
            weight: payload.weight,
            volume: payload.volume,
            dimensions: payload.dimensions,
            fragile: payload.fragile,
            refrigerated: payload.refrigerated,
            max_price: payload.max_price,
            status: RequestStatus::Pending,
            offer_count: 0,
            client: Some(owner),
            distance: None,
            created_at: Some(lib_utils::format_time(lib_utils::now_utc())),
        };
        data.requests.push(request.clone());
        Ok(request)
    }

    async fn list_available_shipments(
        &self,
        token: &str,
        city: Option<String>,
    ) -> Result<Vec<ShipmentRequest>> {
        self.enter(MockCall::ListAvailableShipments { city: city.clone() }).await?;
        let data = self.data.lock();
        data.account_for_token(token)?;
        let needle = city.map(|c| c.trim().to_lowercase()).filter(|c| !c.is_empty());
        Ok(data
            .requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .filter(|r| match &needle {
                Some(city) => {
                    r.origin.city.to_lowercase().contains(city)
                        || r.destination.city.to_lowercase().contains(city)
                }
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn list_my_offers(&self, token: &str) -> Result<Vec<Offer>> {
        self.enter(MockCall::ListMyOffers).await?;
        let data = self.data.lock();
        data.account_for_token(token)?;
        Ok(data.offers.clone())
    }

    async fn create_offer(&self, token: &str, payload: CreateOfferRequest) -> Result<Offer> {
        self.enter(MockCall::CreateOffer(payload.clone())).await?;
        let mut data = self.data.lock();
        data.account_for_token(token)?;
        let id = data.next_id();
        let request = data
            .requests
            .iter_mut()
            .find(|r| r.id == payload.shipment_request_id)
            .ok_or_else(|| AppError::Api {
                status: 404,
                message: "Demande introuvable".to_string(),
            })?;
        request.offer_count += 1;

        let offer = Offer {
            id,
            shipment_request_id: request.id,
            price_per_kg: payload.price_per_kg,
            available_weight: request.weight.unwrap_or(0.0),
            status: OfferStatus::Pending,
            departure_date: request.preferred_date.clone(),
            description: Some(payload.description),
            shipment_request: Some(OfferRequestSummary {
                id: Some(request.id),
                description: request.description.clone(),
                client: request.client.clone(),
            }),
        };
        data.offers.push(offer.clone());
        Ok(offer)
    }

    async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        self.enter(MockCall::GetProfile).await?;
        let data = self.data.lock();
        Ok(data.account_for_token(token)?.profile.clone())
    }

    async fn update_profile(&self, token: &str, update: ProfileUpdate) -> Result<UserProfile> {
        self.enter(MockCall::UpdateProfile(update.clone())).await?;
        let mut data = self.data.lock();
        let account = data.account_for_token_mut(token)?;
        update.apply_to(&mut account.profile);
        if let Some(password) = &update.password {
            account.password = password.clone();
        }
        Ok(account.profile.clone())
    }
}

/// Snapshot shown by the admin console.
pub fn demo_admin_snapshot() -> AdminSnapshot {
    let user = |id, name: &str, email: &str, kind: &str, status: &str, join_date: &str| AdminUserRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
        join_date: join_date.to_string(),
    };
    let request = |id, title: &str, client: &str, from: &str, to: &str, status: &str, price, date: &str| {
        AdminRequestRow {
            id,
            title: title.to_string(),
            client: client.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            status: status.to_string(),
            price,
            date: date.to_string(),
        }
    };
    let issue = |id, kind: &str, reporter: &str, reported: &str, status: &str, priority: &str, date: &str| {
        ReportedIssue {
            id,
            kind: kind.to_string(),
            reporter: reporter.to_string(),
            reported: reported.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            date: date.to_string(),
        }
    };

    AdminSnapshot {
        stats: PlatformStats {
            total_users: 2847,
            active_transporters: 456,
            total_requests: 1234,
            completed_transports: 987,
            total_revenue: 45678.0,
            monthly_growth: 12.5,
        },
        recent_users: vec![
            user(1, "Jean Dupont", "jean.dupont@email.com", "Client", "Actif", "2024-01-10"),
            user(2, "Transport Express SARL", "contact@transport-express.fr", "Transporteur", "En attente", "2024-01-12"),
            user(3, "Marie Martin", "marie.martin@email.com", "Client", "Actif", "2024-01-15"),
        ],
        recent_requests: vec![
            request(1, "Transport de meubles", "Jean Dupont", "Paris", "Lyon", "En cours", 180.0, "2024-01-15"),
            request(2, "Livraison matériel informatique", "TechCorp", "Marseille", "Nice", "Terminé", 95.0, "2024-01-14"),
            request(3, "Transport électroménager", "Pierre Durand", "Toulouse", "Bordeaux", "Annulé", 120.0, "2024-01-13"),
        ],
        reported_issues: vec![
            issue(1, "Retard de livraison", "Marie Martin", "Transport Express SARL", "En cours", "Moyenne", "2024-01-16"),
            issue(2, "Marchandise endommagée", "Jean Dupont", "Livraison Rapide", "Résolu", "Haute", "2024-01-14"),
        ],
    }
}
