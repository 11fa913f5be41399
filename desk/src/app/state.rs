//! # Application State Types
//!
//! Routes, dashboard tabs and the per-page state each route owns.

use std::sync::Arc;

use shared::dto::{AdminSnapshot, Offer, ShipmentRequest, UserType};

use crate::app::offer_dialog::OfferDialog;
use crate::core::service::ApiService;
use crate::forms::{LoginForm, ProfileForm, RegistrationDraft, ShipmentDraft};
use crate::services::session::SessionStore;

/// Navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    ClientDashboard,
    TransporterDashboard,
    AdminDashboard,
    /// Placeholder detail view of one shipment request
    RequestDetail(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ClientDashboard => "/client-dashboard".to_string(),
            Route::TransporterDashboard => "/transporter-dashboard".to_string(),
            Route::AdminDashboard => "/admin-dashboard".to_string(),
            Route::RequestDetail(id) => format!("/request/{id}"),
        }
    }

    /// Resolve a path such as `/request/12`. Unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/client-dashboard" => Some(Route::ClientDashboard),
            "/transporter-dashboard" => Some(Route::TransporterDashboard),
            "/admin-dashboard" => Some(Route::AdminDashboard),
            other => other
                .strip_prefix("/request/")
                .and_then(|id| id.parse().ok())
                .map(Route::RequestDetail),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::Login => "Connexion",
            Route::Register => "Inscription",
            Route::ClientDashboard => "Espace client",
            Route::TransporterDashboard => "Espace transporteur",
            Route::AdminDashboard => "Administration",
            Route::RequestDetail(_) => "Détail de la demande",
        }
    }

    /// Dashboards are only reachable with a session.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::ClientDashboard | Route::TransporterDashboard | Route::AdminDashboard
        )
    }

    /// Landing dashboard for a role.
    pub fn dashboard_for(user_type: UserType) -> Route {
        match user_type {
            UserType::Client => Route::ClientDashboard,
            UserType::Transporter => Route::TransporterDashboard,
            UserType::Admin => Route::AdminDashboard,
        }
    }
}

/// Active tab of the client dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientTab {
    #[default]
    Requests,
    NewRequest,
    Profile,
}

impl ClientTab {
    pub fn all() -> &'static [ClientTab] {
        &[ClientTab::Requests, ClientTab::NewRequest, ClientTab::Profile]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ClientTab::Requests => "requests",
            ClientTab::NewRequest => "new-request",
            ClientTab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ClientTab::Requests => "Mes demandes",
            ClientTab::NewRequest => "Nouvelle demande",
            ClientTab::Profile => "Mon profil",
        }
    }
}

/// Active tab of the transporter dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransporterTab {
    #[default]
    Available,
    MyOffers,
    Active,
    Profile,
}

impl TransporterTab {
    pub fn all() -> &'static [TransporterTab] {
        &[
            TransporterTab::Available,
            TransporterTab::MyOffers,
            TransporterTab::Active,
            TransporterTab::Profile,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            TransporterTab::Available => "available",
            TransporterTab::MyOffers => "my-offers",
            TransporterTab::Active => "active",
            TransporterTab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TransporterTab::Available => "Demandes disponibles",
            TransporterTab::MyOffers => "Mes offres",
            TransporterTab::Active => "Transports en cours",
            TransporterTab::Profile => "Mon profil",
        }
    }
}

/// Active tab of the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Requests,
    Transactions,
    Reports,
    Analytics,
}

impl AdminTab {
    pub fn all() -> &'static [AdminTab] {
        &[
            AdminTab::Overview,
            AdminTab::Users,
            AdminTab::Requests,
            AdminTab::Transactions,
            AdminTab::Reports,
            AdminTab::Analytics,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Vue d'ensemble",
            AdminTab::Users => "Utilisateurs",
            AdminTab::Requests => "Demandes",
            AdminTab::Transactions => "Transactions",
            AdminTab::Reports => "Signalements",
            AdminTab::Analytics => "Analyses",
        }
    }
}

/// Login and registration pages
#[derive(Debug, Clone, Default)]
pub struct AuthPages {
    pub login: LoginForm,
    pub login_error: Option<String>,
    pub login_pending: bool,
    pub registration: RegistrationDraft,
    pub registration_error: Option<String>,
    pub registration_pending: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ClientDashboardState {
    pub tab: ClientTab,
    pub requests: Vec<ShipmentRequest>,
    pub loading: bool,
    pub draft: ShipmentDraft,
    pub submitting: bool,
    /// Inline validation error of the creation form
    pub form_error: Option<String>,
    /// Last failure of the request list, shown as a banner
    pub list_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TransporterDashboardState {
    pub tab: TransporterTab,
    pub available: Vec<ShipmentRequest>,
    pub offers: Vec<Offer>,
    pub city_filter: String,
    pub available_loading: bool,
    pub available_error: Option<String>,
    pub offers_loading: bool,
    pub offers_error: Option<String>,
    pub offer_dialog: OfferDialog,
}

/// Profile tab, shared by the client and transporter dashboards
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub snapshot: AdminSnapshot,
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Notification queued for the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Complete application state
#[derive(Clone)]
pub struct AppState {
    pub route: Route,
    /// Incremented on every route change; results dispatched under an older
    /// value are discarded.
    pub mount_id: u64,
    pub session: SessionStore,
    pub api: Arc<dyn ApiService>,
    pub auth: AuthPages,
    pub client: ClientDashboardState,
    pub transporter: TransporterDashboardState,
    pub profile: ProfileState,
    pub admin: AdminState,
    /// Drained by the UI each frame
    pub pending_notifications: Vec<Notice>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>, session: SessionStore) -> Self {
        Self {
            route: Route::Home,
            mount_id: 0,
            session,
            api,
            auth: AuthPages::default(),
            client: ClientDashboardState::default(),
            transporter: TransporterDashboardState::default(),
            profile: ProfileState::default(),
            admin: AdminState::default(),
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Session email, used for the greeting and as profile fallback.
    pub fn session_email(&self) -> String {
        self.session.get().map(|s| s.email).unwrap_or_default()
    }

    /// Drop every page's data; used when the session ends.
    pub fn reset_pages(&mut self) {
        self.client = ClientDashboardState::default();
        self.transporter = TransporterDashboardState::default();
        self.profile = ProfileState::default();
        self.admin = AdminState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_roundtrip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::ClientDashboard,
            Route::TransporterDashboard,
            Route::AdminDashboard,
            Route::RequestDetail(12),
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/request/abc"), None);
        assert_eq!(Route::from_path("/unknown"), None);
    }

    #[test]
    fn test_dashboards_require_session() {
        assert!(Route::ClientDashboard.requires_session());
        assert!(Route::AdminDashboard.requires_session());
        assert!(!Route::Login.requires_session());
        assert!(!Route::RequestDetail(1).requires_session());
        assert_eq!(Route::dashboard_for(UserType::Transporter), Route::TransporterDashboard);
    }

    #[test]
    fn test_tab_keys() {
        let keys: Vec<_> = ClientTab::all().iter().map(ClientTab::key).collect();
        assert_eq!(keys, ["requests", "new-request", "profile"]);
        assert_eq!(TransporterTab::MyOffers.key(), "my-offers");
    }
}
