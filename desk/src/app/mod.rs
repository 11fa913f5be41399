//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the egui screens, the background tasks
//! and the shared application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()        drains task results every frame         │
//! │  - handle_event()   applies one result (stale ones dropped) │
//! │  - submit_*/select_* user actions                           │
//! │               │                                             │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)         │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//!                         │ TaggedEvent { mount_id, event }
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  tasks::shipments / tasks::offers / tasks::profile          │
//! │  each awaits its calls in order: mutation, then refetch     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Results
//!
//! Every route change increments `AppState::mount_id`. Tasks capture the value
//! when dispatched and tag their events with it; [`App::handle_event`] drops any
//! event whose tag no longer matches, so a late response never writes into a
//! page the user left.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use freight_desk::app::{App, Route};
//! use freight_desk::services::{mock::MockBackend, session::SessionStore};
//!
//! let _guard = freight_desk::utils::runtime::TOKIO_RT.enter();
//! let mut app = App::new(Arc::new(MockBackend::with_demo_data()), SessionStore::in_memory());
//!
//! app.navigate(Route::Login);
//! // In the egui update loop:
//! app.on_tick();
//! ```

pub mod events;
pub mod offer_dialog;
pub mod state;

mod event_handler;
mod handlers;
mod tasks;

pub use event_handler::{
    LOGIN_SUCCESS, OFFER_SUBMITTED, PROFILE_UPDATED, REQUEST_CREATED, SIGNUP_CHECK_EMAIL,
    SIGNUP_REDIRECTING, SIGNUP_REDIRECT_DELAY,
};
pub use events::{AppEvent, TaggedEvent};
pub use handlers::navigation::{LOGIN_REQUIRED, LOGOUT_SUCCESS, SESSION_EXPIRED};
pub use offer_dialog::OfferDialog;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::config::{BackendMode, DeskConfig};
use crate::core::service::ApiService;
use crate::core::Result;
use crate::services::api::ApiClient;
use crate::services::mock::MockBackend;
use crate::services::session::{FileStore, SessionStore};

/// Main application orchestrator.
///
/// Screens read a snapshot of [`AppState`], copy the form fields they edit,
/// write them back through `state.write()` and call the action methods below.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; background tasks write to it too.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<TaggedEvent>,

    /// Cloned into every background task.
    event_tx: Sender<TaggedEvent>,
}

impl App {
    /// Create an application over an injected data source and session store.
    ///
    /// Must be called inside a Tokio runtime context: actions spawn tasks.
    pub fn new(api: Arc<dyn ApiService>, session: SessionStore) -> Self {
        let (event_tx, event_rx) = unbounded();
        let restored = session.get();

        let app = App {
            state: Arc::new(RwLock::new(AppState::new(api, session))),
            event_rx,
            event_tx,
        };

        match restored {
            Some(session) => tracing::info!(
                user_id = %session.user_id,
                user_type = ?session.user_type,
                "App state initialized with a persisted session"
            ),
            None => tracing::info!("App state initialized without session"),
        }
        app
    }

    /// Build the application the configuration asks for.
    ///
    /// `live` talks HTTP and persists the session to `session_file`; `mock`
    /// serves demo data from memory and keeps the session in memory.
    pub fn from_config(config: &DeskConfig) -> Result<Self> {
        let app = match config.backend {
            BackendMode::Live => {
                let store = FileStore::open(&config.session_file)?;
                tracing::info!(
                    base_url = %config.api_base_url,
                    session_file = %config.session_file.display(),
                    "Using live API backend"
                );
                App::new(
                    Arc::new(ApiClient::from_config(config)),
                    SessionStore::new(Arc::new(store)),
                )
            }
            BackendMode::Mock => {
                tracing::info!("Using in-memory mock backend");
                App::new(Arc::new(MockBackend::with_demo_data()), SessionStore::in_memory())
            }
        };
        Ok(app)
    }

    /// Called every frame to apply task results.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events from event channel");
        }
    }

    /// Apply one task result.
    ///
    /// Delegates to the event_handler module; events tagged for an older mount
    /// are discarded.
    pub fn handle_event(&mut self, event: TaggedEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Take the notifications queued since the last frame.
    pub fn take_notifications(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    pub fn route(&self) -> Route {
        self.state.read().route
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Switch route. Dashboards redirect to login without a session.
    pub fn navigate(&mut self, route: Route) {
        handlers::navigation::handle_navigate(self.state.clone(), self.event_tx.clone(), route);
    }

    /// Navigate by path such as `/request/12`; unknown paths land on home.
    pub fn navigate_path(&mut self, path: &str) {
        let route = Route::from_path(path).unwrap_or_else(|| {
            tracing::debug!(path, "Unknown path, showing home");
            Route::Home
        });
        self.navigate(route);
    }

    /// Handle logout button click
    pub fn logout(&mut self) {
        handlers::navigation::handle_logout(self.state.clone());
    }

    /// Handle login button click
    pub fn submit_login(&mut self) {
        handlers::auth::handle_login_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Handle signup button click
    pub fn submit_registration(&mut self) {
        handlers::auth::handle_register_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn select_client_tab(&mut self, tab: ClientTab) {
        handlers::client::handle_tab_change(self.state.clone(), self.event_tx.clone(), tab);
    }

    /// Reload whatever the active client tab shows.
    pub fn refresh_client_tab(&mut self) {
        handlers::client::load_active_tab(self.state.clone(), self.event_tx.clone());
    }

    /// Validate the new-request draft and post it
    pub fn submit_shipment_request(&mut self) {
        handlers::client::handle_create_request_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn select_transporter_tab(&mut self, tab: TransporterTab) {
        handlers::transporter::handle_tab_change(self.state.clone(), self.event_tx.clone(), tab);
    }

    /// Search available shipments with the city filter currently typed
    pub fn apply_city_filter(&mut self) {
        handlers::transporter::handle_city_filter_apply(self.state.clone(), self.event_tx.clone());
    }

    pub fn open_offer_dialog(&mut self, request_id: i64) {
        handlers::transporter::handle_offer_open(self.state.clone(), request_id);
    }

    pub fn cancel_offer_dialog(&mut self) {
        handlers::transporter::handle_offer_cancel(self.state.clone());
    }

    pub fn submit_offer(&mut self) {
        handlers::transporter::handle_offer_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Reformat and validate the phone field as the user types
    pub fn change_profile_phone(&mut self, raw: &str) {
        handlers::profile::handle_phone_change(self.state.clone(), raw);
    }

    pub fn submit_profile(&mut self) {
        handlers::profile::handle_profile_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn select_admin_tab(&mut self, tab: AdminTab) {
        self.state.write().admin.tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::AppEvent;
    use shared::dto::UserType;

    fn app() -> App {
        App::new(Arc::new(MockBackend::with_demo_data()), SessionStore::in_memory())
    }

    #[test]
    fn test_dashboard_without_session_redirects_to_login() {
        let mut app = app();
        app.navigate(Route::ClientDashboard);

        assert_eq!(app.route(), Route::Login);
        let notices = app.take_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, LOGIN_REQUIRED);
        assert!(app.take_notifications().is_empty());
    }

    #[test]
    fn test_stale_event_is_discarded() {
        let mut app = app();
        app.navigate(Route::Login);
        let stale_mount = app.state.read().mount_id;
        app.navigate(Route::Register);

        app.handle_event(TaggedEvent::new(
            stale_mount,
            AppEvent::LoginResult(Err(crate::core::AppError::Auth("Email ou mot de passe incorrect".into()))),
        ));

        let state = app.state.read();
        assert_eq!(state.route, Route::Register);
        assert!(state.auth.login_error.is_none());
        assert!(state.pending_notifications.is_empty());
    }

    #[test]
    fn test_login_validation_is_local() {
        let mut app = app();
        app.navigate(Route::Login);
        app.submit_login();

        let state = app.state.read();
        assert!(!state.auth.login_pending);
        assert!(state.auth.login_error.is_some());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut app = app();
        app.state
            .read()
            .session
            .set("tok", "101", UserType::Client, "client@transporteasy.fr")
            .unwrap();

        app.logout();

        let state = app.state.read();
        assert!(state.session.get().is_none());
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.pending_notifications[0].message, LOGOUT_SUCCESS);
    }

    #[test]
    fn test_unknown_path_lands_on_home() {
        let mut app = app();
        app.navigate_path("/request/7");
        assert_eq!(app.route(), Route::RequestDetail(7));
        app.navigate_path("/nowhere");
        assert_eq!(app.route(), Route::Home);
    }

    #[test]
    fn test_admin_dashboard_mounts_snapshot() {
        let mut app = app();
        app.state
            .read()
            .session
            .set("tok", "103", UserType::Admin, "admin@transporteasy.fr")
            .unwrap();

        app.navigate(Route::AdminDashboard);
        app.select_admin_tab(AdminTab::Reports);

        let state = app.state.read();
        assert_eq!(state.route, Route::AdminDashboard);
        assert_eq!(state.admin.tab, AdminTab::Reports);
        assert!(!state.admin.snapshot.reported_issues.is_empty());
    }
}
