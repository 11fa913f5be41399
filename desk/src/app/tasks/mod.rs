//! # Async Tasks
//!
//! Authenticated background work. Each task captures the API handle, the
//! bearer token and the mount counter on the UI thread, then awaits its calls
//! one after the other (mutation first, refetch second) and reports through
//! the event channel.

pub mod offers;
pub mod profile;
pub mod shipments;

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tracing::Instrument;

use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::handlers::navigation;
use crate::app::state::AppState;
use crate::core::service::ApiService;

/// Everything a task needs, captured before spawning
pub(crate) struct TaskContext {
    pub api: Arc<dyn ApiService>,
    pub token: String,
    pub mount_id: u64,
    pub event_tx: Sender<TaggedEvent>,
}

impl TaskContext {
    /// Capture the context, or redirect to login when no session is stored.
    ///
    /// Returning `None` means no request may be issued.
    pub fn capture(state: &Arc<RwLock<AppState>>, event_tx: &Sender<TaggedEvent>) -> Option<Self> {
        let captured = {
            let state = state.read();
            state.session.token().map(|token| Self {
                api: state.api.clone(),
                token,
                mount_id: state.mount_id,
                event_tx: event_tx.clone(),
            })
        };

        if captured.is_none() {
            navigation::redirect_to_login(state.clone());
        }
        captured
    }

    pub async fn send(&self, event: AppEvent) {
        send_tagged(&self.event_tx, self.mount_id, event).await;
    }
}

/// Deliver `event` for `mount_id`; a closed channel is logged, not propagated.
pub(crate) async fn send_tagged(event_tx: &Sender<TaggedEvent>, mount_id: u64, event: AppEvent) {
    let name = event.name();
    if event_tx.send(TaggedEvent::new(mount_id, event)).await.is_err() {
        tracing::warn!(event = name, "Event channel closed, result dropped");
    }
}

/// Spawn `work` inside a span carrying a fresh trace id.
pub(crate) fn spawn_traced<F>(operation: &'static str, mount_id: u64, work: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let trace_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("task", operation, %trace_id, mount_id);
    tokio::spawn(work.instrument(span));
}
