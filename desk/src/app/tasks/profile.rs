//! # Profile Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::ProfileUpdate;
use tracing::{info, warn};

use super::{spawn_traced, TaskContext};
use crate::app::events::{AppEvent, TaggedEvent};
use crate::app::state::AppState;

pub(crate) fn fetch_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<TaggedEvent>) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    state.write().profile.loading = true;

    spawn_traced("fetch_profile", ctx.mount_id, async move {
        let result = ctx.api.get_profile(&ctx.token).await;
        if let Err(e) = &result {
            warn!(error = %e, "Profile fetch failed");
        }
        ctx.send(AppEvent::ProfileLoaded(result)).await;
    });
}

pub(crate) fn update_profile(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<TaggedEvent>,
    update: ProfileUpdate,
) {
    let Some(ctx) = TaskContext::capture(&state, &event_tx) else {
        return;
    };
    state.write().profile.saving = true;

    spawn_traced("update_profile", ctx.mount_id, async move {
        let password_change = update.password.is_some();
        let result = ctx.api.update_profile(&ctx.token, update).await;
        match &result {
            Ok(_) => info!(password_change, "Profile updated"),
            Err(e) => warn!(error = %e, "Profile update failed"),
        }
        ctx.send(AppEvent::ProfileUpdated(result)).await;
    });
}
