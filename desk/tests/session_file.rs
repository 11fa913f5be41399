//! Session persistence across restarts.

use std::sync::Arc;

use freight_desk::app::{App, Route};
use freight_desk::config::{BackendMode, DeskConfig};
use freight_desk::services::mock::MockBackend;
use freight_desk::services::session::{FileStore, SessionStore, KEY_ACCESS_TOKEN, KEY_USER_TYPE};
use shared::dto::UserType;

fn store_at(path: &std::path::Path) -> SessionStore {
    SessionStore::new(Arc::new(FileStore::open(path).unwrap()))
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    store_at(&path)
        .set("tok-9", "9", UserType::Transporter, "luc@transporteasy.fr")
        .unwrap();

    let restored = store_at(&path).get().unwrap();
    assert_eq!(restored.access_token, "tok-9");
    assert_eq!(restored.user_id, "9");
    assert_eq!(restored.user_type, Some(UserType::Transporter));
    assert_eq!(restored.email, "luc@transporteasy.fr");

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[KEY_ACCESS_TOKEN], "tok-9");
    assert_eq!(raw[KEY_USER_TYPE], "transporter");
}

#[test]
fn test_clear_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let store = store_at(&path);
    store.set("tok", "1", UserType::Client, "a@b.fr").unwrap();
    store.clear().unwrap();

    assert!(store_at(&path).get().is_none());
}

#[test]
fn test_missing_or_empty_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(store_at(&missing).get().is_none());

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "").unwrap();
    assert!(store_at(&empty).get().is_none());
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(FileStore::open(&path).is_err());
}

#[test]
fn test_unknown_role_keeps_session_without_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(
        &path,
        r#"{"accessToken":"tok","userId":"5","userType":"superuser","userEmail":"x@y.fr"}"#,
    )
    .unwrap();

    let session = store_at(&path).get().unwrap();
    assert_eq!(session.user_type, None);
}

#[tokio::test]
async fn test_restored_session_opens_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    store_at(&path)
        .set(&MockBackend::token_for(101), "101", UserType::Client, "client@transporteasy.fr")
        .unwrap();

    let mut app = App::new(Arc::new(MockBackend::with_demo_data()), store_at(&path));
    app.navigate(Route::ClientDashboard);

    assert_eq!(app.route(), Route::ClientDashboard);
    assert!(app.state.read().client.loading);
}

#[test]
fn test_live_config_opens_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    store_at(&path)
        .set("tok", "7", UserType::Admin, "admin@transporteasy.fr")
        .unwrap();

    let config = DeskConfig {
        backend: BackendMode::Live,
        session_file: path,
        ..DeskConfig::default()
    };
    let app = App::from_config(&config).unwrap();

    assert!(app.state.read().is_authenticated());
}
