// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leaddesk_domain::AuthUser;
use leaddesk_persistence::{MemoryTokenStorage, SqliteTokenStorage, TokenStorage};
use std::sync::Arc;

use crate::tests::helpers::{
    MockTransport, create_test_user, list_response, login_response, user_response,
};
use crate::{ApiConfig, ApiError, Environment, Store};

fn create_store(storage: Arc<dyn TokenStorage>) -> (Arc<MockTransport>, Store<MockTransport>) {
    let transport: Arc<MockTransport> = Arc::new(MockTransport::new());
    let store: Store<MockTransport> = Store::new(Arc::clone(&transport), storage);
    (transport, store)
}

#[tokio::test]
async fn test_init_without_token_does_nothing() {
    let (transport, store) = create_store(Arc::new(MemoryTokenStorage::new()));

    let user: Option<AuthUser> = store.init().await.unwrap();

    assert_eq!(user, None);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_init_hydrates_persisted_session() {
    let storage: Arc<SqliteTokenStorage> = Arc::new(SqliteTokenStorage::new_in_memory().unwrap());
    storage.save_token("persisted").unwrap();
    let (transport, store) = create_store(storage);
    transport.push_ok(user_response());

    let user: Option<AuthUser> = store.init().await.unwrap();

    assert_eq!(user, Some(create_test_user()));
    assert!(store.session().is_authenticated());
}

#[tokio::test]
async fn test_init_reports_hydration_failure() {
    let (transport, store) = create_store(Arc::new(MemoryTokenStorage::with_token("stale")));
    transport.push_err(ApiError::Http {
        status: 401,
        message: String::from("Token expired"),
    });

    let result: Result<Option<AuthUser>, ApiError> = store.init().await;

    assert!(result.is_err());
    assert_eq!(store.session().token(), None);
}

#[tokio::test]
async fn test_lead_store_follows_session_token() {
    let (transport, store) = create_store(Arc::new(MemoryTokenStorage::new()));
    transport.push_ok(login_response("tok-9"));
    store
        .session()
        .login("asha@example.com", "secret")
        .await
        .unwrap();
    transport.push_ok(list_response(&["A"], 1, 1));

    store.leads().fetch_leads().await.unwrap();

    assert_eq!(transport.last_request().token.as_deref(), Some("tok-9"));
}

#[tokio::test]
async fn test_logout_drops_leads() {
    let (transport, store) = create_store(Arc::new(MemoryTokenStorage::with_token("tok")));
    transport.push_ok(list_response(&["A", "B"], 1, 2));
    store.leads().fetch_leads().await.unwrap();
    transport.push_ok(serde_json::json!({}));

    store.logout().unwrap().await.unwrap();

    assert_eq!(transport.requests().len(), 2);

    assert!(store.leads().leads().is_empty());
    assert_eq!(store.session().token(), None);
}

#[tokio::test]
async fn test_reset_keeps_persisted_token() {
    let storage: Arc<MemoryTokenStorage> = Arc::new(MemoryTokenStorage::with_token("tok"));
    let (transport, store) = create_store(Arc::clone(&storage) as Arc<dyn TokenStorage>);
    transport.push_ok(list_response(&["A"], 1, 1));
    store.leads().fetch_leads().await.unwrap();

    store.reset();

    assert!(store.leads().leads().is_empty());
    assert_eq!(store.session().token(), None);
    assert_eq!(storage.load_token().unwrap().as_deref(), Some("tok"));
}

#[test]
fn test_connect_builds_http_store() {
    let config: ApiConfig = ApiConfig::for_environment(Environment::Development);

    let store: Store<crate::HttpTransport> =
        Store::connect(&config, Arc::new(MemoryTokenStorage::new())).unwrap();

    assert!(!store.session().is_authenticated());
}
