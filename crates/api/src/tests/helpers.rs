// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use leaddesk_domain::{AuthUser, Lead};
use leaddesk_persistence::{PersistenceError, TokenStorage};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use tokio::sync::oneshot;

use crate::{ApiError, ApiRequest, Transport};

struct Scripted {
    result: Result<Value, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// A scripted [`Transport`].
///
/// Responses are handed out in the order they were queued; an exhausted
/// queue answers with `ApiError::Network`. A gated response is held back
/// until its sender fires, which lets tests force response reordering.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, value: Value) {
        self.push(Ok(value), None);
    }

    pub fn push_err(&self, error: ApiError) {
        self.push(Err(error), None);
    }

    /// Queues a response released only when the returned sender fires.
    pub fn push_gated_ok(&self, value: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Ok(value), Some(rx));
        tx
    }

    fn push(&self, result: Result<Value, ApiError>, gate: Option<oneshot::Receiver<()>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted { result, gate });
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn request(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>> + Send {
        self.requests.lock().unwrap().push(request);
        let scripted: Option<Scripted> = self.responses.lock().unwrap().pop_front();
        async move {
            let Some(scripted) = scripted else {
                return Err(ApiError::Network);
            };
            if let Some(gate) = scripted.gate {
                let _ = gate.await;
            }
            scripted.result
        }
    }
}

/// Token storage whose writes always fail.
pub struct FailingStorage;

impl TokenStorage for FailingStorage {
    fn load_token(&self) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from("unreadable")))
    }

    fn save_token(&self, _token: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from("read-only")))
    }

    fn clear_token(&self) -> Result<(), PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from("read-only")))
    }
}

/// Yields until the transport has seen `count` requests.
pub async fn wait_for_requests(transport: &MockTransport, count: usize) {
    for _ in 0..1000 {
        if transport.requests().len() >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "expected {count} requests, saw {}",
        transport.requests().len()
    );
}

pub fn create_test_user() -> AuthUser {
    AuthUser::new("user-1", "asha", "asha@example.com")
}

pub fn create_test_lead(id: &str) -> Lead {
    let mut lead: Lead = Lead::new(id, "+919800000000", "+15550000000");
    lead.name = Some(format!("Lead {id}"));
    lead
}

pub fn login_response(token: &str) -> Value {
    json!({ "user": create_test_user(), "token": token })
}

pub fn user_response() -> Value {
    json!({ "user": create_test_user() })
}

pub fn list_response(ids: &[&str], total_pages: u32, total_leads: u64) -> Value {
    let leads: Vec<Lead> = ids.iter().map(|id| create_test_lead(id)).collect();
    json!({
        "success": true,
        "leads": leads,
        "totalPages": total_pages,
        "totalLeads": total_leads,
    })
}

pub fn lead_response(lead: &Lead) -> Value {
    json!({ "success": true, "lead": lead })
}
