// system-tests/tests/helpers/contact_stub.rs
// ============================================================================
// Module: Contact Service Stub
// Description: In-process collaborator stub for the contact-form API.
// Purpose: Serve conformant and deliberately misbehaving /api responses.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! An axum stub of the collaborator service. Defaults are fully conformant;
//! per-endpoint behavior knobs let suites provoke every failure class the
//! harness must fold into a failing check (wrong statuses, missing fields,
//! hung responses, skipped validation).

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use tokio::task::JoinHandle;

/// Health endpoint behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthMode {
    /// 200 with `status: "ok"` and a timestamp.
    Conformant,
    /// 200 with the timestamp field omitted.
    MissingTimestamp,
    /// 200 with a non-ok status sentinel.
    WrongSentinel,
    /// 500 with an error body.
    ServerError,
    /// Sleep well past any suite timeout before answering.
    Hang,
}

/// Submission endpoint behavior for complete payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// 201 with a full receipt.
    Conformant,
    /// 200 instead of the contract's 201.
    WrongStatus,
    /// 201 with the receipt id omitted.
    MissingId,
}

/// Listing endpoint behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsMode {
    /// 200 with a `contacts` sequence carrying ids.
    Conformant,
    /// 200 without the `contacts` field.
    MissingSequence,
    /// 200 with records whose ids are omitted.
    OmitIds,
}

/// Full behavior configuration for one stub instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubBehavior {
    /// Whether incomplete submissions are rejected with 400.
    pub validate_required: bool,
    /// Submission endpoint behavior.
    pub submit: SubmitMode,
    /// Listing endpoint behavior.
    pub contacts: ContactsMode,
    /// Health endpoint behavior.
    pub health: HealthMode,
}

impl Default for StubBehavior {
    fn default() -> Self {
        Self {
            validate_required: true,
            submit: SubmitMode::Conformant,
            contacts: ContactsMode::Conformant,
            health: HealthMode::Conformant,
        }
    }
}

/// Shared state for one stub instance.
#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    contacts: Arc<Mutex<Vec<String>>>,
    counter: Arc<AtomicU64>,
}

/// Handle for a running collaborator stub.
pub struct ContactStubHandle {
    base_url: String,
    join: JoinHandle<()>,
    contacts: Arc<Mutex<Vec<String>>>,
}

impl ContactStubHandle {
    /// Returns the base URL for the stub (no `/api` suffix).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the identifiers of contacts the stub has stored.
    pub fn stored_contact_ids(&self) -> Vec<String> {
        self.contacts.lock().map_or_else(|_| Vec::new(), |ids| ids.clone())
    }
}

impl Drop for ContactStubHandle {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Spawns a fully conformant collaborator stub.
pub async fn spawn_contact_stub() -> Result<ContactStubHandle, String> {
    spawn_contact_stub_with(StubBehavior::default()).await
}

/// Spawns a collaborator stub with explicit behavior knobs.
pub async fn spawn_contact_stub_with(
    behavior: StubBehavior,
) -> Result<ContactStubHandle, String> {
    let contacts = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        behavior,
        contacts: Arc::clone(&contacts),
        counter: Arc::new(AtomicU64::new(1)),
    };
    let app = Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/contact", post(handle_contact))
        .route("/api/contacts", get(handle_contacts))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("contact stub bind failed: {err}"))?;
    let base_url = format!("http://{}", listener.local_addr().map_err(|err| err.to_string())?);
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(ContactStubHandle {
        base_url,
        join,
        contacts,
    })
}

async fn handle_health(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
    match state.behavior.health {
        HealthMode::Conformant => {
            (StatusCode::OK, Json(json!({ "status": "ok", "timestamp": "2024-06-01T10:00:00Z" })))
        }
        HealthMode::MissingTimestamp => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        HealthMode::WrongSentinel => (
            StatusCode::OK,
            Json(json!({ "status": "degraded", "timestamp": "2024-06-01T10:00:00Z" })),
        ),
        HealthMode::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "database offline" })))
        }
        HealthMode::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            (StatusCode::OK, Json(json!({ "status": "ok", "timestamp": "2024-06-01T10:00:00Z" })))
        }
    }
}

async fn handle_contact(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if state.behavior.validate_required {
        for field in ["name", "email", "message"] {
            if body.get(field).and_then(Value::as_str).is_none_or(str::is_empty) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("{field} is required") })),
                );
            }
        }
    }
    let id = format!("contact-{}", state.counter.fetch_add(1, Ordering::SeqCst));
    if let Ok(mut ids) = state.contacts.lock() {
        ids.push(id.clone());
    }
    match state.behavior.submit {
        SubmitMode::Conformant => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "id": id, "message": "Contact saved" })),
        ),
        SubmitMode::WrongStatus => (
            StatusCode::OK,
            Json(json!({ "success": true, "id": id, "message": "Contact saved" })),
        ),
        SubmitMode::MissingId => {
            (StatusCode::CREATED, Json(json!({ "success": true, "message": "Contact saved" })))
        }
    }
}

async fn handle_contacts(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
    let stored: Vec<String> =
        state.contacts.lock().map_or_else(|_| Vec::new(), |ids| ids.clone());
    match state.behavior.contacts {
        ContactsMode::Conformant => {
            let records: Vec<Value> =
                stored.iter().map(|id| json!({ "id": id, "name": "Sarah Johnson" })).collect();
            (StatusCode::OK, Json(json!({ "contacts": records })))
        }
        ContactsMode::MissingSequence => {
            (StatusCode::OK, Json(json!({ "entries": stored.len() })))
        }
        ContactsMode::OmitIds => {
            let records: Vec<Value> =
                stored.iter().map(|_| json!({ "name": "Sarah Johnson" })).collect();
            (StatusCode::OK, Json(json!({ "contacts": records })))
        }
    }
}
