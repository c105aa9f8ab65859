#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use beepy_auth::{MemoryStorage, SessionStorage, UserProfile};
use beepy_client::{AppState, ClientConfig, RecordingNavigator};
use serde_json::{Value, json};

pub const ANA_TOKEN: &str = "jwt-ana";

/// What the fake backend saw.
#[derive(Clone, Default)]
pub struct Backend {
    hits: Arc<AtomicUsize>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Backend {
    fn record(&self, headers: &HeaderMap) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(auth);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_auth_header(&self) -> Option<String> {
        self.auth_headers.lock().unwrap().last().cloned().flatten()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.bodies.lock().unwrap().last().cloned()
    }
}

fn ana_json() -> Value {
    json!({"id": 3, "name": "Ana", "email": "ana@beepy.com", "user_type": "embaixadora"})
}

pub fn ana() -> UserProfile {
    serde_json::from_value(ana_json()).unwrap()
}

async fn login(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    backend.record(&headers);
    backend.bodies.lock().unwrap().push(body.clone());

    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("ana@beepy.com"), Some("secret1")) => (
            StatusCode::OK,
            Json(json!({"success": true, "access_token": ANA_TOKEN, "user": ana_json()})),
        ),
        (Some("broken@beepy.com"), _) => (StatusCode::OK, Json(json!({"success": true}))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Credenciais inválidas"})),
        ),
    }
}

async fn register(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    backend.record(&headers);
    backend.bodies.lock().unwrap().push(body.clone());

    let user_type = body["user_type"].as_str().unwrap_or_default().to_string();
    if user_type != "admin" && user_type != "embaixadora" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Tipo de usuário inválido"})),
        );
    }
    if body["email"] == "taken@beepy.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"success": false, "message": "Email já cadastrado"})),
        );
    }

    let user = json!({
        "id": 41,
        "name": body["name"],
        "email": body["email"],
        "user_type": user_type,
    });
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "access_token": "jwt-new", "user": user})),
    )
}

async fn verify(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    let bearer = format!("Bearer {ANA_TOKEN}");
    let accepted = headers
        .get(header::AUTHORIZATION)
        .is_some_and(|v| v.as_bytes() == bearer.as_bytes());

    if accepted {
        (StatusCode::OK, Json(json!({"success": true, "user": ana_json()})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Token inválido"})),
        )
    }
}

async fn echo(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    Json(json!({"ok": true}))
}

async fn no_content(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    StatusCode::NO_CONTENT
}

async fn expired(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    (StatusCode::UNAUTHORIZED, Json(json!({"msg": "Token has expired"})))
}

async fn boom(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "database unavailable"})),
    )
}

async fn slow(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.record(&headers);
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({"ok": true}))
}

pub struct TestServer {
    pub base_url: String,
    pub backend: Backend,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let backend = Backend::default();
        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/auth/verify", get(verify))
            .route("/echo", get(echo).post(echo).put(echo).delete(no_content))
            .route("/expired", get(expired))
            .route("/boom", get(boom))
            .route("/slow", get(slow))
            .with_state(backend.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            backend,
            handle,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.as_str())
            .unwrap()
    }

    /// Console state backed by memory, pointed at this server.
    pub fn app(&self) -> (AppState, Arc<RecordingNavigator>) {
        self.app_with(self.config(), MemoryStorage::new())
    }

    pub fn app_with(
        &self,
        config: ClientConfig,
        storage: impl SessionStorage + 'static,
    ) -> (AppState, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::new());
        let app = AppState::new(config, storage, navigator.clone()).unwrap();
        (app, navigator)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn form(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
