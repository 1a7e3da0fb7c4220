use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use directory_core::time::fixed_days_ago;
use directory_core::{Profile, ProfileId};
use tokio::net::TcpListener;

/// Failure the server should answer with instead of real data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Respond with this status code and an empty body.
    Status(u16),
    /// Respond 200 with a body that is not JSON.
    MalformedBody,
    /// Respond 200 with a JSON `null` body.
    NullBody,
}

/// In-memory stand-in for the hosted directory backend.
#[derive(Clone, Default)]
pub struct MockApi {
    profiles: Arc<RwLock<Vec<Profile>>>,
    fault: Arc<RwLock<Option<Fault>>>,
    hits: Arc<AtomicUsize>,
}

impl MockApi {
    #[must_use]
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
            ..Self::default()
        }
    }

    /// Server preloaded with `seed_profiles`.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_profiles())
    }

    pub fn set_profiles(&self, profiles: Vec<Profile>) {
        *self.profiles.write().unwrap_or_else(|e| e.into_inner()) = profiles;
    }

    pub fn set_fault(&self, fault: Option<Fault>) {
        *self.fault.write().unwrap_or_else(|e| e.into_inner()) = fault;
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/test", get(list_profiles))
            .route("/api/test/{id}", get(get_profile))
            .with_state(self.clone())
    }

    fn record_hit(&self) -> Option<Fault> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.fault.read().unwrap_or_else(|e| e.into_inner())
    }

    fn profiles(&self) -> Vec<Profile> {
        self.profiles
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

pub async fn run(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, api.router()).await
}

/// Bind an ephemeral localhost port and serve `api` on the current runtime.
///
/// # Errors
///
/// Returns the bind error if no port is available.
pub async fn spawn(api: MockApi) -> Result<SocketAddr, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = run(listener, api).await {
            log::error!("mock api stopped: {err}");
        }
    });
    Ok(addr)
}

fn fault_response(fault: Fault) -> Response {
    match fault {
        Fault::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Fault::MalformedBody => (
            [(header::CONTENT_TYPE, "application/json")],
            "{\"id\": \"1\", \"name\": ",
        )
            .into_response(),
        Fault::NullBody => Json(serde_json::Value::Null).into_response(),
    }
}

async fn list_profiles(State(api): State<MockApi>) -> Response {
    if let Some(fault) = api.record_hit() {
        return fault_response(fault);
    }
    Json(api.profiles()).into_response()
}

async fn get_profile(State(api): State<MockApi>, Path(id): Path<String>) -> Response {
    if let Some(fault) = api.record_hit() {
        return fault_response(fault);
    }
    // mockapi answers unknown ids with a 404 and a plain "Not found" body.
    match api.profiles().into_iter().find(|p| p.id().as_str() == id) {
        Some(profile) => Json(profile).into_response(),
        None => (StatusCode::NOT_FOUND, Json("Not found")).into_response(),
    }
}

/// Fixture records shaped like the hosted backend's data.
#[must_use]
pub fn seed_profiles() -> Vec<Profile> {
    let rows: [(&str, &str, &str, &str, i64); 4] = [
        ("1", "Ada Lovelace", "Lead Analyst", "Turns notes into working programs.", 400),
        ("2", "Grace Hopper", "Compiler Engineer", "Ships tooling and hunts moths.", 320),
        ("3", "Alan Turing", "Research Scientist", "", 210),
        ("4", "Katherine Johnson", "Flight Dynamics", "Checks every trajectory twice.", 45),
    ];
    rows.into_iter()
        .filter_map(|(id, name, title, description, days)| {
            let id = ProfileId::new(id).ok()?;
            let avatar = format!("https://avatars.example.com/{}.jpg", id);
            let description = (!description.is_empty()).then(|| description.to_string());
            Some(Profile::new(
                id,
                name,
                title,
                description,
                avatar,
                fixed_days_ago(days),
            ))
        })
        .collect()
}
