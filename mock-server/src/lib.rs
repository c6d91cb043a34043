//! In-process stand-in for the Zencoder jobs endpoint.
//!
//! Accepts `POST /api/v2/jobs` with the same wire contract as the real
//! API: the `Zencoder-Api-Key` header is required, `input` must be
//! non-empty, and `notifications` may not be an empty array (clients are
//! expected to omit the key instead). Successful submissions get a
//! sequential job id and one output record per requested output.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// A job the mock has accepted.
#[derive(Clone, Debug, Serialize)]
pub struct Job {
    pub id: u64,
    pub input: String,
    pub outputs: Vec<Value>,
}

/// Request body accepted by the jobs endpoint.
#[derive(Deserialize)]
pub struct CreateJob {
    pub input: String,
    #[serde(default)]
    pub output: Vec<Map<String, Value>>,
    pub notifications: Option<Vec<String>>,
}

#[derive(Default)]
pub struct JobStore {
    next_id: u64,
    pub jobs: Vec<Job>,
}

pub type Db = Arc<RwLock<JobStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(JobStore::default()));
    Router::new()
        .route("/api/v2/jobs", post(create_job))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn errors(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "errors": [message] })))
}

async fn create_job(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateJob>,
) -> (StatusCode, Json<Value>) {
    let api_key = headers
        .get("Zencoder-Api-Key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if api_key.is_empty() {
        return errors(StatusCode::UNAUTHORIZED, "missing api key");
    }
    if input.input.is_empty() {
        return errors(StatusCode::UNPROCESSABLE_ENTITY, "bad input");
    }
    // The real API wants the key absent when there is nothing to notify.
    if matches!(input.notifications.as_deref(), Some([])) {
        return errors(StatusCode::UNPROCESSABLE_ENTITY, "empty notifications");
    }

    let mut store = db.write().await;
    store.next_id += 1;
    let id = store.next_id;

    let outputs: Vec<Value> = input
        .output
        .iter()
        .enumerate()
        .map(|(i, options)| {
            let mut out = Map::new();
            out.insert("id".to_string(), json!(id * 1000 + i as u64 + 1));
            out.insert(
                "url".to_string(),
                json!(format!("https://zencoder-temp-storage.example/o/{id}/{}", i + 1)),
            );
            if let Some(label) = options.get("label") {
                out.insert("label".to_string(), label.clone());
            }
            Value::Object(out)
        })
        .collect();

    let job = Job {
        id,
        input: input.input,
        outputs: outputs.clone(),
    };
    store.jobs.push(job);

    (StatusCode::CREATED, Json(json!({ "id": id, "outputs": outputs })))
}
