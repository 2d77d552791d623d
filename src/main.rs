use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_backend::ingestion::fetch::{self, HttpSource, RecordSource};
use roster_backend::ingestion::{table, IngestError, IngestReport, Table};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Upper bound on records served per request
const MAX_COUNT: usize = 50;

#[derive(Clone)]
struct AppState {
    source_url: String,
    fetch_timeout: Duration,
}

#[derive(Serialize, Deserialize)]
struct ApiResponse {
    message: String,
    status: String,
}

#[tokio::main]
async fn main() {
    println!("📋 Starting Roster API server...");

    // Load environment variables
    dotenvy::dotenv().ok();

    let source_url = std::env::var("SOURCE_URL")
        .unwrap_or_else(|_| "https://randomuser.me/api/".to_string());

    let timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);

    let state = AppState {
        source_url,
        fetch_timeout: Duration::from_secs(timeout_secs),
    };

    let app = Router::new()
        .route("/", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/roster", get(get_roster))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    println!("🚀 Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Roster API is running!".to_string(),
        status: "ok".to_string(),
    })
}

#[derive(Deserialize)]
struct RosterParams {
    count: Option<usize>,
}

#[derive(Serialize)]
struct RosterResponse {
    report: IngestReport,
    table: Table,
}

async fn get_roster(
    State(state): State<AppState>,
    Query(params): Query<RosterParams>,
) -> Result<Json<RosterResponse>, StatusCode> {
    let count = params.count.unwrap_or(1);
    if count > MAX_COUNT {
        return Err(StatusCode::BAD_REQUEST);
    }

    let source = HttpSource::new(&state.source_url, state.fetch_timeout).map_err(|e| {
        eprintln!("Source setup error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let started_at = chrono::Utc::now();
    let set = fetch::ingest(&source, count).await.map_err(|e| {
        eprintln!("Ingestion error: {}", e);
        match e {
            IngestError::SourceUnavailable { .. } => StatusCode::BAD_GATEWAY,
            IngestError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        }
    })?;

    let report = IngestReport {
        source_url: source.describe(),
        started_at,
        completed_at: chrono::Utc::now(),
        records_fetched: set.len(),
    };

    Ok(Json(RosterResponse {
        report,
        table: table::to_table(&set),
    }))
}
