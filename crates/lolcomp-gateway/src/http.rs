//! HTTP routes: catalog pass-throughs, roll, and the composition API.
//!
//! Error responses use the `{"message": ...}` envelope with 422 for missing
//! or blank identifiers, 404 for provider lookups that fail, and 500 for
//! anything unclassified.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use lolcomp_catalog::CatalogError;
use lolcomp_roll::{Selection, roll};
use lolcomp_store::{DeleteOutcome, SaveOutcome};
use lolcomp_types::{CatalogEnvelope, ChampionRecord, Composition, Role};

use crate::state::AppState;

/// User-facing message envelope, also used for errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Request body for POST /api/roll.
#[derive(Debug, Default, Deserialize)]
pub struct RollRequest {
    /// Role filters; empty means the whole catalog.
    #[serde(default)]
    pub tags: Vec<Role>,
}

/// Response body for POST /api/roll.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// Data-version the roll was drawn from.
    pub version: String,
    pub champions: Vec<ChampionRecord>,
}

/// Request body for POST /api/compositions.
#[derive(Debug, Deserialize)]
pub struct SaveCompositionRequest {
    /// Champion identifiers of the roll being saved.
    pub champions: Vec<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_version: Option<String>,
    pub saved_compositions: usize,
}

type ApiError = (StatusCode, Json<ApiMessage>);

const NOT_FOUND_MESSAGE: &str = "Champion not found.";
const SERVER_ERROR_MESSAGE: &str = "Server error, please contact the administrator.";

fn catalog_error_response(error: &CatalogError) -> ApiError {
    match error {
        CatalogError::InvalidId => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiMessage::new(NOT_FOUND_MESSAGE),
        ),
        CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, ApiMessage::new(NOT_FOUND_MESSAGE)),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiMessage::new(SERVER_ERROR_MESSAGE),
        ),
    }
}

async fn handle_champions(
    State(state): State<AppState>,
) -> Result<Json<CatalogEnvelope>, ApiError> {
    match state.provider.fetch_catalog().await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(error) => {
            tracing::warn!(
                provider = state.provider.provider_name(),
                error = %error,
                "catalog pass-through failed"
            );
            Err(catalog_error_response(&error))
        }
    }
}

async fn handle_champion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if id.trim().is_empty() {
        return Err(catalog_error_response(&CatalogError::InvalidId));
    }
    match state.provider.fetch_champion(id.trim()).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(error) => {
            tracing::warn!(champion = %id, error = %error, "champion lookup failed");
            Err(catalog_error_response(&error))
        }
    }
}

/// `GET /api/champion` with no path parameter: same 422 the original service
/// answered when the identifier was absent.
async fn handle_champion_missing_id() -> ApiError {
    catalog_error_response(&CatalogError::InvalidId)
}

async fn handle_roll(
    State(state): State<AppState>,
    Json(request): Json<RollRequest>,
) -> Result<Json<RollResponse>, ApiError> {
    let Some(ref catalog) = state.catalog else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            ApiMessage::new("Champion catalog is unavailable."),
        ));
    };
    let selection: Selection = request.tags.iter().copied().collect();
    let champions = {
        let mut rng = rand::thread_rng();
        roll(catalog, &selection, &mut rng)
    };
    Ok(Json(RollResponse {
        version: catalog.version().to_string(),
        champions,
    }))
}

async fn handle_list_compositions(State(state): State<AppState>) -> Json<Vec<Composition>> {
    let store = state.store.read().await;
    Json(store.compositions().to_vec())
}

async fn handle_save_composition(
    State(state): State<AppState>,
    Json(request): Json<SaveCompositionRequest>,
) -> Result<(StatusCode, Json<Composition>), ApiError> {
    let Some(ref catalog) = state.catalog else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            ApiMessage::new("Champion catalog is unavailable."),
        ));
    };
    if request.champions.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiMessage::new("A composition needs at least one champion."),
        ));
    }
    let mut champions = Vec::with_capacity(request.champions.len());
    for id in &request.champions {
        match catalog.get(id) {
            Some(record) => champions.push(record.clone()),
            None => {
                return Err((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiMessage::new(format!("Unknown champion: {id}")),
                ));
            }
        }
    }

    let candidate = Composition::new(catalog.version(), champions);
    let response = candidate.clone();
    let mut store = state.store.write().await;
    match store.save(candidate) {
        Ok(SaveOutcome::Saved { .. }) => Ok((StatusCode::CREATED, Json(response))),
        Ok(SaveOutcome::Duplicate { .. }) => Err((
            StatusCode::CONFLICT,
            ApiMessage::new("This composition is already saved."),
        )),
        Err(error) => {
            tracing::warn!(error = %error, "composition save failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiMessage::new("Could not save the composition."),
            ))
        }
    }
}

async fn handle_delete_composition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, ApiError> {
    let mut store = state.store.write().await;
    match store.delete(&id) {
        Ok(DeleteOutcome::Deleted) => Ok(ApiMessage::new("Composition deleted.")),
        Ok(DeleteOutcome::NotFound) => Err((
            StatusCode::NOT_FOUND,
            ApiMessage::new("Composition not found."),
        )),
        Err(error) => {
            tracing::warn!(composition = %id, error = %error, "composition delete failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiMessage::new("Could not delete the composition."),
            ))
        }
    }
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "healthy",
        catalog_version: state
            .catalog
            .as_ref()
            .map(|snapshot| snapshot.version().to_string()),
        saved_compositions: store.len(),
    })
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/champions", get(handle_champions))
        .route("/api/champion", get(handle_champion_missing_id))
        .route("/api/champion/{id}", get(handle_champion))
        .route("/api/roll", post(handle_roll))
        .route(
            "/api/compositions",
            get(handle_list_compositions).post(handle_save_composition),
        )
        .route("/api/compositions/{id}", delete(handle_delete_composition))
        .with_state(state)
}

/// Run the HTTP server; binds to `bind_addr` (e.g. `0.0.0.0:3000`).
/// Graceful shutdown on Ctrl+C (SIGINT) and SIGTERM (Unix); in-flight
/// requests complete before exit.
pub async fn run_http(state: AppState, bind_addr: &str) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("gateway listening on {} (Ctrl+C/SIGTERM to stop)", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let ctrl_c = tokio::signal::ctrl_c();
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to listen for SIGTERM");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
    }
}
