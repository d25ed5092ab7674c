#![allow(missing_docs)]

//! Gateway integration tests: pass-through status codes, roll filtering,
//! composition save/delete flows. A stub provider stands in for Data Dragon
//! so no network is required.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use lolcomp_catalog::{CatalogError, CatalogProvider};
use lolcomp_gateway::{AppState, router};
use lolcomp_store::MemoryStorage;
use lolcomp_types::test_support::champion;
use lolcomp_types::{COMPOSITIONS_STORAGE_KEY, CatalogEnvelope, ChampionRecord, Role};

struct StubProvider {
    envelope: CatalogEnvelope,
}

impl StubProvider {
    fn new(version: &str, champions: Vec<ChampionRecord>) -> Self {
        let data: BTreeMap<String, ChampionRecord> = champions
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            envelope: CatalogEnvelope {
                kind: "champion".to_string(),
                format: "standAloneComplex".to_string(),
                version: version.to_string(),
                data,
            },
        }
    }
}

#[async_trait]
impl CatalogProvider for StubProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_catalog(&self) -> Result<CatalogEnvelope, CatalogError> {
        Ok(self.envelope.clone())
    }

    async fn fetch_champion(&self, id: &str) -> Result<Value, CatalogError> {
        match self.envelope.data.get(id) {
            Some(record) => Ok(json!({
                "type": "champion",
                "format": "standAloneComplex",
                "version": self.envelope.version,
                "data": { id: { "id": record.id, "name": record.name, "lore": "..." } }
            })),
            None => Err(CatalogError::NotFound(id.to_string())),
        }
    }
}

/// Provider whose upstream is down.
struct UnreachableProvider;

#[async_trait]
impl CatalogProvider for UnreachableProvider {
    fn provider_name(&self) -> &'static str {
        "unreachable"
    }

    async fn fetch_catalog(&self) -> Result<CatalogEnvelope, CatalogError> {
        Err(CatalogError::Upstream {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }

    async fn fetch_champion(&self, _id: &str) -> Result<Value, CatalogError> {
        Err(CatalogError::Upstream {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

fn sample_champions(version: &str) -> Vec<ChampionRecord> {
    vec![
        champion("Aatrox", &[Role::Fighter], version),
        champion("Annie", &[Role::Mage], version),
        champion("Garen", &[Role::Fighter, Role::Tank], version),
        champion("Janna", &[Role::Support], version),
        champion("Jinx", &[Role::Marksman], version),
        champion("Lux", &[Role::Mage, Role::Support], version),
        champion("Soraka", &[Role::Support], version),
        champion("Zed", &[Role::Assassin], version),
    ]
}

async fn test_state() -> AppState {
    let provider = Arc::new(StubProvider::new("13.11.1", sample_champions("13.11.1")));
    AppState::initialize(
        provider,
        Arc::new(MemoryStorage::new()),
        COMPOSITIONS_STORAGE_KEY,
    )
    .await
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn champions_pass_through_returns_the_envelope() {
    let app = router(test_state().await);

    let response = app
        .oneshot(Request::get("/api/champions").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert_eq!(payload["type"], "champion");
    assert_eq!(payload["version"], "13.11.1");
    assert_eq!(payload["data"]["Annie"]["id"], "Annie");
}

#[tokio::test]
async fn blank_champion_id_is_rejected_with_422() {
    let app = router(test_state().await);

    let response = app
        .oneshot(Request::get("/api/champion/%20").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = body_json(response).await;
    assert_eq!(payload["message"], "Champion not found.");
}

#[tokio::test]
async fn missing_champion_id_is_rejected_with_422() {
    let app = router(test_state().await);

    let response = app
        .oneshot(Request::get("/api/champion").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_champion_returns_404_with_message() {
    let app = router(test_state().await);

    let response = app
        .oneshot(
            Request::get("/api/champion/NotAChampion")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = body_json(response).await;
    assert_eq!(payload["message"], "Champion not found.");
}

#[tokio::test]
async fn known_champion_detail_passes_through() {
    let app = router(test_state().await);

    let response = app
        .oneshot(Request::get("/api/champion/Annie").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert_eq!(payload["data"]["Annie"]["name"], "Annie");
}

#[tokio::test]
async fn roll_returns_five_distinct_champions() {
    let app = router(test_state().await);

    let response = app
        .oneshot(json_request("POST", "/api/roll", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert_eq!(payload["version"], "13.11.1");
    let champions = payload["champions"].as_array().expect("champions array");
    assert_eq!(champions.len(), 5);
}

#[tokio::test]
async fn roll_honors_selected_tags() {
    let app = router(test_state().await);

    let response = app
        .oneshot(json_request("POST", "/api/roll", json!({"tags": ["Support"]})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    let champions = payload["champions"].as_array().expect("champions array");
    // Only Janna, Lux and Soraka carry Support: truncated roll.
    assert_eq!(champions.len(), 3);
    for record in champions {
        let tags = record["tags"].as_array().expect("tags");
        assert!(tags.iter().any(|tag| tag == "Support"));
    }
}

#[tokio::test]
async fn roll_without_catalog_returns_503() {
    let state = AppState::initialize(
        Arc::new(UnreachableProvider),
        Arc::new(MemoryStorage::new()),
        COMPOSITIONS_STORAGE_KEY,
    )
    .await;
    let app = router(state);

    let response = app
        .oneshot(json_request("POST", "/api/roll", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn save_then_identical_save_conflicts() {
    let app = router(test_state().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/compositions",
            json!({"champions": ["Annie", "Garen", "Janna"]}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = body_json(response).await;
    assert_eq!(saved["version"], "13.11.1");
    assert!(saved["id"].as_str().is_some());

    // Same lineup in a different order: rejected, collection unchanged.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/compositions",
            json!({"champions": ["Janna", "Annie", "Garen"]}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(Request::get("/api/compositions").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let payload = body_json(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn save_with_unknown_champion_is_422() {
    let app = router(test_state().await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/compositions",
            json!({"champions": ["Annie", "NotAChampion"]}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = body_json(response).await;
    assert_eq!(payload["message"], "Unknown champion: NotAChampion");
}

#[tokio::test]
async fn save_with_no_champions_is_422() {
    let app = router(test_state().await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/compositions",
            json!({"champions": []}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_round_trip_and_unknown_id() {
    let app = router(test_state().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/compositions",
            json!({"champions": ["Annie", "Zed"]}),
        ))
        .await
        .expect("response");
    let saved = body_json(response).await;
    let id = saved["id"].as_str().expect("id").to_string();

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/api/compositions/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    // Deleting the same id again: gone.
    let response = app
        .oneshot(
            Request::delete(format!("/api/compositions/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_catalog_version_and_saved_count() {
    let app = router(test_state().await);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert_eq!(payload["status"], "healthy");
    assert_eq!(payload["catalog_version"], "13.11.1");
    assert_eq!(payload["saved_compositions"], 0);
}
