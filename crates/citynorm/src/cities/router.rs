use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::CityNormalizer;

/// Router builder exposing the HTTP endpoints for city-name normalization.
///
/// The normalizer is injected by the hosting service; handlers never build
/// their own instance.
pub fn city_router(normalizer: Arc<CityNormalizer>) -> Router {
    Router::new()
        .route("/api/v1/cities", get(list_handler))
        .route("/api/v1/cities/normalize", get(normalize_handler))
        .with_state(normalizer)
}

#[derive(Debug, Deserialize)]
pub(crate) struct NormalizeParams {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NormalizedCityView {
    pub(crate) original_name: String,
    pub(crate) normalized_name: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CityCatalogEntry {
    pub(crate) canonical_name: &'static str,
    pub(crate) alias_count: usize,
}

pub(crate) async fn normalize_handler(
    State(normalizer): State<Arc<CityNormalizer>>,
    Query(params): Query<NormalizeParams>,
) -> Response {
    let raw = params.name.unwrap_or_default();
    if raw.trim().is_empty() {
        let payload = json!({
            "error": "query parameter 'name' must not be blank",
        });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    }

    match normalizer.normalize(&raw) {
        Some(canonical) => {
            let view = NormalizedCityView {
                original_name: raw,
                normalized_name: canonical,
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("no canonical city known for '{raw}'"),
                "name": raw,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler(
    State(normalizer): State<Arc<CityNormalizer>>,
) -> Json<Vec<CityCatalogEntry>> {
    let entries = normalizer
        .catalog()
        .map(|(canonical_name, alias_count)| CityCatalogEntry {
            canonical_name,
            alias_count,
        })
        .collect();
    Json(entries)
}
