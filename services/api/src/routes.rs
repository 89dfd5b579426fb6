use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use placement_eligibility::placement::{placement_router, CompanyRequirement, EligibilityDesk};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct CompaniesResponse {
    pub(crate) total: usize,
    pub(crate) companies: Vec<CompanyRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notice: Option<String>,
}

pub(crate) fn with_placement_routes<D>(desk: Arc<D>) -> axum::Router
where
    D: EligibilityDesk + 'static,
{
    placement_router(desk)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/companies",
            axum::routing::get(companies_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "companies": state.catalog.len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn companies_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<CompaniesResponse> {
    let catalog = &state.catalog;
    Json(CompaniesResponse {
        total: catalog.len(),
        companies: catalog.companies().to_vec(),
        notice: catalog.load_notice().map(str::to_string),
    })
}
