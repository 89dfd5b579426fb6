use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{EligibilityResult, StudentProfile};
use super::intake::{hss_or_default, ProfileForm, HSS_CHOICES};
use super::page::{render_page, PageOutcome};
use super::service::EligibilityDesk;

/// JSON counterpart of the eligibility form.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRequest {
    pub cgpa: f64,
    #[serde(default)]
    pub internships: u32,
    #[serde(default)]
    pub languages: String,
    #[serde(default = "default_hss")]
    pub hss: String,
}

fn default_hss() -> String {
    HSS_CHOICES[0].to_string()
}

impl From<EligibilityRequest> for StudentProfile {
    fn from(request: EligibilityRequest) -> Self {
        StudentProfile::new(
            request.cgpa,
            request.internships,
            &request.languages,
            hss_or_default(&request.hss),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub status: &'static str,
    pub probability: String,
    #[serde(flatten)]
    pub result: EligibilityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Router builder exposing the form page and the JSON eligibility endpoint.
pub fn placement_router<D>(desk: Arc<D>) -> Router
where
    D: EligibilityDesk + 'static,
{
    Router::new()
        .route("/", get(form_handler::<D>))
        .route("/check", post(check_handler::<D>))
        .route("/api/v1/eligibility", post(eligibility_handler::<D>))
        .with_state(desk)
}

pub(crate) async fn form_handler<D>(State(desk): State<Arc<D>>) -> Html<String>
where
    D: EligibilityDesk + 'static,
{
    Html(render_page(
        &ProfileForm::default(),
        desk.notice(),
        PageOutcome::Blank,
    ))
}

pub(crate) async fn check_handler<D>(
    State(desk): State<Arc<D>>,
    Form(form): Form<ProfileForm>,
) -> Response
where
    D: EligibilityDesk + 'static,
{
    match form.clone().into_profile() {
        Ok(profile) => {
            let result = desk.submit(profile);
            info!(
                status = result.status_label(),
                eligible = result.eligible_companies.len(),
                "form eligibility check"
            );
            let page = render_page(&form, desk.notice(), PageOutcome::Evaluated(&result));
            (StatusCode::OK, Html(page)).into_response()
        }
        Err(error) => {
            let page = render_page(&form, desk.notice(), PageOutcome::Rejected(&error));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
    }
}

pub(crate) async fn eligibility_handler<D>(
    State(desk): State<Arc<D>>,
    Json(request): Json<EligibilityRequest>,
) -> Json<EligibilityResponse>
where
    D: EligibilityDesk + 'static,
{
    let result = desk.submit(request.into());
    Json(EligibilityResponse {
        status: result.status_label(),
        probability: result.probability_label(),
        notice: desk.notice().map(str::to_string),
        result,
    })
}
