use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::Criterion;
use super::profiles::DatabaseProfile;
use super::report::render_text_report;
use super::validation::{AnalysisError, RequirementsInput};
use super::DecisionEngine;

/// Router builder exposing the analysis, report and catalogue endpoints.
pub fn decision_router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/api/v1/decisions/analyze", post(analyze_handler))
        .route("/api/v1/decisions/report", post(report_handler))
        .route("/api/v1/databases", get(databases_handler))
        .route("/api/v1/criteria", get(criteria_handler))
        .with_state(engine)
}

/// Catalogue entry describing one criterion and the values it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionView {
    pub criterion: Criterion,
    pub field: &'static str,
    pub display_name: &'static str,
    pub allowed_values: Vec<&'static str>,
}

impl From<Criterion> for CriterionView {
    fn from(criterion: Criterion) -> Self {
        Self {
            criterion,
            field: criterion.field(),
            display_name: criterion.display_name(),
            allowed_values: criterion.allowed_values(),
        }
    }
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<DecisionEngine>>,
    axum::Json(input): axum::Json<RequirementsInput>,
) -> Response {
    match engine.analyze(&input) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => analysis_error_response(&error),
    }
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<DecisionEngine>>,
    axum::Json(input): axum::Json<RequirementsInput>,
) -> Response {
    match engine.analyze(&input) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_text_report(&result),
        )
            .into_response(),
        Err(error) => analysis_error_response(&error),
    }
}

pub(crate) async fn databases_handler(State(engine): State<Arc<DecisionEngine>>) -> Response {
    let profiles: &'static [DatabaseProfile] = engine.knowledge().profiles;
    (StatusCode::OK, axum::Json(profiles)).into_response()
}

pub(crate) async fn criteria_handler() -> Response {
    let criteria: Vec<CriterionView> = Criterion::ALL.into_iter().map(CriterionView::from).collect();
    (StatusCode::OK, axum::Json(criteria)).into_response()
}

pub(crate) fn analysis_error_response(error: &AnalysisError) -> Response {
    match error {
        AnalysisError::InvalidInput(fields) => {
            let payload = json!({
                "error": error.to_string(),
                "invalid_fields": fields,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AnalysisError::InternalInvariantViolation(_) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
