use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use mslp_models::{Prediction, RawSelection, Team};
use mslp_services::PredictorService;

use crate::pages;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PredictorService>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None }
    }

    fn err(message: String) -> Self {
        Self { success: false, data: None, message: Some(message) }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct TeamInfo {
    pub name: &'static str,
    pub code: u8,
    pub logo: String,
}

pub fn create_routes(assets_dir: &Path) -> Router<AppState> {
    Router::new()
        // Views
        .route("/", get(home_view))
        .route("/predictor", get(predictor_view))
        .route("/predictor", post(submit_prediction))
        .route("/help", get(help_view))
        // Health and catalog
        .route("/health", get(health_check))
        .route("/api/v1/teams", get(get_teams))
        // Predictions
        .route("/api/v1/predict", post(predict_json))
        // Club logos and banner; a missing file is a plain 404
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
}

async fn home_view() -> Html<String> {
    Html(pages::home_page())
}

async fn predictor_view() -> Html<String> {
    Html(pages::predictor_page(&RawSelection::default(), None, None))
}

async fn help_view() -> Html<String> {
    Html(pages::help_page())
}

/// Handle the predict form. Every error halts the request: the user's own
/// mistakes come back as specific warnings, boundary faults as a generic one.
async fn submit_prediction(
    State(state): State<AppState>,
    Form(raw): Form<RawSelection>,
) -> Html<String> {
    match state.predictor.predict_raw(&raw) {
        Ok(prediction) => Html(pages::predictor_page(&raw, None, Some(&prediction))),
        Err(err) if err.is_validation() => {
            warn!("⚠️ Rejected selection: {err}");
            Html(pages::predictor_page(&raw, Some(&err.to_string()), None))
        }
        Err(err @ mslp_models::PredictError::TeamNotFound { .. }) => {
            warn!("📉 {err}");
            Html(pages::predictor_page(&raw, Some(&err.to_string()), None))
        }
        Err(err) => {
            error!("❌ Prediction failed: {err}");
            Html(pages::predictor_page(
                &raw,
                Some("An error occurred while extracting team data. Please try again."),
                None,
            ))
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.predictor.model_name().to_string(),
    })
}

async fn get_teams() -> Json<ApiResponse<Vec<TeamInfo>>> {
    let teams = Team::ALL
        .iter()
        .map(|team| TeamInfo {
            name: team.name(),
            code: team.code(),
            logo: pages::logo_url(*team),
        })
        .collect();
    Json(ApiResponse::ok(teams))
}

async fn predict_json(
    State(state): State<AppState>,
    Json(raw): Json<RawSelection>,
) -> (StatusCode, Json<ApiResponse<Prediction>>) {
    match state.predictor.predict_raw(&raw) {
        Ok(prediction) => (StatusCode::OK, Json(ApiResponse::ok(prediction))),
        Err(err) if err.is_validation() => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiResponse::err(err.to_string())))
        }
        Err(err @ mslp_models::PredictError::TeamNotFound { .. }) => {
            (StatusCode::NOT_FOUND, Json(ApiResponse::err(err.to_string())))
        }
        Err(err) => {
            error!("❌ Prediction failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err("Prediction failed".to_string())),
            )
        }
    }
}
