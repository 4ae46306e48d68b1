use crate::domain::input::{normalize, RawWellnessForm, ValidationError};
use crate::services::energy::{energy_curve, EnergyCurve};
use crate::services::recommend::{recommend, ThreadRngShuffle};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;

pub fn router() -> Router {
    Router::new()
        .route("/recommend", post(get_recommendation))
        .route("/energy", post(get_energy_curve))
}

#[derive(Debug, Serialize)]
struct RecommendResponse {
    status: &'static str,
    recommendation: String,
    focus: i32,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            status: "error",
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn get_recommendation(
    Json(form): Json<RawWellnessForm>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let input = normalize(&form)?;
    let rec = recommend(&input, &mut ThreadRngShuffle);
    tracing::debug!(
        focus = rec.focus_score,
        tips = rec.tips.len(),
        "generated recommendation"
    );
    Ok(Json(RecommendResponse {
        status: "success",
        recommendation: rec.joined(),
        focus: rec.focus_score,
    }))
}

async fn get_energy_curve(
    Json(form): Json<RawWellnessForm>,
) -> Result<Json<EnergyCurve>, ApiError> {
    let input = normalize(&form)?;
    let curve = energy_curve(
        &input.workload,
        input.sleep_hours,
        input.stress_level,
        &mut rand::thread_rng(),
    );
    Ok(Json(curve))
}
