//! Request handlers.
//!
//! Each handler decodes its body into a typed core input, calls exactly
//! one core operation, and encodes the result.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use super::error::{AppError, AppResult};
use super::state::AppState;
use super::types::{HealthResponse, PaletteResponse};
use crate::{Color, ColorInput, PaletteRequest};

/// `POST /api/convert`
pub async fn convert(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ColorInput>, JsonRejection>,
) -> AppResult<Json<Color>> {
    let Json(input) = payload?;
    let color = state.converter.convert(&input)?;
    debug!(color = %color, "converted color");
    Ok(Json(color))
}

/// `POST /api/palette`
pub async fn palette(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> AppResult<Json<PaletteResponse>> {
    let Json(request) = payload?;

    let max = state.config.max_palette_count;
    if request.count > i64::try_from(max).unwrap_or(i64::MAX) {
        return Err(AppError::validation(format!(
            "count {} exceeds the maximum of {max}",
            request.count
        )));
    }

    let palette = state.palettes.generate_request(&request)?;
    Ok(Json(PaletteResponse { palette }))
}

/// `GET /api/random`
pub async fn random(State(state): State<Arc<AppState>>) -> Json<Color> {
    Json(state.random.generate())
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
