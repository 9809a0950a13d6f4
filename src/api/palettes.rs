use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tone_engine::Rgb;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::AnalysisResponse;
use crate::services::analysis_service::{parse_contrast, parse_intensity};
use crate::services::AnalysisService;

/// Optional feature overrides for a bare color
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// low, medium or high
    pub contrast: Option<String>,
    /// bright or soft
    pub intensity: Option<String>,
}

/// Profile a skin color
///
/// Classifies a skin color given as hex (with or without `#`) and returns its
/// season and palettes. Contrast and intensity default to what the color alone
/// implies.
#[utoipa::path(
    get,
    path = "/api/palettes/{hex}",
    params(
        ("hex" = String, Path, description = "Skin color, RRGGBB or RGB"),
        PaletteQuery,
    ),
    responses(
        (status = 200, description = "Color profile", body = AnalysisResponse),
        (status = 400, description = "Invalid color or level name"),
    ),
    tag = "Analysis"
)]
pub async fn handle_palettes(
    State(service): State<Arc<AnalysisService>>,
    Path(hex): Path<String>,
    Query(query): Query<PaletteQuery>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let color: Rgb = hex.parse()?;

    let contrast = query
        .contrast
        .as_deref()
        .map(|s| parse_contrast(s).ok_or_else(|| ApiError::BadRequest(format!("Unknown contrast level: {s}"))))
        .transpose()?;
    let intensity = query
        .intensity
        .as_deref()
        .map(|s| parse_intensity(s).ok_or_else(|| ApiError::BadRequest(format!("Unknown intensity level: {s}"))))
        .transpose()?;

    tracing::debug!(color = %color, "Palette request");
    Ok(Json(service.profile_color(color, contrast, intensity)))
}
