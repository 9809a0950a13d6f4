use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Json,
};
use base64::Engine;
use serde::Deserialize;
use std::sync::Arc;
use tone_engine::FaceDescriptor;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::AnalysisResponse;
use crate::services::image_io::encode_png;
use crate::services::AnalysisService;

/// Face location from an external detector, in working-image pixels
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FaceQuery {
    /// Face center, x
    pub face_x: Option<f32>,
    /// Face center, y
    pub face_y: Option<f32>,
    /// Distance between the eyes
    pub eye_distance: Option<f32>,
}

impl FaceQuery {
    /// All three parameters make a face, none means no face. Anything else
    /// is rejected.
    pub fn into_face(self) -> Result<Option<FaceDescriptor>, ApiError> {
        match (self.face_x, self.face_y, self.eye_distance) {
            (Some(x), Some(y), Some(eye)) => {
                if !(x.is_finite() && y.is_finite() && eye.is_finite()) || eye < 0.0 {
                    return Err(ApiError::BadRequest("face parameters must be finite, eye_distance >= 0".into()));
                }
                Ok(Some(FaceDescriptor::new(x, y, eye)))
            }
            (None, None, None) => Ok(None),
            _ => Err(ApiError::BadRequest(
                "face_x, face_y and eye_distance must be given together".into(),
            )),
        }
    }
}

/// Analyze a portrait
///
/// The request body is the encoded image (PNG, JPEG, WebP or BMP). Without
/// face parameters the center of the image is sampled and no background
/// removal happens.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Encoded image"),
    params(FaceQuery),
    responses(
        (status = 200, description = "Color profile with base64 PNG cutout", body = AnalysisResponse),
        (status = 400, description = "Empty or undecodable image, or partial face parameters"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(service): State<Arc<AnalysisService>>,
    Query(query): Query<FaceQuery>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let face = query.into_face()?;
    tracing::debug!(bytes = body.len(), face = face.is_some(), "Analyze request");

    let response = tokio::task::spawn_blocking(move || -> Result<AnalysisResponse, ApiError> {
        let report = service.analyze_bytes(&body, face)?;
        let mut response = AnalysisResponse::from_report(&report);
        if !report.cutout.is_empty() {
            let png = encode_png(&report.cutout)?;
            response = response.with_image_png(base64::engine::general_purpose::STANDARD.encode(png));
        }
        Ok(response)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))??;

    Ok(Json(response))
}
