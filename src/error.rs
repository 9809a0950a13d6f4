use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tone_engine::{AnalysisError, ParseColorError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Empty image data")]
    Empty,

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// True when the caller supplied bad input rather than the server failing.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImageError::Empty
                | ImageError::Decode(_)
                | ImageError::UnsupportedDimensions { .. }
                | ImageError::Analysis(_)
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidColor(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Image(e) if e.is_input_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Image(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_bad_request() {
        let error = ApiError::BadRequest("face_x without face_y".to_string());
        assert_eq!(error.to_string(), "Bad request: face_x without face_y");
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("worker panicked".to_string());
        assert_eq!(error.to_string(), "Internal error: worker panicked");
    }

    #[test]
    fn test_image_error_unsupported_dimensions() {
        let error = ImageError::UnsupportedDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 0x480");
    }

    #[test]
    fn test_image_error_from_analysis_error() {
        let error: ImageError = AnalysisError::EmptyImage.into();
        assert!(matches!(error, ImageError::Analysis(_)));
        assert!(error.is_input_error());
    }

    #[test]
    fn test_api_error_from_parse_color_error() {
        let parse = "#12".parse::<tone_engine::Rgb>().unwrap_err();
        let error: ApiError = parse.into();
        assert!(matches!(error, ApiError::InvalidColor(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        // BadRequest -> BAD_REQUEST
        let response = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Input image problems -> BAD_REQUEST
        let response = ApiError::Image(ImageError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Server-side image problems -> INTERNAL_SERVER_ERROR
        let response = ApiError::Image(ImageError::PngEncode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
