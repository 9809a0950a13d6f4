//! Assertion helpers for tests.

use axum::http::StatusCode;
use base64::Engine;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(
        json["error"].as_str().is_some_and(|e| !e.is_empty()),
        "Expected an error message, got {json}"
    );
}

/// Assert a complete analysis body and return it
pub fn assert_valid_profile(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    for field in ["hex", "undertone", "undertone_detail", "season", "season_full", "season_category"] {
        assert!(json[field].is_string(), "Expected {field} to be a string in {json}");
    }

    let palettes = json["palettes"].as_array().expect("palettes array");
    assert_eq!(palettes.len(), 15, "Expected 15 palettes");
    for palette in palettes {
        let colors = palette["colors"].as_array().expect("colors array");
        assert_eq!(colors.len(), 5, "Palette {} should have 5 colors", palette["name"]);
    }

    json
}

/// Decode the base64 PNG cutout of an analysis body
pub fn decode_cutout(json: &serde_json::Value) -> image::RgbaImage {
    let encoded = json["face_image_png"].as_str().expect("face_image_png string");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("valid base64");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "cutout should be a PNG");
    image::load_from_memory(&bytes).expect("decodable cutout").to_rgba8()
}
