use serde::{Deserialize, Serialize};
use tone_engine::{AnalysisReport, ClassificationResult, FeatureSet, Palette, Rgb};
use utoipa::ToSchema;

/// A named five-color palette
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaletteResponse {
    /// Palette name, e.g. "Analogous"
    pub name: String,
    /// Five `#RRGGBB` colors
    pub colors: Vec<String>,
}

impl From<&Palette> for PaletteResponse {
    fn from(p: &Palette) -> Self {
        Self {
            name: p.name.to_string(),
            colors: p.colors.to_vec(),
        }
    }
}

/// Personal color profile of one image or color
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalysisResponse {
    /// Representative skin color, red channel
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Skin color as `#RRGGBB`
    pub hex: String,
    /// Warm, Cool or Neutral
    pub undertone: String,
    /// Fine-grained undertone band, e.g. "Golden (medium)"
    pub undertone_detail: String,
    /// Season display name, e.g. "Light Spring"
    pub season: String,
    /// Season with its three axes, e.g. "Light Spring (Warm · Light · Soft)"
    pub season_full: String,
    /// Lower-case season family key
    pub season_category: String,
    /// Low, Medium or High
    pub contrast: String,
    /// Bright or Soft
    pub intensity: String,
    pub saturation: f32,
    pub brightness: f32,
    /// Whether the face path (with background removal) was taken
    pub face_detected: bool,
    /// Fifteen palettes in presentation order
    pub palettes: Vec<PaletteResponse>,
    /// `file://` location of the saved cutout ("" when not saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_image_path: Option<String>,
    /// Base64 PNG of the cutout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_image_png: Option<String>,
}

impl AnalysisResponse {
    /// Build the response for a bare color with no image behind it.
    pub fn from_color(
        skin: Rgb,
        classification: &ClassificationResult,
        features: &FeatureSet,
        palettes: &[Palette],
    ) -> Self {
        Self {
            r: skin.r,
            g: skin.g,
            b: skin.b,
            hex: skin.to_hex(),
            undertone: classification.undertone.to_string(),
            undertone_detail: classification.undertone_detail.to_string(),
            season: classification.season.name().to_string(),
            season_full: classification.season_full(),
            season_category: classification.season_category().to_string(),
            contrast: features.contrast.to_string(),
            intensity: features.intensity.to_string(),
            saturation: features.saturation,
            brightness: features.brightness,
            face_detected: false,
            palettes: palettes.iter().map(PaletteResponse::from).collect(),
            face_image_path: None,
            face_image_png: None,
        }
    }

    /// Build the response for a full image analysis.
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            face_detected: report.face_detected(),
            ..Self::from_color(
                report.skin,
                &report.classification,
                &report.features,
                &report.palettes,
            )
        }
    }

    pub fn with_image_path(mut self, path: String) -> Self {
        self.face_image_path = Some(path);
        self
    }

    pub fn with_image_png(mut self, base64_png: String) -> Self {
        self.face_image_png = Some(base64_png);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_engine::{classify, generate_palettes, Hsv, PixelBuffer, ToneAnalyzer};

    #[test]
    fn test_from_color_fields() {
        let skin = Rgb::new(230, 190, 170);
        let features = FeatureSet::default();
        let classification = classify(skin, &features);
        let palettes = generate_palettes(Hsv::from(skin), &classification, &features);

        let response = AnalysisResponse::from_color(skin, &classification, &features, &palettes);
        assert_eq!(response.hex, "#E6BEAA");
        assert_eq!(response.undertone, "Warm");
        assert_eq!(response.undertone_detail, "Golden (medium)");
        assert_eq!(response.season, "Light Spring");
        assert_eq!(response.season_category, "spring");
        assert_eq!(response.contrast, "Medium");
        assert_eq!(response.palettes.len(), 15);
        assert!(response.palettes.iter().all(|p| p.colors.len() == 5));
        assert!(!response.face_detected);
    }

    #[test]
    fn test_optional_image_fields_are_skipped() {
        let image = PixelBuffer::filled(100, 100, [230, 190, 170, 255]);
        let report = ToneAnalyzer::new().analyze(&image, None).unwrap();
        let response = AnalysisResponse::from_report(&report);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("face_image_path").is_none());
        assert!(json.get("face_image_png").is_none());

        let json = serde_json::to_value(response.with_image_path(String::new())).unwrap();
        assert_eq!(json["face_image_path"], "");
    }
}
