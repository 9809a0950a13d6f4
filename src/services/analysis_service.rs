//! Glue between image intake, the tone engine and persistence.

use tone_engine::{
    analyze_skin_only, classify, generate_palettes, AnalysisReport, ContrastLevel, FaceDescriptor, FeatureSet,
    Hsv, IntensityLevel, Rgb, ToneAnalyzer,
};

use super::cutout_store::CutoutStore;
use super::image_io::{decode_image, load_image};
use crate::error::ImageError;
use crate::models::{AnalysisResponse, AppConfig};

/// Runs analyses with one configuration. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    analyzer: ToneAnalyzer,
    target_width: u32,
    store: CutoutStore,
}

impl AnalysisService {
    pub fn new(config: &AppConfig) -> Self {
        let analyzer = ToneAnalyzer::new().sample_options(config.analysis.sample_options());
        Self {
            analyzer,
            target_width: config.analysis.target_width,
            store: CutoutStore::new(&config.output),
        }
    }

    pub fn store(&self) -> &CutoutStore {
        &self.store
    }

    /// Decode and analyze encoded image bytes.
    pub fn analyze_bytes(&self, bytes: &[u8], face: Option<FaceDescriptor>) -> Result<AnalysisReport, ImageError> {
        let image = decode_image(bytes, self.target_width)?;
        self.run(&image, face)
    }

    /// Load and analyze an image file (`file://` URIs accepted).
    pub fn analyze_file(&self, location: &str, face: Option<FaceDescriptor>) -> Result<AnalysisReport, ImageError> {
        let image = load_image(location, self.target_width)?;
        self.run(&image, face)
    }

    fn run(&self, image: &tone_engine::PixelBuffer, face: Option<FaceDescriptor>) -> Result<AnalysisReport, ImageError> {
        let report = self.analyzer.analyze(image, face)?;
        tracing::info!(
            width = image.width(),
            height = image.height(),
            face_detected = report.face_detected(),
            skin = %report.skin,
            season = report.classification.season.name(),
            "Analysis complete"
        );
        Ok(report)
    }

    /// Profile a bare skin color.
    ///
    /// Features come from the color alone; `contrast` and `intensity`
    /// override them when given.
    pub fn profile_color(
        &self,
        color: Rgb,
        contrast: Option<ContrastLevel>,
        intensity: Option<IntensityLevel>,
    ) -> AnalysisResponse {
        let mut features: FeatureSet = analyze_skin_only(color);
        if let Some(contrast) = contrast {
            features.contrast = contrast;
        }
        if let Some(intensity) = intensity {
            features.intensity = intensity;
        }

        let classification = classify(color, &features);
        let palettes = generate_palettes(Hsv::from(color), &classification, &features);
        AnalysisResponse::from_color(color, &classification, &features, &palettes)
    }
}

/// Parse a contrast level name, case-insensitively.
pub fn parse_contrast(s: &str) -> Option<ContrastLevel> {
    match s.to_ascii_lowercase().as_str() {
        "low" => Some(ContrastLevel::Low),
        "medium" => Some(ContrastLevel::Medium),
        "high" => Some(ContrastLevel::High),
        _ => None,
    }
}

/// Parse an intensity level name, case-insensitively.
pub fn parse_intensity(s: &str) -> Option<IntensityLevel> {
    match s.to_ascii_lowercase().as_str() {
        "bright" => Some(IntensityLevel::Bright),
        "soft" => Some(IntensityLevel::Soft),
        _ => None,
    }
}
