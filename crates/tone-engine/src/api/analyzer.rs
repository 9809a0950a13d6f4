//! The [`ToneAnalyzer`] builder.

use super::error::AnalysisError;
use crate::buffer::{PixelBuffer, Rect};
use crate::classify::{classify, ClassificationResult};
use crate::color::{Hsv, Rgb};
use crate::face::{center_rect, eye_region, hair_region, FaceDescriptor};
use crate::features::{analyze_features, analyze_skin_only, FeatureSet};
use crate::palette::{generate_palettes, Palette};
use crate::sample::{region_average, sample_skin_color, SampleOptions, FALLBACK_STRIDE, FEATURE_STRIDE};
use crate::segment::{SegmentOptions, Segmenter};

/// Which branch an analysis took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPath {
    /// A face descriptor was supplied and produced a usable crop.
    Face,
    /// No face: center crop, skin-only features, no background removal.
    CenterCrop,
}

/// Everything one analysis produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Representative skin color.
    pub skin: Rgb,
    pub skin_hsv: Hsv,
    pub features: FeatureSet,
    pub classification: ClassificationResult,
    /// Fifteen palettes in presentation order.
    pub palettes: Vec<Palette>,
    /// Matted face crop, or the plain center crop.
    pub cutout: PixelBuffer,
    /// Region of the input image the cutout was taken from.
    pub region: Rect,
    pub path: AnalysisPath,
}

impl AnalysisReport {
    #[inline]
    pub fn face_detected(&self) -> bool {
        self.path == AnalysisPath::Face
    }
}

/// Runs the full per-image analysis.
///
/// Configuration methods consume and return `self`; [`analyze`](Self::analyze)
/// takes `&self`, so one analyzer can serve any number of images and threads.
///
/// # Example
///
/// ```
/// use tone_engine::{FaceDescriptor, PixelBuffer, ToneAnalyzer};
///
/// let image = PixelBuffer::filled(240, 320, [225, 180, 155, 255]);
/// let analyzer = ToneAnalyzer::new();
///
/// let report = analyzer
///     .analyze(&image, Some(FaceDescriptor::new(120.0, 140.0, 40.0)))
///     .unwrap();
/// assert!(report.face_detected());
/// assert_eq!(report.palettes.len(), 15);
///
/// let fallback = analyzer.analyze(&image, None).unwrap();
/// assert!(!fallback.face_detected());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToneAnalyzer {
    sample: SampleOptions,
    segmenter: Segmenter,
}

impl ToneAnalyzer {
    /// Create an analyzer with default sampling and segmentation options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set skin sampling options.
    #[inline]
    pub fn sample_options(mut self, options: SampleOptions) -> Self {
        self.sample = options;
        self
    }

    /// Set segmentation options.
    #[inline]
    pub fn segment_options(mut self, options: SegmentOptions) -> Self {
        self.segmenter = Segmenter::new(options);
        self
    }

    /// Analyze `image`, using `face` when a detector found one.
    ///
    /// A face whose crop clamps to nothing inside the image is treated as
    /// no face at all.
    pub fn analyze(&self, image: &PixelBuffer, face: Option<FaceDescriptor>) -> Result<AnalysisReport, AnalysisError> {
        if image.is_empty() {
            return Err(AnalysisError::EmptyImage);
        }

        let face_rect = face
            .map(|f| f.face_rect(image.width(), image.height()))
            .filter(|rect| !rect.is_empty());

        let (skin, features, cutout, region, path) = match face_rect {
            Some(rect) => {
                let crop = image.crop(rect);
                let skin = sample_skin_color(&crop, &self.sample);
                let (w, h) = (crop.width(), crop.height());
                let eye = region_average(&crop, eye_region(w, h), FEATURE_STRIDE);
                let hair = region_average(&crop, hair_region(w, h), FEATURE_STRIDE);
                let features = analyze_features(skin, eye, hair);
                let cutout = self.segmenter.remove_background(crop, Hsv::from(skin));
                (skin, features, cutout, rect, AnalysisPath::Face)
            }
            None => {
                let mut rect = center_rect(image.width(), image.height());
                if rect.is_empty() {
                    rect = image.bounds();
                }
                let crop = image.crop(rect);
                let skin = region_average(&crop, crop.bounds(), FALLBACK_STRIDE);
                let features = analyze_skin_only(skin);
                (skin, features, crop, rect, AnalysisPath::CenterCrop)
            }
        };

        let skin_hsv = Hsv::from(skin);
        let classification = classify(skin, &features);
        let palettes = generate_palettes(skin_hsv, &classification, &features);

        Ok(AnalysisReport {
            skin,
            skin_hsv,
            features,
            classification,
            palettes,
            cutout,
            region,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ContrastLevel;

    const SKIN: [u8; 4] = [225, 180, 155, 255];

    #[test]
    fn test_empty_image_is_an_error() {
        let empty = PixelBuffer::filled(0, 10, SKIN);
        assert_eq!(
            ToneAnalyzer::new().analyze(&empty, None).unwrap_err(),
            AnalysisError::EmptyImage
        );
    }

    #[test]
    fn test_face_path_mattes_crop() {
        let image = PixelBuffer::filled(480, 640, SKIN);
        let face = FaceDescriptor::new(240.0, 300.0, 50.0);
        let report = ToneAnalyzer::new().analyze(&image, Some(face)).unwrap();

        assert_eq!(report.path, AnalysisPath::Face);
        assert_eq!(report.region, Rect::new(155, 200, 325, 438));
        assert_eq!(report.cutout.width(), 170);
        assert_eq!(report.cutout.height(), 238);
        assert_eq!(report.skin, Rgb::new(225, 180, 155));
        // Uniform image: eyes and hair equal skin
        assert_eq!(report.features.contrast, ContrastLevel::Low);
        assert_eq!(report.cutout.pixel(0, 0)[3], 0);
        assert_eq!(report.cutout.pixel(85, 114)[3], 255);
    }

    #[test]
    fn test_center_path_leaves_alpha_alone() {
        let image = PixelBuffer::filled(300, 200, [225, 180, 155, 200]);
        let report = ToneAnalyzer::new().analyze(&image, None).unwrap();

        assert_eq!(report.path, AnalysisPath::CenterCrop);
        assert_eq!(report.features.contrast, ContrastLevel::Medium);
        assert_eq!(report.region, Rect::new(100, 16, 200, 116));
        assert!(report.cutout.pixels().iter().all(|p| p[3] == 200));
    }

    #[test]
    fn test_face_outside_image_falls_back_to_center() {
        let image = PixelBuffer::filled(200, 200, SKIN);
        let face = FaceDescriptor::new(-500.0, -500.0, 40.0);
        let report = ToneAnalyzer::new().analyze(&image, Some(face)).unwrap();
        assert!(!report.face_detected());
    }

    #[test]
    fn test_tiny_image_uses_full_buffer() {
        let image = PixelBuffer::filled(1, 1, SKIN);
        let report = ToneAnalyzer::new().analyze(&image, None).unwrap();
        assert_eq!(report.region, Rect::new(0, 0, 1, 1));
        assert_eq!(report.skin, Rgb::new(225, 180, 155));
    }

    #[test]
    fn test_builder_options_are_used() {
        let image = PixelBuffer::filled(200, 200, SKIN);
        let face = FaceDescriptor::new(100.0, 100.0, 40.0);
        let analyzer = ToneAnalyzer::new().segment_options(SegmentOptions::new().radii(2.0, 3.0));
        let report = analyzer.analyze(&image, Some(face)).unwrap();
        // With the inner radius pushed past the crop, everything is opaque
        assert!(report.cutout.pixels().iter().all(|p| p[3] == 255));
    }
}
