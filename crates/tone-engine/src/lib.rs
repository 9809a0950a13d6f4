//! tone-engine: personal color analysis from a face photograph
//!
//! Given an RGBA pixel buffer and, optionally, what a face detector found,
//! the engine derives a representative skin color, an undertone, a contrast
//! and intensity profile, one of twelve seasons and a set of fifteen color
//! palettes. It also cuts the face out of its background with a model-free
//! alpha matte.
//!
//! The crate performs no I/O and holds no global state. Decoding, face
//! detection and persistence are left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use tone_engine::{PixelBuffer, ToneAnalyzer};
//!
//! let image = PixelBuffer::filled(200, 240, [230, 190, 170, 255]);
//! let report = ToneAnalyzer::new().analyze(&image, None).unwrap();
//!
//! assert_eq!(report.classification.season.name(), "Light Spring");
//! assert_eq!(report.palettes.len(), 15);
//! ```
//!
//! # Pipeline
//!
//! ```text
//!                 ┌──> sample skin ──┬──> features ──> classify ──> palettes
//! image ──> crop ─┤                  │
//!                 │                  v
//!                 └────────────> segment (face path only) ──> cutout
//! ```
//!
//! Segmentation and the classification chain both consume the sampled skin
//! color but are independent of each other.
//!
//! # Building blocks
//!
//! - [`color`]: [`Rgb`], [`Hsv`], circular hue math, hex formatting
//! - [`sample`]: region averages and seeded skin sampling
//! - [`segment`]: four-pass alpha matting
//! - [`features`]: contrast and intensity
//! - [`classify`]: undertone and season rule tables
//! - [`palette`]: fifteen-palette generator
//! - [`face`]: crop rectangles

pub mod api;
pub mod buffer;
pub mod classify;
pub mod color;
pub mod face;
pub mod features;
pub mod palette;
pub mod sample;
pub mod segment;


pub use api::{AnalysisError, AnalysisPath, AnalysisReport, ToneAnalyzer};
pub use buffer::{PixelBuffer, Rect};
pub use classify::{classify, ClassificationResult, Clarity, Depth, Family, Season, Temperature, Undertone};
pub use color::{hue_distance, rotate_hue, to_hex, Hsv, ParseColorError, Rgb};
pub use face::{center_rect, FaceDescriptor};
pub use features::{analyze_features, analyze_skin_only, ContrastLevel, FeatureSet, IntensityLevel};
pub use palette::{generate_palettes, Palette, PALETTE_COUNT};
pub use sample::{is_skin_tone, region_average, sample_skin_color, sample_skin_color_with, RandomSource, SampleOptions};
pub use segment::{SegmentOptions, Segmenter};
