pub mod analysis_service;
pub mod cutout_store;
pub mod image_io;

pub use analysis_service::AnalysisService;
pub use cutout_store::CutoutStore;
pub use image_io::{decode_image, encode_png, load_image, write_png};
