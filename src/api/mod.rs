pub mod analyze;
pub mod palettes;

pub use analyze::{handle_analyze, FaceQuery, __path_handle_analyze};
pub use palettes::{handle_palettes, PaletteQuery, __path_handle_palettes};
