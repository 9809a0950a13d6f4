//! Synthetic portraits and colors.

use personal_color::services::encode_png;
use tone_engine::PixelBuffer;

/// Reference light warm skin, "#E6BEAA"
pub const SKIN: [u8; 4] = [230, 190, 170, 255];
pub const SKIN_HEX: &str = "#E6BEAA";
/// Saturated green backdrop, far from any skin tone
pub const BACKDROP: [u8; 4] = [20, 200, 40, 255];

/// Side length of the square fixture portraits
pub const PORTRAIT_SIZE: usize = 200;

/// Face location for [`portrait`] as query parameters
pub const FACE_QUERY: &str = "face_x=100&face_y=80&eye_distance=40";

/// A skin ellipse centered at (100, 90), semi-axes 80×100, on the backdrop.
pub fn portrait() -> PixelBuffer {
    PixelBuffer::from_fn(PORTRAIT_SIZE, PORTRAIT_SIZE, |x, y| {
        let dx = (x as f32 - 100.0) / 80.0;
        let dy = (y as f32 - 90.0) / 100.0;
        if dx * dx + dy * dy <= 1.0 {
            SKIN
        } else {
            BACKDROP
        }
    })
}

pub fn portrait_png() -> Vec<u8> {
    encode_png(&portrait()).expect("encode fixture portrait")
}

/// A uniformly filled PNG.
pub fn solid_png(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    encode_png(&PixelBuffer::filled(width, height, color)).expect("encode solid fixture")
}
