//! Wall and background color detection for two-color maze bitmaps

use crate::io::error::{MazeError, Result};
use image::{Rgba, RgbaImage};

/// The two colors a maze bitmap is drawn with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color of impassable wall lines
    pub wall: Rgba<u8>,
    /// Color of open, traversable space
    pub background: Rgba<u8>,
}

impl Palette {
    /// Test whether a pixel color is a wall
    pub fn is_wall(&self, color: Rgba<u8>) -> bool {
        color == self.wall
    }

    /// Returns `(background, wall)`
    pub const fn pair(&self) -> (Rgba<u8>, Rgba<u8>) {
        (self.background, self.wall)
    }
}

/// Identify the wall and background colors of a maze bitmap
///
/// Pixels are scanned in raster order from the top-left origin. The maze border is
/// drawn first, so the first color seen is the wall color; the first different color
/// after it is the background.
///
/// # Errors
///
/// Returns [`MazeError::UnclassifiableImage`] if the bitmap is empty or uniform
pub fn classify(bitmap: &RgbaImage) -> Result<Palette> {
    let mut pixels = bitmap.pixels().copied();
    let unclassifiable = || MazeError::UnclassifiableImage {
        width: bitmap.width(),
        height: bitmap.height(),
    };

    let wall = pixels.next().ok_or_else(unclassifiable)?;
    let background = pixels
        .find(|&color| color != wall)
        .ok_or_else(unclassifiable)?;

    Ok(Palette { wall, background })
}
