//! Maze image loading and still image export

use crate::io::configuration::ENTRANCE_MARKER_RADIUS;
use crate::io::error::{MazeError, Result, WithContext};
use crate::maze::lattice::ENTRANCE;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Decode a maze image into RGBA pixels
///
/// Animated formats contribute their first frame.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_maze(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).with_path(path, "decode")?;
    Ok(decoded.to_rgba8())
}

/// Copy of the trimmed maze with a square marker on the entrance cell
pub fn mark_entrance(bitmap: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let mut marked = bitmap.clone();

    for dy in -ENTRANCE_MARKER_RADIUS..=ENTRANCE_MARKER_RADIUS {
        for dx in -ENTRANCE_MARKER_RADIUS..=ENTRANCE_MARKER_RADIUS {
            let (Ok(x), Ok(y)) = (u32::try_from(ENTRANCE.x + dx), u32::try_from(ENTRANCE.y + dy))
            else {
                continue;
            };
            if let Some(pixel) = marked.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }

    marked
}

/// Save an image, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_image(image: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    image
        .save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")
        }
        _ => Ok(()),
    }
}
