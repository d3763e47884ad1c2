//! Animated GIF export of the exploration trace

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{MazeError, Result, WithContext};
use crate::io::image::ensure_parent;
use crate::trace::sequence::Animation;
use image::codecs::gif::{GifEncoder, Repeat};
use log::info;
use std::path::Path;

/// Export the animation as a looping GIF
///
/// Delays shorter than viewers reliably honour are raised to
/// [`VIEWER_MIN_FRAME_DELAY_MS`].
///
/// # Errors
///
/// Returns an error if:
/// - The animation holds no frames
/// - File system operations fail
/// - GIF encoding fails
pub fn export_gif(animation: &Animation, output_path: &Path) -> Result<()> {
    if animation.is_empty() {
        return Err(MazeError::InvalidParameter {
            parameter: "animation",
            value: "0 frames".to_string(),
            reason: "No frames captured for visualization".to_string(),
        });
    }

    ensure_parent(output_path)?;
    let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

    let export_error = |e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(export_error)?;
    encoder
        .encode_frames(animation.to_gif_frames(VIEWER_MIN_FRAME_DELAY_MS))
        .map_err(export_error)?;

    info!(
        "Wrote {} frame animation to {}",
        animation.len(),
        output_path.display()
    );
    Ok(())
}
