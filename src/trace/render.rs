//! Corridor drawing for explored paths

use crate::maze::lattice::{Direction, Position};
use image::{Rgba, RgbaImage};

/// Draw `history` as a highlighted corridor on a private copy of `bitmap`
///
/// Each consecutive pair of cell centers is joined by a straight segment. A history
/// holding a single position marks just that cell center. The input bitmap is never
/// modified.
pub fn render(bitmap: &RgbaImage, history: &[Position], highlight: Rgba<u8>) -> RgbaImage {
    let mut frame = bitmap.clone();

    if let [only] = history {
        put_checked(&mut frame, *only, highlight);
    }
    for pair in history.windows(2) {
        if let [from, to] = pair {
            draw_segment(&mut frame, *from, *to, highlight);
        }
    }

    frame
}

/// Draw an axis-aligned segment between two cell centers, inclusive of both ends
///
/// Segments that are not axis-aligned are ignored since cells only connect cardinally.
pub fn draw_segment(frame: &mut RgbaImage, from: Position, to: Position, color: Rgba<u8>) {
    let direction = match (to.x - from.x, to.y - from.y) {
        (0, 0) => {
            put_checked(frame, from, color);
            return;
        }
        (0, dy) if dy > 0 => Direction::Down,
        (0, _) => Direction::Up,
        (dx, 0) if dx > 0 => Direction::Right,
        (_, 0) => Direction::Left,
        _ => return,
    };

    let length = (to.x - from.x).abs() + (to.y - from.y).abs();
    for distance in 0..=length {
        put_checked(frame, from.offset(direction, distance), color);
    }
}

fn put_checked(frame: &mut RgbaImage, position: Position, color: Rgba<u8>) {
    if let Some((x, y)) = position.to_pixel() {
        if let Some(pixel) = frame.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }
}
