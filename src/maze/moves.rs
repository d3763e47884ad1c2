//! Legal move generation and exit detection

use crate::io::configuration::HALF_STEP;
use crate::maze::lattice::{Direction, DirectionSet, Position};
use image::{Rgba, RgbaImage};

/// Color at `position`, or `None` when it lies outside the bitmap
pub fn sample(bitmap: &RgbaImage, position: Position) -> Option<Rgba<u8>> {
    let (x, y) = position.to_pixel()?;
    bitmap.get_pixel_checked(x, y).copied()
}

/// Test whether a pixel coordinate lies inside the bitmap
pub fn contains(bitmap: &RgbaImage, position: Position) -> bool {
    sample(bitmap, position).is_some()
}

/// Test whether a cell center sits in the last column, where the exit opens
pub fn on_exit_column(bitmap: &RgbaImage, position: Position) -> bool {
    i64::from(position.x) + i64::from(HALF_STEP) >= i64::from(bitmap.width()) - 1
}

/// Directions worth exploring from `position`
///
/// A direction is open when the wall midpoint toward it is not the wall color; a
/// midpoint past the bitmap edge is an opening in the border. The direction opposite
/// `arrival` is never offered. At the entrance, where nothing has been arrived from,
/// the way back out through the left border is excluded instead.
///
/// Directions leading to a center outside the bitmap are dropped, except the exit move
/// from the last column.
pub fn candidate_directions(
    bitmap: &RgbaImage,
    position: Position,
    arrival: Option<Direction>,
    wall: Rgba<u8>,
) -> DirectionSet {
    let excluded = arrival.map_or(Direction::Left, Direction::opposite);

    Direction::ALL
        .into_iter()
        .filter(|&direction| direction != excluded)
        .filter(|&direction| {
            sample(bitmap, position.wall_midpoint(direction)).is_none_or(|color| color != wall)
        })
        .filter(|&direction| {
            contains(bitmap, position.step(direction))
                || (direction == Direction::Right && on_exit_column(bitmap, position))
        })
        .collect()
}

/// Test whether the search has reached the exit
///
/// The exit is an opening in the right border, so it holds when moving right is a
/// candidate and the right wall midpoint lies on or beyond the bitmap's last column.
pub fn is_exit(bitmap: &RgbaImage, position: Position, candidates: DirectionSet) -> bool {
    candidates.contains(Direction::Right) && on_exit_column(bitmap, position)
}

/// Direction used to enter the last position of `history`
pub fn arrival_direction(history: &[Position]) -> Option<Direction> {
    match history {
        [.., previous, current] => previous.direction_to(*current),
        _ => None,
    }
}
