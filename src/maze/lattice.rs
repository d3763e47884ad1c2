//! Fixed-pitch cell addressing over a trimmed maze bitmap
//!
//! Cell centers sit on a regular pitch starting at the entrance offset. A wall between
//! two cells is tested at the midpoint half a step away from the current center, and the
//! neighbouring center lies a full pitch away along the same axis.

use crate::io::configuration::{CELL_PITCH, ENTRANCE_OFFSET, HALF_STEP};
use crate::io::error::{Result, malformed_bitmap};
use crate::maze::classify::{Palette, classify};
use crate::maze::moves::{candidate_directions, is_exit};
use bitvec::{BitArr, array::BitArray, order::Lsb0};
use image::{RgbaImage, imageops};
use ndarray::Array2;
use std::sync::Arc;

/// Pixel coordinate of a cell center
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal pixel coordinate
    pub x: i32,
    /// Vertical pixel coordinate
    pub y: i32,
}

/// Center of the entrance cell in the top-left corner of the maze
pub const ENTRANCE: Position = Position::new(ENTRANCE_OFFSET, ENTRANCE_OFFSET);

impl Position {
    /// Create a position from pixel coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of the cell at zero-based `row` and `col`
    pub const fn of_cell(row: i32, col: i32) -> Self {
        Self::new(
            ENTRANCE_OFFSET + col * CELL_PITCH,
            ENTRANCE_OFFSET + row * CELL_PITCH,
        )
    }

    /// Move `distance` pixels in `direction`
    #[must_use]
    pub const fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// The wall midpoint between this center and its neighbour in `direction`
    #[must_use]
    pub const fn wall_midpoint(self, direction: Direction) -> Self {
        self.offset(direction, HALF_STEP)
    }

    /// The neighbouring cell center in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        self.offset(direction, CELL_PITCH)
    }

    /// Direction of travel from this center to an adjacent center, if they are adjacent
    pub fn direction_to(self, next: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == next)
    }

    /// Pixel coordinates as unsigned values, if both are non-negative
    pub fn to_pixel(self) -> Option<(u32, u32)> {
        Some((u32::try_from(self.x).ok()?, u32::try_from(self.y).ok()?))
    }
}

/// Cardinal movement between neighbouring cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller y
    Up,
    /// Toward larger y
    Down,
    /// Toward smaller x
    Left,
    /// Toward larger x
    Right,
}

impl Direction {
    /// All directions in the order candidates are generated and explored
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// The direction pointing back the way this one came
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step as `(dx, dy)`
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    const fn bit(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }
}

type DirectionBits = BitArr!(for 4, in u8, Lsb0);

/// Small set of directions backed by a four-bit array
#[derive(Clone, Copy)]
pub struct DirectionSet {
    bits: DirectionBits,
}

impl DirectionSet {
    /// Create a set with no directions
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Add a direction
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.bit(), true);
    }

    /// Remove a direction, returning whether it was present
    pub fn remove(&mut self, direction: Direction) -> bool {
        let present = self.contains(direction);
        self.bits.set(direction.bit(), false);
        present
    }

    /// Test direction membership
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.bit()).as_deref() == Some(&true)
    }

    /// Test if no directions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count directions in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remove and return the first direction in exploration order
    pub fn pop_first(&mut self) -> Option<Direction> {
        let first = self.iter().next()?;
        self.remove(first);
        Some(first)
    }

    /// Iterate directions in exploration order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl PartialEq for DirectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.as_raw_slice() == other.bits.as_raw_slice()
    }
}

impl Eq for DirectionSet {}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl std::fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Crop a raw maze image to the bounding box of its drawn content
///
/// Content is every pixel whose color differs from the top-left corner color. The
/// returned bitmap covers that rectangle inclusively.
///
/// # Errors
///
/// Returns [`crate::MazeError::MalformedBitmap`] if no pixel differs from the corner
pub fn trim(raw: &RgbaImage) -> Result<RgbaImage> {
    let corner = raw
        .get_pixel_checked(0, 0)
        .copied()
        .ok_or_else(|| malformed_bitmap(&"image has no pixels"))?;

    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0, 0);
    let mut found = false;

    for (x, y, color) in raw.enumerate_pixels() {
        if *color != corner {
            found = true;
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }

    if !found {
        return Err(malformed_bitmap(
            &"no boundary pixels differ from the corner color",
        ));
    }

    let width = max.0 - min.0 + 1;
    let height = max.1 - min.1 + 1;
    Ok(imageops::crop_imm(raw, min.0, min.1, width, height).to_image())
}

/// Summary of the cells reachable from the entrance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeSurvey {
    /// Cells reachable from the entrance without crossing a wall
    pub reachable: usize,
    /// Reachable cells with no onward move that are not the exit
    pub leaves: usize,
    /// Whether the exit is reachable
    pub exit_reachable: bool,
}

/// A classified maze bitmap addressed as a lattice of cells
#[derive(Clone, Debug)]
pub struct Lattice {
    bitmap: Arc<RgbaImage>,
    palette: Palette,
}

impl Lattice {
    /// Classify a trimmed bitmap and wrap it for sharing across search branches
    ///
    /// # Errors
    ///
    /// Returns an error if the bitmap cannot be classified or cannot hold a single cell
    pub fn new(bitmap: RgbaImage) -> Result<Self> {
        Self::from_shared(Arc::new(bitmap))
    }

    /// Build a lattice over an already shared bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the bitmap cannot be classified or cannot hold a single cell
    pub fn from_shared(bitmap: Arc<RgbaImage>) -> Result<Self> {
        let palette = classify(&bitmap)?;
        let lattice = Self { bitmap, palette };

        if lattice.rows() == 0 || lattice.columns() == 0 {
            return Err(malformed_bitmap(&format!(
                "{}x{} bitmap is smaller than one {CELL_PITCH}px cell",
                lattice.bitmap.width(),
                lattice.bitmap.height()
            )));
        }

        Ok(lattice)
    }

    /// The shared, read-only maze bitmap
    pub const fn bitmap(&self) -> &Arc<RgbaImage> {
        &self.bitmap
    }

    /// Wall and background colors
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Number of cell columns
    pub fn columns(&self) -> usize {
        (self.bitmap.width() / CELL_PITCH.unsigned_abs()) as usize
    }

    /// Number of cell rows
    pub fn rows(&self) -> usize {
        (self.bitmap.height() / CELL_PITCH.unsigned_abs()) as usize
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Zero-based `[row, col]` of the cell centered at `position`
    pub fn cell_of(&self, position: Position) -> Option<[usize; 2]> {
        let dx = position.x - ENTRANCE_OFFSET;
        let dy = position.y - ENTRANCE_OFFSET;
        if dx < 0 || dy < 0 || dx % CELL_PITCH != 0 || dy % CELL_PITCH != 0 {
            return None;
        }

        let row = (dy / CELL_PITCH) as usize;
        let col = (dx / CELL_PITCH) as usize;
        (row < self.rows() && col < self.columns()).then_some([row, col])
    }

    /// Walk every cell reachable from the entrance and count the leaves
    ///
    /// Moves follow the same rules as the search, so on a maze without loops the number
    /// of leaves equals the number of dead ends a full exploration reports.
    pub fn survey(&self) -> LatticeSurvey {
        let mut visited = Array2::from_elem((self.rows(), self.columns()), false);
        let mut pending = vec![(ENTRANCE, None)];
        let mut survey = LatticeSurvey::default();

        while let Some((position, arrival)) = pending.pop() {
            let Some(cell) = self.cell_of(position) else {
                continue;
            };
            match visited.get_mut(cell) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }
            survey.reachable += 1;

            let candidates =
                candidate_directions(&self.bitmap, position, arrival, self.palette.wall);
            if is_exit(&self.bitmap, position, candidates) {
                survey.exit_reachable = true;
            } else if candidates.is_empty() {
                survey.leaves += 1;
            } else {
                pending.extend(
                    candidates
                        .iter()
                        .map(|direction| (position.step(direction), Some(direction))),
                );
            }
        }

        survey
    }
}
