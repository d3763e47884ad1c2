//! Per-branch search state

use crate::maze::classify::Palette;
use crate::maze::lattice::{Direction, DirectionSet, ENTRANCE, Lattice, Position};
use crate::maze::moves::{candidate_directions, is_exit};
use image::RgbaImage;
use std::sync::Arc;

/// One branch of the search: where it has been and where it may still go
///
/// The bitmap is shared by every branch; only the history and the remaining candidate
/// directions belong to this state. The history is never empty and its last element is
/// the current position.
#[derive(Clone, Debug)]
pub struct SearchState {
    bitmap: Arc<RgbaImage>,
    history: Vec<Position>,
    candidates: DirectionSet,
    palette: Palette,
}

impl SearchState {
    /// State at the entrance cell, before any move
    pub fn entrance(lattice: &Lattice) -> Self {
        let bitmap = Arc::clone(lattice.bitmap());
        let palette = lattice.palette();
        let candidates = candidate_directions(&bitmap, ENTRANCE, None, palette.wall);

        Self {
            bitmap,
            history: vec![ENTRANCE],
            candidates,
            palette,
        }
    }

    /// The state one cell further in `direction`, with freshly computed candidates
    #[must_use]
    pub fn advance(&self, direction: Direction) -> Self {
        let next = self.current().step(direction);
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(next);

        let candidates =
            candidate_directions(&self.bitmap, next, Some(direction), self.palette.wall);

        Self {
            bitmap: Arc::clone(&self.bitmap),
            history,
            candidates,
            palette: self.palette,
        }
    }

    /// Remove the next untried direction; a taken direction is never offered again
    pub fn take_candidate(&mut self) -> Option<Direction> {
        self.candidates.pop_first()
    }

    /// Current cell center
    pub fn current(&self) -> Position {
        // history is never empty
        self.history.last().copied().unwrap_or(ENTRANCE)
    }

    /// Visited cell centers in traversal order
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Untried directions from the current cell
    pub const fn candidates(&self) -> DirectionSet {
        self.candidates
    }

    /// Number of moves made since the entrance
    pub fn depth(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Test whether the current cell opens onto the exit
    pub fn is_exit(&self) -> bool {
        is_exit(&self.bitmap, self.current(), self.candidates)
    }

    /// The shared maze bitmap
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// Wall and background colors
    pub const fn palette(&self) -> Palette {
        self.palette
    }
}
