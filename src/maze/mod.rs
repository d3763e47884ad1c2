//! Maze extraction from raster images
//!
//! This module contains the bitmap-facing half of the solver:
//! - Wall and background color classification
//! - Trimming and fixed-pitch cell addressing
//! - Legal move generation and exit detection

/// Wall and background color detection
pub mod classify;
/// Cell addressing, trimming and reachability survey
pub mod lattice;
/// Candidate direction generation and exit detection
pub mod moves;

pub use classify::Palette;
pub use lattice::{Direction, DirectionSet, ENTRANCE, Lattice, Position};
