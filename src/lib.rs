//! Concurrent backtracking maze solver that renders its own exploration
//!
//! A raster maze image is trimmed to its border, classified into wall and background
//! colors and addressed as a fixed-pitch lattice of cells. The solver explores the
//! lattice with one task per visited cell, rendering every dead end and the winning path
//! into an ordered trace that can be exported as an animation.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Color classification, cell addressing and move generation
pub mod maze;
/// Backtracking search coordination
pub mod solver;
/// Rendering of explored paths and frame sequencing
pub mod trace;

pub use io::error::{MazeError, Result};
