/// Command-line arguments and the end-to-end pipeline
pub mod cli;
/// Lattice constants and output defaults
pub mod configuration;
/// Error types for every maze operation
pub mod error;
/// Throttled saving of individual frames
pub mod frames;
/// Maze image loading and still image export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Animated GIF export
pub mod visualization;
