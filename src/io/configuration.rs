//! Lattice constants and runtime configuration defaults

// Lattice addressing
/// Distance in pixels between adjacent cell centers
pub const CELL_PITCH: i32 = 10;
/// Distance in pixels from a cell center to the wall midpoint between two cells
pub const HALF_STEP: i32 = 5;
/// Pixel offset of the entrance cell center from the trimmed bitmap's origin
pub const ENTRANCE_OFFSET: i32 = 5;

// Rendering
/// Color used to draw explored corridors
pub const HIGHLIGHT_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Half-width in pixels of the entrance marker on the unsolved preview
pub const ENTRANCE_MARKER_RADIUS: i32 = 1;

// Search
// Deep mazes recurse one stack frame per cell, so workers get generous stacks
/// Stack size in bytes for search worker threads
pub const SEARCH_STACK_SIZE: usize = 64 * 1024 * 1024;

// Frame output
/// Maximum number of frame files open for writing at once
pub const MAX_OPEN_FRAME_FILES: usize = 8;
/// Display time of every animation frame except the last
pub const FRAME_DELAY_MS: u32 = 80;
/// Multiplier applied to the frame delay for the final frame
pub const FINAL_FRAME_DELAY_FACTOR: u32 = 25;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Output settings
/// Suffix for the trimmed maze preview with the entrance marked
pub const UNSOLVED_SUFFIX: &str = "_unsolved";
/// Suffix for the still image of the solution
pub const SOLVED_SUFFIX: &str = "_solved";
/// Suffix for the animated exploration trace
pub const TRACE_SUFFIX: &str = "_trace";

// Progress display
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
