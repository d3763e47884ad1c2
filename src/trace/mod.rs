//! Rendering of explored paths and their assembly into an ordered trace

/// Corridor drawing onto copies of the maze bitmap
pub mod render;
/// Frame sink and animation assembly
pub mod sequence;

pub use sequence::{Animation, FrameKind, FrameObserver, FrameSink, TraceFrame};
