//! Frame collection during search and assembly into an animation

use crate::io::error::{Result, invalid_parameter};
use crate::maze::lattice::Position;
use image::{Delay, Frame, RgbaImage};
use parking_lot::Mutex;

/// Why a branch produced a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// The branch ran out of moves before reaching the exit
    DeadEnd,
    /// The branch reached the exit
    Solution,
}

impl FrameKind {
    /// Short lowercase label used in file names and logs
    pub const fn label(self) -> &'static str {
        match self {
            Self::DeadEnd => "dead_end",
            Self::Solution => "solution",
        }
    }
}

/// A rendered snapshot of one terminal branch
#[derive(Clone, Debug)]
pub struct TraceFrame {
    /// Outcome of the branch
    pub kind: FrameKind,
    /// Cell centers visited by the branch, entrance first
    pub history: Vec<Position>,
    /// The maze with the branch's corridor highlighted
    pub image: RgbaImage,
}

/// Receives a notification for every frame a search emits
pub trait FrameObserver: Send + Sync {
    /// Called after a frame is recorded; `total` counts every frame so far
    fn frame_emitted(&self, kind: FrameKind, total: usize);
}

/// Append-only, completion-ordered frame collection shared by all search branches
pub struct FrameSink<'a> {
    frames: Mutex<Vec<TraceFrame>>,
    observer: Option<&'a dyn FrameObserver>,
}

impl Default for FrameSink<'_> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<'a> FrameSink<'a> {
    /// Create an empty sink, optionally reporting each recorded frame
    pub fn new(observer: Option<&'a dyn FrameObserver>) -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
            observer,
        }
    }

    /// Record a frame, returning its position in completion order
    pub fn push(&self, frame: TraceFrame) -> usize {
        let kind = frame.kind;
        let index = {
            let mut frames = self.frames.lock();
            frames.push(frame);
            frames.len() - 1
        };

        if let Some(observer) = self.observer {
            observer.frame_emitted(kind, index + 1);
        }
        index
    }

    /// Number of frames recorded so far
    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    /// Test if no frames have been recorded
    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    /// Consume the sink, returning frames in completion order
    pub fn into_frames(self) -> Vec<TraceFrame> {
        self.frames.into_inner()
    }
}

/// Ordered frames with per-frame display times, ready for encoding
#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<TraceFrame>,
    frame_delay_ms: u32,
    final_delay_ms: u32,
}

impl Animation {
    /// Order trace frames for playback with the solution shown last
    ///
    /// Frames keep their completion order, except the frame whose history equals
    /// `solution`, which moves to the end. Every frame is shown for `frame_delay_ms`
    /// except the last, which is shown for `final_delay_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no frames or a delay is zero
    pub fn assemble(
        frames: Vec<TraceFrame>,
        solution: &[Position],
        frame_delay_ms: u32,
        final_delay_ms: u32,
    ) -> Result<Self> {
        if frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"an animation needs at least one frame",
            ));
        }
        if frame_delay_ms == 0 || final_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms.min(final_delay_ms),
                &"frame delays must be positive",
            ));
        }

        let (mut winners, mut ordered): (Vec<_>, Vec<_>) = frames
            .into_iter()
            .partition(|frame| frame.kind == FrameKind::Solution && frame.history == solution);
        // Only one copy of the winning path is shown, as the closing frame
        winners.truncate(1);
        ordered.append(&mut winners);

        Ok(Self {
            frames: ordered,
            frame_delay_ms,
            final_delay_ms,
        })
    }

    /// Frames in playback order
    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Test if the animation holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Display time of each frame in playback order
    pub fn delays_ms(&self) -> Vec<u32> {
        let last = self.frames.len().saturating_sub(1);
        (0..self.frames.len())
            .map(|index| {
                if index == last {
                    self.final_delay_ms
                } else {
                    self.frame_delay_ms
                }
            })
            .collect()
    }

    /// The closing frame
    pub fn last(&self) -> Option<&TraceFrame> {
        self.frames.last()
    }

    /// Convert to encoder frames, raising every delay to at least `min_delay_ms`
    pub fn to_gif_frames(&self, min_delay_ms: u32) -> Vec<Frame> {
        self.frames
            .iter()
            .zip(self.delays_ms())
            .map(|(frame, delay_ms)| {
                Frame::from_parts(
                    frame.image.clone(),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms.max(min_delay_ms), 1),
                )
            })
            .collect()
    }
}
