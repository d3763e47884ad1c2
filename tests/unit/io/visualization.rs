//! Tests for animated trace export

#[cfg(test)]
mod tests {
    use crate::common::{HIGHLIGHT, l_shaped, lattice_of};
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use mazetrace::MazeError;
    use mazetrace::io::visualization::export_gif;
    use mazetrace::maze::lattice::{ENTRANCE, Position};
    use mazetrace::trace::render::render;
    use mazetrace::trace::sequence::{Animation, FrameKind, TraceFrame};
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::TempDir;

    fn animation() -> Animation {
        let lattice = lattice_of(l_shaped().build());
        let dead_end = vec![ENTRANCE];
        let solution = vec![ENTRANCE, Position::of_cell(0, 1), Position::of_cell(1, 1)];

        let frames = vec![
            TraceFrame {
                kind: FrameKind::Solution,
                image: render(lattice.bitmap(), &solution, HIGHLIGHT),
                history: solution.clone(),
            },
            TraceFrame {
                kind: FrameKind::DeadEnd,
                image: render(lattice.bitmap(), &dead_end, HIGHLIGHT),
                history: dead_end,
            },
        ];
        Animation::assemble(frames, &solution, 80, 2000).expect("Failed to assemble")
    }

    // Tests the exported GIF holds every frame with the long closing delay
    // Verified by encoding only the closing frame
    #[test]
    fn test_export_gif() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out/maze_trace.gif");

        export_gif(&animation(), &path).expect("Failed to export gif");

        let file = BufReader::new(File::open(&path).expect("Failed to open gif"));
        let frames = GifDecoder::new(file)
            .expect("Failed to read gif header")
            .into_frames()
            .collect_frames()
            .expect("Failed to decode frames");

        assert_eq!(frames.len(), 2);
        let delays: Vec<u32> = frames
            .iter()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                numer / denom
            })
            .collect();
        assert_eq!(delays, vec![80, 2000]);
        assert_eq!(frames[0].buffer().dimensions(), (21, 21));
    }

    // Tests export to an unwritable location fails
    // Verified by ignoring file creation errors
    #[test]
    fn test_export_gif_bad_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").expect("Failed to write blocker");

        let result = export_gif(&animation(), &blocker.join("trace.gif"));
        assert!(matches!(result, Err(MazeError::FileSystem { .. })));
    }
}
