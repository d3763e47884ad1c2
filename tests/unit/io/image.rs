//! Tests for maze loading, entrance marking and still image export

#[cfg(test)]
mod tests {
    use crate::common::{HIGHLIGHT, l_shaped};
    use mazetrace::MazeError;
    use mazetrace::io::image::{ensure_parent, export_image, load_maze, mark_entrance};
    use tempfile::TempDir;

    // Tests a saved maze decodes back to the same pixels
    // Verified by converting to grayscale on load
    #[test]
    fn test_export_and_load_png() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested/maze.png");
        let maze = l_shaped().build();

        export_image(&maze, &path).expect("Failed to export image");
        let loaded = load_maze(&path).expect("Failed to load image");

        assert_eq!(loaded, maze);
    }

    // Tests GIF input decodes with its dimensions intact
    // Verified by reading only the first row
    #[test]
    fn test_load_gif() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("maze.gif");
        let maze = l_shaped().build();

        export_image(&maze, &path).expect("Failed to export gif");
        let loaded = load_maze(&path).expect("Failed to load gif");

        assert_eq!(loaded.dimensions(), maze.dimensions());
    }

    // Tests loading a missing file reports its path
    // Verified by dropping the path context
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("absent.gif");

        match load_maze(&path) {
            Err(MazeError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests the entrance marker covers the entrance center on a copy
    // Verified by marking the input bitmap
    #[test]
    fn test_mark_entrance() {
        let maze = l_shaped().build();
        let marked = mark_entrance(&maze, HIGHLIGHT);

        assert_eq!(marked.get_pixel(5, 5), &HIGHLIGHT);
        assert_eq!(marked.get_pixel(4, 6), &HIGHLIGHT);
        assert_eq!(marked.get_pixel(8, 5), maze.get_pixel(8, 5));
        assert_ne!(maze.get_pixel(5, 5), &HIGHLIGHT);
    }

    // Tests parent creation is skipped for bare file names
    // Verified by creating the empty path
    #[test]
    fn test_ensure_parent() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let nested = dir.path().join("a/b/c.png");

        ensure_parent(&nested).expect("Failed to create parent");
        assert!(dir.path().join("a/b").is_dir());
        ensure_parent(std::path::Path::new("bare.png")).expect("Bare names need no parent");
    }
}
