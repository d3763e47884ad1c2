//! Tests for error types including source chaining, context and message formatting

#[cfg(test)]
mod tests {
    use mazetrace::MazeError;
    use mazetrace::io::error::{WithContext, invalid_parameter, malformed_bitmap};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MazeError::FileSystem {
            path: "/tmp/maze.gif".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(
            MazeError::NoSolutionFound { dead_ends: 3 }
                .source()
                .is_none()
        );
    }

    // Tests NoSolutionFound reports the dead-end count
    // Verified by omitting the count from the message
    #[test]
    fn test_no_solution_found_message() {
        let message = MazeError::NoSolutionFound { dead_ends: 17 }.to_string();
        assert!(message.contains("No solution found"));
        assert!(message.contains("17 dead ends"));
    }

    // Tests UnclassifiableImage reports the bitmap size
    // Verified by swapping width and height
    #[test]
    fn test_unclassifiable_image_message() {
        let message = MazeError::UnclassifiableImage {
            width: 40,
            height: 30,
        }
        .to_string();
        assert!(message.contains("40x30"));
        assert!(message.contains("single color"));
    }

    // Tests DepthLimitExceeded and DimensionMismatch formatting
    // Verified by printing expected and found in the wrong order
    #[test]
    fn test_limit_and_dimension_messages() {
        let depth = MazeError::DepthLimitExceeded {
            limit: 12,
            truncated: 2,
        }
        .to_string();
        assert!(depth.contains("depth limit 12"));
        assert!(depth.contains("2 branches"));

        let mismatch = MazeError::DimensionMismatch {
            expected: (4, 5),
            found: (3, 5),
        }
        .to_string();
        assert!(mismatch.contains("expected 4x5"));
        assert!(mismatch.contains("decoded 3x5"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("max_open_files", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("max_open_files"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests malformed bitmap helper keeps the reason
    // Verified by dropping the reason
    #[test]
    fn test_malformed_bitmap_error() {
        let error = malformed_bitmap(&"no boundary");
        assert_eq!(error.to_string(), "Malformed bitmap: no boundary");
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MazeError::ImageExport {
            path: PathBuf::from("/restricted/maze_solved.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/maze_solved.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests path context replaces the placeholder on I/O errors
    // Verified by keeping the placeholder path
    #[test]
    fn test_with_path_rewrites_file_system_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));

        match result.with_path(Path::new("frames/out.png"), "create file") {
            Err(MazeError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("frames/out.png"));
                assert_eq!(operation, "create file");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests path context applies to decoding errors
    // Verified by converting image errors to file system errors
    #[test]
    fn test_with_path_rewrites_image_errors() {
        let result: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));

        match result.with_path(Path::new("maze.gif"), "decode") {
            Err(MazeError::ImageLoad { path, .. }) => assert_eq!(path, PathBuf::from("maze.gif")),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }
}
