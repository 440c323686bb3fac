//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilemerge::EngineError;
    use tilemerge::io::error::{file_system_error, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/moves.txt", "open", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/moves.txt"));
        assert!(message.contains("open"));
        assert!(message.contains("file not found"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("direction", &"sideways", &"expected one of left, right");

        let message = error.to_string();
        assert!(message.contains("direction"));
        assert!(message.contains("sideways"));
        assert!(message.contains("expected one of left, right"));
        assert!(error.source().is_none());
    }

    // Tests dimension and full-board errors name the board size
    // Verified by omitting the height from messages
    #[test]
    fn test_board_size_errors() {
        let dimensions = EngineError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert!(dimensions.to_string().contains("0x4"));

        let full = EngineError::BoardFull {
            width: 4,
            height: 4,
        };
        assert!(full.to_string().contains("4x4"));
        assert!(full.to_string().contains("no free cells"));
    }

    // Tests InvalidTile error reports the position and value
    // Verified by swapping row and column in the message
    #[test]
    fn test_invalid_tile_error() {
        let error = EngineError::InvalidTile {
            row: 1,
            col: 3,
            value: 6,
        };

        let message = error.to_string();
        assert!(message.contains("(1, 3)"));
        assert!(message.contains('6'));
    }

    // Tests I/O errors convert into output errors with their source
    // Verified by dropping the source in the conversion
    #[test]
    fn test_io_error_conversion() {
        let error: EngineError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();

        assert!(matches!(error, EngineError::Output { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("pipe closed"));
    }
}
