use std::fmt;

/// Custom error types for the heat map pipeline
#[derive(Debug, Clone)]
pub enum HeatMapError {
    /// File I/O operation failed
    IoError(String),
    /// Move notation did not match the expected trailing-square shape
    MalformedNotation(String),
    /// Rendering backend failed while drawing or writing an image
    RenderError(String),
}

impl fmt::Display for HeatMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatMapError::IoError(msg) => write!(f, "I/O error: {}", msg),
            HeatMapError::MalformedNotation(msg) => {
                write!(f, "Malformed move notation: {}", msg)
            }
            HeatMapError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for HeatMapError {}

// Convenience type alias
pub type Result<T> = std::result::Result<T, HeatMapError>;

// Convert from common error types
impl From<std::io::Error> for HeatMapError {
    fn from(error: std::io::Error) -> Self {
        HeatMapError::IoError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatMapError::MalformedNotation("Nxx".to_string());
        assert_eq!(err.to_string(), "Malformed move notation: Nxx");

        let err = HeatMapError::IoError("no such file".to_string());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pgn");
        let err: HeatMapError = io.into();
        assert!(matches!(err, HeatMapError::IoError(_)));
    }
}
