use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for gradle-bump operations
#[derive(Error, Debug)]
pub enum GradleBumpError {
    #[error("Failed to read '{}': {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gradle-bump
pub type Result<T> = std::result::Result<T, GradleBumpError>;

impl GradleBumpError {
    /// Create a read error carrying the resolved path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradleBumpError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error carrying the resolved path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradleBumpError::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GradleBumpError::Parse(msg.into())
    }

    /// Create a validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        GradleBumpError::Validation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GradleBumpError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GradleBumpError::parse("versionCode not found");
        assert_eq!(err.to_string(), "Parse error: versionCode not found");
    }

    #[test]
    fn test_read_error_contains_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = GradleBumpError::read("android/app/build.gradle", io_err);
        let msg = err.to_string();
        assert!(msg.contains("android/app/build.gradle"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_write_error_contains_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GradleBumpError::write("build.gradle.bak", io_err);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to write"));
        assert!(msg.contains("build.gradle.bak"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GradleBumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(GradleBumpError::validation("test")
            .to_string()
            .contains("Validation"));
        assert!(GradleBumpError::config("test")
            .to_string()
            .contains("Configuration"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GradleBumpError::parse("x"), "Parse error"),
            (GradleBumpError::validation("x"), "Validation error"),
            (GradleBumpError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
