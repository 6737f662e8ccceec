use std::path::PathBuf;
use thiserror::Error;

/// Error type for the dashboard cleanup
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Line {index} is out of range (document has {total} lines)")]
    LineOutOfRange { index: usize, total: usize },
}

impl FilterError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    pub fn line_out_of_range(index: usize, total: usize) -> Self {
        Self::LineOutOfRange { index, total }
    }
}

/// Result type alias using FilterError
pub type FilterResult<T> = Result<T, FilterError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> FilterError {
    let path = path.into();
    move |err| FilterError::io_error(err, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = map_io_err("missing.jsx")(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        let msg = err.to_string();
        assert!(msg.contains("missing.jsx"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = FilterError::line_out_of_range(9, 3);
        assert_eq!(
            err.to_string(),
            "Line 9 is out of range (document has 3 lines)"
        );
    }
}
