/// Represents all possible errors that can occur in the PackFile library.
///
/// This enum is used throughout the crate to provide detailed error information for
/// operations that may fail, such as loading a container, validating its header,
/// and decoding chunk records.
#[derive(Debug)]
pub enum PackError {
    /// Represents an error that occurs when data is not a well formed PackFile.
    InvalidFormat(String),
    /// Represents an error that occurs when a chunk payload is rejected by its record decoder.
    InvalidData(String),
    /// Represents an error that occurs during I/O operations.
    Io(std::io::Error),
}

/// Provides a user-friendly string representation for each error variant in `PackError`.
impl std::fmt::Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::InvalidFormat(err) => write!(f, "Invalid pack file: {err}"),
            PackError::InvalidData(err) => write!(f, "Invalid chunk data: {err}"),
            PackError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

/// Implements the standard error trait for `PackError`, allowing it to be used with
/// error chaining and other error handling utilities.
impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `PackError`.
impl From<std::io::Error> for PackError {
    fn from(error: std::io::Error) -> Self {
        PackError::Io(error)
    }
}
