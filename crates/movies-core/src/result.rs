//! Result type aliases for the Movies API.

use crate::MoviesError;

/// A specialized `Result` type for Movies API operations.
pub type MoviesResult<T> = Result<T, MoviesError>;
