//! Error types and result handling for shiori.
//!
//! Comparisons themselves are total and never fail. Errors only come out of
//! building a [`SortConfig`](crate::SortConfig), e.g. from an invalid custom
//! chapter regex. All fallible operations return a [`Result<T>`].
//!

/// Type alias for Results with shiori errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration and setup failures.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Missing or rejected builder fields
    #[error(transparent)]
    Builder(#[from] crate::sorter::SortConfigBuilderError),
    /// A configuration value that cannot be used, such as a custom regex
    /// that does not parse
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Other errors that don't fit into specific categories
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
