use thiserror::Error;

/// Convenient result alias for the fuelrace library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a constructor or operation receives a value outside its domain.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when an operation is called in a race state that does not allow it.
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// Raised when make/model catalog data fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState {
            message: message.into(),
        }
    }
}
