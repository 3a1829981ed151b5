//! Helper module with this crate's error type.

/// An error while writing styled text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A decoration outside the known set of decorations.
    #[error("no control text for decoration {0}")]
    UnsupportedDecoration(String),

    /// An error writing to the terminal.
    #[error("could not write to terminal")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Determine whether this error is an unsupported decoration.
    pub fn is_unsupported_decoration(&self) -> bool {
        matches!(*self, Self::UnsupportedDecoration(_))
    }
}

/// Converting an infallible value cannot fail.
impl From<core::convert::Infallible> for Error {
    fn from(value: core::convert::Infallible) -> Self {
        match value {}
    }
}

/// The result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error() {
        let error = Error::UnsupportedDecoration("7".to_owned());
        assert!(error.is_unsupported_decoration());
        assert_eq!(error.to_string(), "no control text for decoration 7");
        assert!(error.source().is_none());

        let error = Error::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(!error.is_unsupported_decoration());
        assert_eq!(error.to_string(), "could not write to terminal");
        assert!(error.source().is_some());
    }
}
