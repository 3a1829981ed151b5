//! Helper module with this crate's error types.

/// An out-of-bounds error.
///
/// This error indicates a number that does not identify a console color,
/// i.e., that falls outside `0..=15`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

/// A string that does not name a console color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not the name of a console color")]
pub struct UnknownColorError(pub String);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            OutOfBoundsError::new(16_u8, 0..=15).to_string(),
            "16 does not fit into range 0..=15"
        );
        assert_eq!(
            UnknownColorError("mauve".to_owned()).to_string(),
            "\"mauve\" is not the name of a console color"
        );
    }
}
