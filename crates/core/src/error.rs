//! Error types for shelfpack.

use thiserror::Error;

/// Result type alias for shelfpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while filling a shelf.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid carton template provided.
    #[error("Invalid carton: {0}")]
    InvalidCarton(String),

    /// Invalid shelf bounds provided.
    #[error("Invalid shelf: {0}")]
    InvalidShelf(String),

    /// Invalid pile options provided.
    #[error("Invalid pile options: {0}")]
    InvalidOptions(String),

    /// A carton's raw dimensions exceed the shelf bounds on some axis.
    #[error("Carton '{name}' is larger than the shelf")]
    TooLargeForShelf {
        /// Name of the rejected carton type.
        name: String,
    },

    /// No shelf width left for another pile.
    #[error("Out of shelf space while placing carton '{name}'")]
    OutOfShelfSpace {
        /// Name of the rejected carton type.
        name: String,
    },
}

impl Error {
    /// Returns true for the two recoverable placement refusals, as opposed
    /// to malformed-input errors.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Error::TooLargeForShelf { .. } | Error::OutOfShelfSpace { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_classification() {
        assert!(Error::TooLargeForShelf {
            name: "Flat Box".into()
        }
        .is_refusal());
        assert!(Error::OutOfShelfSpace {
            name: "Flat Box".into()
        }
        .is_refusal());
        assert!(!Error::InvalidCarton("no name".into()).is_refusal());
    }

    #[test]
    fn test_display_names_carton() {
        let err = Error::OutOfShelfSpace {
            name: "Paige 15".into(),
        };
        assert!(err.to_string().contains("Paige 15"));
    }
}
