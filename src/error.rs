//! Error types for the colorfmt library

use thiserror::Error;

/// Result type alias for colorfmt operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error type for color classification and conversion
///
/// Every failure in this crate is one kind: the input either matched none of
/// the six lexical shapes, or a conversion needed numeric channels from an
/// input that has none (a keyword color such as `"red"`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not in a recognized or convertible color format
    #[error("unrecognized color format (expected hex, rgb, rgba, hsl or hsla): {input}")]
    UnrecognizedColorFormat { input: String },
}

impl ColorError {
    /// Create an unrecognized-format error for the given input
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::UnrecognizedColorFormat {
            input: input.into(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::UnrecognizedColorFormat { input } => {
                format!(
                    "The color \"{}\" is not in a convertible format. \
                     Use hexadecimal, rgb, rgba, hsl or hsla notation.",
                    input
                )
            }
        }
    }
}
