//! Error types used by the crate.

use thiserror::Error;

pub use mapsketch_types::error::{IndexOutOfRange, InvalidGeometryError};

/// String is not a `#RRGGBB` or `#RRGGBBAA` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0}")]
pub struct InvalidColor(pub String);

/// Style sheet cannot be loaded.
#[derive(Debug, Error)]
pub enum StyleSheetError {
    /// Style sheet is not valid JSON or has fields of wrong type.
    #[cfg(feature = "serde")]
    #[error("failed to parse style sheet: {0}")]
    Parse(#[from] serde_json::Error),
    /// Line width of an entry is not a positive number.
    #[error("line width of '{entry}' must be positive, got {width}")]
    InvalidWidth {
        /// Name of the style sheet entry.
        entry: &'static str,
        /// Width value.
        width: f64,
    },
}
