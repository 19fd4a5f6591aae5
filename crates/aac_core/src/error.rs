//! Error taxonomy shared by category and board operations.
//!
//! # Invariants
//! - Read-path queries (`image_locs`, `has_image`, `category`) never return
//!   these errors; they degrade to empty/false/fallback values instead.
//! - `Io` failures never leave the in-memory board half-updated.

use crate::model::item::ItemValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type BoardResult<T> = Result<T, BoardError>;

/// Errors returned by board and category operations.
#[derive(Debug)]
pub enum BoardError {
    /// Image location or text failed item validation.
    InvalidArgument(ItemValidationError),
    /// Image is not present on the page being queried.
    NotFound { image_loc: String },
    /// Mutation attempted while the cursor points at no category.
    NoCurrentCategory,
    /// Cursor reset requested on a board without categories.
    EmptyBoard,
    /// Board file could not be opened, read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::NotFound { image_loc } => write!(f, "image not found: {image_loc}"),
            Self::NoCurrentCategory => write!(f, "no current category selected"),
            Self::EmptyBoard => write!(f, "board has no categories"),
            Self::Io { path, source } => {
                write!(f, "board file `{}` i/o failure: {source}", path.display())
            }
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } => None,
            Self::NoCurrentCategory => None,
            Self::EmptyBoard => None,
        }
    }
}

impl From<ItemValidationError> for BoardError {
    fn from(value: ItemValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl BoardError {
    pub(crate) fn not_found(image_loc: &str) -> Self {
        Self::NotFound {
            image_loc: image_loc.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
