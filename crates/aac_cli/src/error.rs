//! CLI failure type and its process exit codes.

use aac_core::BoardError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anything that makes a subcommand fail.
#[derive(Debug)]
pub enum CliError {
    Board(BoardError),
    /// Board could not be rendered as JSON.
    Render(serde_json::Error),
}

impl CliError {
    /// Process exit code; every variant is non-zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Board(BoardError::NotFound { .. }) => 2,
            Self::Board(BoardError::InvalidArgument(_)) => 3,
            Self::Board(BoardError::NoCurrentCategory | BoardError::EmptyBoard) => 4,
            Self::Board(BoardError::Io { .. }) => 5,
            Self::Render(_) => 6,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "cannot render board as JSON: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err)
    }
}
