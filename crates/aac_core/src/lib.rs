//! Core board engine for the AAC communication board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;

pub use board::{Board, NO_CATEGORY_LABEL};
pub use error::{BoardError, BoardResult};
pub use format::{parse_line, BoardLine, LoadIssue, LoadReport};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::category::{Category, UNNAMED_CATEGORY_LABEL};
pub use model::item::{Item, ItemValidationError, IMAGE_PREFIX};
pub use model::page::AacPage;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
