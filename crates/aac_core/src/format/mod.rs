//! Board file format.
//!
//! # Responsibility
//! - Classify lines of the flat board text format.
//! - Read board text into a `Board` and write a `Board` back out.
//!
//! # Invariants
//! - `write_board` output read by `read_board` reproduces the same
//!   categories and items.
//! - Unrecognized lines never abort a read.

pub mod line;
pub mod reader;
pub mod writer;

pub use line::{parse_line, BoardLine};
pub use reader::{read_board, LoadIssue, LoadReport};
pub use writer::{render_board, write_board};
