//! Board file reader.
//!
//! # Responsibility
//! - Build a `Board` from line-oriented board text.
//! - Collect every recoverable problem as a `LoadIssue` instead of aborting.
//!
//! # Invariants
//! - A category becomes visible only once the next header or end of input
//!   is reached.
//! - A read failure discards the category under construction; committed
//!   categories are kept.
//! - A header whose name would not survive a save is rejected as malformed.

use crate::board::Board;
use crate::format::line::{parse_line, BoardLine};
use crate::model::category::Category;
use crate::model::page::AacPage;
use log::warn;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

/// Recoverable problem found while reading a board file.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// Line starts like a header or item but does not fit the grammar.
    MalformedLine { line: usize, content: String },
    /// Item line appeared before any category header and was dropped.
    OrphanItem { line: usize, image_loc: String },
    /// Input could not be read past this line; parsing stopped.
    ReadFailed { line: usize, message: String },
}

impl LoadIssue {
    fn code(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "malformed_line",
            Self::OrphanItem { .. } => "orphan_item",
            Self::ReadFailed { .. } => "read_failed",
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::OrphanItem { line, .. }
            | Self::ReadFailed { line, .. } => *line,
        }
    }
}

impl Display for LoadIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: malformed board line `{content}`")
            }
            Self::OrphanItem { line, image_loc } => {
                write!(f, "line {line}: item `{image_loc}` appears before any category")
            }
            Self::ReadFailed { line, message } => {
                write!(f, "line {line}: read failed: {message}")
            }
        }
    }
}

/// Result of reading a board: the board plus everything that was skipped.
#[derive(Debug)]
pub struct LoadReport {
    pub board: Board,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// True when every line was either used or deliberately ignored.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Drops the issue list and keeps the board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Reads board text from any buffered reader.
pub fn read_board<R: BufRead>(reader: R) -> LoadReport {
    let mut board = Board::new();
    let mut issues = Vec::new();
    let mut pending: Option<PendingCategory> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                // Drop the partial category so no half-read state leaks.
                pending = None;
                record(
                    &mut issues,
                    LoadIssue::ReadFailed {
                        line: line_no,
                        message: err.to_string(),
                    },
                );
                break;
            }
        };

        match parse_line(&line) {
            BoardLine::Header { image_loc, name } => {
                if let Some(done) = pending.take() {
                    commit(&mut board, done, &mut issues);
                }
                let category = Category::new(name, image_loc);
                if category.validate_header().is_ok() {
                    pending = Some(PendingCategory {
                        line: line_no,
                        content: line.trim().to_string(),
                        category,
                    });
                } else {
                    // Items under a rejected header are reported as orphans.
                    record(
                        &mut issues,
                        LoadIssue::MalformedLine {
                            line: line_no,
                            content: line.trim().to_string(),
                        },
                    );
                }
            }
            BoardLine::Item { image_loc, text } => match pending.as_mut() {
                Some(PendingCategory { category, .. }) => {
                    if category.add_item(image_loc, text).is_err() {
                        record(
                            &mut issues,
                            LoadIssue::MalformedLine {
                                line: line_no,
                                content: line.trim().to_string(),
                            },
                        );
                    }
                }
                None => record(
                    &mut issues,
                    LoadIssue::OrphanItem {
                        line: line_no,
                        image_loc: image_loc.to_string(),
                    },
                ),
            },
            BoardLine::Malformed => record(
                &mut issues,
                LoadIssue::MalformedLine {
                    line: line_no,
                    content: line.trim().to_string(),
                },
            ),
            BoardLine::Ignored => {}
        }
    }

    if let Some(done) = pending {
        commit(&mut board, done, &mut issues);
    }

    LoadReport { board, issues }
}

/// Category still being read, with the header line that opened it.
struct PendingCategory {
    line: usize,
    content: String,
    category: Category,
}

fn commit(board: &mut Board, pending: PendingCategory, issues: &mut Vec<LoadIssue>) {
    if board.insert_category(pending.category).is_err() {
        record(
            issues,
            LoadIssue::MalformedLine {
                line: pending.line,
                content: pending.content,
            },
        );
    }
}

fn record(issues: &mut Vec<LoadIssue>, issue: LoadIssue) {
    warn!(
        "event=load_issue module=format status=skipped code={} line={}",
        issue.code(),
        issue.line()
    );
    issues.push(issue);
}
