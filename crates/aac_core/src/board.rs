//! Two-level board: categories of items plus the display cursor.
//!
//! # Responsibility
//! - Own every category, keyed by name, in file order.
//! - Track which category image-level operations apply to.
//! - Load from and save to the flat board file format.
//!
//! # Invariants
//! - Category names are unique; re-inserting a name replaces in place.
//! - The cursor is either unset or a valid position in `categories`.
//! - Nothing removes categories, so a set cursor stays valid.
//!
//! # See also
//! - `crate::format` for the file grammar.

use crate::error::{BoardError, BoardResult};
use crate::format::{read_board, render_board, write_board, LoadReport};
use crate::model::category::Category;
use crate::model::page::AacPage;
use log::{error, info};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Label reported by `Board::category` while no category is selected.
pub const NO_CATEGORY_LABEL: &str = "No Category Selected";

/// Whole AAC board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    categories: Vec<Category>,
    #[serde(skip)]
    cursor: Option<usize>,
}

impl Board {
    /// Creates an empty board with the cursor unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a board file.
    ///
    /// # Errors
    /// - Returns `Io` when the file cannot be opened.
    ///
    /// Problems inside the file do not fail the load; they are listed in
    /// `LoadReport::issues`.
    pub fn load(path: impl AsRef<Path>) -> BoardResult<LoadReport> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=board_load module=board status=start");

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!(
                    "event=board_load module=board status=error duration_ms={} error_code=open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(BoardError::io(path, err));
            }
        };

        let report = read_board(BufReader::new(file));
        info!(
            "event=board_load module=board status=ok duration_ms={} categories={} items={} issues={}",
            started_at.elapsed().as_millis(),
            report.board.len(),
            report.board.item_count(),
            report.issues.len()
        );
        Ok(report)
    }

    /// Reads a board from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> LoadReport {
        read_board(reader)
    }

    /// Reads a board from in-memory text.
    pub fn parse(text: &str) -> LoadReport {
        read_board(text.as_bytes())
    }

    /// Writes the board to `path`, replacing any existing file.
    ///
    /// # Errors
    /// - Returns `Io` when the file cannot be created or written. The
    ///   in-memory board is unaffected.
    pub fn save(&self, path: impl AsRef<Path>) -> BoardResult<()> {
        let path = path.as_ref();
        let started_at = Instant::now();

        let result = File::create(path).and_then(|file| self.write_to(BufWriter::new(file)));
        match result {
            Ok(()) => {
                info!(
                    "event=board_save module=board status=ok duration_ms={} categories={} items={}",
                    started_at.elapsed().as_millis(),
                    self.len(),
                    self.item_count()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=board_save module=board status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(BoardError::io(path, err))
            }
        }
    }

    /// Writes the board in file grammar to any writer.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        write_board(self, writer)
    }

    /// Serializes the board in file grammar.
    pub fn to_text(&self) -> String {
        render_board(self)
    }

    /// Adds a category, replacing an existing one with the same name.
    ///
    /// A replaced category keeps its enumeration position, so the cursor
    /// still names the same category afterwards. Returns `true` on replace.
    ///
    /// # Errors
    /// - `InvalidArgument` when the category header could not be written
    ///   and read back unchanged (blank or padded name, bad icon path). The
    ///   board is left unchanged.
    pub fn insert_category(&mut self, category: Category) -> BoardResult<bool> {
        category.validate_header()?;
        let replaced = match self.position(category.name()) {
            Some(index) => {
                info!(
                    "event=category_replaced module=board status=ok position={} items={}",
                    index,
                    category.len()
                );
                self.categories[index] = category;
                true
            }
            None => {
                self.categories.push(category);
                false
            }
        };
        Ok(replaced)
    }

    /// Points the cursor at the first category.
    ///
    /// # Errors
    /// - Returns `EmptyBoard` when there are no categories; the cursor stays
    ///   unset.
    pub fn reset(&mut self) -> BoardResult<()> {
        if self.categories.is_empty() {
            return Err(BoardError::EmptyBoard);
        }
        self.cursor = Some(0);
        info!("event=board_reset module=board status=ok categories={}", self.len());
        Ok(())
    }

    /// Category under the cursor, `None` while unset.
    pub fn current_category(&self) -> Option<&Category> {
        self.cursor.and_then(|index| self.categories.get(index))
    }

    fn current_category_mut(&mut self) -> Option<&mut Category> {
        self.cursor.and_then(|index| self.categories.get_mut(index))
    }

    /// Categories in enumeration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    pub fn get_category(&self, name: &str) -> Option<&Category> {
        self.position(name).map(|index| &self.categories[index])
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
    }
}

impl AacPage for Board {
    /// # Errors
    /// - `NoCurrentCategory` while the cursor is unset.
    /// - `InvalidArgument` from the current category.
    fn add_item(&mut self, image_loc: &str, text: &str) -> BoardResult<()> {
        self.current_category_mut()
            .ok_or(BoardError::NoCurrentCategory)?
            .add_item(image_loc, text)
    }

    fn image_locs(&self) -> Vec<&str> {
        self.current_category()
            .map(Category::image_locs)
            .unwrap_or_default()
    }

    fn category(&self) -> &str {
        self.current_category()
            .map_or(NO_CATEGORY_LABEL, Category::display_name)
    }

    fn select(&self, image_loc: &str) -> BoardResult<&str> {
        self.current_category()
            .ok_or_else(|| BoardError::not_found(image_loc))?
            .select(image_loc)
    }

    fn has_image(&self, image_loc: &str) -> bool {
        self.current_category()
            .is_some_and(|category| category.has_image(image_loc))
    }
}
