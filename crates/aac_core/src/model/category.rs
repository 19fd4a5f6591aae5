//! Category domain model.
//!
//! # Responsibility
//! - Own the image-to-text mapping of one named board category.
//! - Serve as the leaf `AacPage` a display layer renders.
//!
//! # Invariants
//! - Image locations are unique within a category.
//! - Items enumerate in insertion order; overwriting keeps the position.
//! - The stored name is never rewritten; blank names only change the label.

use crate::error::{BoardError, BoardResult};
use crate::model::item::{validate_category_name, validate_image_loc, Item, ItemValidationError};
use crate::model::page::AacPage;
use serde::Serialize;

/// Label shown for categories whose stored name is blank.
pub const UNNAMED_CATEGORY_LABEL: &str = "Unnamed Category";

/// Named group of image tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    /// Icon shown for this category on the home view.
    image_loc: String,
    items: Vec<Item>,
}

impl Category {
    /// Creates an empty category.
    ///
    /// `image_loc` is the header icon written back by `Board::save`. Blank
    /// names are kept for display; `validate_header` decides whether the
    /// category can join a board.
    pub fn new(name: impl Into<String>, image_loc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_loc: image_loc.into(),
            items: Vec::new(),
        }
    }

    /// Checks that the header line `"<image_loc> <name>"` reads back as
    /// this exact name and icon.
    pub fn validate_header(&self) -> Result<(), ItemValidationError> {
        validate_image_loc(&self.image_loc)?;
        validate_category_name(&self.name)
    }

    /// Raw stored name, possibly blank.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_loc(&self) -> &str {
        &self.image_loc
    }

    /// Name for display, falling back to `UNNAMED_CATEGORY_LABEL`.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNNAMED_CATEGORY_LABEL
        } else {
            &self.name
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, image_loc: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.image_loc() == image_loc)
    }
}

impl AacPage for Category {
    /// # Errors
    /// - `InvalidArgument` when the pair fails item validation; the category
    ///   is left unchanged.
    fn add_item(&mut self, image_loc: &str, text: &str) -> BoardResult<()> {
        let item = Item::new(image_loc, text)?;
        match self.position(image_loc) {
            Some(index) => self.items[index].set_text(item.text().to_string()),
            None => self.items.push(item),
        }
        Ok(())
    }

    fn image_locs(&self) -> Vec<&str> {
        self.items.iter().map(Item::image_loc).collect()
    }

    fn category(&self) -> &str {
        self.display_name()
    }

    fn select(&self, image_loc: &str) -> BoardResult<&str> {
        self.position(image_loc)
            .map(|index| self.items[index].text())
            .ok_or_else(|| BoardError::not_found(image_loc))
    }

    fn has_image(&self, image_loc: &str) -> bool {
        self.position(image_loc).is_some()
    }
}
