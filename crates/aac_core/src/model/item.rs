//! Item domain model.
//!
//! # Responsibility
//! - Define the `(image_loc, text)` pair shown as one tile on the board.
//! - Validate both halves so every stored item can be written to a board
//!   file and read back unchanged.
//!
//! # Invariants
//! - `image_loc` is non-empty, starts with `img/` and contains no whitespace.
//! - `text` is non-blank, has no leading or trailing whitespace and
//!   contains no line break.
//!
//! # See also
//! - `crate::format` for the line grammar these rules mirror.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix every image location must carry in board files.
pub const IMAGE_PREFIX: &str = "img/";

/// Validation failures for items and category headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Image location is empty or only whitespace.
    EmptyImageLoc,
    /// Image location does not start with `img/`.
    MissingImagePrefix(String),
    /// Image location contains whitespace, which the file grammar uses as
    /// the separator.
    WhitespaceInImageLoc(String),
    /// Spoken text is empty or only whitespace.
    EmptyText,
    /// Spoken text starts or ends with whitespace, which a board file
    /// cannot carry.
    PaddedText(String),
    /// Spoken text spans more than one line.
    MultilineText,
    /// Category name is empty or only whitespace.
    BlankCategoryName,
    /// Category name starts or ends with whitespace.
    PaddedCategoryName(String),
    /// Category name spans more than one line.
    MultilineCategoryName,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImageLoc => write!(f, "image location cannot be empty"),
            Self::MissingImagePrefix(value) => {
                write!(f, "image location `{value}` must start with `{IMAGE_PREFIX}`")
            }
            Self::WhitespaceInImageLoc(value) => {
                write!(f, "image location `{value}` must not contain whitespace")
            }
            Self::EmptyText => write!(f, "item text cannot be empty"),
            Self::PaddedText(value) => {
                write!(f, "item text `{value}` must not start or end with whitespace")
            }
            Self::MultilineText => write!(f, "item text must fit on a single line"),
            Self::BlankCategoryName => write!(f, "category name cannot be empty"),
            Self::PaddedCategoryName(value) => {
                write!(f, "category name `{value}` must not start or end with whitespace")
            }
            Self::MultilineCategoryName => write!(f, "category name must fit on a single line"),
        }
    }
}

impl Error for ItemValidationError {}

/// One image tile and the text spoken when it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    image_loc: String,
    text: String,
}

impl Item {
    /// Creates a validated item.
    ///
    /// # Errors
    /// - Returns `ItemValidationError` when either field breaks the item
    ///   invariants.
    pub fn new(
        image_loc: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            image_loc: image_loc.into(),
            text: text.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks item invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_image_loc(&self.image_loc)?;
        validate_text(&self.text)
    }

    pub fn image_loc(&self) -> &str {
        &self.image_loc
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the spoken text, keeping the image location.
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Checks that `image_loc` can appear as a path token in a board file.
pub fn validate_image_loc(image_loc: &str) -> Result<(), ItemValidationError> {
    if image_loc.trim().is_empty() {
        return Err(ItemValidationError::EmptyImageLoc);
    }
    if image_loc.chars().any(char::is_whitespace) {
        return Err(ItemValidationError::WhitespaceInImageLoc(
            image_loc.to_string(),
        ));
    }
    if !image_loc.starts_with(IMAGE_PREFIX) || image_loc.len() == IMAGE_PREFIX.len() {
        return Err(ItemValidationError::MissingImagePrefix(
            image_loc.to_string(),
        ));
    }
    Ok(())
}

fn validate_text(text: &str) -> Result<(), ItemValidationError> {
    if text.trim().is_empty() {
        return Err(ItemValidationError::EmptyText);
    }
    if text.contains(['\n', '\r']) {
        return Err(ItemValidationError::MultilineText);
    }
    if text.trim() != text {
        return Err(ItemValidationError::PaddedText(text.to_string()));
    }
    Ok(())
}

/// Checks that a category name survives a header line unchanged.
pub fn validate_category_name(name: &str) -> Result<(), ItemValidationError> {
    if name.trim().is_empty() {
        return Err(ItemValidationError::BlankCategoryName);
    }
    if name.contains(['\n', '\r']) {
        return Err(ItemValidationError::MultilineCategoryName);
    }
    if name.trim() != name {
        return Err(ItemValidationError::PaddedCategoryName(name.to_string()));
    }
    Ok(())
}
