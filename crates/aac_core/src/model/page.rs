//! Page surface shared by categories and the board.
//!
//! A display layer holds `&dyn AacPage` for whichever page is active and
//! renders it without knowing whether it is a single category or the board
//! delegating to its current category.

use crate::error::BoardResult;

/// Five-operation page contract consumed by front ends.
pub trait AacPage {
    /// Adds or overwrites the spoken text for an image.
    fn add_item(&mut self, image_loc: &str, text: &str) -> BoardResult<()>;

    /// Lists image locations on this page. Never fails; empty when the page
    /// has nothing to show.
    fn image_locs(&self) -> Vec<&str>;

    /// Display label of the page.
    fn category(&self) -> &str;

    /// Returns the text spoken for an image.
    fn select(&self, image_loc: &str) -> BoardResult<&str>;

    /// Presence check. Never fails.
    fn has_image(&self, image_loc: &str) -> bool;
}
