//! Board domain model.
//!
//! # Responsibility
//! - Define the item and category records held by a board.
//! - Define the `AacPage` surface both levels of the board expose.
//!
//! # Invariants
//! - Every stored item satisfies the board file grammar.
//! - Image locations are unique within one category.

pub mod category;
pub mod item;
pub mod page;
