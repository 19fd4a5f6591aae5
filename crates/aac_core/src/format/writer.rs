//! Board file writer.
//!
//! Output order is category enumeration order, then each category's item
//! order. Every emitted line is accepted by `parse_line`.

use crate::board::Board;
use crate::format::line::ITEM_MARKER;
use std::io::{self, Write};

/// Renders the whole board in file grammar.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for category in board.categories() {
        push_line(&mut out, "", category.image_loc(), category.name());
        for item in category.items() {
            push_line(&mut out, ITEM_MARKER, item.image_loc(), item.text());
        }
    }
    out
}

/// Writes the whole board in file grammar.
pub fn write_board<W: Write>(board: &Board, mut writer: W) -> io::Result<()> {
    writer.write_all(render_board(board).as_bytes())?;
    writer.flush()
}

fn push_line(out: &mut String, marker: &str, image_loc: &str, label: &str) {
    out.push_str(marker);
    out.push_str(image_loc);
    out.push(' ');
    out.push_str(label);
    out.push('\n');
}
