//! Single-line grammar of board files.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::item::IMAGE_PREFIX;

/// Marker that distinguishes item lines from category headers.
pub const ITEM_MARKER: &str = ">";

static BOARD_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<marker>>?)(?P<image>img/\S+) (?P<label>.+)$")
        .expect("valid board line regex")
});

/// Classification of one board file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLine<'a> {
    /// `img/<path> <name>` starts a new category.
    Header { image_loc: &'a str, name: &'a str },
    /// `>img/<path> <text>` adds an item to the open category.
    Item { image_loc: &'a str, text: &'a str },
    /// Blank lines, comments and anything else outside the grammar.
    Ignored,
    /// Looks like a header or item but does not satisfy the grammar.
    Malformed,
}

/// Classifies a raw line. Surrounding whitespace is ignored.
///
/// The label is everything after the first space, kept verbatim, so
/// `img/a.png  food` names a category ` food`.
pub fn parse_line(raw: &str) -> BoardLine<'_> {
    let line = raw.trim();
    let body = line.strip_prefix(ITEM_MARKER).unwrap_or(line);
    if !body.starts_with(IMAGE_PREFIX) {
        return BoardLine::Ignored;
    }

    let Some(captures) = BOARD_LINE_RE.captures(line) else {
        return BoardLine::Malformed;
    };
    let (Some(image), Some(label)) = (captures.name("image"), captures.name("label")) else {
        return BoardLine::Malformed;
    };

    let is_item = captures
        .name("marker")
        .is_some_and(|marker| !marker.as_str().is_empty());
    if is_item {
        BoardLine::Item {
            image_loc: image.as_str(),
            text: label.as_str(),
        }
    } else {
        BoardLine::Header {
            image_loc: image.as_str(),
            name: label.as_str(),
        }
    }
}
