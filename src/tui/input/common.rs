use crate::util::unicode;

/// Insert a character at the cursor, advancing it past the insertion
pub(super) fn insert_char(buffer: &mut String, cursor: &mut usize, c: char) {
    buffer.insert(*cursor, c);
    *cursor += c.len_utf8();
}

/// Delete the grapheme before the cursor
pub(super) fn backspace(buffer: &mut String, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
        buffer.drain(prev..*cursor);
        *cursor = prev;
    }
}

/// Delete the grapheme under the cursor
pub(super) fn delete_forward(buffer: &mut String, cursor: &mut usize) {
    if *cursor < buffer.len() {
        let next = unicode::next_grapheme_boundary(buffer, *cursor).unwrap_or(buffer.len());
        buffer.drain(*cursor..next);
    }
}

pub(super) fn move_left(buffer: &str, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
        *cursor = prev;
    }
}

pub(super) fn move_right(buffer: &str, cursor: &mut usize) {
    if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
        *cursor = next;
    }
}

pub(super) fn move_home(cursor: &mut usize) {
    *cursor = 0;
}

pub(super) fn move_end(buffer: &str, cursor: &mut usize) {
    *cursor = buffer.len();
}
