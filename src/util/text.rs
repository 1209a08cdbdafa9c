//! Character-indexed string helpers
//!
//! Caret and selection positions are counted in chars, never bytes, so that
//! multi-byte names ("Crème fraîche", "牛乳") slice cleanly.

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `char_idx`, clamped to the end of `text`
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// The first `count` chars of `text`
pub fn take_chars(text: &str, count: usize) -> String {
    text[..byte_offset(text, count)].to_string()
}

/// `text` with the char range `start..end` removed (clamped)
pub fn remove_chars(text: &str, start: usize, end: usize) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut result = String::with_capacity(text.len() - (end_byte - start_byte));
    result.push_str(&text[..start_byte]);
    result.push_str(&text[end_byte..]);
    result
}

/// `text` with the char range `start..end` replaced by `insert` (clamped)
pub fn replace_chars(text: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut result = String::with_capacity(text.len() + insert.len());
    result.push_str(&text[..start_byte]);
    result.push_str(insert);
    result.push_str(&text[end_byte..]);
    result
}

/// Case-insensitive, char-aligned prefix test.
///
/// Compares char by char so a match guarantees `prefix` covers exactly
/// `char_len(prefix)` chars of `text`, which `str::to_lowercase` does not
/// (some chars lower-case into several).
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars();
    prefix.chars().all(|p| match text_chars.next() {
        Some(t) => t == p || t.to_lowercase().eq(p.to_lowercase()),
        None => false,
    })
}
