//! Splits a line of terminal input into key names.

/// Key names that span several characters.
pub const NAMED_KEYS: &[&str] = &["Enter", "Escape", "Backspace"];

/// Breaks `line` into keys.
///
/// Whitespace separates tokens. A token that is a named key stays whole;
/// every other token is split into single-character keys, so `12+3=` and
/// `9 / 0 Enter` both work.
///
/// # Examples
///
/// ```
/// use calc_term::keys::split_keys;
///
/// assert_eq!(split_keys("12+3 Enter"), vec!["1", "2", "+", "3", "Enter"]);
/// ```
pub fn split_keys(line: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if NAMED_KEYS.contains(&token) {
            keys.push(token);
            continue;
        }
        keys.extend(token.char_indices().map(|(i, c)| &token[i..i + c.len_utf8()]));
    }
    keys
}
