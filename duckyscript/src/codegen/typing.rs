//! Keystrokes for literal text typed by `STRING`.

use super::symbols::{ENTER, KeyCode, Modifiers, SPACE, lookup_key};

/// Symbols that sit on the shifted layer of a US keyboard.
const SHIFTED_SYMBOLS: &str = r#"!@#$%^&*()_+{}|:"<>?~"#;

/// Whether typing `c` holds shift.
pub fn requires_shift(c: char) -> bool {
    c.is_uppercase() || SHIFTED_SYMBOLS.contains(c)
}

/// A line break types ENTER with no modifier held, even if shift was inferred.
pub fn is_line_break(c: char) -> bool {
    c == '\n'
}

/// Resolves the keystroke that types `c`, or `None` when no key produces it.
pub fn keystroke(c: char) -> Option<(Modifiers, KeyCode)> {
    if is_line_break(c) {
        return Some((Modifiers::empty(), ENTER));
    }

    let modifiers = if requires_shift(c) {
        Modifiers::SHIFT
    } else {
        Modifiers::empty()
    };

    if c == ' ' {
        return Some((modifiers, SPACE));
    }

    let mut buf = [0; 4];
    let key = lookup_key(c.encode_utf8(&mut buf))?;
    Some((modifiers, key))
}
