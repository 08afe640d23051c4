use super::symbols::{KeyCode, Modifiers, lookup_key, lookup_modifier};

/// Keys and modifiers named by a hyphen-separated token string such as
/// `ctrl-shift-esc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    /// Key codes in the order they were named.
    pub keys: Vec<KeyCode>,
    /// Non-empty tokens that named neither a modifier nor a key.
    pub unresolved: Vec<String>,
}

impl KeyCombo {
    pub fn resolve(text: &str) -> Self {
        let mut combo = KeyCombo::default();

        for token in text.split('-').map(|t| t.trim().to_lowercase()) {
            if let Some(modifier) = lookup_modifier(&token) {
                combo.modifiers |= modifier;
            } else if let Some(key) = lookup_key(&token) {
                combo.keys.push(key);
            } else if !token.is_empty() {
                combo.unresolved.push(token);
            }
        }

        combo
    }

    /// Appends `other` after `self`: modifiers are OR-ed, keys keep their order.
    pub fn merge(mut self, other: KeyCombo) -> Self {
        self.modifiers |= other.modifiers;
        self.keys.extend(other.keys);
        self.unresolved.extend(other.unresolved);
        self
    }

    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_modifiers_and_keys() {
        let combo = KeyCombo::resolve("ctrl-shift-esc");
        assert_eq!(combo.modifiers, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(combo.keys, vec![0x29]);
        assert!(combo.unresolved.is_empty());
    }

    #[test]
    fn tokens_are_trimmed_and_lowercased() {
        let combo = KeyCombo::resolve(" GUI - R ");
        assert_eq!(combo.modifiers, Modifiers::GUI);
        assert_eq!(combo.keys, vec![0x15]);
    }

    #[test]
    fn unknown_tokens_are_collected_not_resolved() {
        let combo = KeyCombo::resolve("ctrl-alt-delete");
        assert_eq!(combo.modifiers, Modifiers::CTRL | Modifiers::ALT);
        assert!(!combo.has_keys());
        assert_eq!(combo.unresolved, vec!["delete".to_string()]);
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let combo = KeyCombo::resolve("ctrl--a");
        assert_eq!(combo.keys, vec![0x04]);
        assert!(combo.unresolved.is_empty());
    }

    #[test]
    fn modifier_only_combo_has_no_keys() {
        let combo = KeyCombo::resolve("shift");
        assert_eq!(combo.modifiers, Modifiers::SHIFT);
        assert!(!combo.has_keys());
    }

    #[test]
    fn merge_keeps_command_keys_first() {
        let merged = KeyCombo::resolve("alt-f4").merge(KeyCombo::resolve("ctrl-tab"));
        assert_eq!(merged.modifiers, Modifiers::ALT | Modifiers::CTRL);
        assert_eq!(merged.keys, vec![0x3D, 0x2B]);
    }

    #[test]
    fn repeated_modifiers_collapse() {
        let combo = KeyCombo::resolve("win-gui-windows-e");
        assert_eq!(combo.modifiers.bits(), 0x08);
        assert_eq!(combo.keys, vec![0x08]);
    }
}
