use phf::{Map, phf_map};

/// HID usage ID of a physical key on the keyboard page.
pub type KeyCode = u8;

bitflags::bitflags! {
    /// Modifier byte of a boot-keyboard report.
    ///
    /// Combine with bitwise OR: `Modifiers::CTRL | Modifiers::ALT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
        const GUI = 1 << 3;
    }
}

pub const ENTER: KeyCode = 0x28;
pub const SPACE: KeyCode = 0x2C;

/// Key names to usage IDs (US layout).
/// Keep the groups in usage ID order.
static KEY_CODES: Map<&'static str, KeyCode> = phf_map! {
    "a" => 0x04, "b" => 0x05, "c" => 0x06, "d" => 0x07, "e" => 0x08, "f" => 0x09,
    "g" => 0x0A, "h" => 0x0B, "i" => 0x0C, "j" => 0x0D, "k" => 0x0E, "l" => 0x0F,
    "m" => 0x10, "n" => 0x11, "o" => 0x12, "p" => 0x13, "q" => 0x14, "r" => 0x15,
    "s" => 0x16, "t" => 0x17, "u" => 0x18, "v" => 0x19, "w" => 0x1A, "x" => 0x1B,
    "y" => 0x1C, "z" => 0x1D,

    "1" => 0x1E, "2" => 0x1F, "3" => 0x20, "4" => 0x21, "5" => 0x22,
    "6" => 0x23, "7" => 0x24, "8" => 0x25, "9" => 0x26, "0" => 0x27,

    "enter" => ENTER,
    "esc" => 0x29,
    "backspace" => 0x2A,
    "tab" => 0x2B,
    "space" => SPACE,

    "-" => 0x2D,
    "equals" => 0x2E,
    "[" => 0x2F,
    "]" => 0x30,
    "\\" => 0x31,
    ";" => 0x33,
    "'" => 0x34,
    "`" => 0x35,
    "," => 0x36,
    "." => 0x37,
    "/" => 0x38,

    "f1" => 0x3A, "f2" => 0x3B, "f3" => 0x3C, "f4" => 0x3D, "f5" => 0x3E, "f6" => 0x3F,
    "f7" => 0x40, "f8" => 0x41, "f9" => 0x42, "f10" => 0x43, "f11" => 0x44, "f12" => 0x45,

    "right" => 0x4F,
    "left" => 0x50,
    "down" => 0x51,
    "up" => 0x52,
};

static MODIFIERS: Map<&'static str, Modifiers> = phf_map! {
    "ctrl" => Modifiers::CTRL,
    "shift" => Modifiers::SHIFT,
    "alt" => Modifiers::ALT,
    "gui" => Modifiers::GUI,
    "win" => Modifiers::GUI,
    "windows" => Modifiers::GUI,
};

/// Look up a key by name, ignoring case.
pub fn lookup_key(name: &str) -> Option<KeyCode> {
    KEY_CODES.get(name.to_lowercase().as_str()).copied()
}

/// Look up a modifier by name, ignoring case.
pub fn lookup_modifier(name: &str) -> Option<Modifiers> {
    MODIFIERS.get(name.to_lowercase().as_str()).copied()
}
