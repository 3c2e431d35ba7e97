//! Key identity: scan codes, symbol codes and key names.
//!
//! Scan codes are USB HID keyboard usage ids taken from the physical key
//! position the windowing system reports, so they (and the key names derived
//! from them) do not change with the keyboard layout.
//!
//! Symbol codes follow the SDL keycode convention and do depend on the
//! layout: printable keys use their (lower-cased) character, a few control
//! keys use their ASCII value, every other key is its scan code with bit 30
//! set.

use keyscan_core::{Scancode, SymbolCode};
use winit::keyboard::{Key, KeyCode, KeyLocation, NamedKey, PhysicalKey};

/// Bit set on symbol codes of keys without a character.
pub const SCANCODE_MASK: u32 = 1 << 30;

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const DIGITS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

const FUNCTION_KEYS: [&str; 24] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "F13", "F14",
    "F15", "F16", "F17", "F18", "F19", "F20", "F21", "F22", "F23", "F24",
];

const KEYPAD_DIGITS: [&str; 10] = [
    "Keypad 1", "Keypad 2", "Keypad 3", "Keypad 4", "Keypad 5", "Keypad 6", "Keypad 7",
    "Keypad 8", "Keypad 9", "Keypad 0",
];

/// Layout-independent name of a physical key. Unknown keys have an empty name.
pub fn key_name(scancode: Scancode) -> &'static str {
    let code = scancode.0;
    match code {
        4..=29 => LETTERS[(code - 4) as usize],
        30..=39 => DIGITS[(code - 30) as usize],
        40 => "Return",
        41 => "Escape",
        42 => "Backspace",
        43 => "Tab",
        44 => "Space",
        45 => "-",
        46 => "=",
        47 => "[",
        48 => "]",
        49 => "\\",
        50 => "#",
        51 => ";",
        52 => "'",
        53 => "`",
        54 => ",",
        55 => ".",
        56 => "/",
        57 => "CapsLock",
        58..=69 => FUNCTION_KEYS[(code - 58) as usize],
        70 => "PrintScreen",
        71 => "ScrollLock",
        72 => "Pause",
        73 => "Insert",
        74 => "Home",
        75 => "PageUp",
        76 => "Delete",
        77 => "End",
        78 => "PageDown",
        79 => "Right",
        80 => "Left",
        81 => "Down",
        82 => "Up",
        83 => "Numlock",
        84 => "Keypad /",
        85 => "Keypad *",
        86 => "Keypad -",
        87 => "Keypad +",
        88 => "Keypad Enter",
        89..=98 => KEYPAD_DIGITS[(code - 89) as usize],
        99 => "Keypad .",
        101 => "Application",
        102 => "Power",
        103 => "Keypad =",
        104..=115 => FUNCTION_KEYS[(code - 104 + 12) as usize],
        127 => "Mute",
        128 => "VolumeUp",
        129 => "VolumeDown",
        224 => "Left Ctrl",
        225 => "Left Shift",
        226 => "Left Alt",
        227 => "Left GUI",
        228 => "Right Ctrl",
        229 => "Right Shift",
        230 => "Right Alt",
        231 => "Right GUI",
        _ => "",
    }
}

/// Scan code of the physical key that produced an event.
pub fn scancode_for(key: PhysicalKey) -> Scancode {
    let PhysicalKey::Code(code) = key else {
        return Scancode::UNKNOWN;
    };
    let usage = match code {
        KeyCode::KeyA => 4,
        KeyCode::KeyB => 5,
        KeyCode::KeyC => 6,
        KeyCode::KeyD => 7,
        KeyCode::KeyE => 8,
        KeyCode::KeyF => 9,
        KeyCode::KeyG => 10,
        KeyCode::KeyH => 11,
        KeyCode::KeyI => 12,
        KeyCode::KeyJ => 13,
        KeyCode::KeyK => 14,
        KeyCode::KeyL => 15,
        KeyCode::KeyM => 16,
        KeyCode::KeyN => 17,
        KeyCode::KeyO => 18,
        KeyCode::KeyP => 19,
        KeyCode::KeyQ => 20,
        KeyCode::KeyR => 21,
        KeyCode::KeyS => 22,
        KeyCode::KeyT => 23,
        KeyCode::KeyU => 24,
        KeyCode::KeyV => 25,
        KeyCode::KeyW => 26,
        KeyCode::KeyX => 27,
        KeyCode::KeyY => 28,
        KeyCode::KeyZ => 29,
        KeyCode::Digit1 => 30,
        KeyCode::Digit2 => 31,
        KeyCode::Digit3 => 32,
        KeyCode::Digit4 => 33,
        KeyCode::Digit5 => 34,
        KeyCode::Digit6 => 35,
        KeyCode::Digit7 => 36,
        KeyCode::Digit8 => 37,
        KeyCode::Digit9 => 38,
        KeyCode::Digit0 => 39,
        KeyCode::Enter => 40,
        KeyCode::Escape => 41,
        KeyCode::Backspace => 42,
        KeyCode::Tab => 43,
        KeyCode::Space => 44,
        KeyCode::Minus => 45,
        KeyCode::Equal => 46,
        KeyCode::BracketLeft => 47,
        KeyCode::BracketRight => 48,
        KeyCode::Backslash => 49,
        KeyCode::Semicolon => 51,
        KeyCode::Quote => 52,
        KeyCode::Backquote => 53,
        KeyCode::Comma => 54,
        KeyCode::Period => 55,
        KeyCode::Slash => 56,
        KeyCode::CapsLock => 57,
        KeyCode::F1 => 58,
        KeyCode::F2 => 59,
        KeyCode::F3 => 60,
        KeyCode::F4 => 61,
        KeyCode::F5 => 62,
        KeyCode::F6 => 63,
        KeyCode::F7 => 64,
        KeyCode::F8 => 65,
        KeyCode::F9 => 66,
        KeyCode::F10 => 67,
        KeyCode::F11 => 68,
        KeyCode::F12 => 69,
        KeyCode::PrintScreen => 70,
        KeyCode::ScrollLock => 71,
        KeyCode::Pause => 72,
        KeyCode::Insert => 73,
        KeyCode::Home => 74,
        KeyCode::PageUp => 75,
        KeyCode::Delete => 76,
        KeyCode::End => 77,
        KeyCode::PageDown => 78,
        KeyCode::ArrowRight => 79,
        KeyCode::ArrowLeft => 80,
        KeyCode::ArrowDown => 81,
        KeyCode::ArrowUp => 82,
        KeyCode::NumLock => 83,
        KeyCode::NumpadDivide => 84,
        KeyCode::NumpadMultiply => 85,
        KeyCode::NumpadSubtract => 86,
        KeyCode::NumpadAdd => 87,
        KeyCode::NumpadEnter => 88,
        KeyCode::Numpad1 => 89,
        KeyCode::Numpad2 => 90,
        KeyCode::Numpad3 => 91,
        KeyCode::Numpad4 => 92,
        KeyCode::Numpad5 => 93,
        KeyCode::Numpad6 => 94,
        KeyCode::Numpad7 => 95,
        KeyCode::Numpad8 => 96,
        KeyCode::Numpad9 => 97,
        KeyCode::Numpad0 => 98,
        KeyCode::NumpadDecimal => 99,
        KeyCode::ContextMenu => 101,
        KeyCode::Power => 102,
        KeyCode::NumpadEqual => 103,
        KeyCode::F13 => 104,
        KeyCode::F14 => 105,
        KeyCode::F15 => 106,
        KeyCode::F16 => 107,
        KeyCode::F17 => 108,
        KeyCode::F18 => 109,
        KeyCode::F19 => 110,
        KeyCode::F20 => 111,
        KeyCode::F21 => 112,
        KeyCode::F22 => 113,
        KeyCode::F23 => 114,
        KeyCode::F24 => 115,
        KeyCode::AudioVolumeMute => 127,
        KeyCode::AudioVolumeUp => 128,
        KeyCode::AudioVolumeDown => 129,
        KeyCode::ControlLeft => 224,
        KeyCode::ShiftLeft => 225,
        KeyCode::AltLeft => 226,
        KeyCode::SuperLeft => 227,
        KeyCode::ControlRight => 228,
        KeyCode::ShiftRight => 229,
        KeyCode::AltRight => 230,
        KeyCode::SuperRight => 231,
        _ => 0,
    };
    Scancode(usage)
}

/// Symbol code of the key as the active layout interprets it.
pub fn symbol_for(physical: PhysicalKey, logical: &Key, location: KeyLocation) -> SymbolCode {
    let symbol = match logical {
        Key::Character(text) if location != KeyLocation::Numpad => text
            .chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .map_or(0, u32::from),
        Key::Named(NamedKey::Enter) if location != KeyLocation::Numpad => 13,
        Key::Named(NamedKey::Escape) => 27,
        Key::Named(NamedKey::Backspace) => 8,
        Key::Named(NamedKey::Tab) => 9,
        Key::Named(NamedKey::Space) => 32,
        Key::Named(NamedKey::Delete) => 127,
        _ => match scancode_for(physical) {
            Scancode(0) => 0,
            Scancode(usage) => usage | SCANCODE_MASK,
        },
    };
    SymbolCode(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    fn name_of(code: KeyCode) -> &'static str {
        key_name(scancode_for(PhysicalKey::Code(code)))
    }

    fn character(text: &str) -> Key {
        Key::Character(SmolStr::new(text))
    }

    #[test]
    fn test_names_follow_physical_position() {
        assert_eq!(name_of(KeyCode::KeyA), "A");
        assert_eq!(name_of(KeyCode::KeyQ), "Q");
        assert_eq!(name_of(KeyCode::KeyZ), "Z");
        assert_eq!(name_of(KeyCode::Digit0), "0");
        assert_eq!(name_of(KeyCode::Slash), "/");
    }

    #[test]
    fn test_layout_changes_symbol_not_name() {
        // On AZERTY the key in the US "A" position types 'q'.
        let a_position = PhysicalKey::Code(KeyCode::KeyA);
        let standard = KeyLocation::Standard;

        assert_eq!(key_name(scancode_for(a_position)), "A");
        assert_eq!(
            symbol_for(a_position, &character("q"), standard),
            SymbolCode(113)
        );
        assert_eq!(
            symbol_for(a_position, &character("a"), standard),
            SymbolCode(97)
        );
        assert_ne!(
            key_name(scancode_for(a_position)),
            key_name(scancode_for(PhysicalKey::Code(KeyCode::KeyQ)))
        );
    }

    #[test]
    fn test_keypad_keys() {
        assert_eq!(name_of(KeyCode::Numpad7), "Keypad 7");
        assert_eq!(name_of(KeyCode::Numpad0), "Keypad 0");
        assert_eq!(name_of(KeyCode::NumpadEnter), "Keypad Enter");
        assert_eq!(
            symbol_for(
                PhysicalKey::Code(KeyCode::Numpad7),
                &character("7"),
                KeyLocation::Numpad
            ),
            SymbolCode(95 | SCANCODE_MASK)
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(name_of(KeyCode::Enter), "Return");
        assert_eq!(name_of(KeyCode::Escape), "Escape");
        assert_eq!(name_of(KeyCode::F1), "F1");
        assert_eq!(name_of(KeyCode::F12), "F12");
        assert_eq!(name_of(KeyCode::F13), "F13");
        assert_eq!(name_of(KeyCode::F24), "F24");
        assert_eq!(name_of(KeyCode::ArrowLeft), "Left");
        assert_eq!(name_of(KeyCode::ShiftLeft), "Left Shift");
        assert_eq!(name_of(KeyCode::SuperRight), "Right GUI");
        assert_eq!(name_of(KeyCode::Fn), "");
    }

    #[test]
    fn test_symbol_codes() {
        let standard = KeyLocation::Standard;
        let code = |code| PhysicalKey::Code(code);

        assert_eq!(
            symbol_for(code(KeyCode::KeyA), &character("A"), standard),
            SymbolCode(97)
        );
        assert_eq!(
            symbol_for(code(KeyCode::Quote), &character("é"), standard),
            SymbolCode(0xe9)
        );
        assert_eq!(
            symbol_for(code(KeyCode::Enter), &Key::Named(NamedKey::Enter), standard),
            SymbolCode(13)
        );
        assert_eq!(
            symbol_for(code(KeyCode::Escape), &Key::Named(NamedKey::Escape), standard),
            SymbolCode(27)
        );
        assert_eq!(
            symbol_for(code(KeyCode::ArrowUp), &Key::Named(NamedKey::ArrowUp), standard),
            SymbolCode(82 | SCANCODE_MASK)
        );
        assert_eq!(
            symbol_for(code(KeyCode::Fn), &Key::Named(NamedKey::Fn), standard),
            SymbolCode(0)
        );
    }
}
