use sdl2::keyboard::Keycode;

use chip8_vm::keymap::from_symbol;

/// # Keymap
/// Translates an SDL2 keycode into the logical Chip-8 key printed on it.
///
/// Only single character key names take part, so the number row and a-f reach the
/// keypad while the keypad digits, modifiers and function keys do not.
pub fn keymap(key: Keycode) -> Option<u8> {
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => from_symbol(symbol),
        _ => None,
    }
}
