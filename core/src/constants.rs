/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Addresses are 12 bits wide; anything above wraps back into memory
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// 0x200 is where program images are loaded into memory
pub const PROGRAM_START: u16 = 0x200;

/// The largest image that fits between `PROGRAM_START` and the end of memory
pub const MAX_IMAGE_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// The call stack is a ring of 16 return addresses
pub const STACK_DEPTH: usize = 16;

/// Both timers start here on every reset
pub const INITIAL_TIMER_VALUE: u8 = 60;

/// Instructions executed per rendered frame when running freely
pub const DEFAULT_STEPS_PER_FRAME: usize = 10;

/// Nanoseconds per rendered frame (~60Hz)
pub const FRAME_PERIOD: u64 = 16_666_667;

/// Each glyph in the sprite sheet is 5 bytes tall
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite Sheet
/// The hexadecimal digits 0..F, each a 4x5 bitmap stored in the high nibble of 5 bytes.
/// Lives at the very start of memory so the glyph for digit `d` is at `d * GLYPH_SIZE`.
///
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
