use log::info;

use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, INITIAL_TIMER_VALUE, KEY_COUNT, MAX_IMAGE_SIZE,
    MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT, SPRITE_SHEET, STACK_DEPTH,
};
use crate::error::{Chip8Error, Result};

/// The Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a memory address register; only its low 12 bits reach memory
///
/// Counter
/// - (pc) the address of the next instruction
///
/// Pointer
/// - (sp) the next free slot of the stack; it is never range checked, only masked to
///   the 16 slots when used as an index, so the stack behaves as a ring
///
/// Timers
/// - 2 8-bit timers (delay & sound) that count down to 0 once per executed step
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the program image
/// - 32x64 byte frame buffer, every entry 0 or 1
///
/// ## Input
/// - 16 entry array tracking the pressed status of keys 0..F
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u16,
    pub opcode: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [u8; KEY_COUNT],
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

impl State {
    /// A powered-on state with the sprite sheet installed and nothing loaded.
    pub fn new() -> Self {
        let mut state = State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            opcode: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory: [0; MEMORY_SIZE],
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keys: [0; KEY_COUNT],
        };
        state.reset();
        state
    }

    /// Returns every register, the stack, the display and the keys to their power-on values.
    ///
    /// Memory from 0x200 onwards is left alone so the loaded program survives a restart.
    pub fn reset(&mut self) {
        self.pc = PROGRAM_START;
        self.i = 0;
        self.sp = 0;
        self.opcode = 0;
        self.v = [0; REGISTER_COUNT];
        self.stack = [0; STACK_DEPTH];
        self.keys = [0; KEY_COUNT];
        self.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.draw_flag = true;
        self.delay_timer = INITIAL_TIMER_VALUE;
        self.sound_timer = INITIAL_TIMER_VALUE;
        self.memory[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
    }

    /// Resets the state and copies `image` into memory at 0x200.
    ///
    /// An oversized image is rejected before anything is touched.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > MAX_IMAGE_SIZE {
            return Err(Chip8Error::ImageTooLarge {
                size: image.len(),
                max: MAX_IMAGE_SIZE,
            });
        }

        self.reset();
        let start = PROGRAM_START as usize;
        self.memory[start..].iter_mut().for_each(|byte| *byte = 0);
        self.memory[start..start + image.len()].copy_from_slice(image);
        info!("loaded {} byte image at {:#05X}", image.len(), PROGRAM_START);
        Ok(())
    }

    /// Reads the byte at `addr`, wrapping the address into the 4K of memory.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[address(addr)]
    }

    /// Writes the byte at `addr`, wrapping the address into the 4K of memory.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory[address(addr)] = value;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn address(addr: u16) -> usize {
    (addr & ADDRESS_MASK) as usize
}
