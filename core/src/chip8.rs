use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{KEY_COUNT, STACK_DEPTH};
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::opcode;
use crate::snapshot::Snapshot;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `config` it was built with
///  - the generator behind the random byte instruction
///
/// Supplies interfaces for:
/// - loading images and restarting them
/// - pressing and releasing keys
/// - stepping the CPU one instruction at a time
/// - inspecting its frame buffer and registers for some display
pub struct Chip8 {
    state: State,
    config: Config,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Chip8 {
            state: State::new(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Resets the machine and copies `image` in at 0x200.
    ///
    /// # Arguments
    /// * `image` raw program bytes, at most 0xE00 of them
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        self.state.load(image)
    }

    /// Load an image from some source
    ///
    /// # Arguments
    /// * `reader` a reader that yields the whole image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut image = Vec::new();
        reader.read_to_end(&mut image)?;
        self.load(&image)
    }

    /// Load an image from a file
    ///
    /// # Arguments
    /// * `path` where the image lives
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Chip8Error::ImageNotFound {
                path: path.to_path_buf(),
            },
            _ => Chip8Error::Io(e),
        })?;
        self.load_rom(&mut file)
    }

    /// Resets everything but the loaded image, so the program runs again from the top.
    pub fn restart(&mut self) {
        info!("restarting");
        self.state.reset();
    }

    /// Returns the FrameBuffer if it changed since the last call
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn memory(&self) -> &[u8] {
        &self.state.memory
    }

    pub fn keys(&self) -> &[u8; KEY_COUNT] {
        &self.state.keys
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the logical key index, 0x0..=0xF
    /// * `pressed` whether it is now held down
    pub fn set_key_pressed(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .state
            .keys
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKeyIndex(key))?;
        *slot = pressed as u8;
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - gets and decodes the opcode at the pc
    /// - in strict mode, refuses anything the reference would silently mishandle
    /// - executes it and then ticks the timers
    pub fn step(&mut self) -> Result<()> {
        let op = self.get_op();
        let instruction = Instruction::decode(op);
        if self.config.is_strict() {
            self.check(op, instruction)?;
        }

        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state.opcode = op;
        instruction.execute(&mut self.state, &mut self.rng);
        self.tick_timers();
        Ok(())
    }

    /// Counts both timers down by one, stopping at 0
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    fn check(&self, op: u16, instruction: Instruction) -> Result<()> {
        let pc = self.state.pc;
        match instruction {
            Instruction::Unknown(_) => Err(Chip8Error::UnknownInstruction { opcode: op, pc }),
            Instruction::Call { .. } if self.state.sp as usize >= STACK_DEPTH => {
                Err(Chip8Error::StackOverflow { pc })
            }
            Instruction::Return if self.state.sp == 0 => Err(Chip8Error::StackUnderflow { pc }),
            _ => Ok(()),
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        opcode::from_bytes(self.state.read(pc), self.state.read(pc.wrapping_add(1)))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
