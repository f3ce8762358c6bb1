pub use crate::chip8::Chip8;
pub use crate::config::{Config, Mode};
pub use crate::error::{Chip8Error, Result};
pub use crate::instruction::Instruction;
pub use crate::snapshot::Snapshot;
pub use crate::state::FrameBuffer;

mod chip8;
mod config;
pub mod constants;
mod error;
mod instruction;
pub mod keymap;
mod opcode;
mod operations;
mod snapshot;
pub mod state;
