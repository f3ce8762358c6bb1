use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything the Chip-8 can report back to whoever is driving it.
///
/// Nothing here leaves the machine in a half-updated state: loads are checked before
/// memory is touched and strict-mode faults are raised before the instruction executes.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("image is {size} bytes but at most {max} bytes fit in memory")]
    ImageTooLarge { size: usize, max: usize },

    #[error("no image found at {}", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("unable to read image: {0}")]
    Io(#[from] io::Error),

    #[error("key index {0:#X} is outside the 16 key keypad")]
    InvalidKeyIndex(u8),

    #[error("unknown instruction {opcode:#06X} at {pc:#05X}")]
    UnknownInstruction { opcode: u16, pc: u16 },

    #[error("call at {pc:#05X} overflowed the stack")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let too_large = Chip8Error::ImageTooLarge {
            size: 4000,
            max: 3584,
        };
        assert_eq!(
            too_large.to_string(),
            "image is 4000 bytes but at most 3584 bytes fit in memory"
        );
        let unknown = Chip8Error::UnknownInstruction {
            opcode: 0xF1FF,
            pc: 0x200,
        };
        assert_eq!(unknown.to_string(), "unknown instruction 0xF1FF at 0x200");
        assert_eq!(
            Chip8Error::InvalidKeyIndex(0x10).to_string(),
            "key index 0x10 is outside the 16 key keypad"
        );
    }
}
