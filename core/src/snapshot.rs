use std::fmt;

use crate::constants::{REGISTER_COUNT, STACK_DEPTH};
use crate::state::State;

/// A copy of the registers for a debug view; nothing here feeds back into the machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub pc: u16,
    pub i: u16,
    pub sp: u16,
    pub opcode: u16,
    pub v: [u8; REGISTER_COUNT],
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
}

impl From<&State> for Snapshot {
    fn from(state: &State) -> Self {
        Snapshot {
            pc: state.pc,
            i: state.i,
            sp: state.sp,
            opcode: state.opcode,
            v: state.v,
            delay_timer: state.delay_timer,
            sound_timer: state.sound_timer,
            stack: state.stack,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PC: {:04X}  I: {:04X}  SP: {}  OpCode: {:04X}  DT: {}  ST: {}",
            self.pc, self.i, self.sp, self.opcode, self.delay_timer, self.sound_timer
        )?;
        for (index, value) in self.v.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "V{:X}: {:02X}", index, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_registers() {
        let mut state = State::new();
        state.v[0xA] = 0x42;
        state.pc = 0x204;
        state.opcode = 0x6A42;
        let snapshot = Snapshot::from(&state);
        assert_eq!(snapshot.v[0xA], 0x42);
        assert_eq!(snapshot.pc, 0x204);
        assert_eq!(snapshot.opcode, 0x6A42);
    }

    #[test]
    fn test_snapshot_display() {
        let mut state = State::new();
        state.v[0x1] = 0xAB;
        let text = Snapshot::from(&state).to_string();
        assert!(text.starts_with("PC: 0200  I: 0000  SP: 0  OpCode: 0000"));
        assert!(text.contains("V1: AB"));
        assert!(text.ends_with("VF: 00"));
    }
}
