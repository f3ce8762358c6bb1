use ::rand::Rng;

use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded Chip-8 instruction: the operation plus the operands it reads.
///
/// `x`/`y` name registers, `nn` is an immediate byte, `addr` a 12-bit address and `n` a
/// sprite height. Anything that doesn't decode is kept as `Unknown` with its raw opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    ClearDisplay,
    /// `00EE`
    Return,
    /// `1NNN`
    Jump { addr: u16 },
    /// `2NNN`
    Call { addr: u16 },
    /// `3XNN`
    SkipEqual { x: usize, nn: u8 },
    /// `4XNN`
    SkipNotEqual { x: usize, nn: u8 },
    /// `5XY0`
    SkipRegistersEqual { x: usize, y: usize },
    /// `6XNN`
    Load { x: usize, nn: u8 },
    /// `7XNN`
    AddImmediate { x: usize, nn: u8 },
    /// `8XY0`
    Assign { x: usize, y: usize },
    /// `8XY1`
    Or { x: usize, y: usize },
    /// `8XY2`
    And { x: usize, y: usize },
    /// `8XY3`
    Xor { x: usize, y: usize },
    /// `8XY4`
    Add { x: usize, y: usize },
    /// `8XY5`
    Subtract { x: usize, y: usize },
    /// `8XY6`
    ShiftRight { x: usize },
    /// `8XY7`
    SubtractReverse { x: usize, y: usize },
    /// `8XYE`
    ShiftLeft { x: usize },
    /// `9XY0`
    SkipRegistersNotEqual { x: usize, y: usize },
    /// `ANNN`
    LoadIndex { addr: u16 },
    /// `BNNN`
    JumpOffset { addr: u16 },
    /// `CXNN`
    Random { x: usize, nn: u8 },
    /// `DXYN`
    Draw { x: usize, y: usize, n: u8 },
    /// `EX9E`
    SkipKeyPressed { x: usize },
    /// `EXA1`
    SkipKeyNotPressed { x: usize },
    /// `FX07`
    ReadDelay { x: usize },
    /// `FX0A`
    WaitKey { x: usize },
    /// `FX15`
    SetDelay { x: usize },
    /// `FX18`
    SetSound { x: usize },
    /// `FX1E`
    AddIndex { x: usize },
    /// `FX29`
    LoadGlyph { x: usize },
    /// `FX33`
    StoreBcd { x: usize },
    /// `FX55`
    StoreRegisters { x: usize },
    /// `FX65`
    LoadRegisters { x: usize },
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    ///
    /// Families 0x0, 0x8 and 0xE are told apart by their last nibble alone and family 0xF
    /// by its last byte; the remaining nibbles are never checked. `0x0000` therefore
    /// clears the display and `5XY3` still compares registers.
    pub fn decode(op: u16) -> Instruction {
        use Instruction::*;

        let (x, y) = (op.x(), op.y());
        match op.nibbles() {
            (0x0, .., 0x0) => ClearDisplay,
            (0x0, .., 0xE) => Return,
            (0x1, ..) => Jump { addr: op.nnn() },
            (0x2, ..) => Call { addr: op.nnn() },
            (0x3, ..) => SkipEqual { x, nn: op.nn() },
            (0x4, ..) => SkipNotEqual { x, nn: op.nn() },
            (0x5, ..) => SkipRegistersEqual { x, y },
            (0x6, ..) => Load { x, nn: op.nn() },
            (0x7, ..) => AddImmediate { x, nn: op.nn() },
            (0x8, .., 0x0) => Assign { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => Add { x, y },
            (0x8, .., 0x5) => Subtract { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubtractReverse { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, ..) => SkipRegistersNotEqual { x, y },
            (0xA, ..) => LoadIndex { addr: op.nnn() },
            (0xB, ..) => JumpOffset { addr: op.nnn() },
            (0xC, ..) => Random { x, nn: op.nn() },
            (0xD, ..) => Draw { x, y, n: op.n() },
            (0xE, .., 0xE) => SkipKeyPressed { x },
            (0xE, .., 0x1) => SkipKeyNotPressed { x },
            (0xF, ..) => match op.nn() {
                0x07 => ReadDelay { x },
                0x0A => WaitKey { x },
                0x15 => SetDelay { x },
                0x18 => SetSound { x },
                0x1E => AddIndex { x },
                0x29 => LoadGlyph { x },
                0x33 => StoreBcd { x },
                0x55 => StoreRegisters { x },
                0x65 => LoadRegisters { x },
                _ => Unknown(op),
            },
            _ => Unknown(op),
        }
    }

    /// Applies the instruction to `state`, including its program counter update.
    pub fn execute<R: Rng + ?Sized>(self, state: &mut State, rng: &mut R) {
        use Instruction::*;

        match self {
            ClearDisplay => clr(state),
            Return => rts(state),
            Jump { addr } => jump(state, addr),
            Call { addr } => call(state, addr),
            SkipEqual { x, nn } => ske(state, x, nn),
            SkipNotEqual { x, nn } => skne(state, x, nn),
            SkipRegistersEqual { x, y } => skre(state, x, y),
            Load { x, nn } => load(state, x, nn),
            AddImmediate { x, nn } => add(state, x, nn),
            Assign { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            Add { x, y } => addr(state, x, y),
            Subtract { x, y } => sub(state, x, y),
            ShiftRight { x } => shr(state, x),
            SubtractReverse { x, y } => subn(state, x, y),
            ShiftLeft { x } => shl(state, x),
            SkipRegistersNotEqual { x, y } => skrne(state, x, y),
            LoadIndex { addr } => loadi(state, addr),
            JumpOffset { addr } => jumpi(state, addr),
            Random { x, nn } => rand(state, x, nn, rng),
            Draw { x, y, n } => draw(state, x, y, n),
            SkipKeyPressed { x } => skpr(state, x),
            SkipKeyNotPressed { x } => skup(state, x),
            ReadDelay { x } => moved(state, x),
            WaitKey { x } => keyd(state, x),
            SetDelay { x } => loads(state, x),
            SetSound { x } => ld(state, x),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x),
            StoreRegisters { x } => stor(state, x),
            LoadRegisters { x } => read(state, x),
            Unknown(op) => unknown(state, op),
        }
    }
}
