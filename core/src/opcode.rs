/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` the family; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within families 0x0, 0x8 and 0xE
/// - `(_, _, n, n)` specific behavior within family 0xF
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..=Vx
/// - `(_, _, n, _)` refers to the register Vy
/// - `(_, _, _, n)` the height of a sprite
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__nn]`
    fn nn(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x() as u8, self.y() as u8, self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines two bytes of memory into the big-endian instruction word they encode.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_operands() {
        let op: u16 = 0xD35F;
        assert_eq!(op.family(), 0xD);
        assert_eq!(op.x(), 0x3);
        assert_eq!(op.y(), 0x5);
        assert_eq!(op.n(), 0xF);
        assert_eq!(op.nn(), 0x5F);
        assert_eq!(op.nnn(), 0x35F);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0x12, 0x34), 0x1234);
        assert_eq!(from_bytes(0x00, 0xEE), 0x00EE);
    }
}
