//! The effect of every instruction on `State`.
//!
//! Each operation owns its program counter update: +2 to move on, +4 to skip the next
//! instruction, or an absolute target for jumps, calls and returns.

use ::rand::Rng;
use log::debug;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_SIZE, STACK_DEPTH};
use crate::state::State;

const FLAG: usize = 0xF;

/// Mask applied to Vx to produce VF on either shift.
/// This is 3 bits wide rather than the single carried-out bit.
const SHIFT_FLAG_MASK: u8 = 0x7;

fn next(state: &mut State) {
    state.pc = state.pc.wrapping_add(0x2);
}

fn skip_if(state: &mut State, condition: bool) {
    let width = if condition { 0x4 } else { 0x2 };
    state.pc = state.pc.wrapping_add(width);
}

fn stack_slot(sp: u16) -> usize {
    sp as usize % STACK_DEPTH
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    next(state);
}

/// PC = STACK.pop() + 2
/// The popped address is the call itself so it is stepped over.
pub fn rts(state: &mut State) {
    state.sp = state.sp.wrapping_sub(0x1);
    state.pc = state.stack[stack_slot(state.sp)].wrapping_add(0x2);
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) {
    state.stack[stack_slot(state.sp)] = state.pc;
    state.sp = state.sp.wrapping_add(0x1);
    state.pc = addr;
}

/// if Vx == nn then pc += 2
pub fn ske(state: &mut State, x: usize, nn: u8) {
    let condition = state.v[x] == nn;
    skip_if(state, condition);
}

/// if Vx != nn then pc += 2
pub fn skne(state: &mut State, x: usize, nn: u8) {
    let condition = state.v[x] != nn;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: usize, y: usize) {
    let condition = state.v[x] == state.v[y];
    skip_if(state, condition);
}

/// Vx = nn
pub fn load(state: &mut State, x: usize, nn: u8) {
    state.v[x] = nn;
    next(state);
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: usize, nn: u8) {
    state.v[x] = state.v[x].wrapping_add(nn);
    next(state);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: usize, y: usize) {
    state.v[x] = state.v[y];
    next(state);
}

/// Vx |= Vy
pub fn or(state: &mut State, x: usize, y: usize) {
    state.v[x] |= state.v[y];
    next(state);
}

/// Vx &= Vy
pub fn and(state: &mut State, x: usize, y: usize) {
    state.v[x] &= state.v[y];
    next(state);
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: usize, y: usize) {
    state.v[x] ^= state.v[y];
    next(state);
}

// The flagging ALU operations write VF before the result, so an operand of VF
// reads the freshly written flag.

/// VF = Vx + Vy > 0xFF; Vx += Vy
pub fn addr(state: &mut State, x: usize, y: usize) {
    let sum = u16::from(state.v[x]) + u16::from(state.v[y]);
    state.v[FLAG] = (sum > 0xFF) as u8;
    state.v[x] = state.v[x].wrapping_add(state.v[y]);
    next(state);
}

/// VF = Vx >= Vy; Vx -= Vy
pub fn sub(state: &mut State, x: usize, y: usize) {
    state.v[FLAG] = (state.v[x] >= state.v[y]) as u8;
    state.v[x] = state.v[x].wrapping_sub(state.v[y]);
    next(state);
}

/// VF = Vx & 0b111; Vx >>= 1
pub fn shr(state: &mut State, x: usize) {
    state.v[FLAG] = state.v[x] & SHIFT_FLAG_MASK;
    state.v[x] >>= 1;
    next(state);
}

/// VF = Vx - Vy > 0; Vx = Vy - Vx
/// Unlike `sub` the flag is only raised on a strictly positive Vx - Vy.
pub fn subn(state: &mut State, x: usize, y: usize) {
    let difference = i16::from(state.v[x]) - i16::from(state.v[y]);
    state.v[FLAG] = (difference > 0) as u8;
    state.v[x] = state.v[y].wrapping_sub(state.v[x]);
    next(state);
}

/// VF = Vx & 0b111; Vx <<= 1
pub fn shl(state: &mut State, x: usize) {
    state.v[FLAG] = state.v[x] & SHIFT_FLAG_MASK;
    state.v[x] <<= 1;
    next(state);
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: usize, y: usize) {
    let condition = state.v[x] != state.v[y];
    skip_if(state, condition);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    next(state);
}

/// PC = V0 + addr + 2
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = addr.wrapping_add(u16::from(state.v[0x0]));
    next(state);
}

/// Vx = rand_byte & nn
pub fn rand<R: Rng + ?Sized>(state: &mut State, x: usize, nn: u8, rng: &mut R) {
    let rand_byte: u8 = rng.gen();
    state.v[x] = rand_byte & nn;
    next(state);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an 8 pixel wide sprite from memory i..i+n at position x, y on the FrameBuffer.
/// Sets VF if any lit pixel is erased. Pixels falling off the right or bottom edge are dropped.
pub fn draw(state: &mut State, x: usize, y: usize, n: u8) {
    let origin_x = state.v[x] as usize;
    let origin_y = state.v[y] as usize;

    // Reset the flag (used for collision detection)
    state.v[FLAG] = 0x0;

    for row in 0..n {
        let sprite = state.read(state.i.wrapping_add(u16::from(row)));
        let py = origin_y + row as usize;
        for bit in 0..8 {
            let px = origin_x + bit;
            if sprite & (0x80 >> bit) == 0 || px >= DISPLAY_WIDTH || py >= DISPLAY_HEIGHT {
                continue;
            }
            if state.frame_buffer[py][px] == 1 {
                state.v[FLAG] = 0x1;
            }
            state.frame_buffer[py][px] ^= 1;
        }
    }

    state.draw_flag = true;
    next(state);
}

fn is_pressed(state: &State, key: u8) -> bool {
    state.keys.get(key as usize).map_or(false, |&k| k == 0x1)
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: usize) {
    let condition = is_pressed(state, state.v[x]);
    skip_if(state, condition);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: usize) {
    let condition = !is_pressed(state, state.v[x]);
    skip_if(state, condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: usize) {
    state.v[x] = state.delay_timer;
    next(state);
}

/// await keypress for Vx
/// Without a pressed key the pc stays put, so the same instruction runs again next step.
/// With several pressed the lowest key wins.
pub fn keyd(state: &mut State, x: usize) {
    match state.keys.iter().position(|&k| k == 0x1) {
        Some(key) => {
            state.v[x] = key as u8;
            next(state);
        }
        None => debug!("waiting on a key for V{:X}", x),
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: usize) {
    state.delay_timer = state.v[x];
    next(state);
}

/// ST = Vx
pub fn ld(state: &mut State, x: usize) {
    state.sound_timer = state.v[x];
    next(state);
}

/// I += Vx
pub fn addi(state: &mut State, x: usize) {
    state.i = state.i.wrapping_add(u16::from(state.v[x]));
    next(state);
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: usize) {
    state.i = u16::from(state.v[x]) * GLYPH_SIZE;
    next(state);
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: usize) {
    let value = state.v[x];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), *digit);
    }
    next(state);
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn stor(state: &mut State, x: usize) {
    for register in 0..=x {
        state.write(state.i.wrapping_add(register as u16), state.v[register]);
    }
    next(state);
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn read(state: &mut State, x: usize) {
    for register in 0..=x {
        state.v[register] = state.read(state.i.wrapping_add(register as u16));
    }
    next(state);
}

/// Anything undecodable does nothing, including leaving the pc where it is.
pub fn unknown(state: &State, op: u16) {
    debug!("unknown instruction {:04X} at {:04X}, pc held", op, state.pc);
}
