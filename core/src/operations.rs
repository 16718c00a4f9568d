//! Handlers for every supported instruction.
//!
//! The program counter has already been advanced past the instruction by the
//! time a handler runs, so skips add a further 2 and `keyd` rewinds by 2.

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_HEIGHT, SPRITE_SHEET_START};
use crate::error::Result;
use crate::state::State;

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    state.pc = state.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    state.push(state.pc)?;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    let condition = state.v[x as usize] == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    let condition = state.v[x as usize] != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let condition = state.v[x as usize] == state.v[y as usize];
    skip_if(state, condition);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] |= state.v[y as usize];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] &= state.v[y as usize];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] ^= state.v[y as usize];
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[0xF] = u8::from(over);
    state.v[x as usize] = res;
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[0xF] = u8::from(vx > vy);
    state.v[x as usize] = vx.wrapping_sub(vy);
}

/// Vx >>= 1; VF = shifted out bit
/// Vy is ignored
pub fn shr(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[0xF] = vx & 0x1;
    state.v[x as usize] = vx >> 1;
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[0xF] = u8::from(vy > vx);
    state.v[x as usize] = vy.wrapping_sub(vx);
}

/// Vx <<= 1; VF = shifted out bit
/// Vy is ignored
pub fn shl(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[0xF] = vx >> 7;
    state.v[x as usize] = vx << 1;
}

/// if Vx != Vy then pc +=2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let condition = state.v[x as usize] != state.v[y as usize];
    skip_if(state, condition);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = u16::from(state.v[0x0]) + addr;
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8, rand_byte: u8) {
    state.v[x as usize] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let sprite = state.memory_at(state.i, n as usize)?;
    let mut frame_buffer = state.frame_buffer;
    let mut collision = false;

    for (row, byte) in sprite.iter().enumerate() {
        let py = (state.v[y as usize] as usize + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if byte & (0x80 >> bit) == 0 {
                continue;
            }
            let px = (state.v[x as usize] as usize + bit) % DISPLAY_WIDTH;
            let pixel = &mut frame_buffer[py][px];
            collision |= *pixel;
            *pixel = !*pixel;
        }
    }

    state.frame_buffer = frame_buffer;
    state.v[0xF] = u8::from(collision);
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    let condition = state.is_pressed(state.v[x as usize]);
    skip_if(state, condition);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) {
    let condition = !state.is_pressed(state.v[x as usize]);
    skip_if(state, condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
}

/// await keypress for Vx
/// Re-runs itself on the next cycle until a key is held; the lowest held key wins
pub fn keyd(state: &mut State, x: u8) {
    match state.keypad.iter().position(|&pressed| pressed) {
        Some(key) => state.v[x as usize] = key as u8,
        None => state.pc = state.pc.wrapping_sub(0x2),
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
}

/// I = sprite_sheet + Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    state.i = SPRITE_SHEET_START + u16::from(state.v[x as usize]) * SPRITE_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let vx = state.v[x as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    state.memory_at_mut(state.i, 3)?.copy_from_slice(&digits);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx; I = x + 1
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let count = x as usize + 1;
    let registers = state.v;
    state
        .memory_at_mut(state.i, count)?
        .copy_from_slice(&registers[..count]);
    state.i = u16::from(x) + 1;
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]; I = x + 1
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let count = x as usize + 1;
    let mut registers = state.v;
    registers[..count].copy_from_slice(state.memory_at(state.i, count)?);
    state.v = registers;
    state.i = u16::from(x) + 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_round_trips_every_register_and_value() {
        let mut state = State::new();
        for x in 0..16 {
            for value in 0..=u8::MAX {
                load(&mut state, x, value);
                assert_eq!(state.v[x as usize], value);
            }
        }
    }

    #[test]
    fn test_add_immediate_wraps_without_touching_vf() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        state.v[0xF] = 0x7;
        add(&mut state, 0x1, 0x02);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x7);
    }

    #[test]
    fn test_addr_with_overflow() {
        let mut state = State::new();
        state.v[0x1] = 0xA0;
        state.v[0x2] = 0xB2;
        addr(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x52);
        assert_eq!(state.v[0xF], 1);
    }

    #[test]
    fn test_addr_without_overflow() {
        let mut state = State::new();
        state.v[0x1] = 0x0F;
        state.v[0x2] = 0xAF;
        addr(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0xBE);
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_sub_with_borrow() {
        let mut state = State::new();
        state.v[0x1] = 0xA0;
        state.v[0x2] = 0xB2;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0xEE);
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_sub_without_borrow() {
        let mut state = State::new();
        state.v[0x1] = 0xF0;
        state.v[0x2] = 0xAF;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x41);
        assert_eq!(state.v[0xF], 1);
    }

    #[test]
    fn test_sub_of_equal_values_clears_vf() {
        let mut state = State::new();
        state.v[0x1] = 0x10;
        state.v[0x2] = 0x10;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x00);
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_subn() {
        let mut state = State::new();
        state.v[0x1] = 0x10;
        state.v[0x2] = 0x30;
        subn(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x20);
        assert_eq!(state.v[0xF], 1);

        state.v[0x1] = 0x30;
        state.v[0x2] = 0x10;
        subn(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0xE0);
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_shr_odd_input_sets_vf() {
        let mut state = State::new();
        state.v[0x1] = 0x01;
        shr(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0x00);
        assert_eq!(state.v[0xF], 1);
    }

    #[test]
    fn test_shl_keeps_low_byte() {
        let mut state = State::new();
        state.v[0x1] = 0b1100_0001;
        shl(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0b1000_0010);
        assert_eq!(state.v[0xF], 1);
    }

    #[test]
    fn test_alu_result_wins_when_vf_is_the_destination() {
        let mut state = State::new();
        state.v[0xF] = 0xFF;
        state.v[0x1] = 0x01;
        addr(&mut state, 0xF, 0x1);
        assert_eq!(state.v[0xF], 0x00);
    }

    #[test]
    fn test_rand_masks_byte() {
        let mut state = State::new();
        rand(&mut state, 0x3, 0x0F, 0xAB);
        assert_eq!(state.v[0x3], 0x0B);
    }

    #[test]
    fn test_bcd() {
        let mut state = State::new();
        state.i = 0x300;
        state.v[0x1] = 123;
        bcd(&mut state, 0x1).unwrap();
        assert_eq!(state.memory[0x300..0x303], [1, 2, 3]);
    }

    #[test]
    fn test_bcd_of_zero() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300..0x303].copy_from_slice(&[9, 9, 9]);
        bcd(&mut state, 0x1).unwrap();
        assert_eq!(state.memory[0x300..0x303], [0, 0, 0]);
    }

    #[test]
    fn test_bcd_past_end_of_memory() {
        let mut state = State::new();
        state.i = 0xFFE;
        assert!(matches!(
            bcd(&mut state, 0x1),
            Err(Error::MemoryOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_draw_then_redraw_collides() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300] = 0xFF;

        draw(&mut state, 0x0, 0x1, 1).unwrap();
        assert_eq!(state.frame_buffer[0][..8], [true; 8]);
        assert!(!state.frame_buffer[0][8]);
        assert_eq!(state.v[0xF], 0);

        draw(&mut state, 0x0, 0x1, 1).unwrap();
        assert_eq!(state.frame_buffer[0][..8], [false; 8]);
        assert_eq!(state.v[0xF], 1);
    }

    #[test]
    fn test_draw_wraps_horizontally() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300] = 0xFF;
        state.v[0x0] = 63;

        draw(&mut state, 0x0, 0x1, 1).unwrap();
        assert!(state.frame_buffer[0][63]);
        assert_eq!(state.frame_buffer[0][..7], [true; 7]);
        assert!(!state.frame_buffer[0][7]);
    }

    #[test]
    fn test_draw_wraps_vertically() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300..0x302].copy_from_slice(&[0x80, 0x80]);
        state.v[0x1] = 31;

        draw(&mut state, 0x0, 0x1, 2).unwrap();
        assert!(state.frame_buffer[31][0]);
        assert!(state.frame_buffer[0][0]);
    }

    #[test]
    fn test_draw_resets_vf_when_nothing_collides() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300] = 0x80;
        state.v[0xF] = 1;
        draw(&mut state, 0x0, 0x1, 1).unwrap();
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_draw_zero_rows_at_address_zero() {
        let mut state = State::new();
        state.i = 0x000;
        state.v[0xF] = 1;
        draw(&mut state, 0x0, 0x1, 0).unwrap();
        assert!(state.frame_buffer.iter().flatten().all(|pixel| !pixel));
        assert_eq!(state.v[0xF], 0);
    }

    #[test]
    fn test_keyd_rewinds_without_key() {
        let mut state = State::new();
        state.pc = 0x202;
        keyd(&mut state, 0x4);
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_keyd_takes_lowest_pressed_key() {
        let mut state = State::new();
        state.pc = 0x202;
        state.keypad[0x3] = true;
        state.keypad[0xA] = true;
        keyd(&mut state, 0x4);
        assert_eq!(state.pc, 0x202);
        assert_eq!(state.v[0x4], 0x3);
    }

    #[test]
    fn test_ldspr_points_into_sprite_sheet() {
        let mut state = State::new();
        state.v[0x2] = 0xA;
        ldspr(&mut state, 0x2);
        assert_eq!(state.i, 0x050 + 0xA * 5);
        assert_eq!(state.memory[state.i as usize], 0xF0);
    }

    #[test]
    fn test_stor_sets_i_to_x_plus_one() {
        let mut state = State::new();
        state.i = 0x300;
        state.v[..3].copy_from_slice(&[0xA, 0xB, 0xC]);
        stor(&mut state, 0x2).unwrap();
        assert_eq!(state.memory[0x300..0x304], [0xA, 0xB, 0xC, 0x0]);
        assert_eq!(state.i, 0x3);
    }

    #[test]
    fn test_read_sets_i_to_x_plus_one() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300..0x304].copy_from_slice(&[0xA, 0xB, 0xC, 0xD]);
        read(&mut state, 0x2).unwrap();
        assert_eq!(state.v[..4], [0xA, 0xB, 0xC, 0x0]);
        assert_eq!(state.i, 0x3);
    }

    #[test]
    fn test_addi() {
        let mut state = State::new();
        state.i = 0x100;
        state.v[0x1] = 0x10;
        addi(&mut state, 0x1);
        assert_eq!(state.i, 0x110);
    }
}
