use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
    SPRITE_SHEET_START, STACK_SIZE,
};
use crate::error::{Error, Result};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Pressed status of keys 0..F
pub type Keypad = [bool; KEY_COUNT];

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), both decremented at 60Hz
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the sprite sheet
///     - 0x200.. holds the loaded program
/// - 32x64 frame buffer
///
/// ## Input
/// - pressed status of keys 0..F, written only by the input capability
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub opcode: u16,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = SPRITE_SHEET_START as usize;
        memory[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            keypad: [false; KEY_COUNT],
            opcode: 0,
        }
    }

    /// Borrows `len` bytes of memory starting at `addr`.
    pub fn memory_at(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let start = addr as usize;
        self.memory
            .get(start..start + len)
            .ok_or_else(|| out_of_bounds(start, len))
    }

    /// Mutably borrows `len` bytes of memory starting at `addr`.
    pub fn memory_at_mut(&mut self, addr: u16, len: usize) -> Result<&mut [u8]> {
        let start = addr as usize;
        self.memory
            .get_mut(start..start + len)
            .ok_or_else(|| out_of_bounds(start, len))
    }

    /// Pushes a return address.
    /// The pointer names the next free slot, so the write happens before the increment.
    pub fn push(&mut self, addr: u16) -> Result<()> {
        let slot = self
            .stack
            .get_mut(self.sp as usize)
            .ok_or(Error::StackOverflow { pc: self.pc })?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    /// Whether key `key` is currently held; values past 0xF are never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keypad.get(key as usize).copied().unwrap_or(false)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Names the last address a `len` byte access from `start` would touch.
fn out_of_bounds(start: usize, len: usize) -> Error {
    Error::MemoryOutOfBounds {
        addr: (start + len).saturating_sub(1),
    }
}
