use std::io::Read;

use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::state::{FrameBuffer, Keypad, State};

/// Lifecycle of a Chip8
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// Constructed but no ROM loaded yet
    Idle,
    /// A ROM is loaded and may be cycled
    Running,
    /// Quit was requested or a fatal error occurred
    Stopped,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source used by `Cxkk`
///  - its lifecycle `status`
///
/// Supplies interfaces for:
/// - loading roms
/// - updating the keypad
/// - advancing the CPU
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
    status: Status,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A Chip8 whose random instruction yields a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
            status: Status::Idle,
        }
    }

    /// Load a rom from a source file
    ///
    /// The image is copied verbatim to 0x200. Images that would run past the
    /// end of memory are rejected, leaving memory untouched and the Chip8 stopped.
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let rom = match read_rom(reader) {
            Ok(rom) => rom,
            Err(e) => {
                self.stop();
                return Err(e);
            }
        };

        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        self.status = Status::Running;
        info!("loaded {} byte ROM into memory", rom.len());
        Ok(())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Moves to `Stopped`; there is no way back.
    pub fn stop(&mut self) {
        self.status = Status::Stopped;
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// The FrameBuffer as it currently stands
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Replaces the pressed status of every key
    pub fn set_keypad(&mut self, keypad: Keypad) {
        self.state.keypad = keypad;
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at the pc and steps the pc past it
    /// - decodes and executes it, skipping opcodes it doesn't know
    pub fn advance_cpu(&mut self) -> Result<()> {
        let op = self.get_op()?;
        self.state.opcode = op;
        self.state.pc += 0x2;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        match Instruction::decode(op) {
            Some(instruction) => instruction.execute(&mut self.state, &mut self.rng),
            None => {
                warn!("unknown opcode {:#06X} at {:#05X}", op, self.state.pc - 0x2);
                Ok(())
            }
        }
    }

    /// Decrements both timers towards 0; called at 60Hz
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Error::PcOutOfBounds { pc: self.state.pc });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Ok(left << 8 | right)
    }
}

/// Reads at most one byte past the largest image, which is enough to reject it.
fn read_rom(reader: &mut dyn Read) -> Result<Vec<u8>> {
    let mut rom = Vec::with_capacity(MAX_ROM_SIZE);
    reader.take(MAX_ROM_SIZE as u64 + 1).read_to_end(&mut rom)?;
    if rom.len() > MAX_ROM_SIZE {
        return Err(Error::rom_too_large(rom.len()));
    }
    Ok(rom)
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
