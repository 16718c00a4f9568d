pub use chip8::{Chip8, Status};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use peripherals::{Input, InputSnapshot, Renderer};
pub use profile::{ColorProfile, Rgb, PROFILES};
pub use scheduler::{Runner, Schedule, Tick, Timing};
pub use state::{FrameBuffer, Keypad, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod peripherals;
mod profile;
mod scheduler;
pub mod state;
