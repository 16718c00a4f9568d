use std::io;

use thiserror::Error;

use crate::constants::MAX_ROM_SIZE;

/// Everything that can stop the interpreter.
///
/// Unknown opcodes are deliberately absent; they are logged and skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read ROM: {0}")]
    Io(#[from] io::Error),
    #[error("ROM ({size} bytes) is too large for memory ({max} bytes available)")]
    RomTooLarge { size: usize, max: usize },
    #[error("no ROM has been loaded")]
    NotLoaded,
    #[error("call at {pc:#05X} overflowed the stack")]
    StackOverflow { pc: u16 },
    #[error("return at {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },
    #[error("program counter {pc:#06X} is outside of memory")]
    PcOutOfBounds { pc: u16 },
    #[error("memory access at {addr:#06X} is outside of memory")]
    MemoryOutOfBounds { addr: usize },
    #[error("renderer failed: {0}")]
    Render(String),
    #[error("input failed: {0}")]
    Input(String),
}

impl Error {
    pub(crate) fn rom_too_large(size: usize) -> Self {
        Error::RomTooLarge {
            size,
            max: MAX_ROM_SIZE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
