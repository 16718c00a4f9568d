use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use acht_core::{Chip8, ColorProfile, Runner, Timing};
use acht_display::Display;
use anyhow::{Context, Result};
use log::info;

use crate::input::Keyboard;

/// Loads `rom` and runs it in an SDL window until the window is closed.
pub fn run(rom: &Path, scale: u32, profile: ColorProfile, timing: Timing) -> Result<()> {
    let mut chip8 = Chip8::new();

    // Load ROM before touching SDL so a bad path never opens a window
    let file = File::open(rom).with_context(|| format!("could not open ROM {}", rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("failed to load ROM {}", rom.display()))?;
    info!("loaded ROM {}", rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let display = Display::new(&sdl, scale).context("could not open display")?;
    let keyboard = Keyboard::new(&sdl).context("could not read keyboard")?;

    let mut runner = Runner::new(chip8, display, keyboard, profile, timing);
    runner.run().context("emulator stopped")?;
    Ok(())
}
