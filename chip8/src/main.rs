use std::path::PathBuf;

use acht_core::constants::{CLOCK_SPEED, REFRESH_SPEED, TIMER_SPEED};
use acht_core::{ColorProfile, Timing, PROFILES};
use clap::Parser;

mod input;
mod keymap;
mod run;

/// A Chip-8 interpreter
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to a ROM file
    rom: PathBuf,

    /// Size of a Chip-8 pixel in screen pixels
    #[arg(long, default_value_t = 20)]
    scale: u32,

    /// Color profile (black-white, night-sky, console, honey, paper)
    #[arg(long, default_value = PROFILES[0].0)]
    profile: String,

    /// CPU cycles per second
    #[arg(long, default_value_t = CLOCK_SPEED)]
    clock_hz: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let timing = Timing {
        cpu_hz: args.clock_hz,
        timer_hz: TIMER_SPEED,
        refresh_hz: REFRESH_SPEED,
    };
    run::run(
        &args.rom,
        args.scale,
        ColorProfile::from_name(&args.profile),
        timing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["acht", "pong.ch8"]).unwrap();
        assert_eq!(args.rom, PathBuf::from("pong.ch8"));
        assert_eq!(args.scale, 20);
        assert_eq!(args.profile, "black-white");
        assert_eq!(args.clock_hz, 1000);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "acht", "pong.ch8", "--scale", "8", "--profile", "honey", "--clock-hz", "500",
        ])
        .unwrap();
        assert_eq!(args.scale, 8);
        assert_eq!(args.profile, "honey");
        assert_eq!(args.clock_hz, 500);
    }

    #[test]
    fn test_rom_is_required() {
        assert!(Args::try_parse_from(["acht"]).is_err());
    }
}
