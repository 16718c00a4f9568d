//! # Scheduler
//!
//! Three periodic activities share one Chip8: CPU cycles, the 60Hz timers and
//! the 60Hz redraw. Rather than relying on threads, every activity keeps a
//! tick counter and the one with the earliest deadline runs next, so the
//! interleaving is a pure function of the configured frequencies.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::chip8::{Chip8, Status};
use crate::constants::{CLOCK_SPEED, REFRESH_SPEED, TIMER_SPEED};
use crate::error::{Error, Result};
use crate::peripherals::{Input, Renderer};
use crate::profile::ColorProfile;

/// Frequencies, in Hz, of each scheduled activity
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timing {
    pub cpu_hz: u32,
    pub timer_hz: u32,
    pub refresh_hz: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            cpu_hz: CLOCK_SPEED,
            timer_hz: TIMER_SPEED,
            refresh_hz: REFRESH_SPEED,
        }
    }
}

/// The activities a Schedule hands out
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Decrement the delay and sound timers
    Timers,
    /// Hand the frame buffer to the renderer
    Redraw,
    /// Poll input, then run one CPU cycle
    Cpu,
}

/// Counts ticks of one activity; the nth tick is due at n / hz seconds.
#[derive(Debug, Copy, Clone)]
struct Periodic {
    hz: u64,
    ticks: u64,
}

impl Periodic {
    fn new(hz: u32) -> Self {
        Periodic {
            hz: u64::from(hz.max(1)),
            ticks: 0,
        }
    }

    fn deadline(&self) -> Duration {
        let nanos = u128::from(self.ticks) * 1_000_000_000 / u128::from(self.hz);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

/// Hands out activities in deadline order.
/// Ties go to timers, then redraw, then the CPU.
#[derive(Debug, Clone)]
pub struct Schedule {
    activities: [(Tick, Periodic); 3],
}

impl Schedule {
    pub fn new(timing: Timing) -> Self {
        Schedule {
            activities: [
                (Tick::Timers, Periodic::new(timing.timer_hz)),
                (Tick::Redraw, Periodic::new(timing.refresh_hz)),
                (Tick::Cpu, Periodic::new(timing.cpu_hz)),
            ],
        }
    }

    /// Returns the next activity and how long after the start it is due.
    pub fn next(&mut self) -> (Duration, Tick) {
        let mut next = 0;
        for (index, (_, periodic)) in self.activities.iter().enumerate() {
            if periodic.deadline() < self.activities[next].1.deadline() {
                next = index;
            }
        }
        let (tick, periodic) = &mut self.activities[next];
        let deadline = periodic.deadline();
        periodic.ticks += 1;
        (deadline, *tick)
    }
}

/// Drives a Chip8 against a Renderer and an Input.
pub struct Runner<R, I> {
    chip8: Chip8,
    renderer: R,
    input: I,
    profile: ColorProfile,
    schedule: Schedule,
}

impl<R: Renderer, I: Input> Runner<R, I> {
    pub fn new(chip8: Chip8, renderer: R, input: I, profile: ColorProfile, timing: Timing) -> Self {
        Runner {
            chip8,
            renderer,
            input,
            profile,
            schedule: Schedule::new(timing),
        }
    }

    pub fn chip8(&self) -> &Chip8 {
        &self.chip8
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs until input asks to quit or a fatal error occurs, sleeping so that
    /// each activity happens no earlier than its deadline.
    pub fn run(&mut self) -> Result<()> {
        self.ensure_loaded()?;
        info!("running");
        let start = Instant::now();
        while self.chip8.status() == Status::Running {
            let (deadline, tick) = self.schedule.next();
            if let Some(wait) = deadline.checked_sub(start.elapsed()) {
                std::thread::sleep(wait);
            }
            self.perform(tick)?;
        }
        info!("stopped");
        Ok(())
    }

    /// Performs the next scheduled activity immediately.
    pub fn step(&mut self) -> Result<Tick> {
        self.ensure_loaded()?;
        let (_, tick) = self.schedule.next();
        self.perform(tick)?;
        Ok(tick)
    }

    fn ensure_loaded(&self) -> Result<()> {
        match self.chip8.status() {
            Status::Idle => Err(Error::NotLoaded),
            _ => Ok(()),
        }
    }

    fn perform(&mut self, tick: Tick) -> Result<()> {
        if self.chip8.status() != Status::Running {
            return Ok(());
        }
        let result = match tick {
            Tick::Timers => {
                self.chip8.advance_timers();
                Ok(())
            }
            Tick::Redraw => self.renderer.render(self.chip8.frame(), &self.profile),
            Tick::Cpu => self.poll_input().and_then(|()| self.cpu_cycle()),
        };
        if result.is_err() {
            self.chip8.stop();
        }
        result
    }

    fn poll_input(&mut self) -> Result<()> {
        match self.input.poll() {
            Ok(snapshot) if snapshot.quit => self.chip8.stop(),
            Ok(snapshot) => self.chip8.set_keypad(snapshot.keypad),
            Err(e) => {
                warn!("{}; stopping", e);
                self.chip8.stop();
            }
        }
        Ok(())
    }

    fn cpu_cycle(&mut self) -> Result<()> {
        if self.chip8.status() != Status::Running {
            return Ok(());
        }
        self.chip8.advance_cpu()
    }
}
