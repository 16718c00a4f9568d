use acht_core::{Input, InputSnapshot, Keypad, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use crate::keymap::keymap;

/// Keyboard input read from the SDL event queue.
///
/// Key states persist between polls; only press and release events change them.
pub struct Keyboard {
    events: EventPump,
    keypad: Keypad,
}

impl Keyboard {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self> {
        let events = sdl.event_pump().map_err(acht_core::Error::Input)?;
        Ok(Keyboard {
            events,
            keypad: [false; 16],
        })
    }
}

impl Input for Keyboard {
    fn poll(&mut self) -> Result<InputSnapshot> {
        let mut quit = false;
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        self.keypad[kc as usize] = true;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        self.keypad[kc as usize] = false;
                    }
                }
                _ => continue,
            }
        }
        Ok(InputSnapshot {
            keypad: self.keypad,
            quit,
        })
    }
}
