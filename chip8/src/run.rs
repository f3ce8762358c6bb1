use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_display::Display;
use chip8_vm::constants::FRAME_PERIOD;
use chip8_vm::{Chip8, Config};

use crate::keymap::keymap;

/// How the driver paces and presents the machine
pub struct Settings {
    pub rom: PathBuf,
    pub steps_per_frame: usize,
    pub debug: bool,
    pub scale: u32,
}

/// What the driver does with the machine this frame
#[derive(Debug, PartialEq)]
enum Cadence {
    /// run `steps_per_frame` instructions
    Free,
    /// run nothing until asked to
    Paused,
    /// run exactly one instruction then pause again
    SingleStep,
    /// a strict-mode fault stopped the machine until it is restarted
    Halted,
}

impl Cadence {
    fn steps(&self, steps_per_frame: usize) -> usize {
        match self {
            Cadence::Free => steps_per_frame,
            Cadence::SingleStep => 1,
            Cadence::Paused | Cadence::Halted => 0,
        }
    }

    fn toggle_debug(&self) -> Cadence {
        match self {
            Cadence::Free => Cadence::Paused,
            Cadence::Halted => Cadence::Halted,
            _ => Cadence::Free,
        }
    }
}

pub fn run(settings: Settings, config: Config) -> anyhow::Result<()> {
    let mut chip8: Chip8 = Chip8::with_config(config);
    chip8
        .load_file(&settings.rom)
        .with_context(|| format!("unable to load {}", settings.rom.display()))?;
    info!("loaded {}", settings.rom.display());

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, settings.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let frame_time = Duration::from_nanos(FRAME_PERIOD);
    let mut cadence = if settings.debug {
        Cadence::Paused
    } else {
        Cadence::Free
    };

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key_pressed(kc, true)?,
                    (Keycode::Escape, _) => break 'event,
                    (Keycode::Tab, _) => cadence = cadence.toggle_debug(),
                    (Keycode::Space, _) if cadence == Cadence::Paused => {
                        cadence = Cadence::SingleStep
                    }
                    (Keycode::Backspace, _) => {
                        chip8.restart();
                        if cadence == Cadence::Halted {
                            cadence = Cadence::Free;
                        }
                    }
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key_pressed(kc, false)?;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        for _ in 0..cadence.steps(settings.steps_per_frame) {
            if let Err(e) = chip8.step() {
                warn!("{}; halted until restart", e);
                cadence = Cadence::Halted;
                break;
            }
        }
        if cadence == Cadence::SingleStep {
            info!("\n{}", chip8.snapshot());
            cadence = Cadence::Paused;
        }

        // If the display changed, render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(|e| anyhow!(e))?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_steps() {
        assert_eq!(Cadence::Free.steps(10), 10);
        assert_eq!(Cadence::SingleStep.steps(10), 1);
        assert_eq!(Cadence::Paused.steps(10), 0);
        assert_eq!(Cadence::Halted.steps(10), 0);
    }

    #[test]
    fn test_cadence_toggle() {
        assert_eq!(Cadence::Free.toggle_debug(), Cadence::Paused);
        assert_eq!(Cadence::Paused.toggle_debug(), Cadence::Free);
        assert_eq!(Cadence::Halted.toggle_debug(), Cadence::Halted);
    }
}
