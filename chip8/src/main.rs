use std::path::PathBuf;

use clap::Parser;

use chip8_vm::constants::DEFAULT_STEPS_PER_FRAME;
use chip8_vm::{Config, Mode};

mod keymap;
mod run;

/// Run a CHIP-8 program in an SDL2 window.
///
/// Keys 0-9 and A-F drive the keypad. Tab toggles single-step mode, Space steps once
/// while in it, Backspace restarts the program and Escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the program image
    rom: PathBuf,

    /// Instructions executed per rendered frame
    #[arg(short, long, default_value_t = DEFAULT_STEPS_PER_FRAME)]
    steps_per_frame: usize,

    /// Start in single-step mode
    #[arg(short, long)]
    debug: bool,

    /// Report unknown instructions and stack faults instead of tolerating them
    #[arg(long)]
    strict: bool,

    /// Seed for the random byte instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Size of one CHIP-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config {
        mode: if args.strict { Mode::Strict } else { Mode::Lenient },
        seed: args.seed,
    };
    let settings = run::Settings {
        rom: args.rom,
        steps_per_frame: args.steps_per_frame,
        debug: args.debug,
        scale: args.scale,
    };

    run::run(settings, config)
}
