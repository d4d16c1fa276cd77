use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use vectra_core::prelude::*;

mod audio;
mod emulator;
mod input;
mod video;

/// Vectrex emulator.
#[derive(Parser)]
#[command(name = "vectra", version, about)]
struct Args {
    /// Cartridge ROM to play. Without one, the built-in Mine Storm runs.
    rom: Option<PathBuf>,

    /// BIOS ROM image (8192 bytes).
    #[arg(long, default_value = "bios.bin")]
    bios: PathBuf,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Error policy: ignore, log, log-once, or fail.
    #[arg(long, default_value = "log-once")]
    errors: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let policy = match args.errors.as_str() {
        "ignore" => ErrorPolicy::Ignore,
        "log" => ErrorPolicy::Log,
        "log-once" => ErrorPolicy::LogOnce,
        "fail" => ErrorPolicy::Fail,
        other => {
            eprintln!("Unknown error policy: {other}");
            return ExitCode::FAILURE;
        }
    };
    error::set_policy(policy);

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.init(&args.bios) {
        eprintln!("Failed to load BIOS {}: {err}", args.bios.display());
        return ExitCode::FAILURE;
    }

    if let Some(rom) = &args.rom {
        if let Err(err) = emulator.load_cartridge(rom) {
            eprintln!("Failed to load ROM {}: {err}", rom.display());
            return ExitCode::FAILURE;
        }
        log::info!("Loaded cartridge {}", rom.display());
    } else {
        log::info!("No cartridge given; running the built-in game");
    }

    emulator.reset();
    emulator::run(&mut emulator, args.scale);
    ExitCode::SUCCESS
}
