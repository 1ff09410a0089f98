use std::path::PathBuf;

use anyhow::{Context, Result};
use nace::MachineType;

const USAGE: &str = "Usage: nace [space_invaders] <rom>";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (machine, rom_path) = match args.as_slice() {
        [rom] => (MachineType::SpaceInvaders, rom),
        [system, rom, rest @ ..] => {
            for flag in rest {
                log::warn!("ignoring unknown argument '{flag}'");
            }
            let machine = MachineType::from_name(system).unwrap_or_else(|| {
                eprintln!("Unknown system '{system}'. Supported: space_invaders");
                std::process::exit(1);
            });
            (machine, rom)
        }
        [] => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let rom_path = PathBuf::from(rom_path);
    log::info!("Playing ROM path: '{}'", rom_path.display());
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    nace::run(machine, &rom)
}
