use std::path::PathBuf;

use anyhow::{Context, Result};
use nace_8080::disasm::listing;

const USAGE: &str = "Usage: disasm8080 <file> [offset]";

/// Accepts decimal or `0x`-prefixed hex.
fn parse_offset(text: &str) -> Result<usize> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("invalid offset '{text}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let offset = args.next().as_deref().map(parse_offset).transpose()?.unwrap_or(0);

    let image = std::fs::read(&path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    anyhow::ensure!(
        offset <= image.len(),
        "offset 0x{offset:04x} is past the end of '{}' ({} bytes)",
        path.display(),
        image.len()
    );
    log::info!("disassembling {} bytes from 0x{offset:04x}", image.len() - offset);

    for (addr, op) in listing(&image, offset) {
        let end = (addr + op.length).min(image.len());
        let bytes = image[addr..end]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{addr:04x}  {bytes:<8}  {}", op.text);
    }
    Ok(())
}
