use anyhow::{Context, Result};
use nace_8080::{Cpu8080, FrameReport, FrameScheduler};
use nace_common::key::Key;

use crate::io::*;

/// Start of video RAM. The frame buffer occupies 0x2400-0x3fff.
pub const VRAM_START: usize = 0x2400;
/// 0x1c00 bytes = 224 columns of 32 bytes, one bit per pixel.
pub const VRAM_SIZE: usize = 0x1c00;

/// The Space Invaders board: CPU, port hardware and the frame scheduler that
/// paces them.
pub struct InvadersMachine {
    cpu: Cpu8080,
    io: InvadersIo,
    scheduler: FrameScheduler,
    dip_config: DipConfig,
    halt_reported: bool,
}

impl InvadersMachine {
    pub fn new() -> Self {
        Self::with_dip_config(DipConfig::default())
    }

    pub fn with_dip_config(dip_config: DipConfig) -> Self {
        Self {
            cpu: Cpu8080::new(),
            io: InvadersIo::new(dip_config),
            scheduler: FrameScheduler::default(),
            dip_config,
            halt_reported: false,
        }
    }

    /// Reset CPU, ports and interrupt alternation. ROM and RAM contents are
    /// kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.io = InvadersIo::new(self.dip_config);
        self.scheduler = FrameScheduler::new(self.scheduler.config().clone());
        self.halt_reported = false;
    }

    /// Copy a combined ROM image to address 0 and point the CPU at it.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.cpu
            .memory
            .load_image(0, rom)
            .context("failed to load Space Invaders ROM")?;
        self.cpu.pc = 0x0000;
        log::info!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Run one 60 Hz frame: two interrupts, RST 1 at mid-frame and RST 2 at
    /// vblank.
    pub fn step_frame(&mut self) -> FrameReport {
        let report = self.scheduler.run_frame(&mut self.cpu, &mut self.io);
        if report.halted && !self.halt_reported {
            log::warn!("CPU halted at 0x{:04x}", self.cpu.pc.wrapping_sub(1));
            self.halt_reported = true;
        }
        report
    }

    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Map a frontend key onto the input latches.
    ///
    /// - `C` inserts a coin, `Num1`/`Num2` start a one or two player game.
    /// - `A`/`Left`, `D`/`Right` and `S`/`Space` move and fire for player 1.
    /// - `J`, `L` and `K` are player 2's left, right and fire.
    /// - `T` tilts the cabinet; the bit latches until reset.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let io = &mut self.io;
        match key {
            Key::C => set_input_bit(&mut io.in_port1, IN1_BIT_COIN, pressed),
            Key::Num1 => set_input_bit(&mut io.in_port1, IN1_BIT_P1_START, pressed),
            Key::Num2 => set_input_bit(&mut io.in_port1, IN1_BIT_P2_START, pressed),
            Key::A | Key::Left => set_input_bit(&mut io.in_port1, IN1_BIT_P1_LEFT, pressed),
            Key::D | Key::Right => set_input_bit(&mut io.in_port1, IN1_BIT_P1_RIGHT, pressed),
            Key::S | Key::Space => set_input_bit(&mut io.in_port1, IN1_BIT_P1_SHOOT, pressed),
            Key::J => set_input_bit(&mut io.in_port2, IN2_BIT_P2_LEFT, pressed),
            Key::L => set_input_bit(&mut io.in_port2, IN2_BIT_P2_RIGHT, pressed),
            Key::K => set_input_bit(&mut io.in_port2, IN2_BIT_P2_SHOOT, pressed),
            Key::T if pressed => set_input_bit(&mut io.in_port2, IN2_BIT_TILT, true),
            _ => {}
        }
    }

    /// The 1bpp frame buffer, read-only.
    pub fn video_ram(&self) -> &[u8] {
        self.cpu.memory.slice(VRAM_START..VRAM_START + VRAM_SIZE)
    }

    /// Current sound latches (OUT 3, OUT 5).
    pub fn outputs(&self) -> (u8, u8) {
        (self.io.out_port3, self.io.out_port5)
    }

    pub fn cpu(&self) -> &Cpu8080 {
        &self.cpu
    }

    pub fn io(&self) -> &InvadersIo {
        &self.io
    }
}

impl Default for InvadersMachine {
    fn default() -> Self {
        Self::new()
    }
}
