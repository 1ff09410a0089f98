//! Frame-synchronised execution.
//!
//! Arcade hardware raises two interrupts per video frame: one when the beam
//! reaches the middle of the screen and one at vertical blank. The scheduler
//! runs the CPU for one frame's worth of cycles and injects those interrupts
//! at the half-frame and full-frame marks.

use typed_builder::TypedBuilder;

use crate::cpu::{Cpu8080, PortIo};

/// 8080 clock of the reference arcade board.
pub const CPU_CLOCK_HZ: u32 = 2_000_000;
pub const FRAME_RATE_HZ: u32 = 60;
pub const CYCLES_PER_FRAME: u32 = CPU_CLOCK_HZ / FRAME_RATE_HZ;
/// Cycles charged for an IN/OUT serviced directly by the scheduler.
pub const PORT_IO_CYCLES: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct FrameConfig {
    #[builder(default = CYCLES_PER_FRAME)]
    pub cycles_per_frame: u32,
    #[builder(default = PORT_IO_CYCLES)]
    pub io_cycles: u32,
    /// RST vectors used by successive interrupts, alternating.
    #[builder(default = [1, 2])]
    pub vectors: [u8; 2],
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One interrupt the scheduler tried to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptDelivery {
    pub vector: u8,
    /// Frame cycle count at the moment of delivery.
    pub at_cycle: u32,
    /// False when interrupts were disabled (or the CPU halted); the interrupt
    /// is dropped, not queued.
    pub accepted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Cycles consumed during the frame.
    pub cycles: u32,
    pub interrupts: Vec<InterruptDelivery>,
    /// The CPU executed HLT; the frame ended early.
    pub halted: bool,
}

/// Runs a [`Cpu8080`] one video frame at a time.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    config: FrameConfig,
    /// Index into `config.vectors` of the next interrupt to deliver.
    next_vector: usize,
}

impl FrameScheduler {
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            next_vector: 0,
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Vector the next delivered interrupt will use.
    pub fn next_vector(&self) -> u8 {
        self.config.vectors[self.next_vector]
    }

    /// Run one frame.
    ///
    /// IN and OUT are serviced here through `io` at a fixed cost instead of
    /// going through the interpreter. The first interrupt is delivered once
    /// the frame's cycle count reaches half the budget and the second once
    /// it reaches the full budget, which also ends the frame.
    pub fn run_frame<P: PortIo>(&mut self, cpu: &mut Cpu8080, io: &mut P) -> FrameReport {
        let budget = self.config.cycles_per_frame;
        let thresholds = [budget / 2, budget];
        let mut pending = 0;
        let mut report = FrameReport::default();

        while report.cycles < budget {
            if cpu.is_halted() {
                log::debug!("frame ended early: CPU halted at 0x{:04x}", cpu.pc);
                report.halted = true;
                break;
            }

            let cycles = if cpu.service_port_io(io) {
                self.config.io_cycles
            } else {
                cpu.step(io)
            };
            report.cycles = report.cycles.saturating_add(cycles);

            while pending < thresholds.len() && report.cycles >= thresholds[pending] {
                pending += 1;
                let delivery = self.deliver(cpu, report.cycles);
                report.interrupts.push(delivery);
            }
        }

        report
    }

    fn deliver(&mut self, cpu: &mut Cpu8080, at_cycle: u32) -> InterruptDelivery {
        let vector = self.config.vectors[self.next_vector];
        self.next_vector ^= 1;
        let accepted = cpu.interrupt(vector);
        InterruptDelivery {
            vector,
            at_cycle,
            accepted,
        }
    }
}
