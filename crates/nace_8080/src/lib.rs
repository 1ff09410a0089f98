//! Intel 8080 emulation core.
//!
//! [`Cpu8080`] owns the register file, the flags and the 64 KiB address space
//! and executes one instruction per [`Cpu8080::step`]. Port accesses are
//! routed to a machine-specific [`PortIo`] implementation. [`FrameScheduler`]
//! runs the CPU for one video frame and injects the two per-frame interrupts.

pub mod cpu;
pub mod disasm;
pub mod opcodes;
pub mod scheduler;

pub use cpu::{CompareCarry, Cpu8080, CpuConfig, Flags, Memory, NullPorts, PortIo, MEMORY_SIZE};
pub use disasm::{disassemble, Disassembly};
pub use scheduler::{FrameConfig, FrameReport, FrameScheduler, InterruptDelivery};
