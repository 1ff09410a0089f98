mod alu;
mod exec;
mod flags;
mod memory;
mod regs;
mod stack;

#[cfg(test)]
mod tests;

pub use alu::parity;
pub use flags::{Flags, Psw};
pub use memory::{Memory, MEMORY_SIZE};
pub use regs::{Operand, Reg, RegPair};
pub use stack::Condition;

use crate::disasm::disassemble;
use crate::opcodes::OPCODES;

/// Port I/O collaborator for IN and OUT.
///
/// Port semantics are machine specific (shift registers, input latches,
/// sound latches), so the CPU only forwards the access.
pub trait PortIo {
    /// Value read by `IN port`; it becomes the new accumulator.
    fn handle_port_in(&mut self, port: u8) -> u8;
    /// Value written by `OUT port` (the accumulator).
    fn handle_port_out(&mut self, port: u8, value: u8);
}

/// A machine with nothing attached to its ports: reads return 0, writes are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPorts;

impl PortIo for NullPorts {
    fn handle_port_in(&mut self, _port: u8) -> u8 {
        0
    }

    fn handle_port_out(&mut self, _port: u8, _value: u8) {}
}

/// How CMP/CPI derive the carry flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompareCarry {
    /// Unsigned borrow of `A - operand`, as documented by Intel.
    #[default]
    Borrow,
    /// Borrow, inverted when the sign bits of `A` and the operand differ.
    /// Some early emulators behave this way; the result is a signed compare.
    SignAdjusted,
}

/// Power-on configuration for [`Cpu8080`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuConfig {
    /// Initial stack pointer.
    pub stack_top: u16,
    pub compare_carry: CompareCarry,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            stack_top: 0xf000,
            compare_carry: CompareCarry::Borrow,
        }
    }
}

/// Intel 8080 CPU state: registers, flags, the interrupt latch and the
/// 64 KiB address space it executes from.
#[derive(Clone, Debug)]
pub struct Cpu8080 {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    pub memory: Memory,
    halted: bool,
    config: CpuConfig,
}

impl Default for Cpu8080 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu8080 {
    /// Create a CPU with zeroed registers and memory and the default stack top.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            sp: config.stack_top,
            pc: 0,
            flags: Flags::default(),
            interrupts_enabled: false,
            memory: Memory::new(),
            halted: false,
            config,
        }
    }

    /// Reset registers, flags and the halt state. Memory is preserved.
    pub fn reset(&mut self) {
        let memory = std::mem::take(&mut self.memory);
        *self = Self::with_config(self.config);
        self.memory = memory;
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// True once HLT has executed. A halted CPU executes nothing further.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    #[inline]
    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte();
        let hi = self.fetch_byte();
        u16::from_le_bytes([lo, hi])
    }

    /// Execute a single instruction and return the number of cycles consumed.
    ///
    /// Returns 0 without doing anything once the CPU has halted.
    pub fn step<P: PortIo>(&mut self, io: &mut P) -> u32 {
        if self.halted {
            return 0;
        }

        let addr = self.pc;
        if log::log_enabled!(log::Level::Trace) {
            self.trace(addr);
        }

        let opcode = self.fetch_byte();
        let cycles = self.exec_opcode(io, opcode);

        let info = &OPCODES[opcode as usize];
        debug_assert!(
            info.transfers_control || self.pc == addr.wrapping_add(info.length as u16),
            "opcode 0x{opcode:02x} at 0x{addr:04x} left pc at 0x{:04x}",
            self.pc
        );
        cycles
    }

    fn trace(&self, addr: u16) {
        let op = disassemble(self.memory.as_slice(), addr as usize);
        log::trace!(
            "{addr:04x} {:<14} {}  A ${:02x} B ${:02x} C ${:02x} D ${:02x} E ${:02x} H ${:02x} L ${:02x} SP {:04x}",
            op.text,
            self.flags.describe(),
            self.a,
            self.b,
            self.c,
            self.d,
            self.e,
            self.h,
            self.l,
            self.sp,
        );
    }

    /// A dispatch path with no matching instruction. Continuing would run
    /// with `pc` out of step with the instruction stream, so this never
    /// returns.
    fn fatal_decode(&self, opcode: u8) -> ! {
        let addr = self.pc.wrapping_sub(1);
        log::error!(
            "8080 CPU: cannot dispatch opcode 0x{opcode:02x} at 0x{addr:04x} (SP=0x{:04x})",
            self.sp
        );
        panic!("undecodable 8080 opcode 0x{opcode:02x} at 0x{addr:04x}");
    }

    /// Deliver a maskable interrupt as an `RST vector`.
    ///
    /// Ignored (returns false) while interrupts are disabled or the CPU is
    /// halted; there is no pending-interrupt latch. Acceptance clears the
    /// interrupt enable latch.
    pub fn interrupt(&mut self, vector: u8) -> bool {
        if !self.interrupts_enabled || self.halted {
            log::debug!(
                "8080 CPU: interrupt RST {} ignored (enabled={}, halted={})",
                vector & 0x07,
                self.interrupts_enabled,
                self.halted
            );
            return false;
        }
        self.interrupts_enabled = false;
        log::debug!(
            "8080 CPU: interrupt RST {} from pc=0x{:04x}",
            vector & 0x07,
            self.pc
        );
        self.restart(vector);
        true
    }

    /// Perform the IN or OUT at `pc` through `io` without running the
    /// interpreter. Returns false, leaving the CPU untouched, if the next
    /// instruction is not a port access.
    pub fn service_port_io<P: PortIo>(&mut self, io: &mut P) -> bool {
        if self.halted {
            return false;
        }
        let opcode = self.memory.read(self.pc);
        let port = self.memory.read(self.pc.wrapping_add(1));
        match opcode {
            0xd3 => self.port_out(io, port),
            0xdb => self.port_in(io, port),
            _ => return false,
        }
        self.pc = self.pc.wrapping_add(2);
        true
    }

    fn port_out<P: PortIo>(&mut self, io: &mut P, port: u8) {
        io.handle_port_out(port, self.a);
    }

    fn port_in<P: PortIo>(&mut self, io: &mut P, port: u8) {
        self.a = io.handle_port_in(port);
    }
}
