use crate::cpu::{Cpu8080, PortIo};

impl Cpu8080 {
    /// HLT stops the CPU for good; nothing wakes it again.
    pub(super) fn exec_hlt(&mut self) -> u32 {
        log::debug!("8080 CPU: HLT at 0x{:04x}", self.pc.wrapping_sub(1));
        self.halted = true;
        7
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        self.interrupts_enabled = true;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.interrupts_enabled = false;
        4
    }

    pub(super) fn exec_out<P: PortIo>(&mut self, io: &mut P) -> u32 {
        let port = self.fetch_byte();
        self.port_out(io, port);
        10
    }

    pub(super) fn exec_in<P: PortIo>(&mut self, io: &mut P) -> u32 {
        let port = self.fetch_byte();
        self.port_in(io, port);
        10
    }
}
