use crate::cpu::{Cpu8080, Operand, RegPair};

impl Cpu8080 {
    pub(super) fn exec_mov(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x40..=0x7f) && opcode != 0x76);

        let dst = Operand::from_index(opcode >> 3);
        let src = Operand::from_index(opcode);
        let value = self.read_operand(src);
        self.write_operand(dst, value);
        if dst.is_memory() || src.is_memory() {
            7
        } else {
            5
        }
    }

    pub(super) fn exec_mvi(&mut self, opcode: u8) -> u32 {
        let dst = Operand::from_index(opcode >> 3);
        let value = self.fetch_byte();
        self.write_operand(dst, value);
        if dst.is_memory() {
            10
        } else {
            7
        }
    }

    pub(super) fn exec_lxi(&mut self, opcode: u8) -> u32 {
        let pair = RegPair::from_index(opcode >> 4);
        let value = self.fetch_word();
        self.write_pair(pair, value);
        10
    }

    pub(super) fn exec_stax(&mut self, opcode: u8) -> u32 {
        let pair = match opcode {
            0x02 => RegPair::BC,
            0x12 => RegPair::DE,
            _ => self.fatal_decode(opcode),
        };
        let addr = self.read_pair(pair);
        self.memory.write(addr, self.a);
        7
    }

    pub(super) fn exec_ldax(&mut self, opcode: u8) -> u32 {
        let pair = match opcode {
            0x0a => RegPair::BC,
            0x1a => RegPair::DE,
            _ => self.fatal_decode(opcode),
        };
        let addr = self.read_pair(pair);
        self.a = self.memory.read(addr);
        7
    }

    pub(super) fn exec_sta(&mut self) -> u32 {
        let addr = self.fetch_word();
        self.memory.write(addr, self.a);
        13
    }

    pub(super) fn exec_lda(&mut self) -> u32 {
        let addr = self.fetch_word();
        self.a = self.memory.read(addr);
        13
    }

    pub(super) fn exec_shld(&mut self) -> u32 {
        let addr = self.fetch_word();
        let hl = self.hl();
        self.memory.write_word(addr, hl);
        16
    }

    pub(super) fn exec_lhld(&mut self) -> u32 {
        let addr = self.fetch_word();
        let value = self.memory.read_word(addr);
        self.set_hl(value);
        16
    }

    pub(super) fn exec_xchg(&mut self) -> u32 {
        std::mem::swap(&mut self.d, &mut self.h);
        std::mem::swap(&mut self.e, &mut self.l);
        4
    }

    pub(super) fn exec_sphl(&mut self) -> u32 {
        self.sp = self.hl();
        5
    }
}
