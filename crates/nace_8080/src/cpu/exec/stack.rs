use crate::cpu::{Cpu8080, Flags, RegPair};

impl Cpu8080 {
    /// PUSH B/D/H, or PUSH PSW (A in the high byte, packed flags in the low).
    pub(super) fn exec_push(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xc5 | 0xd5 | 0xe5 | 0xf5));

        match (opcode >> 4) & 0x03 {
            3 => self.push(self.a, self.flags.to_u8()),
            index => {
                let value = self.read_pair(RegPair::from_index(index));
                self.push_word(value);
            }
        }
        11
    }

    pub(super) fn exec_pop(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xc1 | 0xd1 | 0xe1 | 0xf1));

        let (hi, lo) = self.pop();
        match (opcode >> 4) & 0x03 {
            3 => {
                self.a = hi;
                self.flags = Flags::from_u8(lo);
            }
            index => self.write_pair(RegPair::from_index(index), u16::from_be_bytes([hi, lo])),
        }
        10
    }

    /// XTHL: exchange HL with the word on top of the stack.
    pub(super) fn exec_xthl(&mut self) -> u32 {
        let top = self.memory.read_word(self.sp);
        let hl = self.hl();
        self.memory.write_word(self.sp, hl);
        self.set_hl(top);
        18
    }
}
