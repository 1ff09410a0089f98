use crate::cpu::{alu, Cpu8080, Operand, RegPair};

impl Cpu8080 {
    pub(super) fn exec_inr(&mut self, opcode: u8) -> u32 {
        let operand = Operand::from_index(opcode >> 3);
        let value = self.read_operand(operand);
        let result = alu::increment(&mut self.flags, value);
        self.write_operand(operand, result);
        if operand.is_memory() {
            10
        } else {
            5
        }
    }

    pub(super) fn exec_dcr(&mut self, opcode: u8) -> u32 {
        let operand = Operand::from_index(opcode >> 3);
        let value = self.read_operand(operand);
        let result = alu::decrement(&mut self.flags, value);
        self.write_operand(operand, result);
        if operand.is_memory() {
            10
        } else {
            5
        }
    }

    /// INX rp. No flags are affected.
    pub(super) fn exec_inx(&mut self, opcode: u8) -> u32 {
        let pair = RegPair::from_index(opcode >> 4);
        let value = self.read_pair(pair).wrapping_add(1);
        self.write_pair(pair, value);
        5
    }

    /// DCX rp. No flags are affected.
    pub(super) fn exec_dcx(&mut self, opcode: u8) -> u32 {
        let pair = RegPair::from_index(opcode >> 4);
        let value = self.read_pair(pair).wrapping_sub(1);
        self.write_pair(pair, value);
        5
    }
}
