use crate::cpu::{alu, Cpu8080, Operand, RegPair};

impl Cpu8080 {
    /// Apply ALU operation `op` (bits 3-5 of the opcode) to A and `value`.
    fn alu_op(&mut self, op: u8, value: u8) {
        let a = self.a;
        let carry = self.flags.cy;
        let flags = &mut self.flags;
        match op & 0x07 {
            0 => self.a = alu::add(flags, a, value, false),
            1 => self.a = alu::add(flags, a, value, carry),
            2 => self.a = alu::sub(flags, a, value, false),
            3 => self.a = alu::sub(flags, a, value, carry),
            4 => self.a = alu::and(flags, a, value),
            5 => self.a = alu::xor(flags, a, value),
            6 => self.a = alu::or(flags, a, value),
            7 => alu::compare(flags, a, value, self.config.compare_carry),
            _ => unreachable!(),
        }
    }

    pub(super) fn exec_alu_reg(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x80..=0xbf));

        let src = Operand::from_index(opcode);
        let value = self.read_operand(src);
        self.alu_op(opcode >> 3, value);
        if src.is_memory() {
            7
        } else {
            4
        }
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) -> u32 {
        let value = self.fetch_byte();
        self.alu_op(opcode >> 3, value);
        7
    }

    pub(super) fn exec_rotate(&mut self, opcode: u8) -> u32 {
        let a = self.a;
        let result = match opcode {
            0x07 => alu::rotate_left(&mut self.flags, a),
            0x0f => alu::rotate_right(&mut self.flags, a),
            0x17 => alu::rotate_left_through_carry(&mut self.flags, a),
            0x1f => alu::rotate_right_through_carry(&mut self.flags, a),
            _ => self.fatal_decode(opcode),
        };
        self.a = result;
        4
    }

    pub(super) fn exec_dad(&mut self, opcode: u8) -> u32 {
        let hl = self.hl();
        let value = self.read_pair(RegPair::from_index(opcode >> 4));
        let result = alu::add_word(&mut self.flags, hl, value);
        self.set_hl(result);
        10
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.a = alu::decimal_adjust(&mut self.flags, self.a);
        4
    }

    pub(super) fn exec_cma(&mut self) -> u32 {
        self.a = !self.a;
        4
    }

    pub(super) fn exec_stc(&mut self) -> u32 {
        self.flags.cy = true;
        4
    }

    pub(super) fn exec_cmc(&mut self) -> u32 {
        self.flags.cy = !self.flags.cy;
        4
    }
}
