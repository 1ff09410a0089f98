use crate::cpu::{Condition, Cpu8080};

impl Cpu8080 {
    pub(super) fn exec_jmp(&mut self) -> u32 {
        let target = self.fetch_word();
        self.jump(true, target);
        10
    }

    pub(super) fn exec_jump_cc(&mut self, opcode: u8) -> u32 {
        let taken = self.condition(Condition::from_index(opcode >> 3));
        let target = self.fetch_word();
        self.jump(taken, target);
        10
    }

    pub(super) fn exec_call(&mut self) -> u32 {
        let target = self.fetch_word();
        self.call(true, target);
        17
    }

    pub(super) fn exec_call_cc(&mut self, opcode: u8) -> u32 {
        let taken = self.condition(Condition::from_index(opcode >> 3));
        let target = self.fetch_word();
        if self.call(taken, target) {
            17
        } else {
            11
        }
    }

    pub(super) fn exec_ret(&mut self) -> u32 {
        self.ret(true);
        10
    }

    pub(super) fn exec_ret_cc(&mut self, opcode: u8) -> u32 {
        let taken = self.condition(Condition::from_index(opcode >> 3));
        if self.ret(taken) {
            11
        } else {
            5
        }
    }

    pub(super) fn exec_rst(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff
        ));

        self.restart(opcode >> 3);
        11
    }

    pub(super) fn exec_pchl(&mut self) -> u32 {
        self.pc = self.hl();
        5
    }
}
