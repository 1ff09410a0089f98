//! Stack discipline and control transfer.
//!
//! The stack grows downward and every 16-bit value is stored low byte at the
//! lower address. CALL and RET are built from `push`/`pop` and `jump`; the
//! conditional forms decide before touching the stack.

use super::Cpu8080;

/// Branch condition encoded in bits 3-5 of Jccc/Cccc/Rccc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            7 => Condition::Minus,
            _ => unreachable!(),
        }
    }
}

impl Cpu8080 {
    pub fn condition(&self, condition: Condition) -> bool {
        match condition {
            Condition::NotZero => !self.flags.z,
            Condition::Zero => self.flags.z,
            Condition::NoCarry => !self.flags.cy,
            Condition::Carry => self.flags.cy,
            Condition::ParityOdd => !self.flags.p,
            Condition::ParityEven => self.flags.p,
            Condition::Plus => !self.flags.s,
            Condition::Minus => self.flags.s,
        }
    }

    /// Push two bytes: `hi` ends up at `sp + 1`, `lo` at `sp`.
    pub fn push(&mut self, hi: u8, lo: u8) {
        self.sp = self.sp.wrapping_sub(1);
        self.memory.write(self.sp, hi);
        self.sp = self.sp.wrapping_sub(1);
        self.memory.write(self.sp, lo);
    }

    /// Pop two bytes, returned as `(hi, lo)`.
    pub fn pop(&mut self) -> (u8, u8) {
        let lo = self.memory.read(self.sp);
        self.sp = self.sp.wrapping_add(1);
        let hi = self.memory.read(self.sp);
        self.sp = self.sp.wrapping_add(1);
        (hi, lo)
    }

    pub fn push_word(&mut self, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.push(hi, lo);
    }

    pub fn pop_word(&mut self) -> u16 {
        let (hi, lo) = self.pop();
        u16::from_be_bytes([hi, lo])
    }

    /// Transfer control to `target` if `taken`. The immediate operand has
    /// already been consumed, so a branch not taken simply falls through.
    pub(super) fn jump(&mut self, taken: bool, target: u16) -> bool {
        if taken {
            self.pc = target;
        }
        taken
    }

    /// Push the return address (the current `pc`) and jump, if `taken`.
    pub(super) fn call(&mut self, taken: bool, target: u16) -> bool {
        if taken {
            self.push_word(self.pc);
        }
        self.jump(taken, target)
    }

    /// Pop the return address into `pc`, if `taken`.
    pub(super) fn ret(&mut self, taken: bool) -> bool {
        if taken {
            self.pc = self.pop_word();
        }
        taken
    }

    /// RST-style call to the fixed vector `8 * n`.
    pub(super) fn restart(&mut self, n: u8) {
        self.call(true, u16::from(n & 0x07) << 3);
    }
}
