use super::Cpu8080;

/// An 8-bit general purpose register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

/// Source or destination of an 8-bit operation: a register or the byte at (HL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(Reg),
    Memory,
}

impl Operand {
    /// Decode the 3-bit register field used throughout the opcode map:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=M, 7=A.
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand::Register(Reg::B),
            1 => Operand::Register(Reg::C),
            2 => Operand::Register(Reg::D),
            3 => Operand::Register(Reg::E),
            4 => Operand::Register(Reg::H),
            5 => Operand::Register(Reg::L),
            6 => Operand::Memory,
            7 => Operand::Register(Reg::A),
            _ => unreachable!(),
        }
    }

    pub fn is_memory(self) -> bool {
        matches!(self, Operand::Memory)
    }
}

/// A 16-bit register pair as encoded in bits 4-5 of LXI/INX/DCX/DAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegPair {
    pub fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => RegPair::BC,
            1 => RegPair::DE,
            2 => RegPair::HL,
            3 => RegPair::SP,
            _ => unreachable!(),
        }
    }
}

impl Cpu8080 {
    #[inline]
    pub fn reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::B => self.b,
            Reg::C => self.c,
            Reg::D => self.d,
            Reg::E => self.e,
            Reg::H => self.h,
            Reg::L => self.l,
            Reg::A => self.a,
        }
    }

    #[inline]
    pub fn set_reg(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.b = value,
            Reg::C => self.c = value,
            Reg::D => self.d = value,
            Reg::E => self.e = value,
            Reg::H => self.h = value,
            Reg::L => self.l = value,
            Reg::A => self.a = value,
        }
    }

    #[inline]
    pub fn read_pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::BC => u16::from_be_bytes([self.b, self.c]),
            RegPair::DE => u16::from_be_bytes([self.d, self.e]),
            RegPair::HL => u16::from_be_bytes([self.h, self.l]),
            RegPair::SP => self.sp,
        }
    }

    #[inline]
    pub fn write_pair(&mut self, pair: RegPair, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        match pair {
            RegPair::BC => {
                self.b = hi;
                self.c = lo;
            }
            RegPair::DE => {
                self.d = hi;
                self.e = lo;
            }
            RegPair::HL => {
                self.h = hi;
                self.l = lo;
            }
            RegPair::SP => self.sp = value,
        }
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.read_pair(RegPair::HL)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.write_pair(RegPair::HL, value);
    }

    /// Read a register, or the memory byte addressed by HL.
    #[inline]
    pub fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Register(reg) => self.reg(reg),
            Operand::Memory => self.memory.read(self.hl()),
        }
    }

    #[inline]
    pub fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Register(reg) => self.set_reg(reg, value),
            Operand::Memory => {
                let addr = self.hl();
                self.memory.write(addr, value);
            }
        }
    }
}
