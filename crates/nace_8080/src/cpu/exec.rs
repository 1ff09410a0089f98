mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Cpu8080, PortIo};

impl Cpu8080 {
    /// Decode and execute a single opcode and return the number of cycles.
    ///
    /// Every byte value is a defined instruction. The undocumented encodings
    /// behave like their documented twins: 0x08/0x10/.../0x38 are NOP, 0xCB is
    /// JMP, 0xD9 is RET and 0xDD/0xED/0xFD are CALL.
    pub(super) fn exec_opcode<P: PortIo>(&mut self, io: &mut P, opcode: u8) -> u32 {
        match opcode {
            // NOP
            0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => 4,

            // LXI rp,d16
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_lxi(opcode),

            // STAX B / STAX D
            0x02 | 0x12 => self.exec_stax(opcode),

            // LDAX B / LDAX D
            0x0a | 0x1a => self.exec_ldax(opcode),

            // SHLD / LHLD / STA / LDA
            0x22 => self.exec_shld(),
            0x2a => self.exec_lhld(),
            0x32 => self.exec_sta(),
            0x3a => self.exec_lda(),

            // INX rp / DCX rp
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inx(opcode),
            0x0b | 0x1b | 0x2b | 0x3b => self.exec_dcx(opcode),

            // INR r / DCR r (including M)
            0x04 | 0x0c | 0x14 | 0x1c | 0x24 | 0x2c | 0x34 | 0x3c => self.exec_inr(opcode),
            0x05 | 0x0d | 0x15 | 0x1d | 0x25 | 0x2d | 0x35 | 0x3d => self.exec_dcr(opcode),

            // MVI r,d8 (including M)
            0x06 | 0x0e | 0x16 | 0x1e | 0x26 | 0x2e | 0x36 | 0x3e => self.exec_mvi(opcode),

            // RLC / RRC / RAL / RAR
            0x07 | 0x0f | 0x17 | 0x1f => self.exec_rotate(opcode),

            // DAD rp
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_dad(opcode),

            0x27 => self.exec_daa(),
            0x2f => self.exec_cma(),
            0x37 => self.exec_stc(),
            0x3f => self.exec_cmc(),

            // HLT sits in the middle of the MOV block (it would be MOV M,M).
            0x76 => self.exec_hlt(),

            // MOV r1,r2
            0x40..=0x7f => self.exec_mov(opcode),

            // ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP r
            0x80..=0xbf => self.exec_alu_reg(opcode),

            // ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8
            0xc6 | 0xce | 0xd6 | 0xde | 0xe6 | 0xee | 0xf6 | 0xfe => self.exec_alu_imm(opcode),

            // JMP / Jccc
            0xc3 | 0xcb => self.exec_jmp(),
            0xc2 | 0xca | 0xd2 | 0xda | 0xe2 | 0xea | 0xf2 | 0xfa => self.exec_jump_cc(opcode),

            // CALL / Cccc
            0xcd | 0xdd | 0xed | 0xfd => self.exec_call(),
            0xc4 | 0xcc | 0xd4 | 0xdc | 0xe4 | 0xec | 0xf4 | 0xfc => self.exec_call_cc(opcode),

            // RET / Rccc
            0xc9 | 0xd9 => self.exec_ret(),
            0xc0 | 0xc8 | 0xd0 | 0xd8 | 0xe0 | 0xe8 | 0xf0 | 0xf8 => self.exec_ret_cc(opcode),

            // RST n
            0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => self.exec_rst(opcode),

            // PUSH rp / PUSH PSW, POP rp / POP PSW
            0xc5 | 0xd5 | 0xe5 | 0xf5 => self.exec_push(opcode),
            0xc1 | 0xd1 | 0xe1 | 0xf1 => self.exec_pop(opcode),

            0xe3 => self.exec_xthl(),
            0xe9 => self.exec_pchl(),
            0xeb => self.exec_xchg(),
            0xf9 => self.exec_sphl(),

            // OUT / IN
            0xd3 => self.exec_out(io),
            0xdb => self.exec_in(io),

            0xf3 => self.exec_di(),
            0xfb => self.exec_ei(),
        }
    }
}
