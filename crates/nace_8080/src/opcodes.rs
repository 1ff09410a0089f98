//! The 8080 opcode map.
//!
//! One entry per opcode byte with the mnemonic template, encoded length and
//! documented base cycle count. Conditional CALL and RET list their
//! not-taken cost. In the templates `nn` stands for an 8-bit immediate and
//! `nnnn` for a 16-bit one.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    /// Encoded length in bytes, opcode included.
    pub length: u8,
    pub cycles: u8,
    /// Jumps, calls, returns, RST and PCHL may leave `pc` anywhere.
    pub transfers_control: bool,
}

const fn op(mnemonic: &'static str, length: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        cycles,
        transfers_control: false,
    }
}

const fn branch(mnemonic: &'static str, length: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        cycles,
        transfers_control: true,
    }
}

pub static OPCODES: [OpcodeInfo; 256] = [
    op("NOP", 1, 4), // 0x00
    op("LXI B,#$nnnn", 3, 10), // 0x01
    op("STAX B", 1, 7), // 0x02
    op("INX B", 1, 5), // 0x03
    op("INR B", 1, 5), // 0x04
    op("DCR B", 1, 5), // 0x05
    op("MVI B,#$nn", 2, 7), // 0x06
    op("RLC", 1, 4), // 0x07
    op("NOP", 1, 4), // 0x08 undocumented
    op("DAD B", 1, 10), // 0x09
    op("LDAX B", 1, 7), // 0x0a
    op("DCX B", 1, 5), // 0x0b
    op("INR C", 1, 5), // 0x0c
    op("DCR C", 1, 5), // 0x0d
    op("MVI C,#$nn", 2, 7), // 0x0e
    op("RRC", 1, 4), // 0x0f
    op("NOP", 1, 4), // 0x10 undocumented
    op("LXI D,#$nnnn", 3, 10), // 0x11
    op("STAX D", 1, 7), // 0x12
    op("INX D", 1, 5), // 0x13
    op("INR D", 1, 5), // 0x14
    op("DCR D", 1, 5), // 0x15
    op("MVI D,#$nn", 2, 7), // 0x16
    op("RAL", 1, 4), // 0x17
    op("NOP", 1, 4), // 0x18 undocumented
    op("DAD D", 1, 10), // 0x19
    op("LDAX D", 1, 7), // 0x1a
    op("DCX D", 1, 5), // 0x1b
    op("INR E", 1, 5), // 0x1c
    op("DCR E", 1, 5), // 0x1d
    op("MVI E,#$nn", 2, 7), // 0x1e
    op("RAR", 1, 4), // 0x1f
    op("NOP", 1, 4), // 0x20 undocumented
    op("LXI H,#$nnnn", 3, 10), // 0x21
    op("SHLD $nnnn", 3, 16), // 0x22
    op("INX H", 1, 5), // 0x23
    op("INR H", 1, 5), // 0x24
    op("DCR H", 1, 5), // 0x25
    op("MVI H,#$nn", 2, 7), // 0x26
    op("DAA", 1, 4), // 0x27
    op("NOP", 1, 4), // 0x28 undocumented
    op("DAD H", 1, 10), // 0x29
    op("LHLD $nnnn", 3, 16), // 0x2a
    op("DCX H", 1, 5), // 0x2b
    op("INR L", 1, 5), // 0x2c
    op("DCR L", 1, 5), // 0x2d
    op("MVI L,#$nn", 2, 7), // 0x2e
    op("CMA", 1, 4), // 0x2f
    op("NOP", 1, 4), // 0x30 undocumented
    op("LXI SP,#$nnnn", 3, 10), // 0x31
    op("STA $nnnn", 3, 13), // 0x32
    op("INX SP", 1, 5), // 0x33
    op("INR M", 1, 10), // 0x34
    op("DCR M", 1, 10), // 0x35
    op("MVI M,#$nn", 2, 10), // 0x36
    op("STC", 1, 4), // 0x37
    op("NOP", 1, 4), // 0x38 undocumented
    op("DAD SP", 1, 10), // 0x39
    op("LDA $nnnn", 3, 13), // 0x3a
    op("DCX SP", 1, 5), // 0x3b
    op("INR A", 1, 5), // 0x3c
    op("DCR A", 1, 5), // 0x3d
    op("MVI A,#$nn", 2, 7), // 0x3e
    op("CMC", 1, 4), // 0x3f
    op("MOV B,B", 1, 5), // 0x40
    op("MOV B,C", 1, 5), // 0x41
    op("MOV B,D", 1, 5), // 0x42
    op("MOV B,E", 1, 5), // 0x43
    op("MOV B,H", 1, 5), // 0x44
    op("MOV B,L", 1, 5), // 0x45
    op("MOV B,M", 1, 7), // 0x46
    op("MOV B,A", 1, 5), // 0x47
    op("MOV C,B", 1, 5), // 0x48
    op("MOV C,C", 1, 5), // 0x49
    op("MOV C,D", 1, 5), // 0x4a
    op("MOV C,E", 1, 5), // 0x4b
    op("MOV C,H", 1, 5), // 0x4c
    op("MOV C,L", 1, 5), // 0x4d
    op("MOV C,M", 1, 7), // 0x4e
    op("MOV C,A", 1, 5), // 0x4f
    op("MOV D,B", 1, 5), // 0x50
    op("MOV D,C", 1, 5), // 0x51
    op("MOV D,D", 1, 5), // 0x52
    op("MOV D,E", 1, 5), // 0x53
    op("MOV D,H", 1, 5), // 0x54
    op("MOV D,L", 1, 5), // 0x55
    op("MOV D,M", 1, 7), // 0x56
    op("MOV D,A", 1, 5), // 0x57
    op("MOV E,B", 1, 5), // 0x58
    op("MOV E,C", 1, 5), // 0x59
    op("MOV E,D", 1, 5), // 0x5a
    op("MOV E,E", 1, 5), // 0x5b
    op("MOV E,H", 1, 5), // 0x5c
    op("MOV E,L", 1, 5), // 0x5d
    op("MOV E,M", 1, 7), // 0x5e
    op("MOV E,A", 1, 5), // 0x5f
    op("MOV H,B", 1, 5), // 0x60
    op("MOV H,C", 1, 5), // 0x61
    op("MOV H,D", 1, 5), // 0x62
    op("MOV H,E", 1, 5), // 0x63
    op("MOV H,H", 1, 5), // 0x64
    op("MOV H,L", 1, 5), // 0x65
    op("MOV H,M", 1, 7), // 0x66
    op("MOV H,A", 1, 5), // 0x67
    op("MOV L,B", 1, 5), // 0x68
    op("MOV L,C", 1, 5), // 0x69
    op("MOV L,D", 1, 5), // 0x6a
    op("MOV L,E", 1, 5), // 0x6b
    op("MOV L,H", 1, 5), // 0x6c
    op("MOV L,L", 1, 5), // 0x6d
    op("MOV L,M", 1, 7), // 0x6e
    op("MOV L,A", 1, 5), // 0x6f
    op("MOV M,B", 1, 7), // 0x70
    op("MOV M,C", 1, 7), // 0x71
    op("MOV M,D", 1, 7), // 0x72
    op("MOV M,E", 1, 7), // 0x73
    op("MOV M,H", 1, 7), // 0x74
    op("MOV M,L", 1, 7), // 0x75
    op("HLT", 1, 7), // 0x76
    op("MOV M,A", 1, 7), // 0x77
    op("MOV A,B", 1, 5), // 0x78
    op("MOV A,C", 1, 5), // 0x79
    op("MOV A,D", 1, 5), // 0x7a
    op("MOV A,E", 1, 5), // 0x7b
    op("MOV A,H", 1, 5), // 0x7c
    op("MOV A,L", 1, 5), // 0x7d
    op("MOV A,M", 1, 7), // 0x7e
    op("MOV A,A", 1, 5), // 0x7f
    op("ADD B", 1, 4), // 0x80
    op("ADD C", 1, 4), // 0x81
    op("ADD D", 1, 4), // 0x82
    op("ADD E", 1, 4), // 0x83
    op("ADD H", 1, 4), // 0x84
    op("ADD L", 1, 4), // 0x85
    op("ADD M", 1, 7), // 0x86
    op("ADD A", 1, 4), // 0x87
    op("ADC B", 1, 4), // 0x88
    op("ADC C", 1, 4), // 0x89
    op("ADC D", 1, 4), // 0x8a
    op("ADC E", 1, 4), // 0x8b
    op("ADC H", 1, 4), // 0x8c
    op("ADC L", 1, 4), // 0x8d
    op("ADC M", 1, 7), // 0x8e
    op("ADC A", 1, 4), // 0x8f
    op("SUB B", 1, 4), // 0x90
    op("SUB C", 1, 4), // 0x91
    op("SUB D", 1, 4), // 0x92
    op("SUB E", 1, 4), // 0x93
    op("SUB H", 1, 4), // 0x94
    op("SUB L", 1, 4), // 0x95
    op("SUB M", 1, 7), // 0x96
    op("SUB A", 1, 4), // 0x97
    op("SBB B", 1, 4), // 0x98
    op("SBB C", 1, 4), // 0x99
    op("SBB D", 1, 4), // 0x9a
    op("SBB E", 1, 4), // 0x9b
    op("SBB H", 1, 4), // 0x9c
    op("SBB L", 1, 4), // 0x9d
    op("SBB M", 1, 7), // 0x9e
    op("SBB A", 1, 4), // 0x9f
    op("ANA B", 1, 4), // 0xa0
    op("ANA C", 1, 4), // 0xa1
    op("ANA D", 1, 4), // 0xa2
    op("ANA E", 1, 4), // 0xa3
    op("ANA H", 1, 4), // 0xa4
    op("ANA L", 1, 4), // 0xa5
    op("ANA M", 1, 7), // 0xa6
    op("ANA A", 1, 4), // 0xa7
    op("XRA B", 1, 4), // 0xa8
    op("XRA C", 1, 4), // 0xa9
    op("XRA D", 1, 4), // 0xaa
    op("XRA E", 1, 4), // 0xab
    op("XRA H", 1, 4), // 0xac
    op("XRA L", 1, 4), // 0xad
    op("XRA M", 1, 7), // 0xae
    op("XRA A", 1, 4), // 0xaf
    op("ORA B", 1, 4), // 0xb0
    op("ORA C", 1, 4), // 0xb1
    op("ORA D", 1, 4), // 0xb2
    op("ORA E", 1, 4), // 0xb3
    op("ORA H", 1, 4), // 0xb4
    op("ORA L", 1, 4), // 0xb5
    op("ORA M", 1, 7), // 0xb6
    op("ORA A", 1, 4), // 0xb7
    op("CMP B", 1, 4), // 0xb8
    op("CMP C", 1, 4), // 0xb9
    op("CMP D", 1, 4), // 0xba
    op("CMP E", 1, 4), // 0xbb
    op("CMP H", 1, 4), // 0xbc
    op("CMP L", 1, 4), // 0xbd
    op("CMP M", 1, 7), // 0xbe
    op("CMP A", 1, 4), // 0xbf
    branch("RNZ", 1, 5), // 0xc0
    op("POP B", 1, 10), // 0xc1
    branch("JNZ $nnnn", 3, 10), // 0xc2
    branch("JMP $nnnn", 3, 10), // 0xc3
    branch("CNZ $nnnn", 3, 11), // 0xc4
    op("PUSH B", 1, 11), // 0xc5
    op("ADI #$nn", 2, 7), // 0xc6
    branch("RST 0", 1, 11), // 0xc7
    branch("RZ", 1, 5), // 0xc8
    branch("RET", 1, 10), // 0xc9
    branch("JZ $nnnn", 3, 10), // 0xca
    branch("JMP $nnnn", 3, 10), // 0xcb undocumented
    branch("CZ $nnnn", 3, 11), // 0xcc
    branch("CALL $nnnn", 3, 17), // 0xcd
    op("ACI #$nn", 2, 7), // 0xce
    branch("RST 1", 1, 11), // 0xcf
    branch("RNC", 1, 5), // 0xd0
    op("POP D", 1, 10), // 0xd1
    branch("JNC $nnnn", 3, 10), // 0xd2
    op("OUT #$nn", 2, 10), // 0xd3
    branch("CNC $nnnn", 3, 11), // 0xd4
    op("PUSH D", 1, 11), // 0xd5
    op("SUI #$nn", 2, 7), // 0xd6
    branch("RST 2", 1, 11), // 0xd7
    branch("RC", 1, 5), // 0xd8
    branch("RET", 1, 10), // 0xd9 undocumented
    branch("JC $nnnn", 3, 10), // 0xda
    op("IN #$nn", 2, 10), // 0xdb
    branch("CC $nnnn", 3, 11), // 0xdc
    branch("CALL $nnnn", 3, 17), // 0xdd undocumented
    op("SBI #$nn", 2, 7), // 0xde
    branch("RST 3", 1, 11), // 0xdf
    branch("RPO", 1, 5), // 0xe0
    op("POP H", 1, 10), // 0xe1
    branch("JPO $nnnn", 3, 10), // 0xe2
    op("XTHL", 1, 18), // 0xe3
    branch("CPO $nnnn", 3, 11), // 0xe4
    op("PUSH H", 1, 11), // 0xe5
    op("ANI #$nn", 2, 7), // 0xe6
    branch("RST 4", 1, 11), // 0xe7
    branch("RPE", 1, 5), // 0xe8
    branch("PCHL", 1, 5), // 0xe9
    branch("JPE $nnnn", 3, 10), // 0xea
    op("XCHG", 1, 4), // 0xeb
    branch("CPE $nnnn", 3, 11), // 0xec
    branch("CALL $nnnn", 3, 17), // 0xed undocumented
    op("XRI #$nn", 2, 7), // 0xee
    branch("RST 5", 1, 11), // 0xef
    branch("RP", 1, 5), // 0xf0
    op("POP PSW", 1, 10), // 0xf1
    branch("JP $nnnn", 3, 10), // 0xf2
    op("DI", 1, 4), // 0xf3
    branch("CP $nnnn", 3, 11), // 0xf4
    op("PUSH PSW", 1, 11), // 0xf5
    op("ORI #$nn", 2, 7), // 0xf6
    branch("RST 6", 1, 11), // 0xf7
    branch("RM", 1, 5), // 0xf8
    op("SPHL", 1, 5), // 0xf9
    branch("JM $nnnn", 3, 10), // 0xfa
    op("EI", 1, 4), // 0xfb
    branch("CM $nnnn", 3, 11), // 0xfc
    branch("CALL $nnnn", 3, 17), // 0xfd undocumented
    op("CPI #$nn", 2, 7), // 0xfe
    branch("RST 7", 1, 11), // 0xff
];

/// Look up the table entry for `opcode`.
#[inline]
pub fn info(opcode: u8) -> &'static OpcodeInfo {
    &OPCODES[opcode as usize]
}
