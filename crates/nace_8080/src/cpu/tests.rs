use super::*;
use crate::opcodes::OPCODES;

/// Records port traffic and answers every IN with a fixed value.
#[derive(Default)]
struct RecordingPorts {
    outs: Vec<(u8, u8)>,
    ins: Vec<u8>,
    input: u8,
}

impl PortIo for RecordingPorts {
    fn handle_port_in(&mut self, port: u8) -> u8 {
        self.ins.push(port);
        self.input
    }

    fn handle_port_out(&mut self, port: u8, value: u8) {
        self.outs.push((port, value));
    }
}

fn cpu_with(program: &[u8]) -> Cpu8080 {
    let mut cpu = Cpu8080::new();
    cpu.memory.load_image(0, program).unwrap();
    cpu
}

/// Execute `count` instructions and return the cycles they took.
fn run(cpu: &mut Cpu8080, count: usize) -> u32 {
    let mut io = NullPorts;
    (0..count).map(|_| cpu.step(&mut io)).sum()
}

#[test]
fn power_on_state() {
    let cpu = Cpu8080::new();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.sp, 0xf000);
    assert_eq!(cpu.flags, Flags::default());
    assert!(!cpu.interrupts_enabled);
    assert!(!cpu.is_halted());

    let cpu = Cpu8080::with_config(CpuConfig {
        stack_top: 0x2400,
        ..CpuConfig::default()
    });
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn reset_keeps_memory() {
    let mut cpu = cpu_with(&[0x3e, 0x42, 0x76]);
    run(&mut cpu, 2);
    assert!(cpu.is_halted());

    cpu.reset();
    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.pc, 0);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.memory.read(1), 0x42);
}

#[test]
fn mov_between_registers_and_memory() {
    // LXI H,$2400 ; MVI M,#$42 ; MOV B,M ; MOV C,B
    let mut cpu = cpu_with(&[0x21, 0x00, 0x24, 0x36, 0x42, 0x46, 0x48]);
    let cycles = run(&mut cpu, 4);
    assert_eq!(cycles, 10 + 10 + 7 + 5);
    assert_eq!(cpu.memory.read(0x2400), 0x42);
    assert_eq!(cpu.b, 0x42);
    assert_eq!(cpu.c, 0x42);
    assert_eq!(cpu.pc, 7);
}

#[test]
fn add_register_sets_all_flags() {
    // MVI A,#$6c ; MVI B,#$2e ; ADD B
    let mut cpu = cpu_with(&[0x3e, 0x6c, 0x06, 0x2e, 0x80]);
    let cycles = run(&mut cpu, 3);
    assert_eq!(cycles, 18);
    assert_eq!(cpu.a, 0x9a);
    assert!(cpu.flags.s);
    assert!(!cpu.flags.z);
    assert!(cpu.flags.p);
    assert!(!cpu.flags.cy);
    assert!(cpu.flags.ac);
}

#[test]
fn adi_adds_the_immediate() {
    // MVI A,#$10 ; ADI #$05
    let mut cpu = cpu_with(&[0x3e, 0x10, 0xc6, 0x05]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x15);
    assert!(!cpu.flags.cy);

    // MVI A,#$ff ; ADI #$01
    let mut cpu = cpu_with(&[0x3e, 0xff, 0xc6, 0x01]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.z && cpu.flags.cy && cpu.flags.ac && cpu.flags.p);
}

#[test]
fn sbi_subtracts_the_borrow() {
    // STC ; MVI A,#$10 ; SBI #$01
    let mut cpu = cpu_with(&[0x37, 0x3e, 0x10, 0xde, 0x01]);
    run(&mut cpu, 3);
    assert_eq!(cpu.a, 0x0e);
    assert!(!cpu.flags.cy);
    assert!(!cpu.flags.ac);
    assert!(!cpu.flags.z);
}

#[test]
fn cmp_sets_carry_on_unsigned_borrow() {
    // MVI A,#$05 ; CPI #$0a
    let mut cpu = cpu_with(&[0x3e, 0x05, 0xfe, 0x0a]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x05);
    assert!(cpu.flags.cy);
    assert!(!cpu.flags.z);

    // MVI A,#$0a ; CPI #$0a
    let mut cpu = cpu_with(&[0x3e, 0x0a, 0xfe, 0x0a]);
    run(&mut cpu, 2);
    assert!(cpu.flags.z);
    assert!(!cpu.flags.cy);
}

#[test]
fn sign_adjusted_compare_inverts_carry_across_signs() {
    let program = [0x3e, 0x05, 0xfe, 0x85];
    let config = CpuConfig {
        compare_carry: CompareCarry::SignAdjusted,
        ..CpuConfig::default()
    };

    let mut cpu = cpu_with(&program);
    run(&mut cpu, 2);
    assert!(cpu.flags.cy);

    let mut cpu = Cpu8080::with_config(config);
    cpu.memory.load_image(0, &program).unwrap();
    run(&mut cpu, 2);
    assert!(!cpu.flags.cy);

    // Same signs: both modes agree.
    let mut cpu = Cpu8080::with_config(config);
    cpu.memory.load_image(0, &[0x3e, 0x05, 0xfe, 0x0a]).unwrap();
    run(&mut cpu, 2);
    assert!(cpu.flags.cy);
}

#[test]
fn logic_ops_set_half_carry_and_clear_carry() {
    // STC ; MVI A,#$fc ; ANI #$0f
    let mut cpu = cpu_with(&[0x37, 0x3e, 0xfc, 0xe6, 0x0f, 0xf6, 0x30, 0xee, 0x3c]);
    run(&mut cpu, 3);
    assert_eq!(cpu.a, 0x0c);
    assert!(cpu.flags.ac);
    assert!(!cpu.flags.cy);

    // ORI #$30
    run(&mut cpu, 1);
    assert_eq!(cpu.a, 0x3c);
    assert!(!cpu.flags.ac);

    // XRI #$3c
    run(&mut cpu, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.z && cpu.flags.p);
}

#[test]
fn inr_and_dcr_preserve_carry() {
    // STC ; MVI B,#$ff ; INR B ; DCR C
    let mut cpu = cpu_with(&[0x37, 0x06, 0xff, 0x04, 0x0d]);
    run(&mut cpu, 3);
    assert_eq!(cpu.b, 0x00);
    assert!(cpu.flags.z);
    assert!(cpu.flags.ac);
    assert!(cpu.flags.cy);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 5);
    assert_eq!(cpu.c, 0xff);
    assert!(cpu.flags.s);
    assert!(!cpu.flags.z);
    assert!(!cpu.flags.ac);
    assert!(cpu.flags.cy);
}

#[test]
fn inr_m_costs_memory_cycles() {
    // LXI H,$3000 ; INR M
    let mut cpu = cpu_with(&[0x21, 0x00, 0x30, 0x34]);
    cpu.memory.write(0x3000, 0x7f);
    let cycles = run(&mut cpu, 2);
    assert_eq!(cycles, 20);
    assert_eq!(cpu.memory.read(0x3000), 0x80);
    assert!(cpu.flags.s);
}

#[test]
fn dad_only_touches_carry() {
    // LXI H,$ffff ; LXI B,$0002 ; XRA A ; DAD B
    let mut cpu = cpu_with(&[0x21, 0xff, 0xff, 0x01, 0x02, 0x00, 0xaf, 0x09]);
    let cycles = run(&mut cpu, 4);
    assert_eq!(cycles, 10 + 10 + 4 + 10);
    assert_eq!(cpu.hl(), 0x0001);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.z);
}

#[test]
fn inx_and_dcx_wrap_without_flags() {
    // LXI D,$ffff ; INX D ; DCX D ; DCX D
    let mut cpu = cpu_with(&[0x11, 0xff, 0xff, 0x13, 0x1b, 0x1b]);
    run(&mut cpu, 2);
    assert_eq!(cpu.read_pair(RegPair::DE), 0x0000);
    assert_eq!(cpu.flags, Flags::default());
    run(&mut cpu, 2);
    assert_eq!(cpu.read_pair(RegPair::DE), 0xfffe);
}

#[test]
fn decimal_adjust_after_bcd_add() {
    // MVI A,#$19 ; ADI #$28 ; DAA
    let mut cpu = cpu_with(&[0x3e, 0x19, 0xc6, 0x28, 0x27]);
    run(&mut cpu, 3);
    assert_eq!(cpu.a, 0x47);
    assert!(!cpu.flags.cy);

    // MVI A,#$9b ; DAA
    let mut cpu = cpu_with(&[0x3e, 0x9b, 0x27]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x01);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.ac);
}

#[test]
fn rotates_move_bits_through_carry() {
    // MVI A,#$81 ; RLC ; RRC ; RAL ; RAR
    let mut cpu = cpu_with(&[0x3e, 0x81, 0x07, 0x0f, 0x17, 0x1f]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x03);
    assert!(cpu.flags.cy);
    run(&mut cpu, 1);
    assert_eq!(cpu.a, 0x81);
    assert!(cpu.flags.cy);
    run(&mut cpu, 1);
    assert_eq!(cpu.a, 0x03);
    assert!(cpu.flags.cy);
    run(&mut cpu, 1);
    assert_eq!(cpu.a, 0x81);
    assert!(cpu.flags.cy);
}

#[test]
fn cma_stc_cmc() {
    // MVI A,#$55 ; CMA ; STC ; CMC
    let mut cpu = cpu_with(&[0x3e, 0x55, 0x2f, 0x37, 0x3f]);
    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0xaa);
    assert_eq!(cpu.flags, Flags::default());
    run(&mut cpu, 1);
    assert!(cpu.flags.cy);
    run(&mut cpu, 1);
    assert!(!cpu.flags.cy);
}

#[test]
fn direct_and_indirect_loads_and_stores() {
    let mut cpu = cpu_with(&[
        0x21, 0x34, 0x12, // LXI H,$1234
        0x22, 0x00, 0x30, // SHLD $3000
        0x21, 0x00, 0x00, // LXI H,$0000
        0x2a, 0x00, 0x30, // LHLD $3000
        0x3a, 0x01, 0x30, // LDA $3001
        0x32, 0x10, 0x30, // STA $3010
        0x01, 0x20, 0x30, // LXI B,$3020
        0x02, // STAX B
        0x11, 0x00, 0x30, // LXI D,$3000
        0x1a, // LDAX D
    ]);

    let cycles = run(&mut cpu, 2);
    assert_eq!(cycles, 26);
    assert_eq!(cpu.memory.read(0x3000), 0x34);
    assert_eq!(cpu.memory.read(0x3001), 0x12);

    run(&mut cpu, 2);
    assert_eq!(cpu.hl(), 0x1234);

    let cycles = run(&mut cpu, 2);
    assert_eq!(cycles, 26);
    assert_eq!(cpu.a, 0x12);
    assert_eq!(cpu.memory.read(0x3010), 0x12);

    run(&mut cpu, 2);
    assert_eq!(cpu.memory.read(0x3020), 0x12);

    run(&mut cpu, 2);
    assert_eq!(cpu.a, 0x34);
}

#[test]
fn exchanges_through_hl() {
    let mut cpu = cpu_with(&[
        0x21, 0x34, 0x12, // LXI H,$1234
        0x11, 0xcd, 0xab, // LXI D,$abcd
        0xeb, // XCHG
        0x31, 0x00, 0x20, // LXI SP,$2000
        0xe3, // XTHL
        0xf9, // SPHL
        0xe9, // PCHL
    ]);
    cpu.memory.write_word(0x2000, 0x5678);

    run(&mut cpu, 3);
    assert_eq!(cpu.hl(), 0xabcd);
    assert_eq!(cpu.read_pair(RegPair::DE), 0x1234);

    let cycles = run(&mut cpu, 2);
    assert_eq!(cycles, 10 + 18);
    assert_eq!(cpu.hl(), 0x5678);
    assert_eq!(cpu.memory.read_word(0x2000), 0xabcd);
    assert_eq!(cpu.sp, 0x2000);

    run(&mut cpu, 1);
    assert_eq!(cpu.sp, 0x5678);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 5);
    assert_eq!(cpu.pc, 0x5678);
}

#[test]
fn push_and_pop_round_trip() {
    // LXI B,$1234 ; PUSH B ; POP D
    let mut cpu = cpu_with(&[0x01, 0x34, 0x12, 0xc5, 0xd1]);
    run(&mut cpu, 2);
    assert_eq!(cpu.sp, 0xeffe);
    assert_eq!(cpu.memory.read(0xefff), 0x12);
    assert_eq!(cpu.memory.read(0xeffe), 0x34);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 10);
    assert_eq!(cpu.read_pair(RegPair::DE), 0x1234);
    assert_eq!(cpu.sp, 0xf000);
}

#[test]
fn push_psw_packs_accumulator_and_flags() {
    // SUB A ; PUSH PSW
    let mut cpu = cpu_with(&[0x97, 0xf5]);
    run(&mut cpu, 2);
    assert_eq!(cpu.memory.read(0xefff), 0x00);
    assert_eq!(cpu.memory.read(0xeffe), 0x56);
}

#[test]
fn pop_psw_ignores_the_fixed_bits() {
    // LXI B,$3cff ; PUSH B ; POP PSW ; PUSH PSW ; POP D
    let mut cpu = cpu_with(&[0x01, 0xff, 0x3c, 0xc5, 0xf1, 0xf5, 0xd1]);
    run(&mut cpu, 3);
    assert_eq!(cpu.a, 0x3c);
    assert!(cpu.flags.s && cpu.flags.z && cpu.flags.ac && cpu.flags.p && cpu.flags.cy);

    run(&mut cpu, 2);
    assert_eq!(cpu.d, 0x3c);
    assert_eq!(cpu.e, 0xd7);
}

#[test]
fn push_then_pop_psw_restores_every_flag_combination() {
    // PUSH PSW ; MVI A,#$00 ; XRA A ; POP PSW
    let program = [0xf5, 0x3e, 0x00, 0xaf, 0xf1];
    for bits in 0u8..32 {
        let flags = Flags {
            z: bits & 0x01 != 0,
            s: bits & 0x02 != 0,
            p: bits & 0x04 != 0,
            cy: bits & 0x08 != 0,
            ac: bits & 0x10 != 0,
        };
        let mut cpu = cpu_with(&program);
        cpu.a = 0xa5;
        cpu.flags = flags;

        run(&mut cpu, 3);
        assert_eq!(cpu.a, 0x00);

        run(&mut cpu, 1);
        assert_eq!(cpu.flags, flags, "flags {bits:#04x}");
        assert_eq!(cpu.a, 0xa5);
        assert_eq!(cpu.sp, 0xf000);
    }
}

#[test]
fn call_and_return() {
    // CALL $0010 ; HLT ... $0010: RET
    let mut cpu = cpu_with(&[0xcd, 0x10, 0x00, 0x76]);
    cpu.memory.write(0x0010, 0xc9);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 17);
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(cpu.sp, 0xeffe);
    assert_eq!(cpu.memory.read_word(0xeffe), 0x0003);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 10);
    assert_eq!(cpu.pc, 0x0003);
    assert_eq!(cpu.sp, 0xf000);
}

#[test]
fn conditional_call_only_pushes_when_taken() {
    // XRA A ; CNZ $0010 ; CZ $0010
    let mut cpu = cpu_with(&[0xaf, 0xc4, 0x10, 0x00, 0xcc, 0x10, 0x00]);
    run(&mut cpu, 1);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 0x0004);
    assert_eq!(cpu.sp, 0xf000);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 17);
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(cpu.memory.read_word(cpu.sp), 0x0007);
}

#[test]
fn conditional_return() {
    // STC ; RNC ; RC
    let mut cpu = cpu_with(&[0x37, 0xd0, 0xd8]);
    cpu.sp = 0x2000;
    cpu.memory.write_word(0x2000, 0x1234);
    run(&mut cpu, 1);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 5);
    assert_eq!(cpu.pc, 0x0002);
    assert_eq!(cpu.sp, 0x2000);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0x2002);
}

#[test]
fn conditional_jumps() {
    // ORI #$80 ; JP $1000 ; JM $2000
    let mut cpu = cpu_with(&[0xf6, 0x80, 0xf2, 0x00, 0x10, 0xfa, 0x00, 0x20]);
    run(&mut cpu, 1);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 10);
    assert_eq!(cpu.pc, 0x0005);

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 10);
    assert_eq!(cpu.pc, 0x2000);
}

#[test]
fn rst_calls_fixed_vector() {
    let mut cpu = Cpu8080::new();
    cpu.memory.write(0x0100, 0xff);
    cpu.pc = 0x0100;

    let cycles = run(&mut cpu, 1);
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 0x0038);
    assert_eq!(cpu.memory.read_word(cpu.sp), 0x0101);
}

#[test]
fn undocumented_opcodes_behave_like_their_twins() {
    // NOP (0x08) ; JMP (0xcb) $0010
    let mut cpu = cpu_with(&[0x08, 0xcb, 0x10, 0x00]);
    // $0010: CALL (0xdd) $0020 ; $0020: RET (0xd9)
    cpu.memory.load_image(0x0010, &[0xdd, 0x20, 0x00]).unwrap();
    cpu.memory.write(0x0020, 0xd9);

    assert_eq!(run(&mut cpu, 1), 4);
    assert_eq!(cpu.pc, 0x0001);
    run(&mut cpu, 1);
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(run(&mut cpu, 1), 17);
    assert_eq!(cpu.pc, 0x0020);
    run(&mut cpu, 1);
    assert_eq!(cpu.pc, 0x0013);
}

#[test]
fn straight_line_opcodes_charge_their_table_cost() {
    for (opcode, info) in OPCODES.iter().enumerate() {
        if info.transfers_control {
            continue;
        }
        let mut cpu = cpu_with(&[opcode as u8]);
        let cycles = run(&mut cpu, 1);
        assert_eq!(cycles, info.cycles as u32, "opcode 0x{opcode:02x}");
        assert_eq!(cpu.pc, info.length as u16, "opcode 0x{opcode:02x}");
    }
}

#[test]
fn in_and_out_go_through_port_io() {
    // MVI A,#$99 ; OUT #$03 ; IN #$01
    let mut cpu = cpu_with(&[0x3e, 0x99, 0xd3, 0x03, 0xdb, 0x01]);
    let mut io = RecordingPorts {
        input: 0x5a,
        ..Default::default()
    };

    cpu.step(&mut io);
    assert_eq!(cpu.step(&mut io), 10);
    assert_eq!(io.outs, vec![(0x03, 0x99)]);
    assert_eq!(cpu.step(&mut io), 10);
    assert_eq!(io.ins, vec![0x01]);
    assert_eq!(cpu.a, 0x5a);
    assert_eq!(cpu.pc, 6);
}

#[test]
fn service_port_io_only_handles_in_and_out() {
    // NOP ; OUT #$02
    let mut cpu = cpu_with(&[0x00, 0xd3, 0x02]);
    cpu.a = 0x07;
    let mut io = RecordingPorts::default();

    assert!(!cpu.service_port_io(&mut io));
    assert_eq!(cpu.pc, 0);

    cpu.step(&mut io);
    assert!(cpu.service_port_io(&mut io));
    assert_eq!(io.outs, vec![(0x02, 0x07)]);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn hlt_stops_the_cpu_for_good() {
    let mut cpu = cpu_with(&[0xfb, 0x76]);
    assert_eq!(run(&mut cpu, 2), 11);
    assert!(cpu.is_halted());
    assert_eq!(cpu.pc, 2);

    assert_eq!(run(&mut cpu, 3), 0);
    assert_eq!(cpu.pc, 2);

    assert!(!cpu.interrupt(1));
    assert_eq!(cpu.pc, 2);
}

#[test]
fn interrupt_requires_enable_and_clears_it() {
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x1234;

    assert!(!cpu.interrupt(2));
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0xf000);

    cpu.interrupts_enabled = true;
    assert!(cpu.interrupt(2));
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(cpu.memory.read_word(cpu.sp), 0x1234);
    assert!(!cpu.interrupts_enabled);

    assert!(!cpu.interrupt(1));
}

#[test]
fn ei_and_di_toggle_the_latch() {
    let mut cpu = cpu_with(&[0xfb, 0xf3]);
    run(&mut cpu, 1);
    assert!(cpu.interrupts_enabled);
    run(&mut cpu, 1);
    assert!(!cpu.interrupts_enabled);
}

#[test]
#[should_panic(expected = "undecodable 8080 opcode 0x42 at 0x1234")]
fn fatal_decode_reports_opcode_and_address() {
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x1235;
    cpu.fatal_decode(0x42);
}

// CP/M diagnostic programs. They need the .COM images under
// assets/roms/8080_tests and run for a long time, so they are ignored by
// default: `cargo test -p nace_8080 -- --ignored cpm_`.

const BDOS: u16 = 0x0005;

fn load_com(name: &str) -> Cpu8080 {
    use std::path::PathBuf;

    let candidates = [
        PathBuf::from("assets/roms/8080_tests").join(name),
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../assets/roms/8080_tests")
            .join(name),
    ];
    let data = candidates
        .iter()
        .find_map(|path| std::fs::read(path).ok())
        .unwrap_or_else(|| panic!("{name} not found. Tried: {candidates:?}"));

    let mut cpu = Cpu8080::new();
    cpu.memory.load_image(0x0100, &data).unwrap();
    // Warm boot at 0 ends the run; BDOS calls return immediately.
    cpu.memory.write(BDOS, 0xc9);
    cpu.pc = 0x0100;
    cpu
}

/// BDOS console output: function 2 prints E, function 9 prints the
/// `$`-terminated string at DE.
fn bdos_call(cpu: &Cpu8080, console: &mut String) {
    match cpu.c {
        2 => console.push(cpu.e as char),
        9 => {
            let mut addr = cpu.read_pair(RegPair::DE);
            loop {
                let byte = cpu.memory.read(addr);
                if byte == b'$' {
                    break;
                }
                console.push(byte as char);
                addr = addr.wrapping_add(1);
            }
        }
        _ => {}
    }
}

fn run_com(name: &str) -> (String, u64) {
    let mut cpu = load_com(name);
    let mut io = NullPorts;
    let mut console = String::new();
    let mut cycles: u64 = 0;

    loop {
        if cpu.pc == BDOS {
            bdos_call(&cpu, &mut console);
        }
        cycles += cpu.step(&mut io) as u64;
        if cpu.pc == 0 || cpu.is_halted() {
            break;
        }
    }
    (console, cycles)
}

fn assert_passed(name: &str, console: &str) {
    assert!(
        !console.contains("ERROR") && !console.contains("FAIL"),
        "{name} reported a failure:\n{console}"
    );
}

#[test]
#[ignore]
fn cpm_tst8080() {
    let (console, _) = run_com("TST8080.COM");
    assert_passed("TST8080.COM", &console);
    assert!(console.contains("CPU IS OPERATIONAL"), "{console}");
}

#[test]
#[ignore]
fn cpm_8080pre() {
    let (console, _) = run_com("8080PRE.COM");
    assert_passed("8080PRE.COM", &console);
}

#[test]
#[ignore]
fn cpm_cputest() {
    let (console, _) = run_com("CPUTEST.COM");
    assert_passed("CPUTEST.COM", &console);
}

#[test]
#[ignore]
fn cpm_8080exm() {
    let (console, _) = run_com("8080EXM.COM");
    assert_passed("8080EXM.COM", &console);
}
