//! Arithmetic and flag computation.
//!
//! Every function here is pure over its operands and the flag set it is
//! handed; the interpreter decides where operands come from and where results
//! go. Flags an instruction does not define are left untouched.

use super::{CompareCarry, Flags};

/// Even parity: true when `value` has an even number of set bits.
#[inline]
pub fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

/// Set Z, S and P from the low byte of `result` and CY from bit 8.
#[inline]
pub fn apply_arithmetic_flags(flags: &mut Flags, result: u16) {
    flags.cy = result & 0x100 != 0;
    apply_flags_except_carry(flags, result);
}

/// Set Z, S and P from the low byte of `result`. CY is not touched.
#[inline]
pub fn apply_flags_except_carry(flags: &mut Flags, result: u16) {
    let value = result as u8;
    flags.z = value == 0;
    flags.s = value & 0x80 != 0;
    flags.p = parity(value);
}

/// ADD/ADC: `a + value + carry_in`.
pub fn add(flags: &mut Flags, a: u8, value: u8, carry_in: bool) -> u8 {
    let carry = carry_in as u16;
    let wide = a as u16 + value as u16 + carry;
    flags.ac = (a & 0x0f) as u16 + (value & 0x0f) as u16 + carry > 0x0f;
    apply_arithmetic_flags(flags, wide);
    wide as u8
}

/// SUB/SBB: `a - value - borrow_in`.
///
/// The 8080 subtracts by adding the one's complement of the subtrahend with
/// an inverted carry-in, so AC is the carry out of bit 3 of that addition and
/// is set when the low nibble did *not* borrow.
pub fn sub(flags: &mut Flags, a: u8, value: u8, borrow_in: bool) -> u8 {
    let borrow = borrow_in as u16;
    let wide = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow);
    flags.ac = (a & 0x0f) as u16 + (!value & 0x0f) as u16 + (1 - borrow) > 0x0f;
    apply_arithmetic_flags(flags, wide);
    wide as u8
}

/// CMP/CPI: flags of `a - value`, result discarded.
pub fn compare(flags: &mut Flags, a: u8, value: u8, mode: CompareCarry) {
    sub(flags, a, value, false);
    if mode == CompareCarry::SignAdjusted && (a ^ value) & 0x80 != 0 {
        flags.cy = !flags.cy;
    }
}

/// ANA/ANI. AC takes the OR of bit 3 of both operands.
pub fn and(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a & value;
    flags.ac = (a | value) & 0x08 != 0;
    apply_arithmetic_flags(flags, result as u16);
    result
}

/// XRA/XRI. Clears CY and AC.
pub fn xor(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a ^ value;
    flags.ac = false;
    apply_arithmetic_flags(flags, result as u16);
    result
}

/// ORA/ORI. Clears CY and AC.
pub fn or(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a | value;
    flags.ac = false;
    apply_arithmetic_flags(flags, result as u16);
    result
}

/// INR: Z, S, P, AC. Carry is not affected.
pub fn increment(flags: &mut Flags, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    flags.ac = value & 0x0f == 0x0f;
    apply_flags_except_carry(flags, result as u16);
    result
}

/// DCR: Z, S, P, AC. Carry is not affected.
pub fn decrement(flags: &mut Flags, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    // Computed as value + 0xff: the low nibble carries unless it was zero.
    flags.ac = value & 0x0f != 0;
    apply_flags_except_carry(flags, result as u16);
    result
}

/// DAD: `hl + value`, only CY is affected.
pub fn add_word(flags: &mut Flags, hl: u16, value: u16) -> u16 {
    let wide = hl as u32 + value as u32;
    flags.cy = wide > 0xffff;
    wide as u16
}

/// DAA: two-stage BCD correction of the accumulator.
///
/// The low nibble is corrected first; the high nibble check then sees the
/// already-corrected value, including any carry the first stage produced.
pub fn decimal_adjust(flags: &mut Flags, a: u8) -> u8 {
    let mut value = a as u16;
    let mut carry = flags.cy;

    if value & 0x0f > 0x09 || flags.ac {
        flags.ac = (value & 0x0f) + 0x06 > 0x0f;
        value += 0x06;
        carry |= value > 0xff;
    } else {
        flags.ac = false;
    }

    if (value & 0xf0) >> 4 > 0x09 || carry {
        value += 0x60;
        carry = true;
    }

    let result = value as u8;
    flags.cy = carry;
    apply_flags_except_carry(flags, result as u16);
    result
}

/// RLC: rotate left, bit 7 goes to both bit 0 and CY.
pub fn rotate_left(flags: &mut Flags, a: u8) -> u8 {
    flags.cy = a & 0x80 != 0;
    a.rotate_left(1)
}

/// RRC: rotate right, bit 0 goes to both bit 7 and CY.
pub fn rotate_right(flags: &mut Flags, a: u8) -> u8 {
    flags.cy = a & 0x01 != 0;
    a.rotate_right(1)
}

/// RAL: rotate left through carry.
pub fn rotate_left_through_carry(flags: &mut Flags, a: u8) -> u8 {
    let result = (a << 1) | flags.cy as u8;
    flags.cy = a & 0x80 != 0;
    result
}

/// RAR: rotate right through carry.
pub fn rotate_right_through_carry(flags: &mut Flags, a: u8) -> u8 {
    let result = (a >> 1) | ((flags.cy as u8) << 7);
    flags.cy = a & 0x01 != 0;
    result
}
