//! Instruction disassembly for traces and the `disasm8080` tool.

use crate::opcodes;

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    pub text: String,
    /// Encoded length in bytes (1-3).
    pub length: usize,
}

/// Disassemble the instruction at `offset` in `bytes`.
///
/// Operand bytes that would lie past the end of `bytes` read as zero, so a
/// truncated instruction at the end of an image still yields its full length.
pub fn disassemble(bytes: &[u8], offset: usize) -> Disassembly {
    let byte_at = |i: usize| bytes.get(offset + i).copied().unwrap_or(0);
    let info = opcodes::info(byte_at(0));

    let text = match info.length {
        3 => {
            let word = u16::from_le_bytes([byte_at(1), byte_at(2)]);
            info.mnemonic.replacen("nnnn", &format!("{word:04x}"), 1)
        }
        2 => info.mnemonic.replacen("nn", &format!("{:02x}", byte_at(1)), 1),
        _ => info.mnemonic.to_string(),
    };

    Disassembly {
        text,
        length: info.length as usize,
    }
}

/// Iterate over `(address, instruction)` pairs, starting at `start`.
pub fn listing(bytes: &[u8], start: usize) -> impl Iterator<Item = (usize, Disassembly)> + '_ {
    let mut offset = start;
    std::iter::from_fn(move || {
        if offset >= bytes.len() {
            return None;
        }
        let op = disassemble(bytes, offset);
        let addr = offset;
        offset += op.length;
        Some((addr, op))
    })
}
