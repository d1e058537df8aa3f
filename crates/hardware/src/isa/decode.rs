//! Instruction Decoder.
//!
//! This module splits a 32-bit word into its fixed fields. Decoding is the
//! same for every format: opcode bits 31-26, `rs` bits 25-21, `rt` bits
//! 20-16, `rd` bits 15-11 and the immediate in bits 15-0. Sign extension is
//! left to the consumer, since BEQ uses the raw immediate.

use crate::isa::instruction::{Decoded, InstructionBits};

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode::decode;
///
/// // ADDI R1, R0, -1
/// let d = decode(0x2001_FFFF);
/// assert_eq!(d.opcode, 0x08);
/// assert_eq!((d.rs, d.rt), (0, 1));
/// assert_eq!(d.imm, 0xFFFF);
/// ```
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        imm: inst.imm16(),
        funct: inst.funct(),
        target: inst.target(),
    }
}

/// Sign extends a 16-bit immediate to the engine's 32-bit register width.
///
/// Bit 15 set yields the corresponding negative value.
#[inline]
pub const fn sign_extend16(imm: u16) -> i32 {
    imm as i16 as i32
}
