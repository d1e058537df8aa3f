//! Instruction Variants.
//!
//! The supported subset as a closed set of tagged variants. It performs:
//! 1. **Mnemonics:** Parsing and naming of the eighteen assembly mnemonics.
//! 2. **Encoding:** Packing an [`Instruction`] into its R/I/J-format word.
//! 3. **Decoding:** Mapping a word back to a variant, with unknown opcodes and
//!    function codes as explicit failures.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{OPCODE_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT, TARGET_MASK};
use crate::common::error::{AsmError, ExecError};
use crate::isa::decode::decode;
use crate::isa::{funct, opcodes};

/// R-format ALU operations, keyed by function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegOp {
    /// Signed add with overflow detection.
    Add,
    /// Wrapping add.
    Addu,
    /// Signed subtract with overflow detection.
    Sub,
    /// Wrapping subtract.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
}

impl RegOp {
    /// Every R-format operation, in function-code order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Addu,
        Self::Sub,
        Self::Subu,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
    ];

    /// Function code placed in bits 5-0.
    pub const fn funct(self) -> u32 {
        match self {
            Self::Add => funct::ADD,
            Self::Addu => funct::ADDU,
            Self::Sub => funct::SUB,
            Self::Subu => funct::SUBU,
            Self::And => funct::AND,
            Self::Or => funct::OR,
            Self::Xor => funct::XOR,
            Self::Nor => funct::NOR,
        }
    }

    /// Looks up the operation for a function code.
    pub const fn from_funct(code: u32) -> Option<Self> {
        Some(match code {
            funct::ADD => Self::Add,
            funct::ADDU => Self::Addu,
            funct::SUB => Self::Sub,
            funct::SUBU => Self::Subu,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::XOR => Self::Xor,
            funct::NOR => Self::Nor,
            _ => return None,
        })
    }

    /// Assembly mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Addu => "ADDU",
            Self::Sub => "SUB",
            Self::Subu => "SUBU",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nor => "NOR",
        }
    }
}

/// I-format ALU operations, keyed by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmOp {
    /// Signed add with overflow detection.
    Addi,
    /// Add without overflow detection.
    Addiu,
    /// Bitwise AND with the sign-extended immediate.
    Andi,
    /// Bitwise OR with the sign-extended immediate.
    Ori,
    /// Bitwise XOR with the sign-extended immediate.
    Xori,
}

impl ImmOp {
    /// Every I-format ALU operation, in opcode order.
    pub const ALL: [Self; 5] = [Self::Addi, Self::Addiu, Self::Andi, Self::Ori, Self::Xori];

    /// Opcode placed in bits 31-26.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Addi => opcodes::OP_ADDI,
            Self::Addiu => opcodes::OP_ADDIU,
            Self::Andi => opcodes::OP_ANDI,
            Self::Ori => opcodes::OP_ORI,
            Self::Xori => opcodes::OP_XORI,
        }
    }

    /// Looks up the operation for an opcode.
    pub const fn from_opcode(code: u32) -> Option<Self> {
        Some(match code {
            opcodes::OP_ADDI => Self::Addi,
            opcodes::OP_ADDIU => Self::Addiu,
            opcodes::OP_ANDI => Self::Andi,
            opcodes::OP_ORI => Self::Ori,
            opcodes::OP_XORI => Self::Xori,
            _ => return None,
        })
    }

    /// Assembly mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Addi => "ADDI",
            Self::Addiu => "ADDIU",
            Self::Andi => "ANDI",
            Self::Ori => "ORI",
            Self::Xori => "XORI",
        }
    }
}

/// An assembly mnemonic, grouped by operand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// `OP rd, rs, rt`
    Reg(RegOp),
    /// `OP rt, rs, imm16`
    Imm(ImmOp),
    /// `J target`
    J,
    /// `BEQ rs, rt, label`
    Beq,
    /// `BNE rs, rt, label`
    Bne,
    /// `LW rt, offset(rs)`
    Lw,
    /// `SW rt, offset(rs)`
    Sw,
}

impl Mnemonic {
    /// Assembly spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reg(op) => op.as_str(),
            Self::Imm(op) => op.as_str(),
            Self::J => "J",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Lw => "LW",
            Self::Sw => "SW",
        }
    }

    /// Number of comma-separated operands the mnemonic takes.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::J => 1,
            Self::Lw | Self::Sw => 2,
            Self::Reg(_) | Self::Imm(_) | Self::Beq | Self::Bne => 3,
        }
    }
}

impl FromStr for Mnemonic {
    type Err = AsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = RegOp::ALL.into_iter().find(|op| op.as_str() == s) {
            return Ok(Self::Reg(op));
        }
        if let Some(op) = ImmOp::ALL.into_iter().find(|op| op.as_str() == s) {
            return Ok(Self::Imm(op));
        }
        match s {
            "J" => Ok(Self::J),
            "BEQ" => Ok(Self::Beq),
            "BNE" => Ok(Self::Bne),
            "LW" => Ok(Self::Lw),
            "SW" => Ok(Self::Sw),
            _ => Err(AsmError::UnknownMnemonic(s.to_string())),
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction of the supported subset.
///
/// Register fields are indices `0..32`; immediates are stored signed, exactly
/// as they appear in the 16-bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// R-format ALU operation: `rd = rs op rt`.
    Reg {
        /// Operation.
        op: RegOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// I-format ALU operation: `rt = rs op imm`.
    Imm {
        /// Operation.
        op: ImmOp,
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Immediate operand.
        imm: i16,
    },
    /// Absolute jump to an instruction index.
    Jump {
        /// 26-bit instruction index.
        target: u32,
    },
    /// Branch if `rs == rt`; the offset is applied as a raw 16-bit addend.
    Beq {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Encoded offset.
        offset: i16,
    },
    /// Branch if `rs != rt`; the offset is applied sign-extended.
    Bne {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Encoded offset.
        offset: i16,
    },
    /// `rt = data[base + offset]`.
    Lw {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Word offset.
        offset: i16,
    },
    /// `data[base + offset] = rt`.
    Sw {
        /// Source register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Word offset.
        offset: i16,
    },
}

/// Packs an I-format word.
const fn i_type(opcode: u32, rs: usize, rt: usize, imm: i16) -> u32 {
    (opcode << OPCODE_SHIFT)
        | ((rs as u32) << RS_SHIFT)
        | ((rt as u32) << RT_SHIFT)
        | (imm as u16 as u32)
}

impl Instruction {
    /// The mnemonic this instruction is written with.
    pub const fn mnemonic(&self) -> Mnemonic {
        match self {
            Self::Reg { op, .. } => Mnemonic::Reg(*op),
            Self::Imm { op, .. } => Mnemonic::Imm(*op),
            Self::Jump { .. } => Mnemonic::J,
            Self::Beq { .. } => Mnemonic::Beq,
            Self::Bne { .. } => Mnemonic::Bne,
            Self::Lw { .. } => Mnemonic::Lw,
            Self::Sw { .. } => Mnemonic::Sw,
        }
    }

    /// Encodes the instruction into its machine word.
    ///
    /// Register indices are masked to 5 bits and jump targets to 26 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::isa::ops::{Instruction, RegOp};
    ///
    /// let add = Instruction::Reg { op: RegOp::Add, rd: 3, rs: 1, rt: 2 };
    /// assert_eq!(add.encode(), 0x0022_1820);
    /// ```
    pub const fn encode(&self) -> u32 {
        match *self {
            Self::Reg { op, rd, rs, rt } => {
                (((rs & 0x1F) as u32) << RS_SHIFT)
                    | (((rt & 0x1F) as u32) << RT_SHIFT)
                    | (((rd & 0x1F) as u32) << RD_SHIFT)
                    | op.funct()
            }
            Self::Imm { op, rt, rs, imm } => i_type(op.opcode(), rs & 0x1F, rt & 0x1F, imm),
            Self::Jump { target } => (opcodes::OP_J << OPCODE_SHIFT) | (target & TARGET_MASK),
            Self::Beq { rs, rt, offset } => i_type(opcodes::OP_BEQ, rs & 0x1F, rt & 0x1F, offset),
            Self::Bne { rs, rt, offset } => i_type(opcodes::OP_BNE, rs & 0x1F, rt & 0x1F, offset),
            Self::Lw { rt, base, offset } => i_type(opcodes::OP_LW, base & 0x1F, rt & 0x1F, offset),
            Self::Sw { rt, base, offset } => i_type(opcodes::OP_SW, base & 0x1F, rt & 0x1F, offset),
        }
    }

    /// Decodes a machine word into an instruction.
    ///
    /// The halt and empty sentinels are not special here; callers compare
    /// against them before decoding.
    ///
    /// # Errors
    ///
    /// [`ExecError::UnknownOpcode`] for an opcode outside the table, and
    /// [`ExecError::UnknownFunction`] for an R-format word whose function code
    /// is not one of the eight ALU operations.
    pub fn decode(word: u32) -> Result<Self, ExecError> {
        let d = decode(word);
        let imm = d.imm as i16;
        let inst = match d.opcode {
            opcodes::OP_SPECIAL => {
                let op = RegOp::from_funct(d.funct).ok_or(ExecError::UnknownFunction {
                    funct: d.funct,
                    word,
                })?;
                Self::Reg {
                    op,
                    rd: d.rd,
                    rs: d.rs,
                    rt: d.rt,
                }
            }
            opcodes::OP_J => Self::Jump { target: d.target },
            opcodes::OP_BEQ => Self::Beq {
                rs: d.rs,
                rt: d.rt,
                offset: imm,
            },
            opcodes::OP_BNE => Self::Bne {
                rs: d.rs,
                rt: d.rt,
                offset: imm,
            },
            opcodes::OP_LW => Self::Lw {
                rt: d.rt,
                base: d.rs,
                offset: imm,
            },
            opcodes::OP_SW => Self::Sw {
                rt: d.rt,
                base: d.rs,
                offset: imm,
            },
            other => match ImmOp::from_opcode(other) {
                Some(op) => Self::Imm {
                    op,
                    rt: d.rt,
                    rs: d.rs,
                    imm,
                },
                None => {
                    return Err(ExecError::UnknownOpcode {
                        opcode: other,
                        word,
                    });
                }
            },
        };
        Ok(inst)
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction in the assembler's own syntax, except that
    /// branch offsets are printed as numbers rather than labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mn = self.mnemonic();
        match *self {
            Self::Reg { rd, rs, rt, .. } => write!(f, "{mn} R{rd}, R{rs}, R{rt}"),
            Self::Imm { rt, rs, imm, .. } => write!(f, "{mn} R{rt}, R{rs}, {imm}"),
            Self::Jump { target } => write!(f, "{mn} {target}"),
            Self::Beq { rs, rt, offset } | Self::Bne { rs, rt, offset } => {
                write!(f, "{mn} R{rs}, R{rt}, {offset}")
            }
            Self::Lw { rt, base, offset } | Self::Sw { rt, base, offset } => {
                write!(f, "{mn} R{rt}, {offset}(R{base})")
            }
        }
    }
}
