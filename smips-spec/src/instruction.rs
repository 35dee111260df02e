//! SMIPS Instruction Set
//!
//! 32-bit MIPS-style instructions with a 6-bit opcode and 5-bit register fields.
//!
//! ## Instruction Formats
//! - R-type: [opcode:6][rs:5][rt:5][rd:5][shamt:5][funct:6]
//! - I-type: [opcode:6][rs:5][rt:5][imm:16]
//! - syscall: the whole word `0x0000000C`

use crate::encoding::sign_extend16;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// Decoded SMIPS instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Register-register ==========
    /// ADD: rd = rs + rt (wrapping)
    Add { rd: Register, rs: Register, rt: Register },

    /// SUB: rd = rs - rt (wrapping)
    Sub { rd: Register, rs: Register, rt: Register },

    /// AND: rd = rs & rt
    And { rd: Register, rs: Register, rt: Register },

    /// OR: rd = rs | rt
    Or { rd: Register, rs: Register, rt: Register },

    /// SLT: rd = (rs < rt) ? 1 : 0 (signed)
    Slt { rd: Register, rs: Register, rt: Register },

    /// MUL: rd = rs * rt (low 32 bits, wrapping)
    Mul { rd: Register, rs: Register, rt: Register },

    // ========== Branch ==========
    /// BEQ: if (rs == rt) PC += imm
    Beq { rs: Register, rt: Register, imm: i32 },

    /// BNE: if (rs != rt) PC += imm
    Bne { rs: Register, rt: Register, imm: i32 },

    // ========== Immediate ==========
    /// ADDI: rt = rs + imm (sign-extended)
    Addi { rt: Register, rs: Register, imm: i32 },

    /// SLTI: rt = (rs < imm) ? 1 : 0 (signed)
    Slti { rt: Register, rs: Register, imm: i32 },

    /// ANDI: rt = rs & imm (raw 16-bit pattern)
    Andi { rt: Register, rs: Register, imm: u16 },

    /// ORI: rt = rs | imm (raw 16-bit pattern)
    Ori { rt: Register, rs: Register, imm: u16 },

    /// LUI: rt = imm << 16
    Lui { rt: Register, imm: u16 },

    // ========== System ==========
    /// SYSCALL: service selected by $2, argument in $4
    Syscall,
}

impl Instruction {
    /// Get instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Add { .. } => "add",
            Instruction::Sub { .. } => "sub",
            Instruction::And { .. } => "and",
            Instruction::Or { .. } => "or",
            Instruction::Slt { .. } => "slt",
            Instruction::Mul { .. } => "mul",
            Instruction::Beq { .. } => "beq",
            Instruction::Bne { .. } => "bne",
            Instruction::Addi { .. } => "addi",
            Instruction::Slti { .. } => "slti",
            Instruction::Andi { .. } => "andi",
            Instruction::Ori { .. } => "ori",
            Instruction::Lui { .. } => "lui",
            Instruction::Syscall => "syscall",
        }
    }

    /// Branch displacement applied on top of the normal `PC + 1` advance.
    ///
    /// This is the encoded immediate minus one, so a taken branch lands at
    /// `pc + imm`. `None` for non-branches.
    pub fn branch_offset(&self) -> Option<i32> {
        match self {
            Instruction::Beq { imm, .. } | Instruction::Bne { imm, .. } => {
                Some(imm.wrapping_sub(1))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // R-type
            Instruction::Add { rd, rs, rt }
            | Instruction::Sub { rd, rs, rt }
            | Instruction::And { rd, rs, rt }
            | Instruction::Or { rd, rs, rt }
            | Instruction::Slt { rd, rs, rt }
            | Instruction::Mul { rd, rs, rt } => {
                write!(f, "{} {}, {}, {}", self.mnemonic(), rd, rs, rt)
            }

            // Branch
            Instruction::Beq { rs, rt, imm } | Instruction::Bne { rs, rt, imm } => {
                write!(f, "{} {}, {}, {}", self.mnemonic(), rs, rt, imm)
            }

            // I-type
            Instruction::Addi { rt, rs, imm } | Instruction::Slti { rt, rs, imm } => {
                write!(f, "{} {}, {}, {}", self.mnemonic(), rt, rs, imm)
            }
            Instruction::Andi { rt, rs, imm } | Instruction::Ori { rt, rs, imm } => {
                write!(f, "{} {}, {}, {}", self.mnemonic(), rt, rs, sign_extend16(*imm))
            }

            Instruction::Lui { rt, imm } => {
                write!(f, "{} {}, {}", self.mnemonic(), rt, sign_extend16(*imm))
            }

            Instruction::Syscall => write!(f, "syscall"),
        }
    }
}
