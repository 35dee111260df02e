//! # SMIPS Opcode Definitions
//!
//! Two tables select an instruction:
//! - the top 6 bits (`opcode`) for immediate, branch and special forms
//! - the bottom 6 bits (`funct`) for register-register forms, used only when
//!   the opcode is `0x00`
//!
//! ```text
//! opcode 0x00 (SPECIAL): funct 0x20 add, 0x22 sub, 0x24 and, 0x25 or, 0x2A slt
//! opcode 0x04 beq   0x05 bne   0x08 addi  0x0A slti
//! opcode 0x0C andi  0x0D ori   0x0F lui   0x1C mul (SPECIAL2)
//! ```
//!
//! The whole word `0x0000000C` is reserved for `syscall`.

use serde::{Deserialize, Serialize};

/// The reserved syscall encoding
pub const SYSCALL_WORD: u32 = 0x0000_000C;

/// Top-level opcode (bits 31-26)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// Register-register forms, selected by funct
    Special = 0x00,
    /// BEQ: if (rs == rt) PC += imm
    Beq = 0x04,
    /// BNE: if (rs != rt) PC += imm
    Bne = 0x05,
    /// ADDI: rt = rs + sign_extend(imm)
    Addi = 0x08,
    /// SLTI: rt = (rs < sign_extend(imm)) ? 1 : 0
    Slti = 0x0A,
    /// ANDI: rt = rs & imm
    Andi = 0x0C,
    /// ORI: rt = rs | imm
    Ori = 0x0D,
    /// LUI: rt = imm << 16
    Lui = 0x0F,
    /// MUL: rd = rs * rt
    Mul = 0x1C,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: usize = 6;

    /// Opcode mask (0x3F for 6 bits)
    pub const MASK: u32 = 0x3F;

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Opcode::Special),
            0x04 => Some(Opcode::Beq),
            0x05 => Some(Opcode::Bne),
            0x08 => Some(Opcode::Addi),
            0x0A => Some(Opcode::Slti),
            0x0C => Some(Opcode::Andi),
            0x0D => Some(Opcode::Ori),
            0x0F => Some(Opcode::Lui),
            0x1C => Some(Opcode::Mul),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Function field for `Opcode::Special` words (bits 5-0)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Funct {
    /// ADD: rd = rs + rt
    Add = 0x20,
    /// SUB: rd = rs - rt
    Sub = 0x22,
    /// AND: rd = rs & rt
    And = 0x24,
    /// OR: rd = rs | rt
    Or = 0x25,
    /// SLT: rd = (rs < rt) ? 1 : 0
    Slt = 0x2A,
}

impl Funct {
    /// Funct mask (0x3F for 6 bits)
    pub const MASK: u32 = 0x3F;

    /// Funct value written into MUL words. The decoder does not inspect it.
    pub const MUL: u8 = 0x02;

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x20 => Some(Funct::Add),
            0x22 => Some(Funct::Sub),
            0x24 => Some(Funct::And),
            0x25 => Some(Funct::Or),
            0x2A => Some(Funct::Slt),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}
