//! # Instruction Encoding Constants and Helpers
//!
//! Bit-field extraction and construction for SMIPS instruction words.
//!
//! ## Instruction Format (32-bit)
//!
//! ```text
//! R-type: [opcode:6][rs:5][rt:5][rd:5][shamt:5][funct:6]
//! I-type: [opcode:6][rs:5][rt:5][imm:16]
//! ```
//!
//! Extraction never fails. Whether a word is a valid instruction is decided
//! by the decoder.

use crate::opcode::{Funct, Opcode};

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 26-31 (6 bits)
pub const OPCODE_SHIFT: u32 = 26;

/// Source register field: bits 21-25 (5 bits)
pub const RS_SHIFT: u32 = 21;

/// Target register field: bits 16-20 (5 bits)
pub const RT_SHIFT: u32 = 16;

/// Destination register field: bits 11-15 (5 bits)
pub const RD_SHIFT: u32 = 11;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (6 bits, applied after shifting)
pub const OPCODE_MASK: u32 = 0x3F;

/// Register field mask (5 bits)
pub const REGISTER_MASK: u32 = 0x1F;

/// Immediate field mask (16 bits)
pub const IMM_MASK: u32 = 0xFFFF;

/// Function field mask (6 bits)
pub const FUNCT_MASK: u32 = 0x3F;

/// Smallest raw immediate that sign-extends to a negative value
pub const IMM_SIGN_THRESHOLD: u32 = 1 << 15;

/// Sign extension value for 16-bit immediate (2^16)
pub const IMM_SIGN_EXTEND: u32 = 1 << 16;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract opcode from instruction (bits 26-31)
#[inline]
pub const fn extract_opcode(inst: u32) -> u32 {
    (inst >> OPCODE_SHIFT) & OPCODE_MASK
}

/// Extract source register from instruction (bits 21-25)
#[inline]
pub const fn extract_rs(inst: u32) -> u32 {
    (inst >> RS_SHIFT) & REGISTER_MASK
}

/// Extract target register from instruction (bits 16-20)
#[inline]
pub const fn extract_rt(inst: u32) -> u32 {
    (inst >> RT_SHIFT) & REGISTER_MASK
}

/// Extract destination register from instruction (bits 11-15)
#[inline]
pub const fn extract_rd(inst: u32) -> u32 {
    (inst >> RD_SHIFT) & REGISTER_MASK
}

/// Extract function field from instruction (bits 0-5)
#[inline]
pub const fn extract_funct(inst: u32) -> u32 {
    inst & FUNCT_MASK
}

/// Extract the raw 16-bit immediate (bits 0-15)
#[inline]
pub const fn extract_imm(inst: u32) -> u16 {
    (inst & IMM_MASK) as u16
}

/// Extract immediate with sign extension
#[inline]
pub const fn extract_imm_signed(inst: u32) -> i32 {
    sign_extend16(extract_imm(inst))
}

/// Sign-extend a raw 16-bit immediate: values >= 32768 become `value - 65536`
#[inline]
pub const fn sign_extend16(imm: u16) -> i32 {
    let imm = imm as u32;
    if imm >= IMM_SIGN_THRESHOLD {
        (imm as i32) - (IMM_SIGN_EXTEND as i32)
    } else {
        imm as i32
    }
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

/// Encode a SPECIAL R-type instruction
#[inline]
pub const fn encode_rtype(funct: Funct, rd: u32, rs: u32, rt: u32) -> u32 {
    encode_rtype_raw(Opcode::Special, rd, rs, rt, funct.to_u8() as u32)
}

/// Encode an R-type instruction with an explicit opcode and funct
#[inline]
pub const fn encode_rtype_raw(opcode: Opcode, rd: u32, rs: u32, rt: u32, funct: u32) -> u32 {
    ((opcode.to_u8() as u32 & OPCODE_MASK) << OPCODE_SHIFT)
        | ((rs & REGISTER_MASK) << RS_SHIFT)
        | ((rt & REGISTER_MASK) << RT_SHIFT)
        | ((rd & REGISTER_MASK) << RD_SHIFT)
        | (funct & FUNCT_MASK)
}

/// Encode I-type instruction. Only the low 16 bits of `imm` are kept.
#[inline]
pub const fn encode_itype(opcode: Opcode, rt: u32, rs: u32, imm: u32) -> u32 {
    ((opcode.to_u8() as u32 & OPCODE_MASK) << OPCODE_SHIFT)
        | ((rs & REGISTER_MASK) << RS_SHIFT)
        | ((rt & REGISTER_MASK) << RT_SHIFT)
        | (imm & IMM_MASK)
}

// ============================================================================
// Instruction Type Detection
// ============================================================================

/// Check if instruction is the reserved syscall word
#[inline]
pub const fn is_syscall(inst: u32) -> bool {
    inst == crate::opcode::SYSCALL_WORD
}
