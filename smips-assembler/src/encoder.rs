//! Instruction encoding to 32-bit words
//!
//! The exact inverse of the decoder: `decode(encode(i)) == i` for every
//! instruction. `mul` is written with funct `0x02`, which the decoder ignores.

use smips_spec::encoding::{encode_itype, encode_rtype, encode_rtype_raw};
use smips_spec::{Funct, Instruction, Opcode, Register, SYSCALL_WORD};

/// Encode instruction to 32-bit word
pub fn encode(instr: &Instruction) -> u32 {
    match instr {
        // ========== R-type (opcode = 0x00) ==========
        Instruction::Add { rd, rs, rt } => r_type(Funct::Add, *rd, *rs, *rt),
        Instruction::Sub { rd, rs, rt } => r_type(Funct::Sub, *rd, *rs, *rt),
        Instruction::And { rd, rs, rt } => r_type(Funct::And, *rd, *rs, *rt),
        Instruction::Or { rd, rs, rt } => r_type(Funct::Or, *rd, *rs, *rt),
        Instruction::Slt { rd, rs, rt } => r_type(Funct::Slt, *rd, *rs, *rt),

        // ========== mul (opcode = 0x1C) ==========
        Instruction::Mul { rd, rs, rt } => encode_rtype_raw(
            Opcode::Mul,
            reg(*rd),
            reg(*rs),
            reg(*rt),
            u32::from(Funct::MUL),
        ),

        // ========== Branch ==========
        Instruction::Beq { rs, rt, imm } => i_type(Opcode::Beq, *rt, *rs, *imm as u32),
        Instruction::Bne { rs, rt, imm } => i_type(Opcode::Bne, *rt, *rs, *imm as u32),

        // ========== Immediate ==========
        Instruction::Addi { rt, rs, imm } => i_type(Opcode::Addi, *rt, *rs, *imm as u32),
        Instruction::Slti { rt, rs, imm } => i_type(Opcode::Slti, *rt, *rs, *imm as u32),
        Instruction::Andi { rt, rs, imm } => i_type(Opcode::Andi, *rt, *rs, u32::from(*imm)),
        Instruction::Ori { rt, rs, imm } => i_type(Opcode::Ori, *rt, *rs, u32::from(*imm)),
        Instruction::Lui { rt, imm } => i_type(Opcode::Lui, *rt, Register::R0, u32::from(*imm)),

        // ========== System ==========
        Instruction::Syscall => SYSCALL_WORD,
    }
}

fn r_type(funct: Funct, rd: Register, rs: Register, rt: Register) -> u32 {
    encode_rtype(funct, reg(rd), reg(rs), reg(rt))
}

fn i_type(opcode: Opcode, rt: Register, rs: Register, imm: u32) -> u32 {
    encode_itype(opcode, reg(rt), reg(rs), imm)
}

#[inline]
fn reg(r: Register) -> u32 {
    r.index() as u32
}
