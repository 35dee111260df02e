//! Instruction decoder
//!
//! The single decode step shared by the listing renderer and the runtime.
//! Classification order:
//! 1. the reserved word `0x0000000C` is `syscall`
//! 2. opcode `0x00` selects by funct
//! 3. anything else selects by opcode

use crate::error::{DisassemblerError, Result};
use smips_spec::encoding::{
    extract_funct, extract_imm, extract_imm_signed, extract_opcode, extract_rd, extract_rs,
    extract_rt, is_syscall,
};
use smips_spec::{Funct, Instruction, Opcode, Register};

/// Decode 32-bit instruction word
pub fn decode(word: u32) -> Result<Instruction> {
    if is_syscall(word) {
        return Ok(Instruction::Syscall);
    }

    match Opcode::from_u8(extract_opcode(word) as u8) {
        Some(Opcode::Special) => decode_special(word),
        Some(Opcode::Mul) => {
            let (rd, rs, rt) = r_operands(word);
            Ok(Instruction::Mul { rd, rs, rt })
        }
        Some(op @ (Opcode::Beq | Opcode::Bne)) => decode_branch(op, word),
        Some(op) => decode_immediate(op, word),
        None => Err(DisassemblerError::InvalidEncoding(word)),
    }
}

/// Decode the word at a zero-based program index.
///
/// Failures carry the 1-based position of the word.
pub fn decode_at(index: usize, word: u32) -> Result<Instruction> {
    decode(word).map_err(|e| e.at_index(index))
}

fn decode_special(word: u32) -> Result<Instruction> {
    let (rd, rs, rt) = r_operands(word);

    match Funct::from_u8(extract_funct(word) as u8) {
        Some(Funct::Add) => Ok(Instruction::Add { rd, rs, rt }),
        Some(Funct::Sub) => Ok(Instruction::Sub { rd, rs, rt }),
        Some(Funct::And) => Ok(Instruction::And { rd, rs, rt }),
        Some(Funct::Or) => Ok(Instruction::Or { rd, rs, rt }),
        Some(Funct::Slt) => Ok(Instruction::Slt { rd, rs, rt }),
        None => Err(DisassemblerError::InvalidEncoding(word)),
    }
}

fn decode_branch(op: Opcode, word: u32) -> Result<Instruction> {
    let rs = Register::from_field(extract_rs(word));
    let rt = Register::from_field(extract_rt(word));
    let imm = extract_imm_signed(word);

    match op {
        Opcode::Beq => Ok(Instruction::Beq { rs, rt, imm }),
        Opcode::Bne => Ok(Instruction::Bne { rs, rt, imm }),
        _ => Err(DisassemblerError::InvalidEncoding(word)),
    }
}

fn decode_immediate(op: Opcode, word: u32) -> Result<Instruction> {
    let rs = Register::from_field(extract_rs(word));
    let rt = Register::from_field(extract_rt(word));

    match op {
        Opcode::Addi => Ok(Instruction::Addi {
            rt,
            rs,
            imm: extract_imm_signed(word),
        }),
        Opcode::Slti => Ok(Instruction::Slti {
            rt,
            rs,
            imm: extract_imm_signed(word),
        }),
        Opcode::Andi => Ok(Instruction::Andi {
            rt,
            rs,
            imm: extract_imm(word),
        }),
        Opcode::Ori => Ok(Instruction::Ori {
            rt,
            rs,
            imm: extract_imm(word),
        }),
        Opcode::Lui => Ok(Instruction::Lui {
            rt,
            imm: extract_imm(word),
        }),
        _ => Err(DisassemblerError::InvalidEncoding(word)),
    }
}

fn r_operands(word: u32) -> (Register, Register, Register) {
    (
        Register::from_field(extract_rd(word)),
        Register::from_field(extract_rs(word)),
        Register::from_field(extract_rt(word)),
    )
}
