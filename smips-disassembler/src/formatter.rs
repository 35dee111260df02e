//! Instruction formatting to listing text
//!
//! Mnemonics are left-aligned in a five-column field and every register is
//! printed numerically, e.g. `add  $3, $1, $2` or `addi $4, $0, -1`.

use smips_spec::encoding::sign_extend16;
use smips_spec::{Instruction, Register};

/// Format instruction as listing text
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Syscall => "syscall".to_string(),

        // ========== Register-register ==========
        Instruction::Add { rd, rs, rt }
        | Instruction::Sub { rd, rs, rt }
        | Instruction::And { rd, rs, rt }
        | Instruction::Or { rd, rs, rt }
        | Instruction::Slt { rd, rs, rt }
        | Instruction::Mul { rd, rs, rt } => with_operands(
            instr,
            &[format_reg(*rd), format_reg(*rs), format_reg(*rt)],
        ),

        // ========== Branch ==========
        Instruction::Beq { rs, rt, imm } | Instruction::Bne { rs, rt, imm } => with_operands(
            instr,
            &[format_reg(*rs), format_reg(*rt), imm.to_string()],
        ),

        // ========== Immediate ==========
        Instruction::Addi { rt, rs, imm } | Instruction::Slti { rt, rs, imm } => with_operands(
            instr,
            &[format_reg(*rt), format_reg(*rs), imm.to_string()],
        ),
        // Bitwise immediates execute on the raw pattern but list sign-extended.
        Instruction::Andi { rt, rs, imm } | Instruction::Ori { rt, rs, imm } => with_operands(
            instr,
            &[format_reg(*rt), format_reg(*rs), sign_extend16(*imm).to_string()],
        ),
        Instruction::Lui { rt, imm } => with_operands(
            instr,
            &[format_reg(*rt), sign_extend16(*imm).to_string()],
        ),
    }
}

/// Format one listing line: `"{index:>3}: {instruction}"`
pub fn format_line(index: usize, instr: &Instruction) -> String {
    format!("{:>3}: {}", index, format(instr))
}

fn with_operands(instr: &Instruction, operands: &[String]) -> String {
    format!("{:<4} {}", instr.mnemonic(), operands.join(", "))
}

/// Format register numerically (e.g., "$4" rather than "$a0")
fn format_reg(reg: Register) -> String {
    reg.to_string()
}
