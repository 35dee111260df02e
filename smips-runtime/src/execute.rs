//! Instruction execution for SMIPS
//!
//! One call executes one decoded instruction. The program counter is passed
//! in by value and the next one is handed back in [`StepOutcome`]; nothing
//! below this module mutates the PC.

use crate::error::Result;
use crate::io::IOHandler;
use crate::state::{HaltReason, RegisterFile};
use crate::syscall::{handle_syscall, SyscallOutcome};
use smips_spec::Instruction;
use std::io::Write;

/// Result of executing one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Continue at this instruction index
    Continue(usize),
    /// Stop execution
    Halt(HaltReason),
}

/// Execute single instruction at `pc`
pub fn execute<W: Write>(
    instr: &Instruction,
    pc: usize,
    regs: &mut RegisterFile,
    io: &mut IOHandler<W>,
) -> Result<StepOutcome> {
    let mut taken = false;

    match instr {
        // ========== Register-register ==========
        Instruction::Add { rd, rs, rt } => {
            regs.write(*rd, regs.read(*rs).wrapping_add(regs.read(*rt)));
        }

        Instruction::Sub { rd, rs, rt } => {
            regs.write(*rd, regs.read(*rs).wrapping_sub(regs.read(*rt)));
        }

        Instruction::And { rd, rs, rt } => {
            regs.write(*rd, regs.read(*rs) & regs.read(*rt));
        }

        Instruction::Or { rd, rs, rt } => {
            regs.write(*rd, regs.read(*rs) | regs.read(*rt));
        }

        Instruction::Slt { rd, rs, rt } => {
            regs.write(*rd, i32::from(regs.read(*rs) < regs.read(*rt)));
        }

        Instruction::Mul { rd, rs, rt } => {
            regs.write(*rd, regs.read(*rs).wrapping_mul(regs.read(*rt)));
        }

        // ========== Branch ==========
        Instruction::Beq { rs, rt, .. } => {
            taken = regs.read(*rs) == regs.read(*rt);
        }

        Instruction::Bne { rs, rt, .. } => {
            taken = regs.read(*rs) != regs.read(*rt);
        }

        // ========== Immediate ==========
        Instruction::Addi { rt, rs, imm } => {
            regs.write(*rt, regs.read(*rs).wrapping_add(*imm));
        }

        Instruction::Slti { rt, rs, imm } => {
            regs.write(*rt, i32::from(regs.read(*rs) < *imm));
        }

        Instruction::Andi { rt, rs, imm } => {
            regs.write(*rt, regs.read(*rs) & i32::from(*imm));
        }

        Instruction::Ori { rt, rs, imm } => {
            regs.write(*rt, regs.read(*rs) | i32::from(*imm));
        }

        Instruction::Lui { rt, imm } => {
            regs.write(*rt, (u32::from(*imm) << 16) as i32);
        }

        // ========== System ==========
        Instruction::Syscall => {
            let outcome = handle_syscall(regs, io)?;
            regs.reset_zero();
            match outcome {
                SyscallOutcome::Continue => {}
                SyscallOutcome::Exit => return Ok(StepOutcome::Halt(HaltReason::Exit)),
                SyscallOutcome::Unknown(code) => {
                    return Ok(StepOutcome::Halt(HaltReason::UnknownSyscall(code)))
                }
            }
        }
    }

    regs.reset_zero();

    let offset = match instr.branch_offset() {
        Some(offset) if taken => offset,
        _ => 0,
    };
    Ok(next_pc(pc, offset))
}

/// Advance the PC by `1 + offset`.
///
/// A target before the first instruction halts as if execution ran off the
/// program.
pub fn next_pc(pc: usize, offset: i32) -> StepOutcome {
    let target = pc as i64 + 1 + i64::from(offset);
    match usize::try_from(target) {
        Ok(next) => StepOutcome::Continue(next),
        Err(_) => StepOutcome::Halt(HaltReason::FellOffEnd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smips_spec::Register;

    fn run_one(instr: Instruction, regs: &mut RegisterFile) -> StepOutcome {
        let mut io = IOHandler::new(Vec::new());
        execute(&instr, 10, regs, &mut io).unwrap()
    }

    #[test]
    fn test_add() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, 5);
        regs.write(Register::R2, 7);
        let before = regs;

        let outcome = run_one(
            Instruction::Add {
                rd: Register::R3,
                rs: Register::R1,
                rt: Register::R2,
            },
            &mut regs,
        );

        assert_eq!(outcome, StepOutcome::Continue(11));
        assert_eq!(regs.read(Register::R3), 12);
        for reg in Register::ALL.iter().filter(|r| **r != Register::R3) {
            assert_eq!(regs.read(*reg), before.read(*reg));
        }
    }

    #[test]
    fn test_add_wraps() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, i32::MAX);
        regs.write(Register::R2, 1);
        run_one(
            Instruction::Add {
                rd: Register::R3,
                rs: Register::R1,
                rt: Register::R2,
            },
            &mut regs,
        );
        assert_eq!(regs.read(Register::R3), i32::MIN);
    }

    #[test]
    fn test_sub_and_or() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, 0b1100);
        regs.write(Register::R2, 0b1010);
        run_one(Instruction::Sub { rd: Register::R3, rs: Register::R1, rt: Register::R2 }, &mut regs);
        run_one(Instruction::And { rd: Register::R4, rs: Register::R1, rt: Register::R2 }, &mut regs);
        run_one(Instruction::Or { rd: Register::R5, rs: Register::R1, rt: Register::R2 }, &mut regs);
        assert_eq!(regs.read(Register::R3), 2);
        assert_eq!(regs.read(Register::R4), 0b1000);
        assert_eq!(regs.read(Register::R5), 0b1110);
    }

    #[test]
    fn test_slt_signed() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, -1);
        regs.write(Register::R2, 1);
        run_one(Instruction::Slt { rd: Register::R3, rs: Register::R1, rt: Register::R2 }, &mut regs);
        run_one(Instruction::Slt { rd: Register::R4, rs: Register::R2, rt: Register::R1 }, &mut regs);
        assert_eq!(regs.read(Register::R3), 1);
        assert_eq!(regs.read(Register::R4), 0);
    }

    #[test]
    fn test_mul_wraps() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, 0x10000);
        regs.write(Register::R2, 0x10001);
        run_one(Instruction::Mul { rd: Register::R3, rs: Register::R1, rt: Register::R2 }, &mut regs);
        assert_eq!(regs.read(Register::R3), 0x10000);
    }

    #[test]
    fn test_addi_and_slti() {
        let mut regs = RegisterFile::new();
        run_one(Instruction::Addi { rt: Register::R4, rs: Register::R0, imm: -5 }, &mut regs);
        run_one(Instruction::Slti { rt: Register::R5, rs: Register::R4, imm: -4 }, &mut regs);
        assert_eq!(regs.read(Register::R4), -5);
        assert_eq!(regs.read(Register::R5), 1);
    }

    #[test]
    fn test_andi_ori_use_raw_pattern() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, -1);
        run_one(Instruction::Andi { rt: Register::R2, rs: Register::R1, imm: 0xFFFF }, &mut regs);
        run_one(Instruction::Ori { rt: Register::R3, rs: Register::R0, imm: 0x8000 }, &mut regs);
        assert_eq!(regs.read(Register::R2), 0xFFFF);
        assert_eq!(regs.read(Register::R3), 0x8000);
    }

    #[test]
    fn test_lui() {
        let mut regs = RegisterFile::new();
        run_one(Instruction::Lui { rt: Register::R1, imm: 0x1234 }, &mut regs);
        run_one(Instruction::Lui { rt: Register::R2, imm: 0xFFFF }, &mut regs);
        assert_eq!(regs.read(Register::R1), 0x1234_0000);
        assert_eq!(regs.read(Register::R2), 0xFFFF_0000u32 as i32);
    }

    #[test]
    fn test_write_to_zero_is_discarded() {
        let mut regs = RegisterFile::new();
        run_one(Instruction::Addi { rt: Register::R0, rs: Register::R0, imm: 99 }, &mut regs);
        assert_eq!(regs.read(Register::R0), 0);
    }

    #[test]
    fn test_beq_taken_and_not_taken() {
        let mut regs = RegisterFile::new();
        let beq = Instruction::Beq { rs: Register::R1, rt: Register::R2, imm: 3 };
        assert_eq!(run_one(beq, &mut regs), StepOutcome::Continue(13));

        regs.write(Register::R1, 1);
        assert_eq!(run_one(beq, &mut regs), StepOutcome::Continue(11));
    }

    #[test]
    fn test_bne_backwards() {
        let mut regs = RegisterFile::new();
        regs.write(Register::R1, 1);
        let bne = Instruction::Bne { rs: Register::R1, rt: Register::R0, imm: -4 };
        assert_eq!(run_one(bne, &mut regs), StepOutcome::Continue(6));
    }

    #[test]
    fn test_branch_before_start_halts() {
        let mut regs = RegisterFile::new();
        let beq = Instruction::Beq { rs: Register::R0, rt: Register::R0, imm: -11 };
        assert_eq!(run_one(beq, &mut regs), StepOutcome::Halt(HaltReason::FellOffEnd));
    }

    #[test]
    fn test_syscall_exit() {
        let mut regs = RegisterFile::new();
        regs.write(Register::V0, 10);
        assert_eq!(run_one(Instruction::Syscall, &mut regs), StepOutcome::Halt(HaltReason::Exit));
    }

    #[test]
    fn test_syscall_print_continues() {
        let mut regs = RegisterFile::new();
        regs.write(Register::V0, 1);
        regs.write(Register::A0, 77);
        let mut io = IOHandler::new(Vec::new());
        let outcome = execute(&Instruction::Syscall, 0, &mut regs, &mut io).unwrap();
        assert_eq!(outcome, StepOutcome::Continue(1));
        assert_eq!(io.into_inner(), b"77".to_vec());
    }

    #[test]
    fn test_next_pc() {
        assert_eq!(next_pc(0, 0), StepOutcome::Continue(1));
        assert_eq!(next_pc(5, -6), StepOutcome::Continue(0));
        assert_eq!(next_pc(5, -7), StepOutcome::Halt(HaltReason::FellOffEnd));
    }
}
