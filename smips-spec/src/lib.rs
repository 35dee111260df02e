//! # SMIPS Instruction Set
//!
//! A small fixed-width subset of the MIPS instruction set.
//!
//! ## Key Features
//! - 32-bit instruction words
//! - 32 signed 32-bit registers, `$0` hardwired to zero
//! - Register-register: add, sub, and, or, slt, mul
//! - Immediate: addi, slti, andi, ori, lui
//! - Branch: beq, bne (PC counts instructions, not bytes)
//! - `syscall` services: print integer, print character, exit
//! - Programs of at most 1000 instructions

pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use error::{Result, SmipsError};
pub use instruction::Instruction;
pub use opcode::{Funct, Opcode, SYSCALL_WORD};
pub use program::{Program, MAX_INSTRUCTIONS};
pub use register::{Register, NUM_REGISTERS};

/// Register holding the syscall service code
pub const SYSCALL_CODE_REGISTER: Register = Register::V0;

/// Register holding the syscall argument
pub const SYSCALL_ARG_REGISTER: Register = Register::A0;

/// Register word (signed 32-bit)
pub type Word = i32;
