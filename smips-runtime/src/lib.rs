//! # SMIPS Runtime
//!
//! Execute SMIPS programs one decoded instruction at a time.
//!
//! ## Features
//!
//! - **32 registers**: `$0`-`$31`, `$0` reads as zero between steps
//! - **Word-indexed PC**: branches count instructions, not bytes
//! - **Wrapping arithmetic**: add, sub, mul, addi never trap
//! - **Syscalls**: print integer, print character, exit
//! - **Halting**: running off either end, exit, unknown syscall, optional step limit
//!
//! ## Example
//!
//! ```rust
//! use smips_runtime::{VM, VMConfig, HaltReason};
//! use smips_spec::Program;
//!
//! // addi $4, $0, 10 ; addi $2, $0, 1 ; syscall
//! let program = Program::from_hex_str("2004000a 20020001 0000000c").unwrap();
//! let result = VM::new(program, VMConfig::default()).run().unwrap();
//! assert_eq!(result.output_string(), "10");
//! assert_eq!(result.halt_reason, HaltReason::FellOffEnd);
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod state;
pub mod syscall;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use execute::{execute, StepOutcome};
pub use io::IOHandler;
pub use state::{HaltReason, RegisterFile, VMState};
pub use syscall::{handle_syscall, SyscallOutcome};
pub use vm::{ExecutionResult, VMConfig, VM};

/// Simple execution helper
///
/// Runs a program with the default configuration and returns the result.
pub fn run(program: smips_spec::Program) -> Result<ExecutionResult> {
    VM::new(program, VMConfig::default()).run()
}
