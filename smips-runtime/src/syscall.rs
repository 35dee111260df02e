//! Syscall handling for SMIPS
//!
//! The service code is read from `$2` and the argument from `$4`:
//! - Print integer (1): print `$4` in decimal
//! - Exit (10): stop the program
//! - Print character (11): print the low byte of `$4`
//!
//! Any other code prints a diagnostic and stops the program exactly like exit.

use crate::error::Result;
use crate::io::IOHandler;
use crate::state::RegisterFile;
use smips_spec::{Word, SYSCALL_ARG_REGISTER, SYSCALL_CODE_REGISTER};
use std::io::Write;

/// Syscall numbers
pub const SYSCALL_PRINT_INT: Word = 1;
pub const SYSCALL_EXIT: Word = 10;
pub const SYSCALL_PRINT_CHAR: Word = 11;

/// What the engine should do after a syscall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallOutcome {
    /// Service done, keep executing
    Continue,
    /// Explicit exit request
    Exit,
    /// Unrecognized service code
    Unknown(Word),
}

/// Handle a syscall against the current register file
pub fn handle_syscall<W: Write>(
    regs: &RegisterFile,
    io: &mut IOHandler<W>,
) -> Result<SyscallOutcome> {
    let code = regs.read(SYSCALL_CODE_REGISTER);
    let arg = regs.read(SYSCALL_ARG_REGISTER);

    match code {
        SYSCALL_PRINT_INT => {
            io.print_int(arg)?;
            Ok(SyscallOutcome::Continue)
        }

        SYSCALL_EXIT => Ok(SyscallOutcome::Exit),

        SYSCALL_PRINT_CHAR => {
            io.print_char((arg & 0xFF) as u8)?;
            Ok(SyscallOutcome::Continue)
        }

        _ => {
            tracing::debug!(code, "unknown syscall");
            io.print_line(&format!("Unknown system call: {}", code))?;
            Ok(SyscallOutcome::Unknown(code))
        }
    }
}
