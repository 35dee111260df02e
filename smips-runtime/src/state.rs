//! VM state for SMIPS

use smips_spec::{Register, Word, NUM_REGISTERS};
use std::fmt;

/// The 32-entry register file.
///
/// `$0` may be written during a step; the execution engine clears it again
/// before the next step starts, so it always reads as zero between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterFile {
    regs: [Word; NUM_REGISTERS],
}

impl RegisterFile {
    /// Create a register file with every register zeroed
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Create a register file from explicit values; `$0` is cleared
    pub fn from_values(mut regs: [Word; NUM_REGISTERS]) -> Self {
        regs[0] = 0;
        Self { regs }
    }

    #[inline]
    pub fn read(&self, reg: Register) -> Word {
        self.regs[reg.index()]
    }

    #[inline]
    pub fn write(&mut self, reg: Register, value: Word) {
        self.regs[reg.index()] = value;
    }

    /// Force `$0` back to zero
    #[inline]
    pub fn reset_zero(&mut self) {
        self.regs[Register::ZERO.index()] = 0;
    }

    /// Raw register values in index order
    pub fn values(&self) -> &[Word; NUM_REGISTERS] {
        &self.regs
    }

    /// Registers holding a nonzero value, in ascending index order
    pub fn nonzero(&self) -> impl Iterator<Item = (Register, Word)> + '_ {
        Register::ALL
            .iter()
            .zip(self.regs.iter())
            .filter(|(_, value)| **value != 0)
            .map(|(reg, value)| (*reg, *value))
    }
}

/// One line per nonzero register, e.g. `$4  = 10`
impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (reg, value) in self.nonzero() {
            writeln!(f, "${:<2} = {}", reg.index(), value)?;
        }
        Ok(())
    }
}

/// VM state
#[derive(Debug, Clone, Default)]
pub struct VMState {
    /// Register file ($0-$31)
    pub registers: RegisterFile,

    /// Program counter (zero-based instruction index)
    pub pc: usize,

    /// Instructions executed so far
    pub steps: u64,

    /// Halt reason, set once execution stops
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// PC left the program (past the end, or before the start)
    FellOffEnd,
    /// `syscall` with code 10
    Exit,
    /// `syscall` with an unrecognized code; handled the same as `Exit`
    UnknownSyscall(Word),
    /// `VMConfig::max_steps` reached
    StepLimit,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }
}
