//! Virtual Machine for SMIPS

use crate::error::Result;
use crate::execute::{execute, StepOutcome};
use crate::io::IOHandler;
use crate::state::{HaltReason, RegisterFile, VMState};
use smips_disassembler::decode_at;
use smips_spec::Program;
use std::io::Write;

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Emit a `trace!` event for every executed instruction
    pub trace: bool,

    /// Stop after this many instructions. `None` runs until the program halts.
    pub max_steps: Option<u64>,
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult<W = Vec<u8>> {
    /// Number of instructions executed
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Final register file
    pub registers: RegisterFile,

    /// Everything the program printed through syscalls
    pub output: W,
}

impl ExecutionResult<Vec<u8>> {
    /// Program output as text (lossy for non-UTF-8 bytes from print-char)
    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// SMIPS Virtual Machine
pub struct VM<W: Write = Vec<u8>> {
    /// Loaded instruction words
    program: Program,

    /// VM state (registers, PC, step count)
    state: VMState,

    /// Syscall output stream
    io: IOHandler<W>,

    /// Configuration
    config: VMConfig,
}

impl VM<Vec<u8>> {
    /// Create a VM that collects program output in memory
    pub fn new(program: Program, config: VMConfig) -> Self {
        Self::with_output(program, config, Vec::new())
    }
}

impl<W: Write> VM<W> {
    /// Create a VM writing program output to `out`
    pub fn with_output(program: Program, config: VMConfig, out: W) -> Self {
        tracing::debug!(instructions = program.len(), "program loaded");
        Self {
            program,
            state: VMState::new(),
            io: IOHandler::new(out),
            config,
        }
    }

    /// Execute the instruction at the current PC.
    ///
    /// Once halted, further calls return the same halt without doing anything.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(reason) = self.state.halt_reason {
            return Ok(StepOutcome::Halt(reason));
        }

        if let Some(limit) = self.config.max_steps {
            if self.state.steps >= limit {
                return Ok(self.halt(HaltReason::StepLimit));
            }
        }

        let pc = self.state.pc;
        let Some(word) = self.program.get(pc) else {
            return Ok(self.halt(HaltReason::FellOffEnd));
        };
        let inst = decode_at(pc, word)?;

        if self.config.trace {
            tracing::trace!(step = self.state.steps, pc, word = %format_args!("{word:08x}"), %inst);
        }

        let outcome = execute(&inst, pc, &mut self.state.registers, &mut self.io)?;
        self.state.steps += 1;

        match outcome {
            StepOutcome::Continue(next) => {
                self.state.pc = next;
                Ok(outcome)
            }
            StepOutcome::Halt(reason) => Ok(self.halt(reason)),
        }
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult<W>> {
        tracing::debug!(max_steps = ?self.config.max_steps, "run started");

        let halt_reason = loop {
            if let StepOutcome::Halt(reason) = self.step()? {
                break reason;
            }
        };
        self.io.flush()?;

        tracing::debug!(
            steps = self.state.steps,
            ?halt_reason,
            output_bytes = self.io.bytes_written(),
            "run halted"
        );

        Ok(ExecutionResult {
            steps: self.state.steps,
            halt_reason,
            registers: self.state.registers,
            output: self.io.into_inner(),
        })
    }

    fn halt(&mut self, reason: HaltReason) -> StepOutcome {
        self.state.registers.reset_zero();
        self.state.halt(reason);
        StepOutcome::Halt(reason)
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get the loaded program
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Get the output written so far
    pub fn output(&self) -> &W {
        self.io.get_ref()
    }
}
