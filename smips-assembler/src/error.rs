//! Assembler errors

use smips_spec::SmipsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at column {column}: {message}")]
    SyntaxError { column: usize, message: String },

    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("Invalid register: ${0}")]
    InvalidRegister(String),

    #[error("Invalid immediate value: {0}")]
    InvalidImmediate(i64),

    #[error("{mnemonic} expects {expected} operand(s), found {found}")]
    OperandCount {
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<AssemblerError>,
    },

    #[error(transparent)]
    Program(#[from] SmipsError),
}

impl AssemblerError {
    /// Attach a 1-based source line number
    pub fn at_line(self, line: usize) -> Self {
        match self {
            AssemblerError::AtLine { .. } => self,
            other => AssemblerError::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }

    /// Source line the error was found on, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
