//! Runtime error types for SMIPS

use smips_disassembler::DisassemblerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Decode(#[from] DisassemblerError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Whether the run stopped on an undecodable instruction word
    pub fn is_decode_error(&self) -> bool {
        matches!(self, RuntimeError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
