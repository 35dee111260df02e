//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    /// The word matches no opcode or funct pattern
    #[error("invalid instruction code: {0:08x}")]
    InvalidEncoding(u32),

    /// An invalid word found inside a program; `position` is 1-based
    #[error("invalid instruction code: {word:08x} at position {position}")]
    InvalidInstruction { position: usize, word: u32 },
}

impl DisassemblerError {
    /// The offending instruction word
    pub fn word(&self) -> u32 {
        match self {
            DisassemblerError::InvalidEncoding(word)
            | DisassemblerError::InvalidInstruction { word, .. } => *word,
        }
    }

    /// Attach a zero-based program index to a bare encoding error
    pub fn at_index(self, index: usize) -> Self {
        DisassemblerError::InvalidInstruction {
            position: index + 1,
            word: self.word(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
