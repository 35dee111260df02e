//! # Error Types for SMIPS

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmipsError {
    // Program format errors
    #[error("max instructions received (limit {max})")]
    ProgramTooLarge { max: usize },

    #[error("Invalid program image: {0}")]
    InvalidImage(#[from] bincode::Error),

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SmipsError>;
