//! # Program Structure for SMIPS
//!
//! A program is an ordered list of at most [`MAX_INSTRUCTIONS`] instruction
//! words. Programs are loaded from hex text (one whitespace-separated token
//! per word) or from a compact `bincode` image.

use crate::error::{Result, SmipsError};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Maximum number of instruction words a program may hold
pub const MAX_INSTRUCTIONS: usize = 1000;

/// A loaded SMIPS program
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instruction words in program order
    pub code: Vec<u32>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Create a program from instruction words, enforcing the size limit
    pub fn from_words(code: Vec<u32>) -> Result<Self> {
        if code.len() > MAX_INSTRUCTIONS {
            return Err(SmipsError::ProgramTooLarge {
                max: MAX_INSTRUCTIONS,
            });
        }
        Ok(Self { code })
    }

    /// Append one instruction word
    pub fn push(&mut self, word: u32) -> Result<()> {
        if self.code.len() >= MAX_INSTRUCTIONS {
            return Err(SmipsError::ProgramTooLarge {
                max: MAX_INSTRUCTIONS,
            });
        }
        self.code.push(word);
        Ok(())
    }

    /// Parse whitespace-separated hex words.
    ///
    /// See [`Program::from_hex_bytes`] for the token rules.
    pub fn from_hex_str(text: &str) -> Result<Self> {
        Self::from_hex_bytes(text.as_bytes())
    }

    /// Parse whitespace-separated hex words from raw bytes.
    ///
    /// Loading is tolerant: a token that does not start with a hex digit ends
    /// the program, and a token with trailing garbage contributes its leading
    /// hex digits and then ends the program. Bytes that are not valid UTF-8
    /// are just another malformed token. Each token may carry a leading `+`
    /// or `-` (negation wraps, so `-1` is `ffffffff`) followed by an optional
    /// `0x` prefix. Exceeding [`MAX_INSTRUCTIONS`] is an error.
    pub fn from_hex_bytes(bytes: &[u8]) -> Result<Self> {
        let mut program = Self::new();

        for token in bytes.split(is_space).filter(|t| !t.is_empty()) {
            let (negative, unsigned) = match token.split_first() {
                Some((b'-', rest)) => (true, rest),
                Some((b'+', rest)) => (false, rest),
                _ => (false, token),
            };
            let digits = unsigned
                .strip_prefix(b"0x")
                .or_else(|| unsigned.strip_prefix(b"0X"))
                .unwrap_or(unsigned);
            let run = digits.iter().take_while(|b| b.is_ascii_hexdigit()).count();

            if run == 0 {
                tracing::warn!(
                    token = %String::from_utf8_lossy(token),
                    loaded = program.len(),
                    "stopping at malformed hex token"
                );
                break;
            }

            // Digits beyond the low 32 bits are shifted out.
            let magnitude = digits[..run]
                .iter()
                .fold(0u32, |acc, &b| (acc << 4) | hex_value(b));
            let word = if negative {
                magnitude.wrapping_neg()
            } else {
                magnitude
            };
            program.push(word)?;

            if run < digits.len() {
                tracing::warn!(
                    token = %String::from_utf8_lossy(token),
                    loaded = program.len(),
                    "stopping after partial hex token"
                );
                break;
            }
        }

        tracing::debug!(instructions = program.len(), "loaded hex program");
        Ok(program)
    }

    /// Read hex text from any reader and parse it with [`Program::from_hex_bytes`]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_hex_bytes(&bytes)
    }

    /// Render as hex text, one eight-digit word per line
    pub fn to_hex_string(&self) -> String {
        self.code.iter().map(|word| format!("{:08x}\n", word)).collect()
    }

    /// Serialize to a `bincode` image
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from a `bincode` image, re-checking the size limit
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let program: Program = bincode::deserialize(bytes)?;
        Self::from_words(program.code)
    }

    /// Number of instruction words
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Instruction word at a zero-based index
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.code.get(index).copied()
    }

    /// Iterate over instruction words in program order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.code.iter().copied()
    }
}

/// Token separator: ASCII whitespace plus vertical tab
fn is_space(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0B
}

fn hex_value(b: u8) -> u32 {
    (b as char).to_digit(16).unwrap_or(0)
}
