//! # SMIPS Disassembler
//!
//! Decode SMIPS instruction words and render a program listing.
//!
//! The [`decode`] function is the one place instruction words are classified;
//! the runtime calls it too, so the listing and the simulator can never
//! disagree about what a word means.
//!
//! ## Example
//!
//! ```rust
//! use smips_spec::Program;
//! use smips_disassembler::disassemble;
//!
//! let program = Program::from_hex_str("2004000a 0000000c").unwrap();
//! let asm = disassemble(&program).unwrap();
//! assert_eq!(asm, "  0: addi $4, $0, 10\n  1: syscall\n");
//! ```

pub mod decoder;
pub mod disassembler;
pub mod error;
pub mod formatter;

pub use decoder::{decode, decode_at};
pub use disassembler::{disassemble, listing};
pub use error::{DisassemblerError, Result};
pub use formatter::{format, format_line};
