//! SMIPS Assembler
//!
//! Assemble SMIPS assembly text into a loadable program.
//!
//! ## Example
//!
//! ```rust
//! use smips_assembler::assemble;
//!
//! let source = r#"
//!     addi $4, $0, 10
//!     addi $2, $0, 1
//!     syscall
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.to_hex_string(), "2004000a\n20020001\n0000000c\n");
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod parser;

pub use assembler::assemble;
pub use encoder::encode;
pub use error::{AssemblerError, Result};
pub use parser::{parse_instruction, parse_line, parse_register};
