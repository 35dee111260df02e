//! # Lexer for SMIPS Assembly Language

use logos::Logos;

/// Tokens for SMIPS assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Register (`$3`, `$t0`), stored without the `$`
    #[regex(r"\$[a-zA-Z0-9]+", |lex| lex.slice()[1..].to_string())]
    Register(String),

    /// Decimal number
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse().ok())]
    Number(i64),

    /// Hexadecimal number
    #[regex(r"-?0[xX][0-9a-fA-F]+", parse_hex)]
    Hex(i64),

    /// Comma
    #[token(",")]
    Comma,

    /// Newline
    #[regex(r"\n")]
    Newline,
}

fn parse_hex(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    let (negative, digits) = match slice.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, slice),
    };
    let value = i64::from_str_radix(&digits[2..], 16).ok()?;
    Some(if negative { -value } else { value })
}
