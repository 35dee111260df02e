//! Assembly parser
//!
//! One instruction per line, in listing syntax:
//! `mnemonic [operand {, operand}]` where an operand is a register (`$4`,
//! `$a0`) or an immediate (`-1`, `0x7fff`).

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use logos::Logos;
use smips_spec::encoding::sign_extend16;
use smips_spec::{Instruction, Register};

/// Smallest immediate accepted in source (sign-extended form)
const IMM_MIN: i64 = -(1 << 15);

/// Largest immediate accepted in source (raw 16-bit pattern)
const IMM_MAX: i64 = (1 << 16) - 1;

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Register(String),
    Immediate(i64),
}

/// Parse a single instruction from assembly text
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    parse_line(text)?.ok_or_else(|| AssemblerError::SyntaxError {
        column: 1,
        message: "Empty instruction".to_string(),
    })
}

/// Parse one source line. Blank and comment-only lines yield `None`.
pub fn parse_line(text: &str) -> Result<Option<Instruction>> {
    let mut lex = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(token) = lex.next() {
        match token {
            Ok(Token::Newline) => break,
            Ok(token) => tokens.push((token, lex.span().start + 1)),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    column: lex.span().start + 1,
                    message: format!("unexpected `{}`", lex.slice()),
                })
            }
        }
    }

    let mut tokens = tokens.into_iter();
    let mnemonic = match tokens.next() {
        None => return Ok(None),
        Some((Token::Identifier(name), _)) => name.to_lowercase(),
        Some((_, column)) => {
            return Err(AssemblerError::SyntaxError {
                column,
                message: "expected instruction mnemonic".to_string(),
            })
        }
    };

    let operands = parse_operands(tokens)?;
    parse_mnemonic(&mnemonic, &operands).map(Some)
}

/// Parse register name, with or without the leading `$`
pub fn parse_register(name: &str) -> Result<Register> {
    let name = name.trim();
    let bare = name.strip_prefix('$').unwrap_or(name);

    let reg = if bare.bytes().all(|b| b.is_ascii_digit()) {
        bare.parse::<usize>().ok().and_then(Register::from_index)
    } else {
        Register::from_name(&bare.to_lowercase())
    };

    reg.ok_or_else(|| AssemblerError::InvalidRegister(bare.to_string()))
}

/// Operands are separated by single commas
fn parse_operands(tokens: impl Iterator<Item = (Token, usize)>) -> Result<Vec<Operand>> {
    let mut operands = Vec::new();
    let mut expect_operand = true;
    let mut last_column = 0;

    for (token, column) in tokens {
        last_column = column;
        match (token, expect_operand) {
            (Token::Register(name), true) => operands.push(Operand::Register(name)),
            (Token::Number(value) | Token::Hex(value), true) => {
                operands.push(Operand::Immediate(value))
            }
            (Token::Comma, false) => {}
            (token, true) => {
                return Err(AssemblerError::SyntaxError {
                    column,
                    message: format!("expected operand, found {:?}", token),
                })
            }
            (_, false) => {
                return Err(AssemblerError::SyntaxError {
                    column,
                    message: "expected `,` between operands".to_string(),
                })
            }
        }
        expect_operand = !expect_operand;
    }

    if expect_operand && !operands.is_empty() {
        return Err(AssemblerError::SyntaxError {
            column: last_column,
            message: "trailing `,`".to_string(),
        });
    }

    Ok(operands)
}

fn parse_mnemonic(mnemonic: &str, operands: &[Operand]) -> Result<Instruction> {
    match mnemonic {
        // System
        "syscall" => {
            expect_count(mnemonic, operands, 0)?;
            Ok(Instruction::Syscall)
        }

        // Register-register
        "add" | "sub" | "and" | "or" | "slt" | "mul" => {
            expect_count(mnemonic, operands, 3)?;
            let rd = register(&operands[0])?;
            let rs = register(&operands[1])?;
            let rt = register(&operands[2])?;
            Ok(match mnemonic {
                "add" => Instruction::Add { rd, rs, rt },
                "sub" => Instruction::Sub { rd, rs, rt },
                "and" => Instruction::And { rd, rs, rt },
                "or" => Instruction::Or { rd, rs, rt },
                "slt" => Instruction::Slt { rd, rs, rt },
                _ => Instruction::Mul { rd, rs, rt },
            })
        }

        // Branch: rs, rt, imm
        "beq" | "bne" => {
            expect_count(mnemonic, operands, 3)?;
            let rs = register(&operands[0])?;
            let rt = register(&operands[1])?;
            let imm = sign_extend16(immediate(&operands[2])?);
            Ok(if mnemonic == "beq" {
                Instruction::Beq { rs, rt, imm }
            } else {
                Instruction::Bne { rs, rt, imm }
            })
        }

        // Immediate: rt, rs, imm
        "addi" | "slti" | "andi" | "ori" => {
            expect_count(mnemonic, operands, 3)?;
            let rt = register(&operands[0])?;
            let rs = register(&operands[1])?;
            let raw = immediate(&operands[2])?;
            Ok(match mnemonic {
                "addi" => Instruction::Addi {
                    rt,
                    rs,
                    imm: sign_extend16(raw),
                },
                "slti" => Instruction::Slti {
                    rt,
                    rs,
                    imm: sign_extend16(raw),
                },
                "andi" => Instruction::Andi { rt, rs, imm: raw },
                _ => Instruction::Ori { rt, rs, imm: raw },
            })
        }

        "lui" => {
            expect_count(mnemonic, operands, 2)?;
            let rt = register(&operands[0])?;
            let imm = immediate(&operands[1])?;
            Ok(Instruction::Lui { rt, imm })
        }

        _ => Err(AssemblerError::UnknownInstruction(mnemonic.to_string())),
    }
}

fn expect_count(mnemonic: &str, operands: &[Operand], expected: usize) -> Result<()> {
    if operands.len() != expected {
        return Err(AssemblerError::OperandCount {
            mnemonic: mnemonic.to_string(),
            expected,
            found: operands.len(),
        });
    }
    Ok(())
}

fn register(operand: &Operand) -> Result<Register> {
    match operand {
        Operand::Register(name) => parse_register(name),
        Operand::Immediate(value) => Err(AssemblerError::SyntaxError {
            column: 0,
            message: format!("expected register, found immediate {}", value),
        }),
    }
}

/// Immediate as its 16-bit pattern. Negative values and values up to
/// `0xFFFF` are both accepted.
fn immediate(operand: &Operand) -> Result<u16> {
    match operand {
        Operand::Immediate(value) if (IMM_MIN..=IMM_MAX).contains(value) => Ok(*value as u16),
        Operand::Immediate(value) => Err(AssemblerError::InvalidImmediate(*value)),
        Operand::Register(name) => Err(AssemblerError::SyntaxError {
            column: 0,
            message: format!("expected immediate, found register ${}", name),
        }),
    }
}
