//! Main assembler logic

use crate::encoder::encode;
use crate::error::Result;
use crate::parser::parse_line;
use smips_spec::Program;

/// Assemble source code into a program
pub fn assemble(source: &str) -> Result<Program> {
    let mut program = Program::new();

    for (index, line) in source.lines().enumerate() {
        let line_num = index + 1;
        let instr = parse_line(line).map_err(|e| e.at_line(line_num))?;

        if let Some(instr) = instr {
            program
                .push(encode(&instr))
                .map_err(|e| crate::AssemblerError::from(e).at_line(line_num))?;
        }
    }

    Ok(program)
}
