//! Program listing renderer

use crate::decoder::decode_at;
use crate::error::Result;
use crate::formatter::format_line;
use smips_spec::Program;

/// Lazily render one listing line per instruction.
///
/// The iterator yields the failing word's error and then ends, so a decode
/// failure stops the listing at that instruction.
pub fn listing(program: &Program) -> impl Iterator<Item = Result<String>> + '_ {
    let mut failed = false;
    program
        .iter()
        .enumerate()
        .map(|(index, word)| decode_at(index, word).map(|instr| format_line(index, &instr)))
        .take_while(move |line| {
            let keep = !failed;
            failed = failed || line.is_err();
            keep
        })
}

/// Disassemble a program into listing text, one line per instruction
pub fn disassemble(program: &Program) -> Result<String> {
    let mut output = String::new();

    for line in listing(program) {
        output.push_str(&line?);
        output.push('\n');
    }

    Ok(output)
}
