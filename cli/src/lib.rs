//! Report rendering for the `smips` binary.
//!
//! The binary only parses arguments and picks a writer; everything it prints
//! on stdout is produced here so it can be checked against an in-memory
//! buffer.

use anyhow::{Context, Result};
use smips_disassembler::listing;
use smips_runtime::{VMConfig, VM};
use smips_spec::Program;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Load a hex program file
pub fn load_program(path: &Path) -> Result<Program> {
    let file = File::open(path).with_context(|| format!("File {} failed to open!", path.display()))?;
    let program = Program::from_reader(BufReader::new(file))
        .with_context(|| path.display().to_string())?;
    tracing::debug!(path = %path.display(), instructions = program.len(), "program loaded");
    Ok(program)
}

/// Write the `Program` heading and listing.
///
/// Lines before an undecodable word are written and flushed; the decode
/// failure is returned with `path` as context.
pub fn write_listing<W: Write>(path: &Path, program: &Program, out: &mut W) -> Result<()> {
    writeln!(out, "Program")?;
    for line in listing(program) {
        match line {
            Ok(line) => writeln!(out, "{}", line)?,
            Err(e) => {
                out.flush()?;
                return Err(anyhow::Error::new(e).context(path.display().to_string()));
            }
        }
    }
    Ok(())
}

/// Write the full run report: listing, program output, register dump
pub fn write_report<W: Write>(
    path: &Path,
    program: Program,
    config: VMConfig,
    out: &mut W,
) -> Result<()> {
    write_listing(path, &program, out)?;

    writeln!(out, "Output")?;
    let result = VM::with_output(program, config, &mut *out)
        .run()
        .with_context(|| path.display().to_string())?;
    tracing::debug!(steps = result.steps, halt = ?result.halt_reason, "execution finished");
    let registers = result.registers;

    writeln!(out, "Registers After Execution")?;
    write!(out, "{}", registers)?;
    out.flush()?;
    Ok(())
}
