//! SMIPS simulator CLI.
//!
//! `smips <FILE>` loads a hex program, prints its listing, runs it and dumps
//! the nonzero registers:
//!
//! ```text
//! Program
//!   0: addi $4, $0, 10
//!   1: addi $2, $0, 1
//!   2: syscall
//! Output
//! 10Registers After Execution
//! $2  = 1
//! $4  = 10
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smips_cli::{load_program, write_listing, write_report};
use smips_runtime::VMConfig;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "smips",
    author,
    version,
    about = "Simulator for a small MIPS instruction subset",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hex program to run (same as `smips run <FILE>`)
    file: Option<PathBuf>,

    #[command(flatten)]
    run: RunOptions,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args, Debug, Clone, Default)]
struct RunOptions {
    /// Log every executed instruction (needs -vv or RUST_LOG=trace to show)
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the listing, run the program and dump registers
    Run {
        /// Hex program file
        file: PathBuf,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Print the program listing only
    Disasm {
        /// Hex program file
        file: PathBuf,
    },

    /// Assemble source text into the hex program format
    Assemble {
        /// Assembly source file
        source: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Run { file, options }) => cmd_run(&file, &options),
        Some(Commands::Disasm { file }) => cmd_disasm(&file),
        Some(Commands::Assemble { source, output }) => cmd_assemble(&source, output.as_deref()),
        None => match cli.file {
            Some(file) => cmd_run(&file, &cli.run),
            None => {
                eprintln!("Usage: smips <FILE>");
                eprintln!();
                eprintln!("  smips --help  for full options");
                process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the report on stdout.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cmd_run(path: &Path, options: &RunOptions) -> Result<()> {
    let program = load_program(path)?;
    let config = VMConfig {
        trace: options.trace,
        max_steps: options.max_steps,
    };
    write_report(path, program, config, &mut io::stdout().lock())
}

fn cmd_disasm(path: &Path) -> Result<()> {
    let program = load_program(path)?;
    let mut out = io::stdout().lock();
    write_listing(path, &program, &mut out)?;
    out.flush()?;
    Ok(())
}

fn cmd_assemble(source: &Path, output: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("File {} failed to open!", source.display()))?;
    let program = smips_assembler::assemble(&text)
        .with_context(|| source.display().to_string())?;
    let hex = program.to_hex_string();

    match output {
        Some(path) => fs::write(path, hex)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(hex.as_bytes())?,
    }
    Ok(())
}
