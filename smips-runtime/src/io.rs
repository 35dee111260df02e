//! I/O handling
//!
//! Text the running program produces through syscalls goes to a single
//! append-only writer.

use std::io::{self, Write};

#[derive(Debug)]
pub struct IOHandler<W: Write> {
    out: W,
    bytes_written: usize,
}

impl<W: Write> IOHandler<W> {
    pub fn new(out: W) -> Self {
        IOHandler {
            out,
            bytes_written: 0,
        }
    }

    /// Print a signed integer in decimal
    pub fn print_int(&mut self, value: i32) -> io::Result<()> {
        self.write_bytes(value.to_string().as_bytes())
    }

    /// Print a single byte
    pub fn print_char(&mut self, byte: u8) -> io::Result<()> {
        self.write_bytes(&[byte])
    }

    /// Print a diagnostic line in the output stream
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.write_bytes(text.as_bytes())?;
        self.write_bytes(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.bytes_written += bytes.len();
        Ok(())
    }
}
