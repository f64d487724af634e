use std::io::Write;

use crate::generator::errors::SinkError;

/// Destination for accepted equations
pub trait EquationSink {
    /// # Errors
    ///
    /// Returns an error if the equation cannot be recorded.
    fn emit(&mut self, equation: &str) -> Result<(), SinkError>;

    /// # Errors
    ///
    /// Returns an error if buffered output cannot be flushed.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl EquationSink for Vec<String> {
    fn emit(&mut self, equation: &str) -> Result<(), SinkError> {
        self.push(equation.to_string());
        Ok(())
    }
}

/// Writes a single-column `equation` table, one row per line
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    writer: W,
    header_written: bool,
    rows: u64,
}

impl<W: Write> TableWriter<W> {
    pub const HEADER: &'static str = "equation";

    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
            rows: 0,
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<(), SinkError> {
        if !self.header_written {
            writeln!(self.writer, "{}", Self::HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> EquationSink for TableWriter<W> {
    fn emit(&mut self, equation: &str) -> Result<(), SinkError> {
        self.write_header()?;
        writeln!(self.writer, "{}", equation)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.write_header()?;
        self.writer.flush()?;
        Ok(())
    }
}
