use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::MenuError;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Line-based prompt/response channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), MenuError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a pre-formatted block as is.
    pub fn show(&mut self, block: impl Display) -> Result<(), MenuError> {
        write!(self.output, "{block}")?;
        Ok(())
    }

    /// Prints `label` and reads one line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    /// Returns [`MenuError::InputClosed`] once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn clear(&mut self) -> Result<(), MenuError> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), MenuError> {
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
