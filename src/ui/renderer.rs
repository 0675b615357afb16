use std::io::Write;

use anyhow::Result;

use crate::models::ParseResult;

/// Shows the outcome of an upload to the user.
pub trait Renderer {
    fn render_message(&mut self, message: &str) -> Result<()>;

    /// Displays a full envelope. By default only its message is shown, whatever the status.
    fn render_result(&mut self, result: &ParseResult) -> Result<()> {
        self.render_message(result.message())
    }
}

/// Writes messages, and optionally the JSON envelope, to any writer.
pub struct TerminalRenderer<W: Write> {
    output: W,
    json: bool
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            json: false
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        Ok(())
    }

    fn render_result(&mut self, result: &ParseResult) -> Result<()> {
        writeln!(self.output, "{}", result.message())?;

        if self.json {
            serde_json::to_writer_pretty(&mut self.output, result)?;
            writeln!(self.output)?;
        }

        self.output.flush()?;

        Ok(())
    }
}
