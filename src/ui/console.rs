use crate::core::types::OutputFormat;
use crate::errors::Result;
use std::fmt;
use std::io::{self, Write};

/// Primary (results) and diagnostic (prompts/notices) output streams.
///
/// Every prompt or notice takes the active [`OutputFormat`] so JSON sessions
/// keep stdout limited to result payloads.
pub struct Console {
    out: Box<dyn Write>,
    diag: Box<dyn Write>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdio()
    }
}

impl Console {
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    pub fn with_writers(out: impl Write + 'static, diag: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            diag: Box::new(diag),
        }
    }

    fn stream_for(&mut self, format: OutputFormat) -> &mut (dyn Write + 'static) {
        if format.routes_notices_to_diagnostic() {
            &mut *self.diag
        } else {
            &mut *self.out
        }
    }

    /// Writes a result payload (or a one-shot error line) to the primary stream.
    pub fn emit(&mut self, payload: &str) -> Result<()> {
        writeln!(self.out, "{payload}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn notice(&mut self, format: OutputFormat, message: &str) -> Result<()> {
        let stream = self.stream_for(format);
        writeln!(stream, "{message}")?;
        stream.flush()?;
        Ok(())
    }

    /// Like [`Console::notice`] but leaves the cursor on the prompt line.
    pub fn prompt(&mut self, format: OutputFormat, text: &str) -> Result<()> {
        let stream = self.stream_for(format);
        write!(stream, "{text}")?;
        stream.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
