use std::io::BufRead;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::runtime::{Builder, Runtime};

use crate::errors::{Error, Result};
use crate::prompter::models::InputEvent;

pub trait InputSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Lines from any reader; never produces an interrupt.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ReaderSource<R> {
    fn next_event(&mut self) -> Result<InputEvent> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).map_err(Error::Io)?;
        if n == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }
}

/// Stdin lines raced against Ctrl+C on a current-thread runtime.
///
/// Once the first read has started, Ctrl+C no longer kills the process; it
/// surfaces as [`InputEvent::Interrupt`] at the next read boundary.
pub struct TerminalSource {
    // `None` only while dropping.
    runtime: Option<Runtime>,
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalSource {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let lines = BufReader::new(tokio::io::stdin()).lines();
        Ok(Self {
            runtime: Some(runtime),
            lines,
        })
    }
}

impl InputSource for TerminalSource {
    fn next_event(&mut self) -> Result<InputEvent> {
        let Some(runtime) = self.runtime.as_ref() else {
            return Ok(InputEvent::Eof);
        };
        let lines = &mut self.lines;
        runtime.block_on(async {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => Ok(InputEvent::Line(line)),
                    Ok(None) => Ok(InputEvent::Eof),
                    Err(err) => Err(Error::Io(err)),
                },
                signal = tokio::signal::ctrl_c() => match signal {
                    Ok(()) => Ok(InputEvent::Interrupt),
                    Err(err) => Err(Error::Io(err)),
                },
            }
        })
    }
}

impl Drop for TerminalSource {
    fn drop(&mut self) {
        // An interrupted stdin read may still be parked on the blocking pool.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
