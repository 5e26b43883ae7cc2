use crate::errors::Result;
use crate::prompter::input::{InputSource, ReaderSource, TerminalSource};
use crate::prompter::models::{Flow, FlowCtrl, InputEvent};
use std::io::BufRead;

#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives `flow` from the terminal, turning Ctrl+C into interrupts.
    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let source = TerminalSource::new()?;
        self.run_with_source(flow, source)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, flow: F, reader: R) -> Result<()> {
        self.run_with_source(flow, ReaderSource::new(reader))
    }

    pub fn run_with_source<F: Flow, S: InputSource>(&self, mut flow: F, mut source: S) -> Result<()> {
        loop {
            flow.render()?;

            let ctrl = match source.next_event()? {
                InputEvent::Line(line) => flow.handle_input(&line)?,
                InputEvent::Interrupt => flow.handle_interrupt()?,
                InputEvent::Eof => return Ok(()),
            };

            match ctrl {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
