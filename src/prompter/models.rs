use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
    /// Called when the user interrupts (Ctrl+C) while input is awaited.
    fn handle_interrupt(&mut self) -> Result<FlowCtrl>;
}

/// What the prompter got back from one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupt,
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,  // prompt for a limit or a command
    ConfirmingExit, // interrupted, asking y/n
    Terminating,    // farewell printed, loop is ending
}
