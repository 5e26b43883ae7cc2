use crate::command::format_command::FormatCommand;
use crate::core::context::AppContext;
use crate::core::sieve::sieve_primes;
use crate::core::types::OutputFormat;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::prompter::models::{Flow, FlowCtrl, SessionState};
use crate::ui::formatter::format_results;

const LIMIT_PROMPT: &str = "Enter an integer limit (exclusive): ";
const CONFIRM_EXIT_PROMPT: &str = "\nAre you sure you want to go? (y/n): ";
const INVALID_INPUT: &str = "Invalid input. Please enter a valid integer.";
const FAREWELL: &str = "Goodbye!";

/// The interactive prime loop.
///
/// Owns the current output format; count-only comes from the context and
/// never changes.
pub struct SessionFlow<'a> {
    ctx: &'a mut AppContext,
    format: OutputFormat,
    state: SessionState,
}

impl<'a> SessionFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let format = ctx.format;
        Self {
            ctx,
            format,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl<'a> Flow for SessionFlow<'a> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            SessionState::AwaitingInput => self.ctx.console.prompt(self.format, LIMIT_PROMPT),
            SessionState::ConfirmingExit => {
                self.ctx.console.prompt(self.format, CONFIRM_EXIT_PROMPT)
            }
            SessionState::Terminating => Ok(()),
        }
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.state {
            SessionState::AwaitingInput => self.handle_line(input.trim()),
            SessionState::ConfirmingExit => self.handle_confirmation(input),
            SessionState::Terminating => Ok(FlowCtrl::Finish),
        }
    }

    fn handle_interrupt(&mut self) -> Result<FlowCtrl> {
        match self.state {
            SessionState::AwaitingInput => {
                self.ctx
                    .logger
                    .info("Interrupt received; confirming exit", LogTarget::FileOnly);
                self.state = SessionState::ConfirmingExit;
                Ok(FlowCtrl::Continue)
            }
            // A second Ctrl+C at the confirmation prompt leaves without asking again.
            SessionState::ConfirmingExit => {
                self.ctx.console.notice(self.format, "")?;
                self.terminate()?;
                Ok(FlowCtrl::Finish)
            }
            SessionState::Terminating => Ok(FlowCtrl::Finish),
        }
    }
}

impl<'a> SessionFlow<'a> {
    fn handle_line(&mut self, line: &str) -> Result<FlowCtrl> {
        if let Some(command) = FormatCommand::parse(line) {
            self.switch_format(command)?;
            return Ok(FlowCtrl::Continue);
        }

        match line.parse::<i64>() {
            Ok(limit) => self.compute(limit)?,
            Err(_) => self.ctx.console.notice(self.format, INVALID_INPUT)?,
        }
        Ok(FlowCtrl::Continue)
    }

    fn switch_format(&mut self, command: FormatCommand) -> Result<()> {
        match command {
            FormatCommand::Switch(format) => {
                self.format = format;
                self.ctx
                    .logger
                    .info(format!("Output format set to {format}"), LogTarget::FileOnly);
                self.ctx
                    .console
                    .notice(self.format, &FormatCommand::acknowledgement(format))
            }
            FormatCommand::Invalid => self
                .ctx
                .console
                .notice(self.format, &FormatCommand::usage()),
        }
    }

    fn compute(&mut self, limit: i64) -> Result<()> {
        let primes = match sieve_primes(limit) {
            Ok(primes) => primes,
            Err(err) if err.is_limit_error() => {
                self.ctx
                    .logger
                    .warn(format!("Rejected limit {limit}: {err}"), LogTarget::FileOnly);
                return self.ctx.console.notice(self.format, &err.to_string());
            }
            Err(err) => return Err(err),
        };

        self.ctx.logger.info(
            format!("{} primes below {limit} ({})", primes.len(), self.format),
            LogTarget::FileOnly,
        );
        let rendered = format_results(&primes, self.ctx.count_only, self.format)?;
        self.ctx.console.emit(&rendered)
    }

    fn handle_confirmation(&mut self, answer: &str) -> Result<FlowCtrl> {
        if answer.trim().eq_ignore_ascii_case("y") {
            self.terminate()?;
            return Ok(FlowCtrl::Finish);
        }
        self.state = SessionState::AwaitingInput;
        Ok(FlowCtrl::Continue)
    }

    fn terminate(&mut self) -> Result<()> {
        self.state = SessionState::Terminating;
        self.ctx.logger.info("Session ended", LogTarget::FileOnly);
        self.ctx.console.notice(self.format, FAREWELL)
    }
}
