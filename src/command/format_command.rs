use crate::core::types::OutputFormat;
use crate::extensions::enums::valid_choices;

pub const FORMAT_COMMAND: &str = "/format";

/// A line starting with `/format`, with the requested format if it was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Switch(OutputFormat),
    Invalid,
}

impl FormatCommand {
    /// `None` when `line` is not a format command at all.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix(FORMAT_COMMAND)?;
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Some(FormatCommand::Invalid);
        }
        Some(
            OutputFormat::try_from(rest)
                .map(FormatCommand::Switch)
                .unwrap_or(FormatCommand::Invalid),
        )
    }

    pub fn usage() -> String {
        format!(
            "Usage: {FORMAT_COMMAND} <{}>",
            valid_choices::<OutputFormat>("|")
        )
    }

    pub fn acknowledgement(format: OutputFormat) -> String {
        format!("Output format set to {format}.")
    }
}
