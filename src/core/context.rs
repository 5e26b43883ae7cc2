use crate::config::Config;
use crate::core::cli::Cli;
use crate::core::types::OutputFormat;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::ui::console::Console;

/// Everything resolved once at startup and shared by one-shot and interactive runs.
#[derive(Debug)]
pub struct AppContext {
    pub logger: Logger,
    pub console: Console,
    /// Fixed for the whole process.
    pub count_only: bool,
    /// One-shot format, and the interactive session's starting format.
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::resolve(cli.config.as_deref())?;
        Ok(Self::new_with_console(config, cli, Console::stdio()))
    }

    /// Flags win over config values; `--count-only` can only switch counting on.
    pub fn new_with_console(config: Config, cli: &Cli, console: Console) -> Self {
        let count_only = cli.count_only || config.count_only();
        let format = cli.format.unwrap_or_else(|| config.format());

        let mut logger = Logger::new();
        logger.set_log_dir(&cli.logs);
        logger.set_file_logging_enabled(config.file_logging_enabled());
        for (key, description, value) in config.rows() {
            logger.info(
                format!("Config {key} ({description}) = {value}"),
                LogTarget::FileOnly,
            );
        }

        Self {
            logger,
            console,
            count_only,
            format,
        }
    }
}
