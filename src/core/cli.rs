use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::core::types::OutputFormat;

/// Enumerate primes below a limit using the Sieve of Eratosthenes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "primes",
    about = "Enumerate primes below the provided limit using the Sieve of Eratosthenes.",
    version,
    disable_version_flag = true
)]
pub struct Cli {
    /// Upper bound (exclusive) for the primes to enumerate. Interactive mode when omitted.
    #[arg(short, long, value_name = "INTEGER", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Only print the count of primes, omitting the list itself.
    #[arg(short, long)]
    pub count_only: bool,

    /// Output format [default: plain, or the config file's value].
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Optional JSON config file supplying defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for session log files.
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub logs: PathBuf,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
