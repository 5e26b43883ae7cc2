use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Encoding used to render a prime report.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Primes: [..]` followed by `Total primes: N`.
    #[default]
    Plain,
    /// One compact JSON object per result.
    Json,
    /// Comma-joined primes, then the count.
    Csv,
}

impl OutputFormat {
    pub fn try_from(s: &str) -> Result<Self> {
        <Self as FromStr>::from_str(s.trim()).map_err(|_| {
            Error::config(format!(
                "Unsupported output format: '{}'. Valid formats: {}",
                s.trim(),
                valid_csv::<OutputFormat>()
            ))
        })
    }

    /// JSON keeps stdout machine-readable, so prompts and notices go to stderr.
    pub fn routes_notices_to_diagnostic(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}
