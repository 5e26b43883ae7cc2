use crate::core::types::OutputFormat;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// JSON shape of a result: `count` always, `primes` unless count-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeReport {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes: Option<Vec<u64>>,
}

impl PrimeReport {
    pub fn new(primes: &[u64], count_only: bool) -> Self {
        Self {
            count: primes.len(),
            primes: (!count_only).then(|| primes.to_vec()),
        }
    }
}

/// Renders `primes` in `format`. Lines are `\n`-separated with no trailing newline.
pub fn format_results(primes: &[u64], count_only: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(format_plain(primes, count_only)),
        OutputFormat::Json => Ok(serde_json::to_string(&PrimeReport::new(primes, count_only))?),
        OutputFormat::Csv => format_csv(primes, count_only),
    }
}

fn format_plain(primes: &[u64], count_only: bool) -> String {
    let total = format!("Total primes: {}", primes.len());
    if count_only {
        return total;
    }
    let listed = primes
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Primes: [{listed}]\n{total}")
}

fn format_csv(primes: &[u64], count_only: bool) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());

    // csv quotes a lone empty field, so an empty list is added as a blank line below.
    if !count_only && !primes.is_empty() {
        writer.write_record(primes.iter().map(u64::to_string))?;
    }
    writer.write_record([primes.len().to_string()])?;

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.trim_end_matches(['\r', '\n']);
    if !count_only && primes.is_empty() {
        return Ok(format!("\n{text}"));
    }
    Ok(text.to_string())
}
