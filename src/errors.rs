use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error set.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Sieve --------------------------------------------------------------
    /// Raised when the requested limit is negative.
    #[error("limit must be non-negative")]
    InvalidLimit { limit: i64 },

    /// Raised when the limit cannot be addressed as a marking vector on this host.
    #[error("limit {limit} is too large for this platform")]
    LimitTooLarge { limit: i64 },

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the config file (missing, unreadable, invalid JSON).
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdin/stdout, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (json result rendering, config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer passthrough.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Helper to create a config error from any displayable value.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Whether the error comes from the sieve domain (reported to the user, never fatal).
    pub fn is_limit_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLimit { .. } | Error::LimitTooLarge { .. }
        )
    }
}
