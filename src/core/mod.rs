pub mod cli;
pub mod context;
pub mod sieve;
pub mod types;
