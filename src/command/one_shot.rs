use crate::core::context::AppContext;
use crate::core::sieve::sieve_primes;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::ui::formatter::format_results;

/// Computes and prints the primes below `limit` once.
///
/// A rejected limit is reported as `Error: ...` on stdout and still returns
/// `Ok(())`, so the process exits successfully.
pub fn run(ctx: &mut AppContext, limit: i64) -> Result<()> {
    let primes = match sieve_primes(limit) {
        Ok(primes) => primes,
        Err(err) if err.is_limit_error() => {
            ctx.logger
                .warn(format!("Rejected limit {limit}: {err}"), LogTarget::FileOnly);
            return ctx.console.emit(&format!("Error: {err}"));
        }
        Err(err) => return Err(err),
    };

    ctx.logger.info(
        format!("One-shot: {} primes below {limit}", primes.len()),
        LogTarget::FileOnly,
    );
    let rendered = format_results(&primes, ctx.count_only, ctx.format)?;
    ctx.console.emit(&rendered)
}
