use crate::errors::{Error, Result};

/// Returns every prime strictly below `limit`, ascending.
///
/// Sieve of Eratosthenes over a marking vector of `limit` entries. Each prime
/// `c <= isqrt(limit - 1)` strikes its multiples starting at `c * c`.
///
/// # Errors
///
/// [`Error::InvalidLimit`] when `limit` is negative, [`Error::LimitTooLarge`]
/// when the marking vector cannot be allocated.
pub fn sieve_primes(limit: i64) -> Result<Vec<u64>> {
    if limit < 0 {
        return Err(Error::InvalidLimit { limit });
    }
    if limit < 2 {
        return Ok(Vec::new());
    }
    let size = usize::try_from(limit).map_err(|_| Error::LimitTooLarge { limit })?;

    let mut is_prime: Vec<bool> = Vec::new();
    is_prime
        .try_reserve_exact(size)
        .map_err(|_| Error::LimitTooLarge { limit })?;
    is_prime.resize(size, true);
    is_prime[0] = false;
    is_prime[1] = false;

    for candidate in 2..=(size - 1).isqrt() {
        if !is_prime[candidate] {
            continue;
        }
        for multiple in (candidate * candidate..size).step_by(candidate) {
            is_prime[multiple] = false;
        }
    }

    Ok(is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &flag)| flag.then_some(value as u64))
        .collect())
}
