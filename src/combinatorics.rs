use num_bigint::BigUint;

use crate::error::{MathError, Result};
use crate::factorial::factorial;

/// Returns a function `c(n, k)` counting the ways to choose `k` items from a
/// set of `n`, valid for `n <= max_n`.
///
/// `c(n, k) = n! / (k! (n - k)!)`. Calling it with `n > max_n` yields
/// [`MathError::OutOfRange`]; `k > n` yields [`MathError::InvalidArgument`].
pub fn combinations_fn(max_n: u64) -> impl Fn(u64, u64) -> Result<BigUint> {
    move |n, k| {
        if n > max_n {
            tracing::warn!(n, max_n, "combinations called beyond its bound");
            return Err(MathError::OutOfRange { n, max_n });
        }
        check_selection("combinations", n, k)?;
        Ok(factorial(n) / (factorial(k) * factorial(n - k)))
    }
}

/// Number of ways to order `k` items chosen from a set of `n`: `n! / (n - k)!`.
pub fn permutations(n: u64, k: u64) -> Result<BigUint> {
    check_selection("permutations", n, k)?;
    Ok(factorial(n) / factorial(n - k))
}

fn check_selection(name: &str, n: u64, k: u64) -> Result<()> {
    if k > n {
        return Err(MathError::invalid(format!(
            "{name}(n, k) requires k <= n, but found {name}({n}, {k})"
        )));
    }
    Ok(())
}
