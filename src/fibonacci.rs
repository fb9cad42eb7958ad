use std::iter::FusedIterator;
use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The `n`th Fibonacci number, computed iteratively.
///
/// O(n) time, O(1) auxiliary space: only two rolling accumulators are kept.
pub fn fibonacci(n: u64) -> BigUint {
    let mut first = BigUint::zero();
    let mut second = BigUint::one();
    for _ in 0..n {
        let next = &first + &second;
        first = mem::replace(&mut second, next);
    }
    first
}

/// Lazily yields `fib(0)` through `fib(n)`, `n + 1` values in total.
///
/// Each value is computed only when it is requested, so stopping early never
/// pays for the rest of the sequence. The cursor is forward-only and cannot
/// be rewound; call this function again for a fresh sequence.
pub fn fibonacci_sequence(n: u64) -> FibonacciSequence {
    FibonacciSequence {
        // fib(-1) = 1 makes the first advance produce fib(1) with no special case.
        previous: BigUint::one(),
        current: BigUint::zero(),
        next_index: 0,
        last: n,
        done: false,
    }
}

/// Iterator returned by [`fibonacci_sequence`].
#[derive(Debug)]
pub struct FibonacciSequence {
    previous: BigUint,
    current: BigUint,
    next_index: u64,
    last: u64,
    done: bool,
}

impl Iterator for FibonacciSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.done {
            return None;
        }
        if self.next_index > 0 {
            let next = &self.previous + &self.current;
            self.previous = mem::replace(&mut self.current, next);
        }
        if self.next_index == self.last {
            self.done = true;
        } else {
            self.next_index += 1;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.last - self.next_index).checked_add(1);
        match remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FibonacciSequence {}

/// The `n`th Fibonacci number via two recursive calls per level.
///
/// O(φ^n) time: `fib(n - 2)` is recomputed inside `fib(n - 1)` and so on
/// all the way down. Kept naive on purpose; use [`fibonacci`] for real work.
pub fn fibonacci_recursive(n: u64) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigUint {
        s.parse().unwrap()
    }

    #[test]
    fn test_fibonacci_reference_values() {
        assert_eq!(fibonacci(0), BigUint::zero());
        assert_eq!(fibonacci(1), BigUint::one());
        assert_eq!(fibonacci(2), BigUint::one());
        assert_eq!(fibonacci(20), BigUint::from(6765u32));
        assert_eq!(fibonacci(100), big("354224848179261915075"));
    }

    #[test]
    fn test_sequence_first_eleven() {
        let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]
            .into_iter()
            .map(BigUint::from)
            .collect();
        let seq: Vec<BigUint> = fibonacci_sequence(10).collect();
        assert_eq!(seq, expected);
    }

    #[test]
    fn test_sequence_of_zero_yields_only_fib_zero() {
        let seq: Vec<BigUint> = fibonacci_sequence(0).collect();
        assert_eq!(seq, vec![BigUint::zero()]);
    }

    #[test]
    fn test_sequence_is_exhausted_for_good() {
        let mut seq = fibonacci_sequence(2);
        assert_eq!(seq.size_hint(), (3, Some(3)));
        assert_eq!(seq.by_ref().count(), 3);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_sequence_stops_computing_at_last_request() {
        let mut seq = fibonacci_sequence(1000);
        let taken: Vec<BigUint> = seq.by_ref().take(4).collect();
        assert_eq!(taken.last(), Some(&BigUint::from(2u32)));
        // Nothing past fib(3) has been computed yet.
        assert_eq!(seq.current, BigUint::from(2u32));
        assert_eq!(seq.previous, BigUint::one());
        assert_eq!(seq.next(), Some(BigUint::from(3u32)));
    }

    #[test]
    fn test_sequence_matches_scalar() {
        for (i, value) in fibonacci_sequence(150).enumerate() {
            assert_eq!(value, fibonacci(i as u64), "fib({i})");
        }
    }

    #[test]
    fn test_recursive_agrees_with_iterative() {
        for n in [0, 1, 2, 5, 20] {
            assert_eq!(fibonacci_recursive(n), fibonacci(n), "fib({n})");
        }
    }

    #[test]
    fn test_large_sequence_size_hint() {
        let seq = fibonacci_sequence(u64::MAX);
        assert_eq!(seq.size_hint(), (usize::MAX, None));
    }
}
