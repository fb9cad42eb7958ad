use num_bigint::BigUint;
use num_traits::One;

/// `n!` computed with an ascending `for` loop. `0! = 1`.
///
/// O(n) multiplications, O(1) auxiliary space.
pub fn factorial(n: u64) -> BigUint {
    let mut total = BigUint::one();
    for number in 0..n {
        total *= number + 1;
    }
    total
}

/// `n!` computed with a descending `while` loop.
///
/// O(n) multiplications, O(1) auxiliary space.
pub fn factorial_countdown(mut n: u64) -> BigUint {
    let mut total = BigUint::one();
    while n > 1 {
        total *= n;
        n -= 1;
    }
    total
}

/// `n!` computed recursively.
///
/// O(n) time and O(n) call-stack depth: each level waits on the next
/// before it can multiply.
pub fn factorial_recursive(n: u64) -> BigUint {
    if n < 2 {
        return BigUint::one();
    }
    factorial_recursive(n - 1) * n
}

/// `n!` as a single fold over `1..=n`.
pub fn factorial_fold(n: u64) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, x| acc * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACT_100: &str = "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000";

    fn variants() -> [(&'static str, fn(u64) -> BigUint); 4] {
        [
            ("factorial", factorial),
            ("factorial_countdown", factorial_countdown),
            ("factorial_recursive", factorial_recursive),
            ("factorial_fold", factorial_fold),
        ]
    }

    #[test]
    fn test_reference_values() {
        let fact_100: BigUint = FACT_100.parse().unwrap();
        for (name, f) in variants() {
            assert_eq!(f(0), BigUint::one(), "{name}(0)");
            assert_eq!(f(1), BigUint::one(), "{name}(1)");
            assert_eq!(f(10), BigUint::from(3_628_800u32), "{name}(10)");
            assert_eq!(f(100), fact_100, "{name}(100)");
        }
    }

    #[test]
    fn test_variants_agree() {
        for n in 0..=60 {
            let expected = factorial(n);
            for (name, f) in variants() {
                assert_eq!(f(n), expected, "{name}({n})");
            }
        }
    }

    #[test]
    fn test_recurrence() {
        for n in 1..=50u64 {
            assert_eq!(factorial(n), factorial(n - 1) * n);
        }
    }

    #[test]
    fn test_exceeds_u64() {
        // 21! no longer fits in 64 bits
        assert!(factorial(21) > BigUint::from(u64::MAX));
        assert_eq!(factorial(21).to_string(), "51090942171709440000");
    }
}
