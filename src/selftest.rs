use std::collections::BTreeSet;
use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::combinatorics::{combinations_fn, permutations};
use crate::error::MathError;
use crate::factorial::{factorial, factorial_countdown, factorial_fold, factorial_recursive};
use crate::fibonacci::{fibonacci, fibonacci_recursive, fibonacci_sequence};
use crate::pascal::{next_row, next_row_zipped, triangle, triangle_unfolded, Row};
use crate::permute::{permute_expr, permute_lazy, permute_recursive};
use crate::powerset::{power_list, power_list_expr};

type Check = Box<dyn Fn() -> bool + Send + Sync>;

/// Naive recursion above this point takes too long for a quick run.
const RECURSIVE_FIB_LIMIT: u64 = 24;

/// One named check of one function.
pub struct Case {
    pub function: &'static str,
    pub label: String,
    check: Check,
}

impl Case {
    pub fn new(
        function: &'static str,
        label: impl Into<String>,
        check: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Case {
            function,
            label: label.into(),
            check: Box::new(check),
        }
    }
}

/// Result of running a single [`Case`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub function: &'static str,
    pub label: String,
    pub passed: bool,
}

/// Totals over a run, with the distinct names of functions that failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub failing: BTreeSet<&'static str>,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            if outcome.passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
                summary.failing.insert(outcome.function);
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "====================")?;
        writeln!(f, "TOTAL TESTS: {}", self.total())?;
        writeln!(f, "PASSED: {}", self.passed)?;
        writeln!(f, "FAILED: {}", self.failed)?;
        if !self.all_passed() {
            writeln!(f, "INSPECT THE FOLLOWING")?;
            for name in &self.failing {
                writeln!(f, "==> {name}")?;
            }
        }
        write!(f, "====================")
    }
}

/// Runs every case in parallel, keeping the input order in the output.
pub fn run(cases: &[Case]) -> Vec<Outcome> {
    tracing::info!(cases = cases.len(), "running self-test cases");
    cases
        .par_iter()
        .map(|case| {
            let passed = (case.check)();
            if !passed {
                tracing::debug!(function = case.function, label = %case.label, "case failed");
            }
            Outcome {
                function: case.function,
                label: case.label.clone(),
                passed,
            }
        })
        .collect()
}

fn big(digits: &str) -> BigUint {
    digits.parse().expect("reference values are decimal literals")
}

fn row(values: &[u64]) -> Row {
    values.iter().copied().map(BigUint::from).collect()
}

/// The fixed reference cases for every function.
pub fn reference_cases() -> Vec<Case> {
    let mut cases = Vec::new();

    let factorials: [(&'static str, fn(u64) -> BigUint); 4] = [
        ("factorial", factorial),
        ("factorial_countdown", factorial_countdown),
        ("factorial_recursive", factorial_recursive),
        ("factorial_fold", factorial_fold),
    ];
    let fact_answers = [
        (0, "1"),
        (1, "1"),
        (10, "3628800"),
        (100, "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000"),
    ];
    for (name, f) in factorials {
        for (n, answer) in fact_answers {
            cases.push(Case::new(name, n.to_string(), move || f(n) == big(answer)));
        }
    }

    for (n, answer) in [(0, "0"), (1, "1"), (2, "1"), (20, "6765"), (100, "354224848179261915075")] {
        cases.push(Case::new("fibonacci", n.to_string(), move || {
            fibonacci(n) == big(answer)
        }));
    }
    for (n, answer) in [(0, 0u32), (1, 1), (2, 1), (5, 5), (20, 6765)] {
        cases.push(Case::new("fibonacci_recursive", n.to_string(), move || {
            fibonacci_recursive(n) == BigUint::from(answer)
        }));
    }
    cases.push(Case::new("fibonacci_sequence", "10", || {
        fibonacci_sequence(10).collect::<Vec<_>>() == row(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55])
    }));

    let successors: [(&'static str, fn(&[BigUint]) -> crate::Result<Row>); 2] =
        [("next_row", next_row), ("next_row_zipped", next_row_zipped)];
    let row_answers: [(&[u64], &[u64]); 3] = [
        (&[1], &[1, 1]),
        (&[1, 1], &[1, 2, 1]),
        (
            &[1, 9, 36, 84, 126, 126, 84, 36, 9, 1],
            &[1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1],
        ),
    ];
    for (name, f) in successors {
        for (input, answer) in row_answers {
            let (input, answer) = (row(input), row(answer));
            cases.push(Case::new(name, format!("{input:?}"), move || {
                f(&input) == Ok(answer.clone())
            }));
        }
    }

    let tables: [(&'static str, fn(usize) -> crate::pascal::Table); 2] =
        [("triangle", triangle), ("triangle_unfolded", triangle_unfolded)];
    for (name, f) in tables {
        cases.push(Case::new(name, "1", move || f(1) == vec![row(&[1]), row(&[1, 1])]));
        cases.push(Case::new(name, "2", move || {
            f(2) == vec![row(&[1]), row(&[1, 1]), row(&[1, 2, 1])]
        }));
        cases.push(Case::new(name, "10", move || {
            let table = f(10);
            table.len() == 11
                && table.last() == Some(&row(&[1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]))
        }));
    }

    for (n, k, answer) in [
        (0, 0, "1"),
        (60, 23, "23385332420868600"),
        (100, 50, "100891344545564193334812497256"),
    ] {
        cases.push(Case::new("combinations", format!("{n},{k}"), move || {
            combinations_fn(100)(n, k) == Ok(big(answer))
        }));
    }
    cases.push(Case::new("combinations", "150,10", || {
        combinations_fn(100)(150, 10) == Err(MathError::OutOfRange { n: 150, max_n: 100 })
    }));

    for (n, k, answer) in [(7, 5, 2520u32), (7, 1, 7)] {
        cases.push(Case::new("permutations", format!("{n},{k}"), move || {
            permutations(n, k) == Ok(BigUint::from(answer))
        }));
    }

    let expected_power_set: Vec<Vec<u32>> = vec![
        vec![],
        vec![1],
        vec![2],
        vec![1, 2],
        vec![3],
        vec![1, 3],
        vec![2, 3],
        vec![1, 2, 3],
    ];
    let power_sets: [(&'static str, fn(&[u32]) -> crate::Result<Vec<Vec<u32>>>); 2] =
        [("power_list", power_list), ("power_list_expr", power_list_expr)];
    for (name, f) in power_sets {
        let expected = expected_power_set.clone();
        cases.push(Case::new(name, "1,2,3", move || f(&[1, 2, 3]) == Ok(expected.clone())));
    }
    let mixed = ["1.2", "hello", "false"];
    let expected_mixed: Vec<Vec<&str>> = vec![
        vec![],
        vec!["1.2"],
        vec!["hello"],
        vec!["1.2", "hello"],
        vec!["false"],
        vec!["1.2", "false"],
        vec!["hello", "false"],
        vec!["1.2", "hello", "false"],
    ];
    type MixedPowerSet = fn(&[&'static str]) -> crate::Result<Vec<Vec<&'static str>>>;
    let mixed_power_sets: [(&'static str, MixedPowerSet); 2] =
        [("power_list", power_list), ("power_list_expr", power_list_expr)];
    for (name, f) in mixed_power_sets {
        let expected = expected_mixed.clone();
        cases.push(Case::new(name, "1.2,hello,false", move || {
            f(&mixed) == Ok(expected.clone())
        }));
    }

    let permuters: [(&'static str, fn(&[char]) -> Vec<Vec<char>>); 3] = [
        ("permute_recursive", permute_recursive),
        ("permute_lazy", |items| permute_lazy(items).collect()),
        ("permute_expr", permute_expr),
    ];
    for (name, f) in permuters {
        cases.push(Case::new(name, "a,b,c", move || {
            f(&['a', 'b', 'c'])
                == vec![
                    vec!['a', 'b', 'c'],
                    vec!['a', 'c', 'b'],
                    vec!['b', 'a', 'c'],
                    vec!['b', 'c', 'a'],
                    vec!['c', 'a', 'b'],
                    vec!['c', 'b', 'a'],
                ]
        }));
    }

    cases
}

/// Number of distinct kinds of random cross-check.
const RANDOM_ARMS: u32 = 7;

/// Largest table built by a random cross-check.
const TABLE_LIMIT: u64 = 200;

/// Deepest recursive factorial attempted by a random cross-check.
const RECURSIVE_FACT_LIMIT: u64 = 2_000;

/// `count` random cross-checks between variants, reproducible from `seed`.
///
/// Numeric arguments are drawn from `0..=max_n`; tables, enumerations and
/// recursion depths are kept small regardless of `max_n`.
pub fn random_cases(count: usize, seed: u64, max_n: u64) -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let arm = rng.gen_range(0..RANDOM_ARMS);
            random_case(arm, &mut rng, max_n)
        })
        .collect()
}

fn random_case<R: Rng>(arm: u32, rng: &mut R, max_n: u64) -> Case {
    let n = rng.gen_range(0..=max_n);
    let k = rng.gen_range(0..=n);
    match arm {
        0 => Case::new("factorial", format!("variants agree at {n}"), move || {
            let expected = factorial(n);
            factorial_countdown(n) == expected
                && factorial_fold(n) == expected
                && (n > RECURSIVE_FACT_LIMIT || factorial_recursive(n) == expected)
                && (n == 0 || expected == factorial(n - 1) * n)
        }),
        1 => Case::new("fibonacci", format!("variants agree at {n}"), move || {
            let expected = fibonacci(n);
            fibonacci_sequence(n).last() == Some(expected.clone())
                && (n > RECURSIVE_FIB_LIMIT || fibonacci_recursive(n) == expected)
        }),
        2 => {
            let rows = n.min(TABLE_LIMIT) as usize;
            Case::new("triangle", format!("variants agree at {rows}"), move || {
                let table = triangle(rows);
                table == triangle_unfolded(rows)
                    && table.iter().enumerate().all(|(i, r)| {
                        r.len() == i + 1
                            && r.iter().eq(r.iter().rev())
                            && r.iter().sum::<BigUint>() == BigUint::one() << i
                    })
            })
        }
        3 => {
            let n = n.min(TABLE_LIMIT);
            let k = rng.gen_range(0..=n);
            Case::new("combinations", format!("{n},{k} matches triangle"), move || {
                let rows = triangle(n as usize);
                combinations_fn(max_n)(n, k) == Ok(rows[n as usize][k as usize].clone())
            })
        }
        4 => Case::new("permutations", format!("{n},{k} = c(n,k) * k!"), move || {
            let c = combinations_fn(n);
            match (permutations(n, k), c(n, k)) {
                (Ok(p), Ok(choose)) => p == choose * factorial(k),
                _ => false,
            }
        }),
        5 => {
            let items: Vec<u64> = (0..rng.gen_range(0..=10)).map(|_| rng.gen()).collect();
            Case::new("power_list", format!("{} items", items.len()), move || {
                match (power_list(&items), power_list_expr(&items)) {
                    (Ok(a), Ok(b)) => a == b && a.len() == 1usize << items.len(),
                    _ => false,
                }
            })
        }
        _ => {
            let items: Vec<u8> = (0..rng.gen_range(0..=6)).map(|_| rng.gen()).collect();
            Case::new("permute_recursive", format!("{} items", items.len()), move || {
                let recursive = permute_recursive(&items);
                recursive == permute_lazy(&items).collect::<Vec<_>>()
                    && recursive == permute_expr(&items)
                    && BigUint::from(recursive.len()) == factorial(items.len() as u64)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cases_all_pass() {
        let outcomes = run(&reference_cases());
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed).collect();
        assert!(failed.is_empty(), "failing cases: {failed:?}");
    }

    #[test]
    fn test_random_cases_all_pass() {
        let outcomes = run(&random_cases(60, 7, 80));
        assert_eq!(outcomes.len(), 60);
        assert!(outcomes.iter().all(|o| o.passed), "{outcomes:?}");
    }

    #[test]
    fn test_combination_checks_stay_small_for_huge_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let cases: Vec<Case> = (0..25)
            .map(|_| random_case(3, &mut rng, 1_000_000))
            .collect();
        let outcomes = run(&cases);
        assert!(outcomes.iter().all(|o| o.function == "combinations"));
        assert!(outcomes.iter().all(|o| o.passed), "{outcomes:?}");
    }

    #[test]
    fn test_random_cases_are_reproducible() {
        let labels = |seed| {
            random_cases(20, seed, 50)
                .into_iter()
                .map(|c| (c.function, c.label))
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(42), labels(42));
    }

    #[test]
    fn test_summary_counts_and_distinct_failures() {
        let outcome = |function, passed| Outcome {
            function,
            label: String::new(),
            passed,
        };
        let summary = Summary::from_outcomes(&[
            outcome("fibonacci", true),
            outcome("triangle", false),
            outcome("triangle", false),
            outcome("power_list", false),
        ]);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 3);
        assert_eq!(
            summary.failing.iter().copied().collect::<Vec<_>>(),
            vec!["power_list", "triangle"]
        );
        let report = summary.to_string();
        assert!(report.contains("INSPECT THE FOLLOWING"));
        assert!(report.contains("==> triangle"));
    }

    #[test]
    fn test_summary_of_clean_run_has_no_inspection_list() {
        let summary = Summary::from_outcomes(&[]);
        assert!(summary.all_passed());
        assert!(!summary.to_string().contains("INSPECT"));
    }
}
