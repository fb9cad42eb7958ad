use std::iter;

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{MathError, Result};

/// One row of Pascal's triangle.
pub type Row = Vec<BigUint>;

/// Rows `0..=n` of Pascal's triangle, index `i` holding row `i`.
pub type Table = Vec<Row>;

/// Given row `i`, returns row `i + 1`.
///
/// The new row is `1`, the pairwise sums of adjacent elements, then `1`.
/// O(len(row)) time and space.
pub fn next_row(row: &[BigUint]) -> Result<Row> {
    check_row(row)?;
    Ok(successor(row))
}

/// Same as [`next_row`], written as one iterator chain.
pub fn next_row_zipped(row: &[BigUint]) -> Result<Row> {
    check_row(row)?;
    Ok(zipped_successor(row))
}

/// Rows `0` through `n` of Pascal's triangle, built by repeatedly taking the
/// successor of the last row.
///
/// O(n²) time and space.
pub fn triangle(n: usize) -> Table {
    let mut triangle = vec![vec![BigUint::one()]];
    if n == 0 {
        return triangle;
    }
    triangle.push(vec![BigUint::one(), BigUint::one()]);
    if n == 1 {
        return triangle;
    }
    tracing::debug!(rows = n + 1, "building pascal triangle");
    for _ in 1..n {
        let next = successor(&triangle[triangle.len() - 1]);
        triangle.push(next);
    }
    triangle
}

/// Same as [`triangle`], written as an unfold of [`next_row_zipped`]
/// starting from row `0`.
pub fn triangle_unfolded(n: usize) -> Table {
    iter::successors(Some(vec![BigUint::one()]), |row| Some(zipped_successor(row)))
        .take(n.saturating_add(1))
        .collect()
}

fn check_row(row: &[BigUint]) -> Result<()> {
    if row.is_empty() {
        return Err(MathError::invalid(
            "a row of Pascal's triangle has at least one element",
        ));
    }
    Ok(())
}

fn successor(row: &[BigUint]) -> Row {
    let mut line = Vec::with_capacity(row.len() + 1);
    line.push(BigUint::one());
    if row.len() == 1 && row[0].is_one() {
        line.push(BigUint::one());
        return line;
    }
    for pair in row.windows(2) {
        line.push(&pair[0] + &pair[1]);
    }
    line.push(BigUint::one());
    line
}

fn zipped_successor(row: &[BigUint]) -> Row {
    iter::once(BigUint::one())
        .chain(row.iter().tuple_windows().map(|(a, b)| a + b))
        .chain(iter::once(BigUint::one()))
        .collect()
}
