use std::mem;

use crate::error::{MathError, Result};

/// All `2^n` subsets of `items`, built with nested loops.
///
/// Subset number `mask` holds item `i` exactly when bit `i` of `mask` is set,
/// so subsets come out as `[]`, `[a]`, `[b]`, `[a, b]`, `[c]`, ... with items
/// in input order. O(n · 2^n) time and space.
pub fn power_list<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    let count = subset_count::<T>(items.len())?;
    let mut powerset = reserve_subsets(count)?;
    for mask in 0..count {
        let mut subset = Vec::new();
        for (index, value) in items.iter().enumerate() {
            if (mask >> index) & 1 == 1 {
                subset.push(value.clone());
            }
        }
        powerset.push(subset);
    }
    Ok(powerset)
}

/// Same as [`power_list`], as a single iterator expression.
pub fn power_list_expr<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    let count = subset_count::<T>(items.len())?;
    let mut powerset = reserve_subsets(count)?;
    powerset.extend((0..count).map(|mask| {
        items
            .iter()
            .enumerate()
            .filter(|&(i, _)| (mask >> i) & 1 == 1)
            .map(|(_, v)| v.clone())
            .collect()
    }));
    Ok(powerset)
}

/// `2^len`, provided the outer vector of that many subsets is addressable.
fn subset_count<T>(len: usize) -> Result<usize> {
    u32::try_from(len)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .filter(|&count| {
            count
                .checked_mul(mem::size_of::<Vec<T>>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| too_many(len))
}

fn reserve_subsets<T>(count: usize) -> Result<Vec<Vec<T>>> {
    let mut powerset = Vec::new();
    powerset.try_reserve_exact(count).map_err(|e| {
        MathError::invalid(format!("cannot allocate {count} subsets: {e}"))
    })?;
    Ok(powerset)
}

fn too_many(len: usize) -> MathError {
    MathError::invalid(format!(
        "cannot enumerate the power set of {len} items: 2^{len} subsets do not fit in memory"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    enum Item {
        Float(f64),
        Str(&'static str),
        Bool(bool),
    }

    #[test]
    fn test_power_list_of_three_integers() {
        let expected: Vec<Vec<i32>> = vec![
            vec![],
            vec![1],
            vec![2],
            vec![1, 2],
            vec![3],
            vec![1, 3],
            vec![2, 3],
            vec![1, 2, 3],
        ];
        assert_eq!(power_list(&[1, 2, 3]).unwrap(), expected);
        assert_eq!(power_list_expr(&[1, 2, 3]).unwrap(), expected);
    }

    #[test]
    fn test_power_list_of_mixed_items() {
        use Item::*;
        let items = [Float(1.2), Str("hello"), Bool(false)];
        let expected = vec![
            vec![],
            vec![Float(1.2)],
            vec![Str("hello")],
            vec![Float(1.2), Str("hello")],
            vec![Bool(false)],
            vec![Float(1.2), Bool(false)],
            vec![Str("hello"), Bool(false)],
            vec![Float(1.2), Str("hello"), Bool(false)],
        ];
        assert_eq!(power_list(&items).unwrap(), expected);
        assert_eq!(power_list_expr(&items).unwrap(), expected);
    }

    #[test]
    fn test_power_list_of_nothing_is_the_empty_subset() {
        let empty: [u8; 0] = [];
        assert_eq!(power_list(&empty).unwrap(), vec![Vec::<u8>::new()]);
        assert_eq!(power_list_expr(&empty).unwrap(), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_variants_agree_and_subsets_are_distinct() {
        let items: Vec<u32> = (0..12).collect();
        let imperative = power_list(&items).unwrap();
        assert_eq!(imperative, power_list_expr(&items).unwrap());
        assert_eq!(imperative.len(), 1usize << items.len());
        let distinct: HashSet<&Vec<u32>> = imperative.iter().collect();
        assert_eq!(distinct.len(), imperative.len());
    }

    #[test]
    fn test_too_many_items_is_rejected() {
        assert!(matches!(
            subset_count::<u8>(usize::BITS as usize),
            Err(MathError::InvalidArgument { .. })
        ));
        assert_eq!(subset_count::<u8>(3).unwrap(), 8);
    }

    #[test]
    fn test_unaddressable_power_set_is_an_error_not_a_panic() {
        let items = [0u8; 62];
        assert!(matches!(
            power_list(&items),
            Err(MathError::InvalidArgument { .. })
        ));
        assert!(matches!(
            power_list_expr(&items),
            Err(MathError::InvalidArgument { .. })
        ));
    }
}
