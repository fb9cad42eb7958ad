use itertools::Itertools;

/// Every permutation of `items`, built by recursive backtracking.
///
/// Like [`permute_lazy`] and [`permute_expr`], yields the `n!` orderings in
/// lexicographic order of input positions, treating equal values as distinct.
/// The empty sequence has exactly one permutation, itself.
/// O(n · n!) time and space.
pub fn permute_recursive<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let n = items.len();
    tracing::debug!(n, "enumerating permutations recursively");

    let mut all_permutations = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];

    backtrack(items, &mut current, &mut used, &mut all_permutations);

    all_permutations
}

/// Extends `current` with every unused item in turn and recurses until all
/// items are placed.
fn backtrack<T: Clone>(
    items: &[T],
    current: &mut Vec<T>,
    used: &mut [bool],
    all_permutations: &mut Vec<Vec<T>>,
) {
    if current.len() == items.len() {
        all_permutations.push(current.clone());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        if !used[index] {
            used[index] = true;
            current.push(item.clone());
            backtrack(items, current, used, all_permutations);
            current.pop();
            used[index] = false;
        }
    }
}

/// Lazily yields every permutation of `items`, one per call to `next`.
///
/// Only the current arrangement of positions is stored (O(n) state). Each
/// advance steps the positions to their lexicographic successor.
pub fn permute_lazy<T: Clone>(items: &[T]) -> Permutations<'_, T> {
    Permutations {
        items,
        indices: (0..items.len()).collect(),
        started: false,
        done: false,
    }
}

/// Iterator returned by [`permute_lazy`].
#[derive(Debug)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T> Permutations<'_, T> {
    /// Rearranges `indices` into the next permutation in lexicographic order.
    /// Returns false once the last (descending) arrangement has been reached.
    fn advance(&mut self) -> bool {
        let indices = &mut self.indices;
        let Some(pivot) = (1..indices.len())
            .rev()
            .find(|&i| indices[i - 1] < indices[i])
            .map(|i| i - 1)
        else {
            return false;
        };
        // A larger element to the right of the pivot always exists.
        let successor = (pivot + 1..indices.len())
            .rev()
            .find(|&j| indices[j] > indices[pivot])
            .unwrap_or(pivot + 1);
        indices.swap(pivot, successor);
        indices[pivot + 1..].reverse();
        true
    }
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}

impl<T: Clone> std::iter::FusedIterator for Permutations<'_, T> {}

/// Every permutation of `items` as a single iterator expression.
pub fn permute_expr<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items.iter().cloned().permutations(items.len()).collect()
}
