//! Ordered combinatorial iterators: permutations, subsets, subranges.
//!
//! All three enumerate deterministically, size-major and lexicographic
//! within each size. [`subsets`] doubles as the pairwise scan behind
//! constraint conflict checks.

use std::ops::Range;

/// All arrangements of `items`, starting from the given order.
///
/// Positions drive the enumeration, so repeated values yield repeated
/// arrangements.
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        items: items.to_vec(),
        indices: (0..items.len()).collect(),
        fresh: true,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    fresh: bool,
    done: bool,
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.fresh {
            self.fresh = false;
        } else if !next_permutation(&mut self.indices) {
            self.done = true;
            return None;
        }
        Some(gather(&self.items, &self.indices))
    }
}

/// Advance `indices` to its lexicographic successor. False at the last
/// arrangement.
fn next_permutation(indices: &mut [usize]) -> bool {
    let len = indices.len();
    let Some(pivot) = (0..len.saturating_sub(1))
        .rev()
        .find(|&i| indices[i] < indices[i + 1])
    else {
        return false;
    };
    let Some(successor) = (pivot + 1..len).rev().find(|&j| indices[j] > indices[pivot]) else {
        return false;
    };
    indices.swap(pivot, successor);
    indices[pivot + 1..].reverse();
    true
}

/// Subsets of `items` with sizes in `min_len..=max_len`.
///
/// Sizes ascend unless `longest_first`; within a size, subsets keep the
/// source order and enumerate lexicographically by position.
pub fn subsets<T: Clone>(
    items: &[T],
    min_len: usize,
    max_len: usize,
    longest_first: bool,
) -> Subsets<T> {
    let mut sizes: Vec<usize> = (min_len..=max_len.min(items.len())).collect();
    if longest_first {
        sizes.reverse();
    }
    Subsets {
        items: items.to_vec(),
        sizes,
        size_index: 0,
        indices: Vec::new(),
        fresh: true,
    }
}

#[derive(Debug, Clone)]
pub struct Subsets<T> {
    items: Vec<T>,
    sizes: Vec<usize>,
    size_index: usize,
    indices: Vec<usize>,
    fresh: bool,
}

impl<T: Clone> Iterator for Subsets<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let size = *self.sizes.get(self.size_index)?;
            if self.fresh {
                self.indices = (0..size).collect();
                self.fresh = false;
                return Some(gather(&self.items, &self.indices));
            }
            if next_combination(&mut self.indices, self.items.len()) {
                return Some(gather(&self.items, &self.indices));
            }
            self.size_index += 1;
            self.fresh = true;
        }
    }
}

/// Advance a strictly increasing index combination. False at the last
/// combination of its size.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    for i in (0..k).rev() {
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Contiguous index ranges of a sequence of length `len`.
///
/// Sizes run `min_len..=max_len` ascending unless `longest_first`. With
/// `flexible_start` every start offset is produced, otherwise only
/// prefixes.
pub fn subranges(
    len: usize,
    min_len: usize,
    max_len: usize,
    flexible_start: bool,
    longest_first: bool,
) -> Subranges {
    let mut sizes: Vec<usize> = (min_len..=max_len.min(len)).collect();
    if longest_first {
        sizes.reverse();
    }
    Subranges {
        len,
        flexible_start,
        sizes,
        size_index: 0,
        start: 0,
        fresh: true,
    }
}

#[derive(Debug, Clone)]
pub struct Subranges {
    len: usize,
    flexible_start: bool,
    sizes: Vec<usize>,
    size_index: usize,
    start: usize,
    fresh: bool,
}

impl Iterator for Subranges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let size = *self.sizes.get(self.size_index)?;
            if self.fresh {
                self.start = 0;
                self.fresh = false;
            } else {
                self.start += 1;
            }
            let last_start = if size > 0 && self.flexible_start {
                self.len - size
            } else {
                0
            };
            if self.start <= last_start {
                return Some(self.start..self.start + size);
            }
            self.size_index += 1;
            self.fresh = true;
        }
    }
}

fn gather<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations_are_lexicographic() {
        let all: Vec<Vec<u8>> = permutations(&[1, 2, 3]).collect();
        assert_eq!(
            all,
            [
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_permutation_count_and_extremes() {
        let all: Vec<Vec<char>> = permutations(&['a', 'b', 'c', 'd']).collect();
        assert_eq!(all.len(), 24);
        assert_eq!(all[0], ['a', 'b', 'c', 'd']);
        assert_eq!(all[23], ['d', 'c', 'b', 'a']);
    }

    #[test]
    fn test_empty_sequence_has_one_permutation() {
        let all: Vec<Vec<u8>> = permutations(&[]).collect();
        assert_eq!(all, [Vec::<u8>::new()]);
    }

    #[test]
    fn test_subsets_ascend_by_size() {
        let all: Vec<Vec<u8>> = subsets(&[1, 2, 3], 0, 3, false).collect();
        assert_eq!(
            all,
            [
                vec![],
                vec![1],
                vec![2],
                vec![3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn test_subsets_longest_first() {
        let all: Vec<Vec<u8>> = subsets(&[1, 2, 3], 1, 3, true).collect();
        assert_eq!(all[0], [1, 2, 3]);
        assert_eq!(all.last().unwrap(), &[3]);
    }

    #[test]
    fn test_subsets_fixed_size_pairs() {
        let pairs: Vec<Vec<u8>> = subsets(&[1, 2, 3, 4], 2, 2, false).collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], [1, 2]);
        assert_eq!(pairs[5], [3, 4]);
    }

    #[test]
    fn test_subsets_clamp_oversized_request() {
        let all: Vec<Vec<u8>> = subsets(&[1, 2], 1, 99, false).collect();
        assert_eq!(all, [vec![1], vec![2], vec![1, 2]]);
    }

    #[test]
    fn test_subranges_with_flexible_start() {
        let all: Vec<Range<usize>> = subranges(3, 1, 3, true, false).collect();
        assert_eq!(all, [0..1, 1..2, 2..3, 0..2, 1..3, 0..3]);
    }

    #[test]
    fn test_subranges_prefixes_only() {
        let all: Vec<Range<usize>> = subranges(3, 1, 3, false, false).collect();
        assert_eq!(all, [0..1, 0..2, 0..3]);
    }

    #[test]
    fn test_subranges_longest_first() {
        let all: Vec<Range<usize>> = subranges(3, 1, 3, true, true).collect();
        assert_eq!(all[0], 0..3);
        assert_eq!(all.last().unwrap(), &(2..3));
    }

    #[test]
    fn test_empty_size_window_yields_nothing() {
        assert_eq!(subsets(&[1, 2, 3], 4, 3, false).count(), 0);
        assert_eq!(subranges(2, 3, 3, true, false).count(), 0);
    }
}
