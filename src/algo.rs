//! Smoothsort (Dijkstra, EWD796a).
//!
//! The input prefix processed so far is kept as a chain of Leonardo heaps whose
//! roots ascend from left to right. Sorting runs in two phases:
//! - **Build**: grow the chain one element at a time, merging the two rightmost
//!   heaps whenever their orders are consecutive.
//! - **Extraction**: the rightmost root is the maximum of the unsorted prefix and
//!   already sits at its final position; drop it, expose its two children as new
//!   chain entries and restore the root order.
//!
//! Two primitives restore order: [`sift`] inside a single heap and [`trinkle`]
//! across the chain. Both stop at their first comparison when the data is already
//! in order, which makes sorted input cost O(n) comparisons and zero exchanges.
//!
//! The main entry point is [`smoothsort`].

use crate::core::{FloatSlice, SortBy, SortableSequence, nan_first_cmp};
use crate::leonardo::{HeapChain, leonardo};
use std::cmp::Ordering;

/// Sorts the sequence in place.
///
/// Runs in O(n log n) comparisons in the worst case and approaches O(n) as the
/// input gets closer to sorted. No memory is allocated; the only extra state is a
/// small fixed-size stack. The sort is not stable.
///
/// # Arguments
///
/// * `seq` - The collection to be sorted, accessed only through [`SortableSequence`].
///
/// # Examples
///
/// ```
/// use smoothsort::smoothsort;
///
/// let mut data = vec![74, 59, 238, -784, 9845, 0];
/// smoothsort(&mut data);
///
/// assert_eq!(data, vec![-784, 0, 59, 74, 238, 9845]);
/// ```
pub fn smoothsort<S: SortableSequence + ?Sized>(seq: &mut S) {
    let len = seq.len();
    if len < 2 {
        return;
    }

    let mut chain = HeapChain::new();
    build(seq, &mut chain, len);
    extract(seq, &mut chain);
}

/// Sorts a slice in place with a comparator function.
///
/// The comparator must define a strict weak ordering.
///
/// # Examples
///
/// ```
/// use smoothsort::smoothsort_by;
///
/// let mut data = vec![5, 1, 4, 2, 3];
/// smoothsort_by(&mut data, |a, b| b.cmp(a));
///
/// assert_eq!(data, vec![5, 4, 3, 2, 1]);
/// ```
pub fn smoothsort_by<T, F>(data: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    smoothsort(&mut SortBy::new(data, compare));
}

/// Sorts a slice in place by a key extraction function.
///
/// The key function is called twice per comparison; it should be cheap.
///
/// # Examples
///
/// ```
/// use smoothsort::smoothsort_by_key;
///
/// let mut data = vec!["ccc", "a", "bb"];
/// smoothsort_by_key(&mut data, |s| s.len());
///
/// assert_eq!(data, vec!["a", "bb", "ccc"]);
/// ```
pub fn smoothsort_by_key<T, K, F>(data: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    smoothsort_by(data, |a, b| key(a).cmp(&key(b)));
}

/// Sorts a slice of partially ordered values (floats) in place.
///
/// NaN values are placed first, then the numbers in ascending order. See
/// [`nan_first_cmp`].
///
/// # Examples
///
/// ```
/// use smoothsort::smoothsort_floats;
///
/// let mut data = vec![7.8, f64::INFINITY, -959.75, f64::NAN];
/// smoothsort_floats(&mut data);
///
/// assert!(data[0].is_nan());
/// assert_eq!(&data[1..], &[-959.75, 7.8, f64::INFINITY]);
/// ```
pub fn smoothsort_floats<T: PartialOrd>(data: &mut [T]) {
    smoothsort(&mut FloatSlice(data));
}

/// Returns `true` if no element of the sequence compares greater than its successor.
///
/// ```
/// use smoothsort::is_sorted;
///
/// assert!(is_sorted(&vec![1, 2, 2, 3]));
/// assert!(!is_sorted(&vec!["b", "a"]));
/// ```
pub fn is_sorted<S: SortableSequence + ?Sized>(seq: &S) -> bool {
    (1..seq.len()).all(|i| seq.compare(i - 1, i) != Ordering::Greater)
}

/// Returns `true` if the slice is ascending under [`nan_first_cmp`].
pub fn floats_are_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2)
        .all(|pair| nan_first_cmp(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Build phase: turns the whole input into a chain of Leonardo heaps with
/// ascending roots.
fn build<S: SortableSequence + ?Sized>(seq: &mut S, chain: &mut HeapChain, len: usize) {
    for position in 0..len {
        let order = match chain.last() {
            Some((_, smallest)) if chain.can_merge() => {
                // The two rightmost heaps become the children of `position`.
                chain.pop();
                chain.pop();
                smallest + 2
            }
            Some((_, 1)) => 0,
            _ => 1,
        };
        chain.push(position, order);

        // A heap that will be absorbed into a bigger one later only needs to be
        // a valid heap; its root is ordered against the chain once it is final.
        if is_final(chain, position, order, len) {
            trinkle(seq, chain, chain.len() - 1);
        } else {
            sift(seq, position, order);
        }
    }
}

/// Returns `true` if the heap just pushed at `position` will never be merged
/// into a larger heap during the rest of the build phase.
#[inline(always)]
fn is_final(chain: &HeapChain, position: usize, order: usize, len: usize) -> bool {
    let remaining = len - position - 1;
    match order {
        0 => remaining == 0,
        1 => {
            let next_merges = chain.len() >= 2 && chain.order(chain.len() - 2) == 2;
            remaining == 0 || (remaining == 1 && !next_merges)
        }
        _ => remaining < leonardo(order - 1) + 1,
    }
}

/// Extraction phase: repeatedly removes the maximum (the rightmost root).
fn extract<S: SortableSequence + ?Sized>(seq: &mut S, chain: &mut HeapChain) {
    while let Some((root, order)) = chain.pop() {
        if order < 2 {
            continue;
        }

        let right = root - 1;
        let left = right - leonardo(order - 2);
        chain.push(left, order - 1);
        chain.push(right, order - 2);

        // Both children are valid heaps; only their roots may be out of order
        // with respect to the chain.
        trinkle(seq, chain, chain.len() - 2);
        trinkle(seq, chain, chain.len() - 1);
    }
}

/// Restores the heap property of the Leonardo heap of `order` rooted at `root`,
/// assuming both child heaps already satisfy it.
pub(crate) fn sift<S: SortableSequence + ?Sized>(seq: &mut S, mut root: usize, mut order: usize) {
    while order >= 2 {
        let (child, child_order) = larger_child(seq, root, order);
        if seq.compare(root, child) != Ordering::Less {
            break;
        }

        seq.swap(root, child);
        root = child;
        order = child_order;
    }
}

/// Restores the ascending order of chain roots from entry `index` leftward, then
/// the heap property of the heap where the walk stops.
///
/// Entries to the left of `index` must already have ascending roots, and every
/// heap in the chain except possibly the one at `index` must be a valid heap.
pub(crate) fn trinkle<S: SortableSequence + ?Sized>(
    seq: &mut S,
    chain: &HeapChain,
    mut index: usize,
) {
    let mut root = chain.root(index);
    let mut order = chain.order(index);

    while index > 0 {
        let stepson = chain.root(index - 1);
        debug_assert_eq!(stepson + leonardo(order), root);

        if seq.compare(stepson, root) != Ordering::Greater {
            break;
        }
        if order >= 2 {
            let (child, _) = larger_child(seq, root, order);
            if seq.compare(stepson, child) != Ordering::Greater {
                break;
            }
        }

        seq.swap(root, stepson);
        index -= 1;
        root = stepson;
        order = chain.order(index);
    }

    sift(seq, root, order);
}

/// Position and order of the larger child root of a heap with `order >= 2`.
/// Ties go to the left (order - 1) child.
#[inline(always)]
fn larger_child<S: SortableSequence + ?Sized>(seq: &S, root: usize, order: usize) -> (usize, usize) {
    let right = root - 1;
    let left = right - leonardo(order - 2);
    if seq.compare(left, right) == Ordering::Less {
        (right, order - 2)
    } else {
        (left, order - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Checks that the heap of `order` rooted at `root` is a max-heap all the way down.
    fn assert_heap(data: &[i32], root: usize, order: usize) {
        if order < 2 {
            return;
        }
        let right = root - 1;
        let left = right - leonardo(order - 2);
        assert!(data[root] >= data[left], "root {} below left child {}", root, left);
        assert!(data[root] >= data[right], "root {} below right child {}", root, right);
        assert_heap(data, left, order - 1);
        assert_heap(data, right, order - 2);
    }

    #[test]
    fn test_sift_descends_to_larger_child() {
        // Order 3 heap over 5 elements: left child (order 2) rooted at 2, right child
        // (order 1) at 3, and a root that is smaller than both.
        let mut data = vec![1, 2, 5, 4, 0];
        sift(&mut data, 4, 3);

        assert_eq!(data, vec![1, 0, 2, 4, 5]);
        assert_heap(&data, 4, 3);
    }

    #[test]
    fn test_sift_noop_on_valid_heap() {
        let mut data = vec![1, 2, 3, 4, 5];
        sift(&mut data, 4, 3);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_trinkle_swaps_with_stepson() {
        let mut data = vec![1, 2, 9, 3];
        let mut chain = HeapChain::new();
        chain.push(2, 2);
        chain.push(3, 1);

        trinkle(&mut data, &chain, 1);
        assert_eq!(data, vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_trinkle_stepson_then_sift() {
        // The stepson (10) beats the new root (1) and both of its children.
        let mut data = vec![0, 1, 2, 3, 10, 8, 6, 1];
        let mut chain = HeapChain::new();
        chain.push(4, 3);
        chain.push(7, 2);

        trinkle(&mut data, &chain, 1);
        assert_eq!(data, vec![0, 1, 2, 1, 3, 8, 6, 10]);
        assert_heap(&data, 4, 3);
        assert_heap(&data, 7, 2);
    }

    #[test]
    fn test_trinkle_child_beats_stepson() {
        // The stepson (5) beats the root (1) but not its larger child (8),
        // so the walk stops and the heap is sifted in place.
        let mut data = vec![0, 1, 2, 3, 5, 8, 6, 1];
        let mut chain = HeapChain::new();
        chain.push(4, 3);
        chain.push(7, 2);

        trinkle(&mut data, &chain, 1);
        assert_eq!(data, vec![0, 1, 2, 3, 5, 1, 6, 8]);
    }

    #[test]
    fn test_build_produces_ascending_chain_of_heaps() {
        let mut rng = StdRng::seed_from_u64(7);

        for len in 1..300 {
            let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            let mut chain = HeapChain::new();
            build(&mut data, &mut chain, len);

            assert!(chain.is_well_formed());
            let (last_root, _) = chain.last().unwrap();
            assert_eq!(last_root, len - 1);

            for index in 0..chain.len() {
                assert_heap(&data, chain.root(index), chain.order(index));
                if index > 0 {
                    assert!(data[chain.root(index - 1)] <= data[chain.root(index)]);
                }
            }
            assert_eq!(data[len - 1], *data.iter().max().unwrap());
        }
    }

    #[test]
    fn test_build_chain_shape_matches_length() {
        let shape = |len: usize| {
            let mut data: Vec<usize> = (0..len).collect();
            let mut chain = HeapChain::new();
            build(&mut data, &mut chain, len);
            (0..chain.len()).map(|i| chain.order(i)).collect::<Vec<_>>()
        };

        assert_eq!(shape(1), vec![1]);
        assert_eq!(shape(2), vec![1, 0]);
        assert_eq!(shape(3), vec![2]);
        assert_eq!(shape(4), vec![2, 1]);
        assert_eq!(shape(5), vec![3]);
        assert_eq!(shape(9), vec![4]);
        assert_eq!(shape(10), vec![4, 1]);
        assert_eq!(shape(13), vec![4, 2, 1]);
        assert_eq!(shape(14), vec![4, 3]);
        assert_eq!(shape(15), vec![5]);
    }
}
