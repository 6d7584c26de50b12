//! In-place binary heap sort.
//!
//! The engine that builds and maintains sorted order for the containers in
//! this crate, exposed on plain mutable slices so callers can use it
//! directly. It allocates nothing, moves elements only by swapping, and
//! runs in O(n log n) comparisons and swaps regardless of input order.
//! The sort is not stable.
//!
//! Comparators follow the `is_less` convention: `is_less(a, b)` returns
//! true when `a` must sort before `b`, and the relation must be a strict
//! weak ordering. A comparator that violates that contract yields some
//! unspecified permutation of the input, nothing worse.
//!
//! ```
//! let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
//! flatx::sort::heapsort(&mut data, |a, b| a < b);
//! assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

/// Restores the max-heap property for the subtree rooted at `root`,
/// assuming both child subtrees already satisfy it.
///
/// The children of index `i` live at `2i + 1` and `2i + 2`. When both
/// children order above the root, the right child is chosen only if it
/// also orders above the left one.
fn sift_down<T, F>(slice: &mut [T], mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        if left >= slice.len() {
            break;
        }
        let mut candidate = root;
        if is_less(&slice[candidate], &slice[left]) {
            candidate = left;
        }
        if right < slice.len() && is_less(&slice[candidate], &slice[right]) {
            candidate = right;
        }
        if candidate == root {
            break;
        }
        slice.swap(root, candidate);
        root = candidate;
    }
}

/// Rearranges `slice` into a max-heap under `is_less`.
///
/// Every internal node is sifted down, from the last parent back to the
/// root.
pub fn make_heap<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if slice.len() < 2 {
        return;
    }
    let last_parent = (slice.len() - 2) / 2;
    for root in (0..=last_parent).rev() {
        sift_down(slice, root, &mut is_less);
    }
}

/// Sorts a max-heap into ascending order under `is_less`.
///
/// The heap root is swapped with the last unsorted element, the considered
/// range shrinks by one, and the new root is sifted down again.
pub fn sort_heap<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0, &mut is_less);
    }
}

/// Sorts `slice` into ascending order under `is_less`.
pub fn heapsort<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    make_heap(slice, &mut is_less);
    sort_heap(slice, &mut is_less);
}

#[cfg(test)]
mod test {
    use super::*;

    /// Checks the max-heap property over the whole slice.
    fn assert_heap(slice: &[u32]) {
        for (index, value) in slice.iter().enumerate() {
            for child in [2 * index + 1, 2 * index + 2] {
                if let Some(child_value) = slice.get(child) {
                    assert!(child_value <= value, "heap broken at {index}");
                }
            }
        }
    }

    #[test]
    fn heapify_pins_the_child_selection() {
        // Both children beat the root, right beats left: right wins.
        let mut data = [1, 2, 3, 4, 5];
        make_heap(&mut data, |a, b| a < b);
        assert_eq!(data, [5, 4, 3, 1, 2]);
        assert_heap(&data);

        // Equal children: the left one wins, right must be strictly greater.
        let mut data = [1, 7, 7];
        make_heap(&mut data, |a, b| a < b);
        assert_eq!(data, [7, 1, 7]);
        assert_heap(&data);
    }

    #[test]
    fn sort_heap_finishes_what_make_heap_started() {
        let mut data = [9, 4, 7, 1, 1, 8, 3, 0];
        make_heap(&mut data, |a, b| a < b);
        assert_heap(&data);
        sort_heap(&mut data, |a, b| a < b);
        assert_eq!(data, [0, 1, 1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn sorts_small_inputs() {
        let mut empty: [u32; 0] = [];
        heapsort(&mut empty, |a, b| a < b);

        let mut single = [7];
        heapsort(&mut single, |a, b| a < b);
        assert_eq!(single, [7]);

        let mut pair = [2, 1];
        heapsort(&mut pair, |a, b| a < b);
        assert_eq!(pair, [1, 2]);
    }

    #[test]
    fn sorted_input_stays_put() {
        let mut data = [1, 2, 3, 4, 5, 6];
        heapsort(&mut data, |a, b| a < b);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn duplicates_collapse_into_runs() {
        let mut data = [5, 3, 5, 1, 3, 5, 1];
        heapsort(&mut data, |a, b| a < b);
        assert_eq!(data, [1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn comparator_direction_is_respected() {
        let mut data = [2, 9, 1, 6];
        heapsort(&mut data, |a, b| b < a);
        assert_eq!(data, [9, 6, 2, 1]);
    }

    #[test]
    fn pairs_sort_by_the_projected_component() {
        let mut data = [(3, "c"), (1, "a"), (2, "b")];
        heapsort(&mut data, |a, b| a.0 < b.0);
        assert_eq!(data, [(1, "a"), (2, "b"), (3, "c")]);
    }
}
