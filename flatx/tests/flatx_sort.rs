//! Exhaustive and randomized properties of the heap sort.

use flatx::sort::{heapsort, make_heap, sort_heap};
use rand_core::RngCore;
use twistx::{Mt19937, Mt19937_64};

/// Every adjacent pair must satisfy the ordering after a sort.
fn assert_ascending<T: Ord + std::fmt::Debug>(slice: &[T]) {
    for pair in slice.windows(2) {
        assert!(pair[0] <= pair[1], "out of order: {pair:?}");
    }
}

#[test]
fn every_permutation_sorts_to_the_same_sequence() {
    let mut items = [1u32, 2, 3, 4, 5, 6];
    let heap = permutohedron::Heap::new(&mut items);
    let mut permutations = 0usize;
    for mut permutation in heap {
        heapsort(&mut permutation, |a, b| a < b);
        assert_eq!(permutation, [1, 2, 3, 4, 5, 6]);
        permutations += 1;
    }
    assert_eq!(permutations, 720);
}

#[test]
fn every_permutation_with_duplicates_sorts_too() {
    let mut items = [2u32, 1, 2, 3, 1];
    let heap = permutohedron::Heap::new(&mut items);
    for mut permutation in heap {
        heapsort(&mut permutation, |a, b| a < b);
        assert_eq!(permutation, [1, 1, 2, 2, 3]);
    }
}

#[test]
fn random_input_agrees_with_the_standard_sort() {
    let mut rng = Mt19937_64::new(0x5eed);
    for round in 0..8 {
        let len = 1 + (round * 137) % 1000;
        let mut data: Vec<u64> = (0..len).map(|_| rng.next_u64() % 512).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        heapsort(&mut data, |a, b| a < b);
        assert_eq!(data, expected);
    }
}

#[test]
fn random_input_sorts_descending_under_a_reverse_comparator() {
    let mut rng = Mt19937::new(7);
    let mut data: Vec<u32> = (0..500).map(|_| rng.next_u32()).collect();
    heapsort(&mut data, |a, b| b < a);
    for pair in data.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn heap_phases_compose_on_random_input() {
    let mut rng = Mt19937::new(99);
    let mut data: Vec<u32> = (0..257).map(|_| rng.next_u32() % 64).collect();
    let mut expected = data.clone();
    expected.sort_unstable();

    make_heap(&mut data, |a, b| a < b);
    // The root of a max-heap is the maximum.
    assert_eq!(data.first(), expected.last());
    sort_heap(&mut data, |a, b| a < b);
    assert_eq!(data, expected);
    assert_ascending(&data);
}
