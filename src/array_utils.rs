//! Helpers to produce & manipulate the integer arrays the algorithms operate on

use rand::{rngs::StdRng, Rng, SeedableRng};


/// Builds an array of `size` elements uniformly drawn from `[0, bound)` by a generator seeded with `seed`.\
/// See [generate_random_array_with()] to share a generator between several arrays.
pub fn generate_random_array(size: usize, bound: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_array_with(&mut rng, size, bound)
}

/// Same as [generate_random_array()], drawing from the given `rng`.
/// A non-positive `bound` yields an array of zeroes.
pub fn generate_random_array_with(rng: &mut impl Rng, size: usize, bound: i32) -> Vec<i32> {
    if bound <= 0 {
        return vec![0; size];
    }
    (0..size)
        .map(|_| rng.gen_range(0..bound))
        .collect()
}

/// Returns an independent copy of `array`, so an algorithm may mutate it without affecting other runs
pub fn copy_array(array: &[i32]) -> Vec<i32> {
    array.to_vec()
}

/// Exchanges the elements at indexes `a` & `b`
#[inline(always)]
pub fn swap(array: &mut [i32], a: usize, b: usize) {
    array.swap(a, b);
}


#[cfg(test)]
mod tests {

    //! Unit tests for [array_utils](super) module

    use super::*;

    #[test]
    fn random_arrays_are_reproducible() {
        let first  = generate_random_array(500, 1000, 42);
        let second = generate_random_array(500, 1000, 42);
        assert_eq!(first, second, "Same seed should yield the same array");
        let other  = generate_random_array(500, 1000, 43);
        assert_ne!(first, other, "Different seeds should (most probably) yield different arrays");
    }

    #[test]
    fn random_arrays_respect_size_and_bound() {
        let array = generate_random_array(10_000, 7, 1);
        assert_eq!(array.len(), 10_000);
        assert!(array.iter().all(|&e| (0..7).contains(&e)), "Elements outside [0, 7) were generated");
        assert!(generate_random_array(0, 1000, 1).is_empty());
        assert_eq!(generate_random_array(3, 0, 1), vec![0, 0, 0]);
    }

    #[test]
    fn copies_are_independent() {
        let original = vec![3, 1, 2];
        let mut copy = copy_array(&original);
        swap(&mut copy, 0, 2);
        assert_eq!(copy, vec![2, 1, 3]);
        assert_eq!(original, vec![3, 1, 2], "Mutating the copy affected the original");
    }
}
