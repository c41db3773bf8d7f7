//! The algorithms under comparison. See:
//!   - [sorting] -- seven instrumented sort algorithms
//!   - [searching] -- linear & binary searches
//!
//! ... and [SortAlgorithm], naming & dispatching to each sort.

pub mod sorting;
pub mod searching;

use std::fmt::{Display, Formatter};


/// The sort algorithms known to the comparison harness, in report order (letters `a` to `g`)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SortAlgorithm {
    PartitionExchange,
    Selection,
    Insertion,
    Merge,
    Bubble,
    GapShift,
    CountingByOffset,
}
impl SortAlgorithm {

    /// all variants, in report order
    pub const ALL: [SortAlgorithm; 7] = [
        Self::PartitionExchange,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Bubble,
        Self::GapShift,
        Self::CountingByOffset,
    ];

    /// the letter identifying the algorithm in the reports
    pub fn letter(&self) -> char {
        match self {
            Self::PartitionExchange => 'a',
            Self::Selection         => 'b',
            Self::Insertion         => 'c',
            Self::Merge             => 'd',
            Self::Bubble            => 'e',
            Self::GapShift          => 'f',
            Self::CountingByOffset  => 'g',
        }
    }

    /// inverse of [Self::letter()]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter()
            .find(|algorithm| algorithm.letter() == letter.to_ascii_lowercase())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PartitionExchange => "non-recursive Quicksort",
            Self::Selection         => "Selection Sort",
            Self::Insertion         => "Insertion Sort",
            Self::Merge             => "Merge Sort",
            Self::Bubble            => "Bubble Sort",
            Self::GapShift          => "Shell Sort",
            Self::CountingByOffset  => "Counting Sort",
        }
    }

    /// declared time complexity, in big-O notation
    pub fn big_o_time(&self) -> &'static str {
        match self {
            Self::PartitionExchange => "O(n²)",
            Self::Selection         => "O(n²)",
            Self::Insertion         => "O(n²)",
            Self::Merge             => "O(n.log(n))",
            Self::Bubble            => "O(n²)",
            Self::GapShift          => "O(n²)",
            Self::CountingByOffset  => "O(n+k)",
        }
    }

    /// declared (auxiliary) space complexity, in big-O notation
    pub fn big_o_space(&self) -> &'static str {
        match self {
            Self::PartitionExchange => "O(log(n))",
            Self::Selection         => "O(1)",
            Self::Insertion         => "O(1)",
            Self::Merge             => "O(n)",
            Self::Bubble            => "O(1)",
            Self::GapShift          => "O(1)",
            Self::CountingByOffset  => "O(k)",
        }
    }

    /// the function implementing the algorithm
    pub fn sort_fn(&self) -> fn(&mut [i32]) -> u64 {
        match self {
            Self::PartitionExchange => sorting::partition_exchange_sort,
            Self::Selection         => sorting::selection_sort,
            Self::Insertion         => sorting::insertion_sort,
            Self::Merge             => sorting::merge_sort,
            Self::Bubble            => sorting::bubble_sort,
            Self::GapShift          => sorting::gap_shift_sort,
            Self::CountingByOffset  => sorting::counting_by_offset_sort,
        }
    }

    /// sorts `array` in place, returning the number of comparisons made
    pub fn sort(&self, array: &mut [i32]) -> u64 {
        (self.sort_fn())(array)
    }
}
impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Sort ({})", self.letter(), self.name())
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [algorithms](super) module

    use super::*;

    #[test]
    fn letters_follow_report_order() {
        let letters: String = SortAlgorithm::ALL.iter().map(SortAlgorithm::letter).collect();
        assert_eq!(letters, "abcdefg");
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::from_letter(algorithm.letter()), Some(algorithm));
        }
        assert_eq!(SortAlgorithm::from_letter('E'), Some(SortAlgorithm::Bubble));
        assert_eq!(SortAlgorithm::from_letter('h'), None);
    }

    #[test]
    fn dispatches_to_the_right_function() {
        let mut array = [5, 3, 4, 1, 2];
        assert_eq!(SortAlgorithm::Selection.sort(&mut array), 10);
        assert_eq!(array, [1, 2, 3, 4, 5]);
        let mut array = [4, 4, 4];
        assert_eq!(SortAlgorithm::CountingByOffset.sort(&mut array), 10);
        assert_eq!(SortAlgorithm::Bubble.to_string(), "eSort (Bubble Sort)");
    }
}
