//! Linear & binary searches, instrumented to count their comparisons like the sort algorithms do

use std::fmt::{Display, Formatter};


/// What a search found -- and how many comparisons it took to find it (or not)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// index of a matching element or `None` if the value is not in the array
    pub position:    Option<usize>,
    pub comparisons: u64,
}
impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.position.is_some()
    }
}
impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "found at {} after {} comparisons", position, self.comparisons),
            None           => write!(f, "not found after {} comparisons", self.comparisons),
        }
    }
}

/// Scans `array` from the start until `value` is found, with no requirements on the elements' order.\
/// One comparison is counted per element examined: an absent value costs exactly `array.len()`.
pub fn linear_search(array: &[i32], value: i32) -> SearchOutcome {
    let mut comparisons = 0;
    for (index, &element) in array.iter().enumerate() {
        comparisons += 1;
        if element == value {
            return SearchOutcome { position: Some(index), comparisons };
        }
    }
    SearchOutcome { position: None, comparisons }
}

/// Iteratively halves the search interval of the (required to be) ascending `array`.\
/// The order is not verified: results on unsorted arrays are meaningless.\
/// One comparison is counted per probed element.
pub fn binary_search(array: &[i32], value: i32) -> SearchOutcome {
    let mut comparisons = 0;
    // half-open interval [low, high)
    let mut low = 0;
    let mut high = array.len();
    while low < high {
        let middle = low + (high - low) / 2;
        comparisons += 1;
        if array[middle] == value {
            return SearchOutcome { position: Some(middle), comparisons };
        } else if array[middle] < value {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    SearchOutcome { position: None, comparisons }
}

/// Recursive version of [binary_search()] -- probing the very same elements & counting the same way
pub fn binary_search_recursive(array: &[i32], value: i32) -> SearchOutcome {
    fn search(array: &[i32], low: usize, high: usize, value: i32, comparisons: u64) -> SearchOutcome {
        if low >= high {
            return SearchOutcome { position: None, comparisons };
        }
        let middle = low + (high - low) / 2;
        let comparisons = comparisons + 1;
        if array[middle] == value {
            SearchOutcome { position: Some(middle), comparisons }
        } else if value > array[middle] {
            search(array, middle + 1, high, value, comparisons)
        } else {
            search(array, low, middle, value, comparisons)
        }
    }
    search(array, 0, array.len(), value, 0)
}


#[cfg(test)]
mod tests {

    //! Unit tests for [searching](super) module

    use super::*;
    use crate::{
        algorithms::sorting::counting_by_offset_sort,
        array_utils::generate_random_array,
    };

    #[test]
    fn linear_search_on_absent_value_scans_everything() {
        let array = generate_random_array(1234, 1000, 11);
        let outcome = linear_search(&array, -1);
        assert_eq!(outcome, SearchOutcome { position: None, comparisons: 1234 });
        assert_eq!(linear_search(&[], 3), SearchOutcome { position: None, comparisons: 0 });
    }

    #[test]
    fn linear_search_stops_at_first_match() {
        let outcome = linear_search(&[7, 3, 9, 3], 3);
        assert_eq!(outcome, SearchOutcome { position: Some(1), comparisons: 2 });
    }

    #[test]
    fn binary_search_edges() {
        assert_eq!(binary_search(&[], 1).position, None);
        assert_eq!(binary_search(&[1], 1), SearchOutcome { position: Some(0), comparisons: 1 });
        assert_eq!(binary_search(&[1], 0), SearchOutcome { position: None, comparisons: 1 });
        let array = [1, 3, 5, 7, 9, 11, 13];
        assert_eq!(binary_search(&array, 7), SearchOutcome { position: Some(3), comparisons: 1 });
        assert_eq!(binary_search(&array, 1).position, Some(0));
        assert_eq!(binary_search(&array, 13).position, Some(6));
        assert_eq!(binary_search(&array, 14), SearchOutcome { position: None, comparisons: 3 });
        assert_eq!(binary_search(&array, -1).position, None);
    }

    /// on sorted arrays, every search agrees on whether a value is present & the found index holds the value
    #[test]
    fn searches_agree_on_sorted_arrays() {
        let mut array = generate_random_array(2000, 300, 21);
        counting_by_offset_sort(&mut array);
        for value in -5..310 {
            let linear    = linear_search(&array, value);
            let binary    = binary_search(&array, value);
            let recursive = binary_search_recursive(&array, value);
            assert_eq!(binary.found(), linear.found(), "binary & linear searches disagree for {}", value);
            assert_eq!(recursive, binary, "recursive & iterative binary searches disagree for {}", value);
            if let Some(position) = binary.position {
                assert_eq!(array[position], value);
            }
        }
    }

    #[test]
    fn binary_search_is_logarithmic() {
        let array: Vec<i32> = (0..100_000).collect();
        let outcome = binary_search(&array, -1);
        assert!(outcome.comparisons <= 17, "100_000 elements should need at most 17 probes; got {}", outcome.comparisons);
    }
}
