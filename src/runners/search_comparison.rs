//! Knows how to measure a linear search against a binary search (on sorted data) and how to
//! tell if sorting first pays off.

use crate::{
    algorithms::{
        searching::{binary_search, linear_search},
        sorting::counting_by_offset_sort,
    },
    array_utils::{copy_array, generate_random_array},
    configs::SearchConfig,
    features::OUTPUT,
    reports::SearchReport,
    runners::common::*,
};


/// Generates a random array of `config.array_size` elements and a sorted copy of it (sorted with the counting sort, timed as well),
/// then times one linear search over the unsorted array & one binary search over the sorted one, both looking for
/// `config.absent_value`.
pub fn run_search_comparison(config: &SearchConfig) -> SearchReport {
    let unsorted_array = generate_random_array(config.array_size, config.bound, config.seed);
    let mut sorted_array = copy_array(&unsorted_array);
    let sort_sample = run_sort_pass(counting_by_offset_sort, &mut sorted_array);
    OUTPUT(&format!("Sorted {} elements for the binary search in {:?}\n", sorted_array.len(), sort_sample.elapsed));

    let (linear_elapsed, linear_outcome) = run_search_pass(|| linear_search(&unsorted_array, config.absent_value));
    let (binary_elapsed, binary_outcome) = run_search_pass(|| binary_search(&sorted_array, config.absent_value));

    SearchReport {
        array_size:         config.array_size,
        time_unit:          config.time_unit,
        sort_time:          config.time_unit.convert(&sort_sample.elapsed),
        linear_time:        config.time_unit.convert(&linear_elapsed),
        binary_time:        config.time_unit.convert(&binary_elapsed),
        linear_outcome,
        binary_outcome,
        number_of_searches: config.number_of_searches,
    }
}

/// How much time `number_of_searches` binary searches would save over as many linear searches -- negative if they'd lose
pub fn time_saved(linear_time: u128, binary_time: u128, number_of_searches: u64) -> i128 {
    (linear_time as i128 - binary_time as i128) * number_of_searches as i128
}

/// The number of searches after which sorting once & binary searching becomes cheaper than linear searching --
/// `None` if the binary search is not faster than the linear one (sorting would never pay off)
pub fn break_even_searches(sort_time: u128, linear_time: u128, binary_time: u128) -> Option<u64> {
    let gain_per_search = linear_time.checked_sub(binary_time).filter(|&gain| gain > 0)?;
    let searches = sort_time.div_ceil(gain_per_search).max(1);
    Some(u64::try_from(searches).unwrap_or(u64::MAX))
}


#[cfg(test)]
mod tests {

    //! Unit tests for [search_comparison](super) module -- using 'serial_test' crate in order to make time measurements more reliable.

    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn absent_value_forces_worst_cases() {
        let config = SearchConfig { array_size: 10_000, ..SearchConfig::default() };
        let report = run_search_comparison(&config);
        assert_eq!(report.array_size, 10_000);
        assert_eq!(report.linear_outcome.position, None);
        assert_eq!(report.linear_outcome.comparisons, 10_000, "The linear search should have scanned the whole array");
        assert_eq!(report.binary_outcome.position, None);
        assert!(report.binary_outcome.comparisons <= 14, "The binary search should need at most log2(n)+1 probes");
        assert_eq!(report.number_of_searches, config.number_of_searches);
    }

    #[test]
    fn time_saved_may_be_negative() {
        assert_eq!(time_saved(500, 20, 1000), 480_000);
        assert_eq!(time_saved(20, 500, 1000), -480_000);
        assert_eq!(time_saved(20, 20, 1000), 0);
    }

    #[test]
    fn break_even() {
        // sorting costs 1000, each search saves 30: the 34th search pays it off
        assert_eq!(break_even_searches(1000, 40, 10), Some(34));
        assert_eq!(break_even_searches(900, 40, 10), Some(30));
        assert_eq!(break_even_searches(0, 40, 10), Some(1));
        assert_eq!(break_even_searches(1000, 10, 10), None);
        assert_eq!(break_even_searches(1000, 10, 40), None);
    }
}
