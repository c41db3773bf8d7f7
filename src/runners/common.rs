//! Contains code shared between this module's submodules

use crate::{
    algorithms::searching::SearchOutcome,
    low_level_analysis::types::ExecutionSample,
};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};


/// Runs `sort_fn` over `array`, measuring the wall-clock time it took to run.\
/// `sort_fn` must sort `array` in place and return the number of comparisons it made.
/// ```
///     /// Algorithm function under measurement.
///     fn sort(array: &mut [i32]) -> u64 {0}
/// ```
/// returns: the [ExecutionSample] with the elapsed time & the returned comparisons
pub fn run_sort_pass(sort_fn: impl FnOnce(&mut [i32]) -> u64,
                     array:   &mut [i32])
                    -> ExecutionSample {
    let start = Instant::now();
    let comparisons = black_box(sort_fn(black_box(array)));
    let elapsed = start.elapsed();
    ExecutionSample { elapsed, comparisons }
}

/// Runs the search algorithm `search_fn`, measuring the time it took to run.\
/// returns: tuple with (elapsed time, [SearchOutcome])
pub fn run_search_pass(search_fn: impl FnOnce() -> SearchOutcome)
                      -> (Duration, SearchOutcome) {
    let start = Instant::now();
    let outcome = black_box(search_fn());
    let elapsed = start.elapsed();
    (elapsed, outcome)
}


#[cfg(test)]
mod tests {

    //! Unit tests for [common](super) module -- using 'serial_test' crate in order to make time measurements more reliable.

    use super::*;
    use crate::algorithms::{searching::linear_search, sorting::selection_sort};
    use serial_test::serial;

    #[test]
    #[serial]
    fn sort_pass_returns_the_algorithm_count() {
        let mut array = [5, 3, 4, 1, 2];
        let sample = run_sort_pass(selection_sort, &mut array);
        assert_eq!(sample.comparisons, 10);
        assert_eq!(array, [1, 2, 3, 4, 5], "The pass should operate on the given array");
    }

    #[test]
    #[serial]
    fn sort_pass_measures_elapsed_time() {
        let sleep = Duration::from_millis(20);
        let mut array = [1, 2, 3];
        let sample = run_sort_pass(|_| { spin_sleep::sleep(sleep); 7 }, &mut array);
        assert_eq!(sample.comparisons, 7);
        assert!(sample.elapsed >= sleep, "Measured {:?}, but the pass slept for {:?}", sample.elapsed, sleep);
        assert!(sample.elapsed < sleep * 10, "Measured {:?} -- way beyond the {:?} sleep", sample.elapsed, sleep);
    }

    #[test]
    #[serial]
    fn search_pass_returns_the_outcome() {
        let array = [3, 1, 2];
        let (_elapsed, outcome) = run_search_pass(|| linear_search(&array, -1));
        assert_eq!(outcome, SearchOutcome { position: None, comparisons: 3 });
    }
}
