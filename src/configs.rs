//! Contains constants & the default configurations used throughout this crate

use crate::low_level_analysis::types::{TimeUnit, TimeUnits};
use once_cell::sync::Lazy;

/// array sizes the sort algorithms are compared on
pub const SIZE_LIST: [usize; 4] = [20, 100, 10_000, 50_000];

/// number of times each algorithm runs on each array size -- the reported numbers are averages over these runs
pub const RUNS: u32 = 5;

/// exclusive upper bound for the randomly generated (non-negative) array elements
pub const BOUND: i32 = 1000;

/// seed for the random generator, so the compared arrays are reproducible between executions
pub const DEFAULT_SEED: u64 = 838_215;

/// number of elements of the array used to compare the linear & binary searches
pub const SEARCH_ARRAY_SIZE: usize = 100_000;

/// how many searches the "is it worth sorting first?" report is about
pub const NUMBER_OF_SEARCHES: u64 = 1000;

/// a value guaranteed not to be present in the generated arrays -- forcing searches into their worst case
pub const ABSENT_VALUE: i32 = -1;

/// where the `ice-sheets` executable reads its data from, if no path is given in the command line
pub const ICE_SHEETS_FILE: &str = "data/ICESHEETS.TXT";

/// ice sheet cells holding at least this thickness may be fracture points...
pub const FRACTURE_THRESHOLD: i32 = 200;

/// ... provided they are also evenly divisible by this
pub const FRACTURE_DIVISOR: i32 = 50;

/// cells adjacent to a fracture point that are evenly divisible by this (and not zero) are crack points
pub const CRACK_DIVISOR: i32 = 10;


/// Parameters for [crate::runners::sort_comparison::run_sort_comparison()]
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// each size gets its own randomly generated base array
    pub sizes:     Vec<usize>,
    /// repetitions of each algorithm over (a fresh copy of) the same base array
    pub runs:      u32,
    /// elements are drawn from `[0, bound)`
    pub bound:     i32,
    pub seed:      u64,
    /// unit for the reported average execution times
    pub time_unit: &'static TimeUnit<u128>,
}
impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes:     SIZE_LIST.to_vec(),
            runs:      RUNS,
            bound:     BOUND,
            seed:      DEFAULT_SEED,
            time_unit: &TimeUnits::NANOSECOND,
        }
    }
}

/// Parameters for [crate::runners::search_comparison::run_search_comparison()]
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub array_size:         usize,
    pub bound:              i32,
    pub seed:               u64,
    /// the value searched for -- expected to be absent, so both searches perform their worst case
    pub absent_value:       i32,
    pub number_of_searches: u64,
    pub time_unit:          &'static TimeUnit<u128>,
}
impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            array_size:         SEARCH_ARRAY_SIZE,
            bound:              BOUND,
            seed:               DEFAULT_SEED,
            absent_value:       ABSENT_VALUE,
            number_of_searches: NUMBER_OF_SEARCHES,
            time_unit:          &TimeUnits::NANOSECOND,
        }
    }
}

/// The configuration the `sort-comparison` executable runs with
pub static DEFAULT_HARNESS_CONFIG: Lazy<HarnessConfig> = Lazy::new(HarnessConfig::default);

/// The configuration the `sort-comparison` executable uses for its searches report
pub static DEFAULT_SEARCH_CONFIG: Lazy<SearchConfig> = Lazy::new(SearchConfig::default);
