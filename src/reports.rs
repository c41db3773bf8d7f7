//! Report types produced by the [crate::runners] & their console presentation, through [Display].

use crate::{
    algorithms::{searching::SearchOutcome, SortAlgorithm},
    low_level_analysis::types::{AlgorithmAverages, BigOAlgorithmComplexity, TimeUnit},
    runners::search_comparison::{break_even_searches, time_saved},
};
use std::fmt::{Display, Formatter};


const TABLE_WIDTH: usize = 58;

/// The averaged results of all algorithms for one array size
#[derive(Debug, Clone)]
pub struct SizeReport {
    pub size:      usize,
    pub runs:      u32,
    pub time_unit: &'static TimeUnit<u128>,
    /// one entry per algorithm, in the order they were given to the harness
    pub results:   Vec<AlgorithmAverages>,
}
impl SizeReport {
    /// the results for `algorithm`, if it took part in the comparison
    pub fn averages_for(&self, algorithm: SortAlgorithm) -> Option<&AlgorithmAverages> {
        self.results.iter().find(|averages| averages.algorithm == algorithm)
    }
}
impl Display for SizeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Comparison for array size of {} (Averaged over {} runs)", self.size, self.runs)?;
        writeln!(f, "{}", "=".repeat(TABLE_WIDTH))?;
        writeln!(f, "{:<10} {:<15} {:<15} {:<10}", "Algorithm", "Execution Time", "Compares", "Basic Step")?;
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;
        for averages in &self.results {
            match averages.basic_step {
                Some(basic_step) => writeln!(f, "{:<10} {:<15} {:<15} {:<10.1}", averages.algorithm.letter(), averages.average_time, averages.average_comparisons, basic_step)?,
                None             => writeln!(f, "{:<10} {:<15} {:<15} {:<10}",   averages.algorithm.letter(), averages.average_time, averages.average_comparisons, "N/A")?,
            }
        }
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))
    }
}

/// How the comparison counts of one algorithm grew between two array sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityRow {
    pub algorithm: SortAlgorithm,
    pub n1:        usize,
    pub c1:        u64,
    pub n2:        usize,
    pub c2:        u64,
    /// `None` if the counts were not enough to tell
    pub observed:  Option<BigOAlgorithmComplexity>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexityReport {
    pub rows: Vec<ComplexityRow>,
}
impl Display for ComplexityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Comparisons growth analysis:")?;
        for row in &self.rows {
            let observed = row.observed
                .map(|complexity| complexity.as_pretty_str())
                .unwrap_or("N/A");
            writeln!(f, "{} -- n: {} → {}; compares: {} → {}; observed: {}; expected (worst case): {}",
                     row.algorithm, row.n1, row.n2, row.c1, row.c2, observed, row.algorithm.big_o_time())?;
        }
        Ok(())
    }
}

/// The results of a linear vs binary search comparison -- times expressed in `time_unit`
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub array_size:         usize,
    pub time_unit:          &'static TimeUnit<u128>,
    /// the time taken to sort the array searched by the binary search
    pub sort_time:          u128,
    pub linear_time:        u128,
    pub binary_time:        u128,
    pub linear_outcome:     SearchOutcome,
    pub binary_outcome:     SearchOutcome,
    pub number_of_searches: u64,
}
impl SearchReport {
    /// See [time_saved()]
    pub fn time_saved(&self) -> i128 {
        time_saved(self.linear_time, self.binary_time, self.number_of_searches)
    }
    /// See [break_even_searches()]
    pub fn break_even_searches(&self) -> Option<u64> {
        break_even_searches(self.sort_time, self.linear_time, self.binary_time)
    }
}
impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "For array size of {}:", self.array_size)?;
        writeln!(f, "Linear search took {} {}", self.linear_time, self.time_unit.unit_str)?;
        writeln!(f, "Binary search took {} {}", self.binary_time, self.time_unit.unit_str)?;
        // the configured amount is shown whether or not sorting paid off: see `break_even_searches()` for the real figure
        writeln!(f, "Number of Linear Searches needed to justify sorting: {}", self.number_of_searches)
    }
}
