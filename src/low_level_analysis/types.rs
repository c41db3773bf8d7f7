//! Defines enums & structs returned / shared by the measurement & analysis functions of this crate.

use crate::algorithms::SortAlgorithm;
use std::{
    fmt::{Debug, Display, Formatter},
    time::Duration,
};


/// Possible complexity analysis results, in big-O notation -- see [super::analyse_complexity()].
/// Variants are ordered from the best to the worst complexity.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BigOAlgorithmComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    BetweenON2AndON3,
    ON3,
    BetweenON3AndON4,
    ON4,
    BetweenON4AndOkN,
    OkN,
    WorseThanExponential,
}
impl BigOAlgorithmComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1)",
            Self::O1                   => "O(1)",
            Self::BetweenO1AndOLogN    => "Worse than O(1), but better than O(log(n))",
            Self::OLogN                => "O(log(n))",
            Self::BetweenOLogNAndON    => "Worse than O(log(n)), but better than O(n)",
            Self::ON                   => "O(n)",
            Self::BetweenONAndONLogN   => "Worse than O(n), but better than O(n.log(n))",
            Self::ONLogN               => "O(n.log(n))",
            Self::BetweenONLogNAndON2  => "Worse than O(n.log(n)), but better than O(n²)",
            Self::ON2                  => "O(n²)",
            Self::BetweenON2AndON3     => "Worse than O(n²), but better than O(n³)",
            Self::ON3                  => "O(n³)",
            Self::BetweenON3AndON4     => "Worse than O(n³), but better than O(n^4)",
            Self::ON4                  => "O(n^4)",
            Self::BetweenON4AndOkN     => "Worse than O(n^4), but better than O(k^n)",
            Self::OkN                  => "O(k^n)",
            Self::WorseThanExponential => "Worse than O(k^n)",
        }
    }
}
impl Display for BigOAlgorithmComplexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_pretty_str())
    }
}

/// Specifies a time unit for measuring / reporting results.
/// Please use one of the prebuilt 'TimeUnits' constants instead of instantiating this:
/// [TimeUnits::NANOSECOND], [TimeUnits::MICROSECOND], [TimeUnits::MILLISECOND],  [TimeUnits::SECOND]
pub struct TimeUnit<T> {
    /// printable unit suffix: 'ns', 'µs', etc.
    pub unit_str: &'static str,
    /// one of [std::time::Duration]'s 'as_micros', 'as_seconds', ... function to convert a Duration object into a scalar
    pub(crate) duration_conversion_fn_ptr: fn(&Duration) -> T,
}
impl<T> TimeUnit<T> {
    /// converts `duration` into a scalar, in this unit
    pub fn convert(&self, duration: &Duration) -> T {
        (self.duration_conversion_fn_ptr)(duration)
    }
}
impl<T> Debug for TimeUnit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeUnit({})", self.unit_str)
    }
}
/// prebuilt [TimeUnit] constants
pub struct TimeUnits {}
impl TimeUnits {
    pub const NANOSECOND:  TimeUnit<u128> = TimeUnit { unit_str: "ns", duration_conversion_fn_ptr: Duration::as_nanos};
    pub const MICROSECOND: TimeUnit<u128> = TimeUnit { unit_str: "µs", duration_conversion_fn_ptr: Duration::as_micros};
    pub const MILLISECOND: TimeUnit<u128> = TimeUnit { unit_str: "ms", duration_conversion_fn_ptr: Duration::as_millis};
    pub const SECOND:      TimeUnit<u64>  = TimeUnit { unit_str: "s",  duration_conversion_fn_ptr: Duration::as_secs};
}

/// The outcome of a single timed run of an algorithm over one array instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExecutionSample {
    /// wall-clock time taken by the algorithm call
    pub elapsed:     Duration,
    /// the algorithm's own comparison count for the run
    pub comparisons: u64,
}

/// Running sums of [ExecutionSample]s for one algorithm over the repetitions on one array size.\
/// A new one is created for each size -- so nothing leaks from one size to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub algorithm:         SortAlgorithm,
    pub total_elapsed:     Duration,
    pub total_comparisons: u64,
    pub runs:              u32,
}
impl AggregateResult {

    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self {
            algorithm,
            total_elapsed:     Duration::ZERO,
            total_comparisons: 0,
            runs:              0,
        }
    }

    /// adds `sample` to the running sums
    pub fn accumulate(&mut self, sample: ExecutionSample) {
        self.total_elapsed     += sample.elapsed;
        self.total_comparisons += sample.comparisons;
        self.runs              += 1;
    }

    /// Computes the averages over the accumulated runs, expressing times in `time_unit`.\
    /// Like the sums they come from, averages are integers (the remainder of the division is dropped).
    pub fn averages(&self, time_unit: &TimeUnit<u128>) -> AlgorithmAverages {
        let runs = self.runs.max(1);
        let average_time        = time_unit.convert(&self.total_elapsed) / runs as u128;
        let average_comparisons = self.total_comparisons / runs as u64;
        AlgorithmAverages {
            algorithm: self.algorithm,
            average_time,
            average_comparisons,
            basic_step: basic_step_time(average_time, average_comparisons),
        }
    }
}

/// Per algorithm results for one array size, as presented in the reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmAverages {
    pub algorithm:           SortAlgorithm,
    /// in the time unit given to [AggregateResult::averages()]
    pub average_time:        u128,
    pub average_comparisons: u64,
    /// see [basic_step_time()]
    pub basic_step:          Option<f64>,
}

/// The time per "basic step" (comparison) -- `None` when no comparisons were made
pub fn basic_step_time(average_time: u128, average_comparisons: u64) -> Option<f64> {
    (average_comparisons > 0)
        .then(|| average_time as f64 / average_comparisons as f64)
}
