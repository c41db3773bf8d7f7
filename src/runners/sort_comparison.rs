//! Knows how to run & measure the sort algorithms over several array sizes & repetitions,
//! producing the averages shown in the comparison reports.\
//! See [tests] and `tests/sort_search_tests.rs` for examples.

use crate::{
    algorithms::SortAlgorithm,
    array_utils::{copy_array, generate_random_array_with},
    configs::HarnessConfig,
    features::OUTPUT,
    low_level_analysis::{
        analyse_comparisons_growth,
        types::AggregateResult,
    },
    reports::{ComplexityReport, ComplexityRow, SizeReport},
    runners::common::*,
};
use rand::{rngs::StdRng, SeedableRng};


/// Runs every one of the given `algorithms` on every size of `config.sizes`, `config.runs` times each, reporting
/// the averaged execution times & comparison counts per size.\
/// A single random base array is generated per size (all sizes drawn, in order, from the same generator seeded with
/// `config.seed`) and each algorithm run operates on its own fresh copy of it.\
/// Progress is sent to [OUTPUT].
pub fn run_sort_comparison(config: &HarnessConfig, algorithms: &[SortAlgorithm]) -> Vec<SizeReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    config.sizes.iter()
        .map(|&size| {
            let original_data = generate_random_array_with(&mut rng, size, config.bound);
            compare_on_array(config, algorithms, &original_data)
        })
        .collect()
}

/// Runs & measures the `algorithms` on copies of `original_data`, `config.runs` times each
pub fn compare_on_array(config: &HarnessConfig, algorithms: &[SortAlgorithm], original_data: &[i32]) -> SizeReport {
    OUTPUT(&format!("Running {} algorithm(s) on {} elements, {} time(s) each:", algorithms.len(), original_data.len(), config.runs));
    let mut aggregates: Vec<AggregateResult> = algorithms.iter()
        .map(|&algorithm| AggregateResult::new(algorithm))
        .collect();
    for run in 0..config.runs {
        OUTPUT(&format!(" #{}", run+1));
        for aggregate in aggregates.iter_mut() {
            let mut temp_array = copy_array(original_data);
            let sample = run_sort_pass(aggregate.algorithm.sort_fn(), &mut temp_array);
            aggregate.accumulate(sample);
        }
    }
    OUTPUT("\n");
    SizeReport {
        size:      original_data.len(),
        runs:      config.runs,
        time_unit: config.time_unit,
        results:   aggregates.iter()
                       .map(|aggregate| aggregate.averages(config.time_unit))
                       .collect(),
    }
}

/// Classifies how the average comparison counts of each algorithm grow from the smallest to the
/// largest size present in `reports`
pub fn analyse_comparison_growth(reports: &[SizeReport]) -> ComplexityReport {
    let smallest = reports.iter().min_by_key(|report| report.size);
    let largest  = reports.iter().max_by_key(|report| report.size);
    let rows = match (smallest, largest) {
        (Some(smallest), Some(largest)) => smallest.results.iter()
            .filter_map(|small| {
                let large = largest.results.iter().find(|large| large.algorithm == small.algorithm)?;
                Some(ComplexityRow {
                    algorithm:   small.algorithm,
                    n1:          smallest.size,
                    c1:          small.average_comparisons,
                    n2:          largest.size,
                    c2:          large.average_comparisons,
                    observed:    analyse_comparisons_growth(smallest.size, small.average_comparisons, largest.size, large.average_comparisons),
                })
            })
            .collect(),
        _ => vec![],
    };
    ComplexityReport { rows }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [sort_comparison](super) module -- using 'serial_test' crate in order to make time measurements more reliable.

    use super::*;
    use crate::{
        array_utils::generate_random_array,
        low_level_analysis::types::{BigOAlgorithmComplexity, TimeUnits},
    };
    use serial_test::serial;

    fn small_config() -> HarnessConfig {
        HarnessConfig {
            sizes: vec![0, 1, 20, 100],
            runs:  3,
            ..HarnessConfig::default()
        }
    }

    #[test]
    #[serial]
    fn one_report_per_size_with_one_row_per_algorithm() {
        let config = small_config();
        let reports = run_sort_comparison(&config, &SortAlgorithm::ALL);
        assert_eq!(reports.iter().map(|report| report.size).collect::<Vec<_>>(), vec![0, 1, 20, 100]);
        for report in &reports {
            assert_eq!(report.runs, 3);
            let algorithms: Vec<SortAlgorithm> = report.results.iter().map(|averages| averages.algorithm).collect();
            assert_eq!(algorithms, SortAlgorithm::ALL.to_vec());
        }
    }

    #[test]
    #[serial]
    fn averages_match_a_single_run_count() {
        let config = small_config();
        let original_data = generate_random_array(100, config.bound, 77);
        let report = compare_on_array(&config, &SortAlgorithm::ALL, &original_data);
        for averages in &report.results {
            let expected = averages.algorithm.sort(&mut original_data.clone());
            assert_eq!(averages.average_comparisons, expected,
                       "Every run operates on a fresh copy: average comparisons for {} should equal the count of a single run", averages.algorithm);
        }
    }

    #[test]
    #[serial]
    fn empty_arrays_yield_no_basic_step() {
        let config = HarnessConfig { sizes: vec![0], runs: 2, ..HarnessConfig::default() };
        let reports = run_sort_comparison(&config, &SortAlgorithm::ALL);
        assert!(reports[0].results.iter().all(|averages| averages.average_comparisons == 0 && averages.basic_step.is_none()));
    }

    #[test]
    #[serial]
    fn runs_are_reproducible_for_the_same_seed() {
        let config = small_config();
        let counts = |reports: Vec<SizeReport>| reports.into_iter()
            .flat_map(|report| report.results.into_iter().map(|averages| averages.average_comparisons))
            .collect::<Vec<_>>();
        let first  = counts(run_sort_comparison(&config, &SortAlgorithm::ALL));
        let second = counts(run_sort_comparison(&config, &SortAlgorithm::ALL));
        assert_eq!(first, second);
        let other_seed = HarnessConfig { seed: config.seed + 1, ..small_config() };
        let third = counts(run_sort_comparison(&other_seed, &SortAlgorithm::ALL));
        assert_ne!(first, third, "A different seed should (most probably) lead to different counts");
    }

    #[test]
    #[serial]
    fn time_unit_is_honored() {
        let config = HarnessConfig { sizes: vec![50], runs: 1, time_unit: &TimeUnits::MILLISECOND, ..HarnessConfig::default() };
        let reports = run_sort_comparison(&config, &[SortAlgorithm::CountingByOffset]);
        assert_eq!(reports[0].results[0].average_time, 0, "Counting sort on 50 elements should take less than a millisecond");
        assert_eq!(reports[0].time_unit.unit_str, "ms");
        assert_eq!(reports[0].results[0].average_comparisons, 4 * 50 - 2);
    }

    #[test]
    #[serial]
    fn growth_analysis_compares_smallest_and_largest_sizes() {
        let config = HarnessConfig { sizes: vec![2000, 1000], runs: 1, ..HarnessConfig::default() };
        let reports = run_sort_comparison(&config, &[SortAlgorithm::Bubble, SortAlgorithm::CountingByOffset]);
        let analysis = analyse_comparison_growth(&reports);
        assert_eq!(analysis.rows.len(), 2);
        assert_eq!((analysis.rows[0].n1, analysis.rows[0].n2), (1000, 2000));
        assert_eq!(analysis.rows[0].observed, Some(BigOAlgorithmComplexity::ON2));
        assert_eq!(analysis.rows[1].observed, Some(BigOAlgorithmComplexity::ON));
        assert!(analyse_comparison_growth(&[]).rows.is_empty());
    }
}
