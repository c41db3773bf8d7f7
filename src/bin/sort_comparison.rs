//! Compares the sort algorithms on random arrays of several sizes, then compares a linear search
//! against a binary search.\
//! Usage: `sort-comparison [letters]` -- where `letters` (a to g) select the algorithms to compare: all of them, if omitted.

use sort_search_comparison::{
    analyse_comparison_growth, run_search_comparison, run_sort_comparison,
    configs::{DEFAULT_HARNESS_CONFIG, DEFAULT_SEARCH_CONFIG},
    SortAlgorithm, OUTPUT,
};
use std::process::ExitCode;


fn main() -> ExitCode {
    let algorithms = match selected_algorithms(std::env::args().skip(1)) {
        Ok(algorithms) => algorithms,
        Err(unknown) => {
            OUTPUT(&format!("Unknown sort algorithm '{}' -- please use letters from 'a' to 'g':\n", unknown));
            for algorithm in SortAlgorithm::ALL {
                OUTPUT(&format!("  {}\n", algorithm));
            }
            return ExitCode::from(2);
        },
    };

    for algorithm in &algorithms {
        OUTPUT(&format!("{}: time {}; space {}\n", algorithm, algorithm.big_o_time(), algorithm.big_o_space()));
    }
    OUTPUT("\n");

    let reports = run_sort_comparison(&DEFAULT_HARNESS_CONFIG, &algorithms);
    for report in &reports {
        OUTPUT(&format!("\n{}", report));
    }
    OUTPUT(&format!("\n{}\n", analyse_comparison_growth(&reports)));

    let search_report = run_search_comparison(&DEFAULT_SEARCH_CONFIG);
    OUTPUT(&format!("{}", search_report));
    ExitCode::SUCCESS
}

/// every char of every argument selects an algorithm, by its letter
fn selected_algorithms(args: impl Iterator<Item=String>) -> Result<Vec<SortAlgorithm>, char> {
    let mut algorithms = Vec::new();
    for letter in args.flat_map(|arg| arg.chars().collect::<Vec<_>>()) {
        let algorithm = SortAlgorithm::from_letter(letter).ok_or(letter)?;
        if !algorithms.contains(&algorithm) {
            algorithms.push(algorithm);
        }
    }
    if algorithms.is_empty() {
        algorithms.extend(SortAlgorithm::ALL);
    }
    Ok(algorithms)
}
