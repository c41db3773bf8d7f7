#![doc = include_str!("../README.md")]

pub mod algorithms;
pub mod array_utils;
pub mod configs;
pub mod features;
pub mod ice_sheets;
pub mod low_level_analysis;
pub mod reports;
pub mod runners;


// exported symbols
pub use {
    algorithms::{
        SortAlgorithm,
        searching::SearchOutcome,
    },
    configs::{HarnessConfig, SearchConfig},
    features::OUTPUT,
    ice_sheets::{
        IceSheet, IceSheetsError,
        fractures::analyse_ice_sheets,
        parsing::{parse_ice_sheets, read_ice_sheets},
    },
    low_level_analysis::types::{
        BigOAlgorithmComplexity,
        TimeUnits,
    },
    reports::{ComplexityReport, SearchReport, SizeReport},
    runners::{
        sort_comparison::{analyse_comparison_growth, run_sort_comparison},
        search_comparison::run_search_comparison,
    },
};
