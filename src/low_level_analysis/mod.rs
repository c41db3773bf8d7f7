//! Exports the measurement types & the complexity analysis function used to classify how the
//! comparison counts of each algorithm grow with the array size. See:
//!   - [types]
//!   - [analyse_complexity()]

mod low_level_analysis;
pub use low_level_analysis::*;
pub mod types;
