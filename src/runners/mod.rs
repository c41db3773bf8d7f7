//! Contains executors of the algorithms, gathering the times & comparison counts
//! reported in [crate::reports] -- and passed to [crate::low_level_analysis]

pub(crate) mod common;
pub mod sort_comparison;
pub mod search_comparison;
