//! See [super].

use crate::{
    features::PERCENT_TOLERANCE,
    low_level_analysis::types::BigOAlgorithmComplexity,
};


/// Performs the Algorithm Complexity Analysis on the resource denoted by `u`, where `u1` & `u2` are the resource
/// utilization (time, comparisons, ...) for set sizes `n1` & `n2`
/// -- in other words, `n` represents the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc...
pub fn analyse_complexity(u1: f64, u2: f64, n1: f64, n2: f64) -> BigOAlgorithmComplexity {
    if (u2 / u1) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetterThanO1
    } else if ((u2 / u1) - 1.0).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::O1
    } else if ((u2 / u1) / ( n2.log2() / n1.log2() )) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenO1AndOLogN
    } else if ( ((u2 / u1) / ( n2.log2() / n1.log2() )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::OLogN
    } else if ((u2 / u1) / (n2 / n1)) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenOLogNAndON
    } else if ( ((u2 / u1) / (n2 / n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::ON
    } else if ((u2 / u1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenONAndONLogN
    } else if ( ((u2 / u1) / ( (n2*n2.log2()) / (n1*n1.log2()) )) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::ONLogN
    } else if ((u2 / u1) / (n2 / n1).powi(2)) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenONLogNAndON2
    } else if ( ((u2 / u1) / (n2 / n1).powi(2)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::ON2
    } else if ((u2 / u1) / (n2 / n1).powi(3)) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenON2AndON3
    } else if ( ((u2 / u1) / (n2 / n1).powi(3)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::ON3
    } else if ((u2 / u1) / (n2 / n1).powi(4)) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenON3AndON4
    } else if ( ((u2 / u1) / (n2 / n1).powi(4)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::ON4
    } else if (u2 / u1.powf(n2/n1)) < 1.0 - PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::BetweenON4AndOkN
    } else if ( (u2 / u1.powf(n2/n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        BigOAlgorithmComplexity::OkN
    } else {
        BigOAlgorithmComplexity::WorseThanExponential
    }
}

/// Classifies how the comparison counts `c1` & `c2`, observed for array sizes `n1` & `n2`, grow.\
/// Returns `None` when the counts can't tell anything: no comparisons on the smaller size or sizes
/// too small (or too close) to be compared.
pub fn analyse_comparisons_growth(n1: usize, c1: u64, n2: usize, c2: u64) -> Option<BigOAlgorithmComplexity> {
    let (n1, c1, n2, c2) = if n1 <= n2 { (n1, c1, n2, c2) } else { (n2, c2, n1, c1) };
    if c1 == 0 || n1 < 2 || n1 == n2 {
        return None;
    }
    Some(analyse_complexity(c1 as f64, c2 as f64, n1 as f64, n2 as f64))
}
