//! Peer benchmarking of the simulated loss expectancy.

use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

use crate::tables;
use crate::types::{Industry, IndustryBenchmark};

/// Log-scale spread of the modeled peer ALE distribution
const BENCHMARK_SIGMA: f64 = 1.1;

/// Rank the simulated ALE against a log-normal peer model centered on the
/// industry median. A rank of 75 means the expected loss exceeds three
/// quarters of modeled peers. Non-positive ALE ranks at 0.
pub fn benchmark_against_industry(industry: &Industry, your_ale: f64) -> IndustryBenchmark {
    let industry_median = tables::industry_profile(industry).median_ale;
    let percentile_rank = if your_ale > 0.0 {
        let z = (your_ale.ln() - industry_median.ln()) / BENCHMARK_SIGMA;
        100.0 * standard_normal_cdf(z)
    } else {
        0.0
    };
    IndustryBenchmark {
        your_ale,
        industry_median,
        percentile_rank,
    }
}

/// CDF of the standard normal via the error function
fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}
