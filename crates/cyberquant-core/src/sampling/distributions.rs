//! Base distribution samplers.
//!
//! Every sampler consumes an explicit random source rather than a global
//! generator, so the same seed always replays the same draw sequence.

use rand::Rng;
use statrs::distribution::Beta;
use std::f64::consts::PI;

use crate::error::RiskQuantError;
use crate::RiskQuantResult;

/// One standard-normal variate via the Box-Muller transform.
///
/// Consumes exactly two uniform draws per call.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    // uniform draws are in [0, 1); reflect u1 so the log argument is never 0
    (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Sample exp(mu + sigma * z), z standard normal. Strictly positive.
pub fn log_normal<R: Rng>(mu: f64, sigma: f64, rng: &mut R) -> f64 {
    (mu + sigma * standard_normal(rng)).exp()
}

/// Sample a Beta(alpha, beta) variate in [0, 1]
pub fn beta<R: Rng>(alpha: f64, beta_shape: f64, rng: &mut R) -> RiskQuantResult<f64> {
    let dist = Beta::new(alpha, beta_shape).map_err(|e| RiskQuantError::InvalidInput {
        field: "beta".to_string(),
        reason: e.to_string(),
    })?;
    Ok(rng.sample(dist))
}

/// Sample a PERT(min, mode, max) variate.
///
/// Derives Beta shape parameters from the three-point estimate and rescales
/// the draw into [min, max]. Requires min < mode < max.
pub fn pert<R: Rng>(min: f64, mode: f64, max: f64, rng: &mut R) -> RiskQuantResult<f64> {
    if !(min < mode && mode < max) {
        return Err(RiskQuantError::InvalidInput {
            field: "pert".to_string(),
            reason: format!("Requires min < mode < max, got ({}, {}, {})", min, mode, max),
        });
    }
    let range = max - min;
    let alpha = 1.0 + 4.0 * (mode - min) / range;
    let beta_shape = 1.0 + 4.0 * (max - mode) / range;
    let draw = beta(alpha, beta_shape, rng)?;
    Ok(min + draw * range)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
