use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn run_risk_simulation(
    input_json: String,
    config_json: Option<String>,
) -> NapiResult<String> {
    let inputs: cyberquant_core::types::AssessmentInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = match config_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => cyberquant_core::simulation::engine::SimulationConfig::default(),
    };
    let output = cyberquant_core::simulation::engine::run_risk_simulation(&inputs, &config)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_scenarios(baseline_json: String, alternative_json: String) -> NapiResult<String> {
    let baseline: cyberquant_core::types::SimulationResults =
        serde_json::from_str(&baseline_json).map_err(to_napi_error)?;
    let alternative: cyberquant_core::types::SimulationResults =
        serde_json::from_str(&alternative_json).map_err(to_napi_error)?;
    let delta = cyberquant_core::simulation::engine::compare_scenarios(&baseline, &alternative);
    serde_json::to_string(&delta).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Optimization
// ---------------------------------------------------------------------------

#[napi]
pub fn optimal_security_spend(vulnerability: f64, ale: f64, revenue: f64) -> f64 {
    cyberquant_core::optimization::gordon_loeb::optimal_spend(vulnerability, ale, revenue)
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[napi]
pub fn risk_rating(ale: f64, revenue: f64) -> NapiResult<String> {
    let rating = cyberquant_core::analytics::statistics::compute_risk_rating(ale, revenue)
        .map_err(to_napi_error)?;
    serde_json::to_string(&rating).map_err(to_napi_error)
}
