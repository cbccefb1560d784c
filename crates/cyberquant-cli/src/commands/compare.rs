use clap::Args;
use serde_json::Value;

use cyberquant_core::simulation::engine::{self, SimulationConfig};
use cyberquant_core::types::AssessmentInputs;

use crate::input;

/// Arguments for scenario comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to the baseline assessment, JSON or YAML
    #[arg(long)]
    pub baseline: String,

    /// Path to the alternative assessment, JSON or YAML
    #[arg(long)]
    pub alternative: String,

    /// Number of Monte Carlo trials per scenario
    #[arg(long, default_value_t = 50_000)]
    pub iterations: u32,

    /// Shared seed so both scenarios face the same draw sequence
    #[arg(long, default_value_t = 7)]
    pub seed: u64,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let baseline_inputs: AssessmentInputs = input::file::read_assessment(&args.baseline)?;
    let alternative_inputs: AssessmentInputs = input::file::read_assessment(&args.alternative)?;

    let config = SimulationConfig {
        iterations: args.iterations,
        seed: Some(args.seed),
    };
    let baseline = engine::run_risk_simulation(&baseline_inputs, &config)?;
    let alternative = engine::run_risk_simulation(&alternative_inputs, &config)?;

    let delta = engine::compare_scenarios(&baseline.result, &alternative.result);
    Ok(serde_json::to_value(delta)?)
}
