use clap::Args;
use serde_json::Value;

use cyberquant_core::simulation::engine::{self, SimulationConfig};
use cyberquant_core::types::AssessmentInputs;

use crate::input;

/// Arguments for a full risk simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to a JSON or YAML assessment file
    #[arg(long)]
    pub input: Option<String>,

    /// Number of Monte Carlo trials
    #[arg(long, default_value_t = engine::DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the per-trial loss array in the output (large)
    #[arg(long)]
    pub raw_losses: bool,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs: AssessmentInputs = if let Some(ref path) = args.input {
        input::file::read_assessment(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json|file.yaml> or stdin required for simulate".into());
    };

    let config = SimulationConfig {
        iterations: args.iterations,
        seed: args.seed,
    };
    let mut output = engine::run_risk_simulation(&inputs, &config)?;
    if !args.raw_losses {
        output.result.raw_losses.clear();
    }
    Ok(serde_json::to_value(output)?)
}
