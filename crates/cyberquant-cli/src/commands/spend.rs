use clap::Args;
use serde::Serialize;
use serde_json::Value;

use cyberquant_core::optimization::gordon_loeb;

/// Arguments for the Gordon-Loeb optimal spend calculation
#[derive(Args)]
pub struct SpendArgs {
    /// Mean vulnerability, a probability in (0, 1)
    #[arg(long)]
    pub vulnerability: f64,

    /// Annualized loss expectancy in dollars
    #[arg(long)]
    pub ale: f64,

    /// Annual revenue in dollars
    #[arg(long)]
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
struct SpendOutput {
    optimal_spend: f64,
    benefit_bound: f64,
    revenue_cap: f64,
    cap_engaged: bool,
}

pub fn run_spend(args: SpendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let optimal_spend = gordon_loeb::optimal_spend(args.vulnerability, args.ale, args.revenue);
    let benefit_bound =
        gordon_loeb::BENEFIT_BOUND * args.vulnerability.max(0.0) * args.ale.max(0.0);
    let revenue_cap = gordon_loeb::REVENUE_CAP_SHARE * args.revenue.max(0.0);

    let output = SpendOutput {
        optimal_spend,
        benefit_bound,
        revenue_cap,
        cap_engaged: optimal_spend > 0.0 && revenue_cap < benefit_bound,
    };
    Ok(serde_json::to_value(output)?)
}
