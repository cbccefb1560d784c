use clap::Args;
use serde::Serialize;
use serde_json::Value;

use cyberquant_core::analytics::statistics;
use cyberquant_core::types::RiskRating;

/// Arguments for risk rating classification
#[derive(Args)]
pub struct RatingArgs {
    /// Annualized loss expectancy in dollars
    #[arg(long)]
    pub ale: f64,

    /// Annual revenue in dollars
    #[arg(long)]
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
struct RatingOutput {
    risk_rating: RiskRating,
    ale_to_revenue_ratio: f64,
}

pub fn run_rating(args: RatingArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let risk_rating = statistics::compute_risk_rating(args.ale, args.revenue)?;
    let output = RatingOutput {
        risk_rating,
        ale_to_revenue_ratio: args.ale / args.revenue,
    };
    Ok(serde_json::to_value(output)?)
}
