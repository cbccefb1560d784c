//! Simulation driver.
//!
//! Composes the risk-factor samplers trial by trial, then delegates to the
//! statistics, insight, benchmarking, and optimization layers to assemble
//! the full result bundle.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::analytics::benchmark::benchmark_against_industry;
use crate::analytics::insights::{generate_recommendations, identify_key_drivers};
use crate::analytics::statistics::{
    build_distribution_buckets, build_exceedance_curve, compute_risk_rating, summarize_ale,
};
use crate::error::RiskQuantError;
use crate::optimization::gordon_loeb::optimal_spend;
use crate::sampling::factors::{
    sample_primary_loss, sample_secondary_loss, sample_tef, sample_vulnerability,
};
use crate::tables;
use crate::types::{
    with_metadata, AssessmentInputs, ComputationOutput, ScenarioDelta, SimulationResults,
};
use crate::RiskQuantResult;

/// Default number of Monte Carlo trials
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Fewer trials than this is a caller error
pub const MIN_ITERATIONS: u32 = 100;

/// Trial counts below this draw a convergence warning
const RECOMMENDED_ITERATIONS: u32 = 10_000;

/// Maximum number of selectable threat concerns
pub const MAX_THREAT_CONCERNS: usize = 3;

const METHODOLOGY: &str = "FAIR Monte Carlo over threat event frequency, vulnerability, \
     and loss magnitude; Gordon-Loeb investment bound";

/// Engine configuration for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of trials
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Seed for reproducible runs; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run a full risk simulation and wrap the results in the standard
/// computation envelope.
pub fn run_risk_simulation(
    inputs: &AssessmentInputs,
    config: &SimulationConfig,
) -> RiskQuantResult<ComputationOutput<SimulationResults>> {
    let start = Instant::now();

    let mut warnings = Vec::new();
    if config.iterations < RECOMMENDED_ITERATIONS {
        warnings.push(format!(
            "Only {} trials requested; percentile estimates may not have converged",
            config.iterations
        ));
    }
    if inputs.threats.top_concerns.is_empty() {
        warnings.push(
            "No threat concerns selected; frequency uses the industry baseline".to_string(),
        );
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let results = simulate(inputs, config.iterations, &mut rng)?;

    let assumptions = serde_json::json!({
        "inputs": inputs,
        "iterations": config.iterations,
        "seed": config.seed,
    });

    let elapsed_us = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        METHODOLOGY,
        &assumptions,
        warnings,
        elapsed_us,
        results,
    ))
}

/// Run `iterations` independent annual trials and derive the result bundle.
///
/// Bit-for-bit reproducible for a given rng sequence. Callers comparing
/// scenarios should seed each run identically.
pub fn simulate<R: Rng>(
    inputs: &AssessmentInputs,
    iterations: u32,
    rng: &mut R,
) -> RiskQuantResult<SimulationResults> {
    validate_inputs(inputs, iterations)?;

    // Annual loss per trial: loss event frequency (TEF x vulnerability)
    // times total loss magnitude (primary + secondary).
    let mut raw_losses = Vec::with_capacity(iterations as usize);
    let mut vulnerability_sum = 0.0;
    for _ in 0..iterations {
        let tef = sample_tef(inputs, rng)?;
        let vulnerability = sample_vulnerability(inputs, rng)?;
        let primary = sample_primary_loss(inputs, rng)?;
        let secondary = sample_secondary_loss(inputs, primary, rng)?;
        vulnerability_sum += vulnerability;
        raw_losses.push(tef * vulnerability * (primary + secondary));
    }
    let mean_vulnerability = vulnerability_sum / iterations as f64;

    let ale = summarize_ale(&raw_losses)?;
    let distribution_buckets = build_distribution_buckets(&raw_losses)?;
    let exceedance_curve = build_exceedance_curve(&raw_losses)?;

    let revenue = tables::revenue_band_midpoint(&inputs.company.revenue_band);
    let risk_rating = compute_risk_rating(ale.mean, revenue)?;
    let gordon_loeb_spend = optimal_spend(mean_vulnerability, ale.mean, revenue);
    let industry_benchmark = benchmark_against_industry(&inputs.company.industry, ale.mean);
    let key_drivers = identify_key_drivers(inputs);
    let recommendations = generate_recommendations(inputs, ale.mean, gordon_loeb_spend);

    Ok(SimulationResults {
        ale,
        risk_rating,
        gordon_loeb_spend,
        mean_vulnerability,
        industry_benchmark,
        distribution_buckets,
        exceedance_curve,
        key_drivers,
        recommendations,
        raw_losses,
        iterations,
    })
}

/// Difference two simulated scenarios.
///
/// Meaningful when both were run with the same seed, so the delta reflects
/// the input change rather than sampling noise.
pub fn compare_scenarios(
    baseline: &SimulationResults,
    alternative: &SimulationResults,
) -> ScenarioDelta {
    let mean_ale_delta = alternative.ale.mean - baseline.ale.mean;
    let mean_ale_delta_pct = if baseline.ale.mean > 0.0 {
        100.0 * mean_ale_delta / baseline.ale.mean
    } else {
        0.0
    };
    ScenarioDelta {
        baseline_mean_ale: baseline.ale.mean,
        alternative_mean_ale: alternative.ale.mean,
        mean_ale_delta,
        mean_ale_delta_pct,
        p95_delta: alternative.ale.p95 - baseline.ale.p95,
        spend_delta: alternative.gordon_loeb_spend - baseline.gordon_loeb_spend,
        baseline_rating: baseline.risk_rating.clone(),
        alternative_rating: alternative.risk_rating.clone(),
        rating_changed: baseline.risk_rating != alternative.risk_rating,
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_inputs(inputs: &AssessmentInputs, iterations: u32) -> RiskQuantResult<()> {
    if iterations < MIN_ITERATIONS {
        return Err(RiskQuantError::InvalidInput {
            field: "iterations".to_string(),
            reason: format!("Must be at least {}", MIN_ITERATIONS),
        });
    }
    if inputs.data.record_count == 0 {
        return Err(RiskQuantError::InvalidInput {
            field: "record_count".to_string(),
            reason: "Must be at least 1".to_string(),
        });
    }
    if !(0.0..=100.0).contains(&inputs.data.cloud_percentage) {
        return Err(RiskQuantError::InvalidInput {
            field: "cloud_percentage".to_string(),
            reason: "Must be between 0 and 100".to_string(),
        });
    }
    if inputs.threats.top_concerns.len() > MAX_THREAT_CONCERNS {
        return Err(RiskQuantError::InvalidInput {
            field: "top_concerns".to_string(),
            reason: format!("At most {} concerns may be selected", MAX_THREAT_CONCERNS),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CompanyProfile, DataProfile, DataType, EmployeeBand, IncidentHistory, Industry, Region,
        RevenueBand, RiskRating, SecurityControls, ThreatCategory, ThreatProfile,
    };
    use pretty_assertions::assert_eq;

    const SEED: u64 = 42;
    const TEST_ITERATIONS: u32 = 2_000;

    fn base_inputs() -> AssessmentInputs {
        AssessmentInputs {
            company: CompanyProfile {
                industry: Industry::Technology,
                revenue_band: RevenueBand::From50MTo250M,
                employee_band: EmployeeBand::Mid,
                region: Region::NorthAmerica,
                organization_name: Some("Acme Corp".to_string()),
            },
            data: DataProfile {
                data_types: vec![DataType::PII, DataType::Credentials],
                record_count: 250_000,
                cloud_percentage: 60.0,
            },
            controls: SecurityControls {
                security_team: true,
                incident_response_plan: true,
                security_automation: false,
                mfa: true,
                penetration_testing: false,
                cyber_insurance: false,
            },
            threats: ThreatProfile {
                top_concerns: vec![ThreatCategory::Ransomware, ThreatCategory::Phishing],
                incident_history: IncidentHistory::One,
            },
        }
    }

    fn seeded(inputs: &AssessmentInputs) -> SimulationResults {
        let mut rng = StdRng::seed_from_u64(SEED);
        simulate(inputs, TEST_ITERATIONS, &mut rng).unwrap()
    }

    #[test]
    fn test_simulate_is_reproducible_with_same_seed() {
        let inputs = base_inputs();
        let first = seeded(&inputs);
        let second = seeded(&inputs);

        assert_eq!(first.ale.mean, second.ale.mean);
        assert_eq!(first.ale.p95, second.ale.p95);
        assert_eq!(first.gordon_loeb_spend, second.gordon_loeb_spend);
        assert_eq!(first.raw_losses, second.raw_losses);
    }

    #[test]
    fn test_raw_losses_length_matches_iterations() {
        let results = seeded(&base_inputs());
        assert_eq!(results.raw_losses.len(), TEST_ITERATIONS as usize);
        assert_eq!(results.iterations, TEST_ITERATIONS);
        assert!(results.raw_losses.iter().all(|loss| *loss > 0.0));
    }

    #[test]
    fn test_percentile_ordering_holds() {
        let results = seeded(&base_inputs());
        assert!(results.ale.p10 <= results.ale.median);
        assert!(results.ale.median <= results.ale.p90);
        assert!(results.ale.p90 <= results.ale.p95);
        assert!(results.ale.mean > 0.0);
    }

    #[test]
    fn test_benchmark_rank_within_percent_range() {
        let results = seeded(&base_inputs());
        let rank = results.industry_benchmark.percentile_rank;
        assert!((0.0..=100.0).contains(&rank), "Rank {} out of range", rank);
    }

    #[test]
    fn test_healthcare_risk_exceeds_hospitality() {
        let mut healthcare = base_inputs();
        healthcare.company.industry = Industry::Healthcare;
        let mut hospitality = base_inputs();
        hospitality.company.industry = Industry::Hospitality;

        let healthcare_results = seeded(&healthcare);
        let hospitality_results = seeded(&hospitality);

        assert!(
            healthcare_results.ale.mean > hospitality_results.ale.mean,
            "Healthcare mean {} should exceed hospitality mean {}",
            healthcare_results.ale.mean,
            hospitality_results.ale.mean
        );
    }

    #[test]
    fn test_more_controls_lower_mean_ale() {
        let mut none = base_inputs();
        none.controls = SecurityControls {
            security_team: false,
            incident_response_plan: false,
            security_automation: false,
            mfa: false,
            penetration_testing: false,
            cyber_insurance: false,
        };
        let mut all = base_inputs();
        all.controls = SecurityControls {
            security_team: true,
            incident_response_plan: true,
            security_automation: true,
            mfa: true,
            penetration_testing: true,
            cyber_insurance: true,
        };

        let none_results = seeded(&none);
        let all_results = seeded(&all);

        assert!(
            all_results.ale.mean < none_results.ale.mean,
            "Full controls ({}) should sit below no controls ({})",
            all_results.ale.mean,
            none_results.ale.mean
        );
    }

    #[test]
    fn test_drivers_and_recommendations_present() {
        let results = seeded(&base_inputs());
        assert!(!results.key_drivers.is_empty());
        assert!(!results.recommendations.is_empty());
        assert!(results.distribution_buckets.len() > 1);
        assert!(!results.exceedance_curve.is_empty());
    }

    #[test]
    fn test_empty_concerns_run_cleanly() {
        let mut inputs = base_inputs();
        inputs.threats.top_concerns.clear();
        let results = seeded(&inputs);
        assert!(results.ale.mean > 0.0);
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let inputs = base_inputs();
        let mut rng = StdRng::seed_from_u64(SEED);
        assert!(simulate(&inputs, 99, &mut rng).is_err());

        let mut zero_records = base_inputs();
        zero_records.data.record_count = 0;
        assert!(simulate(&zero_records, TEST_ITERATIONS, &mut rng).is_err());

        let mut bad_cloud = base_inputs();
        bad_cloud.data.cloud_percentage = 120.0;
        assert!(simulate(&bad_cloud, TEST_ITERATIONS, &mut rng).is_err());

        let mut too_many = base_inputs();
        too_many.threats.top_concerns = vec![
            ThreatCategory::Ransomware,
            ThreatCategory::Phishing,
            ThreatCategory::SupplyChain,
            ThreatCategory::InsiderThreat,
        ];
        assert!(simulate(&too_many, TEST_ITERATIONS, &mut rng).is_err());
    }

    #[test]
    fn test_envelope_carries_metadata_and_warnings() {
        let mut inputs = base_inputs();
        inputs.threats.top_concerns.clear();
        let config = SimulationConfig {
            iterations: 500,
            seed: Some(SEED),
        };
        let output = run_risk_simulation(&inputs, &config).unwrap();

        assert_eq!(output.metadata.precision, "ieee754_f64");
        assert!(!output.methodology.is_empty());
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("No threat concerns")));
        assert!(output.warnings.iter().any(|w| w.contains("trials")));
        assert_eq!(output.result.iterations, 500);
    }

    #[test]
    fn test_compare_scenarios_tracks_insurance_effect() {
        let mut uninsured = base_inputs();
        uninsured.controls.cyber_insurance = false;
        let mut insured = base_inputs();
        insured.controls.cyber_insurance = true;

        let baseline = seeded(&uninsured);
        let alternative = seeded(&insured);
        let delta = compare_scenarios(&baseline, &alternative);

        assert!(
            delta.mean_ale_delta < 0.0,
            "Insurance should lower the mean ALE, delta was {}",
            delta.mean_ale_delta
        );
        assert!(delta.mean_ale_delta_pct < 0.0);
        assert_eq!(delta.baseline_mean_ale, baseline.ale.mean);
        assert_eq!(
            delta.rating_changed,
            delta.baseline_rating != delta.alternative_rating
        );
    }

    #[test]
    fn test_rating_consistent_with_revenue_band() {
        let results = seeded(&base_inputs());
        let revenue = tables::revenue_band_midpoint(&RevenueBand::From50MTo250M);
        let expected = compute_risk_rating(results.ale.mean, revenue).unwrap();
        assert_eq!(results.risk_rating, expected);
        assert!(matches!(
            results.risk_rating,
            RiskRating::Low | RiskRating::Moderate | RiskRating::High | RiskRating::Critical
        ));
    }
}
