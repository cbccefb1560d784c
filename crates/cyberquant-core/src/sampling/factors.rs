//! Risk-factor samplers.
//!
//! Each sampler is a pure function of (inputs, rng). The simulation driver
//! composes them per trial; tests drive them independently.

use rand::Rng;

use crate::sampling::distributions;
use crate::tables;
use crate::types::{AssessmentInputs, ThreatCategory};
use crate::RiskQuantResult;

/// Bounds on the threat-concern frequency multiplier
pub const TEF_MULTIPLIER_MIN: f64 = 0.8;
pub const TEF_MULTIPLIER_MAX: f64 = 1.5;

/// Shape of the pre-control vulnerability prior, mean 1/3
pub const BASE_VULNERABILITY_ALPHA: f64 = 2.0;
pub const BASE_VULNERABILITY_BETA: f64 = 4.0;

/// Sampled vulnerability is kept strictly inside (0, 1)
pub const VULNERABILITY_FLOOR: f64 = 0.01;
pub const VULNERABILITY_CEILING: f64 = 0.99;

/// Log-scale spread of the primary loss draw
pub const PRIMARY_LOSS_SIGMA: f64 = 0.8;

/// Record-count scaling pivot and bounds
const RECORD_SCALE_PIVOT: f64 = 100_000.0;
const RECORD_SCALE_EXPONENT: f64 = 0.25;
const RECORD_SCALE_MIN: f64 = 0.5;
const RECORD_SCALE_MAX: f64 = 3.0;

/// Secondary loss as a share of primary, three-point estimate
pub const SECONDARY_RATIO_MIN: f64 = 0.15;
pub const SECONDARY_RATIO_MODE: f64 = 0.35;
pub const SECONDARY_RATIO_MAX: f64 = 0.85;

/// Share of secondary loss retained when cyber insurance is active
pub const INSURED_SECONDARY_RETENTION: f64 = 0.45;

// ---------------------------------------------------------------------------
// Threat event frequency
// ---------------------------------------------------------------------------

/// Sample annual threat event frequency for the organization.
///
/// Draws from the industry PERT range, then scales by the threat-concern
/// multiplier. Always strictly positive.
pub fn sample_tef<R: Rng>(inputs: &AssessmentInputs, rng: &mut R) -> RiskQuantResult<f64> {
    let profile = tables::industry_profile(&inputs.company.industry);
    let base = distributions::pert(profile.tef_min, profile.tef_mode, profile.tef_max, rng)?;
    Ok(base * threat_multiplier(&inputs.threats.top_concerns))
}

/// Frequency multiplier from the selected threat concerns.
///
/// The weighted average of concern weights over the baseline, clamped to
/// [0.8, 1.5]. An empty concern set yields 1.0.
pub fn threat_multiplier(concerns: &[ThreatCategory]) -> f64 {
    if concerns.is_empty() {
        return 1.0;
    }
    let total: f64 = concerns.iter().map(tables::threat_frequency_weight).sum();
    let average = total / concerns.len() as f64;
    (average / tables::THREAT_BASELINE_WEIGHT).clamp(TEF_MULTIPLIER_MIN, TEF_MULTIPLIER_MAX)
}

// ---------------------------------------------------------------------------
// Vulnerability
// ---------------------------------------------------------------------------

/// Sample the probability that a threat event becomes a loss event.
///
/// Draws the pre-control prior, then applies the multiplicative weight of
/// every active control. Result is clamped into (0, 1).
pub fn sample_vulnerability<R: Rng>(
    inputs: &AssessmentInputs,
    rng: &mut R,
) -> RiskQuantResult<f64> {
    let base = distributions::beta(BASE_VULNERABILITY_ALPHA, BASE_VULNERABILITY_BETA, rng)?;
    let reduced = tables::active_control_weights(&inputs.controls)
        .iter()
        .fold(base, |vulnerability, weight| vulnerability * weight);
    Ok(reduced.clamp(VULNERABILITY_FLOOR, VULNERABILITY_CEILING))
}

// ---------------------------------------------------------------------------
// Loss magnitude
// ---------------------------------------------------------------------------

/// Sample the direct cost of one loss event.
///
/// Log-normal around an industry median scaled by revenue band, region,
/// data sensitivity, and record count, with the cloud-exposure uplift
/// applied on top. Always strictly positive.
pub fn sample_primary_loss<R: Rng>(
    inputs: &AssessmentInputs,
    rng: &mut R,
) -> RiskQuantResult<f64> {
    let profile = tables::industry_profile(&inputs.company.industry);
    let median = profile.avg_breach_cost
        * tables::revenue_band_scale(&inputs.company.revenue_band)
        * tables::region_cost_factor(&inputs.company.region)
        * tables::data_sensitivity_factor(&inputs.data.data_types)
        * record_scale(inputs.data.record_count);
    let draw = distributions::log_normal(median.ln(), PRIMARY_LOSS_SIGMA, rng);
    Ok(draw * cloud_exposure_modifier(inputs.data.cloud_percentage))
}

/// Sample the indirect cost (response, notification, churn, fines) of one
/// loss event as a share of its primary loss. Cyber insurance retains only
/// the uninsured share. Always strictly positive for positive primary loss.
pub fn sample_secondary_loss<R: Rng>(
    inputs: &AssessmentInputs,
    primary_loss: f64,
    rng: &mut R,
) -> RiskQuantResult<f64> {
    let ratio = distributions::pert(
        SECONDARY_RATIO_MIN,
        SECONDARY_RATIO_MODE,
        SECONDARY_RATIO_MAX,
        rng,
    )?;
    let mut secondary = primary_loss * ratio;
    if inputs.controls.cyber_insurance {
        secondary *= INSURED_SECONDARY_RETENTION;
    }
    Ok(secondary)
}

/// Sublinear loss scaling with record count, relative to a 100k-record
/// pivot, clamped to [0.5, 3.0]. A zero count scales as one record.
pub fn record_scale(record_count: u64) -> f64 {
    let ratio = record_count.max(1) as f64 / RECORD_SCALE_PIVOT;
    ratio
        .powf(RECORD_SCALE_EXPONENT)
        .clamp(RECORD_SCALE_MIN, RECORD_SCALE_MAX)
}

/// Primary-loss uplift from cloud exposure, linear from 1.0 at 0% to
/// 1.12 at 100%. Out-of-range percentages are clamped.
pub fn cloud_exposure_modifier(cloud_percentage: f64) -> f64 {
    let share = (cloud_percentage / 100.0).clamp(0.0, 1.0);
    1.0 + tables::CLOUD_EXPOSURE_MAX_UPLIFT * share
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CompanyProfile, DataProfile, DataType, EmployeeBand, IncidentHistory, Industry, Region,
        RevenueBand, SecurityControls, ThreatProfile,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEED: u64 = 42;
    const SAMPLES: usize = 2_000;

    fn base_inputs() -> AssessmentInputs {
        AssessmentInputs {
            company: CompanyProfile {
                industry: Industry::Technology,
                revenue_band: RevenueBand::From50MTo250M,
                employee_band: EmployeeBand::Mid,
                region: Region::NorthAmerica,
                organization_name: None,
            },
            data: DataProfile {
                data_types: vec![DataType::PII, DataType::Credentials],
                record_count: 100_000,
                cloud_percentage: 50.0,
            },
            controls: SecurityControls {
                security_team: true,
                incident_response_plan: false,
                security_automation: false,
                mfa: true,
                penetration_testing: false,
                cyber_insurance: false,
            },
            threats: ThreatProfile {
                top_concerns: vec![ThreatCategory::Ransomware, ThreatCategory::Phishing],
                incident_history: IncidentHistory::TwoToFive,
            },
        }
    }

    fn mean_of<F>(mut sampler: F) -> f64
    where
        F: FnMut(&mut StdRng) -> f64,
    {
        let mut rng = StdRng::seed_from_u64(SEED);
        (0..SAMPLES).map(|_| sampler(&mut rng)).sum::<f64>() / SAMPLES as f64
    }

    #[test]
    fn test_tef_is_positive() {
        let inputs = base_inputs();
        let mut rng = StdRng::seed_from_u64(SEED);
        for _ in 0..SAMPLES {
            let tef = sample_tef(&inputs, &mut rng).unwrap();
            assert!(tef > 0.0, "TEF {} must be strictly positive", tef);
        }
    }

    #[test]
    fn test_tef_ransomware_exceeds_lost_assets() {
        let mut ransomware = base_inputs();
        ransomware.threats.top_concerns = vec![ThreatCategory::Ransomware];
        let mut lost_assets = base_inputs();
        lost_assets.threats.top_concerns = vec![ThreatCategory::LostStolenAssets];

        let ransomware_mean = mean_of(|rng| sample_tef(&ransomware, rng).unwrap());
        let lost_assets_mean = mean_of(|rng| sample_tef(&lost_assets, rng).unwrap());

        assert!(
            ransomware_mean > lost_assets_mean,
            "Ransomware mean {} should exceed lost-assets mean {}",
            ransomware_mean,
            lost_assets_mean
        );
    }

    #[test]
    fn test_threat_multiplier_empty_is_unit() {
        assert_eq!(threat_multiplier(&[]), 1.0);

        let mut inputs = base_inputs();
        inputs.threats.top_concerns.clear();
        let mut rng = StdRng::seed_from_u64(SEED);
        let tef = sample_tef(&inputs, &mut rng).unwrap();
        assert!(tef > 0.0);
    }

    #[test]
    fn test_threat_multiplier_stays_clamped() {
        // lost/stolen assets alone would fall below the floor
        let low = threat_multiplier(&[ThreatCategory::LostStolenAssets]);
        assert_eq!(low, TEF_MULTIPLIER_MIN);

        let combos: &[&[ThreatCategory]] = &[
            &[ThreatCategory::Ransomware],
            &[ThreatCategory::Ransomware, ThreatCategory::Phishing],
            &[
                ThreatCategory::InsiderThreat,
                ThreatCategory::DenialOfService,
                ThreatCategory::SupplyChain,
            ],
        ];
        for concerns in combos {
            let multiplier = threat_multiplier(concerns);
            assert!(
                (TEF_MULTIPLIER_MIN..=TEF_MULTIPLIER_MAX).contains(&multiplier),
                "Multiplier {} out of bounds",
                multiplier
            );
        }
    }

    #[test]
    fn test_vulnerability_stays_in_open_interval() {
        let inputs = base_inputs();
        let mut rng = StdRng::seed_from_u64(SEED);
        for _ in 0..SAMPLES {
            let vulnerability = sample_vulnerability(&inputs, &mut rng).unwrap();
            assert!(
                vulnerability > 0.0 && vulnerability < 1.0,
                "Vulnerability {} must lie in (0, 1)",
                vulnerability
            );
        }
    }

    #[test]
    fn test_controls_lower_mean_vulnerability() {
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

        let none_mean = mean_of(|rng| sample_vulnerability(&none, rng).unwrap());
        let all_mean = mean_of(|rng| sample_vulnerability(&all, rng).unwrap());

        assert!(
            all_mean < none_mean,
            "All controls active ({}) should be below none active ({})",
            all_mean,
            none_mean
        );
    }

    #[test]
    fn test_primary_loss_positive() {
        let inputs = base_inputs();
        let mut rng = StdRng::seed_from_u64(SEED);
        for _ in 0..SAMPLES {
            let loss = sample_primary_loss(&inputs, &mut rng).unwrap();
            assert!(loss > 0.0, "Primary loss {} must be strictly positive", loss);
        }
    }

    #[test]
    fn test_primary_loss_ignores_employee_band() {
        // headcount informs key drivers, not loss magnitude
        let mut micro = base_inputs();
        micro.company.employee_band = EmployeeBand::Micro;
        let mut enterprise = base_inputs();
        enterprise.company.employee_band = EmployeeBand::Enterprise;

        let mut micro_rng = StdRng::seed_from_u64(SEED);
        let mut enterprise_rng = StdRng::seed_from_u64(SEED);
        for _ in 0..200 {
            assert_eq!(
                sample_primary_loss(&micro, &mut micro_rng).unwrap(),
                sample_primary_loss(&enterprise, &mut enterprise_rng).unwrap()
            );
        }
    }

    #[test]
    fn test_cloud_exposure_raises_primary_loss_within_bound() {
        let mut grounded = base_inputs();
        grounded.data.cloud_percentage = 0.0;
        let mut all_cloud = base_inputs();
        all_cloud.data.cloud_percentage = 100.0;

        let grounded_mean = mean_of(|rng| sample_primary_loss(&grounded, rng).unwrap());
        let cloud_mean = mean_of(|rng| sample_primary_loss(&all_cloud, rng).unwrap());

        let uplift = cloud_mean / grounded_mean;
        assert!(uplift > 1.0, "Cloud exposure must raise loss, got {}x", uplift);
        assert!(uplift <= 1.13, "Cloud uplift {}x exceeds the bound", uplift);
    }

    #[test]
    fn test_cloud_modifier_is_linear_and_clamped() {
        assert_eq!(cloud_exposure_modifier(0.0), 1.0);
        assert_eq!(cloud_exposure_modifier(100.0), 1.12);
        assert!((cloud_exposure_modifier(50.0) - 1.06).abs() < 1e-12);
        assert_eq!(cloud_exposure_modifier(250.0), 1.12);
        assert_eq!(cloud_exposure_modifier(-10.0), 1.0);
    }

    #[test]
    fn test_insurance_reduces_secondary_loss() {
        let mut uninsured = base_inputs();
        uninsured.controls.cyber_insurance = false;
        let mut insured = base_inputs();
        insured.controls.cyber_insurance = true;
        let primary_loss = 1_000_000.0;

        let uninsured_mean =
            mean_of(|rng| sample_secondary_loss(&uninsured, primary_loss, rng).unwrap());
        let insured_mean =
            mean_of(|rng| sample_secondary_loss(&insured, primary_loss, rng).unwrap());

        assert!(
            insured_mean < uninsured_mean,
            "Insured mean {} should be below uninsured mean {}",
            insured_mean,
            uninsured_mean
        );
        assert!(insured_mean > 0.0);
    }

    #[test]
    fn test_record_scale_is_clamped_and_monotonic() {
        assert_eq!(record_scale(100_000), 1.0);
        assert!(record_scale(1_000) < record_scale(1_000_000));
        assert_eq!(record_scale(1), 0.5);
        assert_eq!(record_scale(0), record_scale(1));
        assert_eq!(record_scale(u64::MAX), 3.0);
    }
}
