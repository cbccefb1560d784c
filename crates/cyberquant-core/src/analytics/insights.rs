//! Key-driver identification and recommendation text.
//!
//! Both generators are pure functions of the assessment inputs; the
//! recommendation builder also anchors its budget guidance on the computed
//! ALE and Gordon-Loeb figures.

use crate::analytics::statistics::format_compact_usd;
use crate::sampling::factors;
use crate::tables;
use crate::types::{
    AssessmentInputs, DriverImpact, EmployeeBand, IncidentHistory, KeyDriver, SecurityControls,
    ThreatCategory,
};

/// Identify the factors materially shaping the risk profile.
///
/// Industry exposure is always reported, so the result is never empty.
pub fn identify_key_drivers(inputs: &AssessmentInputs) -> Vec<KeyDriver> {
    let mut drivers = Vec::new();
    let profile = tables::industry_profile(&inputs.company.industry);

    let industry_impact = if profile.avg_breach_cost >= 5_000_000.0 {
        DriverImpact::High
    } else if profile.avg_breach_cost >= 4_000_000.0 {
        DriverImpact::Medium
    } else {
        DriverImpact::Low
    };
    drivers.push(KeyDriver {
        factor: "Industry exposure".to_string(),
        impact: industry_impact,
        description: format!(
            "{} breaches average {} per incident",
            profile.label,
            format_compact_usd(profile.avg_breach_cost)
        ),
    });

    let inactive = inactive_control_count(&inputs.controls);
    if inactive > 0 {
        let impact = if inactive >= 4 {
            DriverImpact::High
        } else if inactive >= 2 {
            DriverImpact::Medium
        } else {
            DriverImpact::Low
        };
        drivers.push(KeyDriver {
            factor: "Control gaps".to_string(),
            impact,
            description: format!(
                "{} of 6 baseline security controls are not in place",
                inactive
            ),
        });
    }

    let multiplier = factors::threat_multiplier(&inputs.threats.top_concerns);
    if multiplier >= 1.25 {
        drivers.push(KeyDriver {
            factor: "Threat landscape".to_string(),
            impact: DriverImpact::High,
            description: format!(
                "Selected threat concerns raise expected event frequency by {:.0}%",
                (multiplier - 1.0) * 100.0
            ),
        });
    } else if multiplier >= 1.1 {
        drivers.push(KeyDriver {
            factor: "Threat landscape".to_string(),
            impact: DriverImpact::Medium,
            description: format!(
                "Selected threat concerns raise expected event frequency by {:.0}%",
                (multiplier - 1.0) * 100.0
            ),
        });
    }

    match inputs.threats.incident_history {
        IncidentHistory::MoreThanFive => drivers.push(KeyDriver {
            factor: "Incident history".to_string(),
            impact: DriverImpact::High,
            description: "More than five incidents in three years signal recurring exposure"
                .to_string(),
        }),
        IncidentHistory::TwoToFive => drivers.push(KeyDriver {
            factor: "Incident history".to_string(),
            impact: DriverImpact::Medium,
            description: "Repeated incidents in the last three years".to_string(),
        }),
        IncidentHistory::One => drivers.push(KeyDriver {
            factor: "Incident history".to_string(),
            impact: DriverImpact::Low,
            description: "One prior incident in the last three years".to_string(),
        }),
        IncidentHistory::None => {}
    }

    let record_scale = factors::record_scale(inputs.data.record_count);
    if record_scale >= 2.0 {
        drivers.push(KeyDriver {
            factor: "Record volume".to_string(),
            impact: DriverImpact::High,
            description: format!(
                "Stored records scale per-incident cost by {:.1}x",
                record_scale
            ),
        });
    } else if record_scale >= 1.3 {
        drivers.push(KeyDriver {
            factor: "Record volume".to_string(),
            impact: DriverImpact::Medium,
            description: format!(
                "Stored records scale per-incident cost by {:.1}x",
                record_scale
            ),
        });
    }

    let data_factor = tables::data_sensitivity_factor(&inputs.data.data_types);
    if data_factor >= 1.12 {
        drivers.push(KeyDriver {
            factor: "Data sensitivity".to_string(),
            impact: DriverImpact::Medium,
            description: "Regulated record types (health or payment data) raise per-incident cost"
                .to_string(),
        });
    } else if data_factor > 1.0 {
        drivers.push(KeyDriver {
            factor: "Data sensitivity".to_string(),
            impact: DriverImpact::Low,
            description: "Sensitive record types raise per-incident cost".to_string(),
        });
    }

    if inputs.data.cloud_percentage >= 80.0 {
        drivers.push(KeyDriver {
            factor: "Cloud concentration".to_string(),
            impact: DriverImpact::Low,
            description: format!(
                "{:.0}% of infrastructure is cloud-hosted",
                inputs.data.cloud_percentage
            ),
        });
    }

    if inputs.company.employee_band == EmployeeBand::Enterprise {
        drivers.push(KeyDriver {
            factor: "Workforce scale".to_string(),
            impact: DriverImpact::Low,
            description: "A workforce of 10,000 or more widens the phishing and insider surface"
                .to_string(),
        });
    }

    drivers
}

/// Build actionable recommendations.
///
/// Each inactive control contributes exactly one entry, so the count grows
/// with the number of gaps. Context lines depend only on the threat and
/// data profile and the supplied figures.
pub fn generate_recommendations(
    inputs: &AssessmentInputs,
    ale: f64,
    gordon_loeb_spend: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let controls = &inputs.controls;

    if !controls.mfa {
        recommendations.push(
            "Roll out multi-factor authentication across all user and admin accounts".to_string(),
        );
    }
    if !controls.incident_response_plan {
        recommendations
            .push("Establish and rehearse a written incident response plan".to_string());
    }
    if !controls.security_team {
        recommendations.push(
            "Stand up a dedicated security function, in-house or via a managed provider"
                .to_string(),
        );
    }
    if !controls.security_automation {
        recommendations.push(
            "Deploy AI-driven detection and response tooling to cut containment time".to_string(),
        );
    }
    if !controls.penetration_testing {
        recommendations.push(
            "Commission annual penetration tests to surface exploitable weaknesses".to_string(),
        );
    }
    if !controls.cyber_insurance {
        recommendations.push(
            "Transfer residual risk with a cyber insurance policy sized to your exposure"
                .to_string(),
        );
    }

    if inputs
        .threats
        .top_concerns
        .contains(&ThreatCategory::Ransomware)
    {
        recommendations.push(
            "Maintain offline, regularly tested backups to blunt ransomware impact".to_string(),
        );
    }
    if inputs.data.cloud_percentage >= 50.0 {
        recommendations.push(
            "Review cloud configuration against a hardening benchmark such as CIS".to_string(),
        );
    }
    if matches!(
        inputs.threats.incident_history,
        IncidentHistory::TwoToFive | IncidentHistory::MoreThanFive
    ) {
        recommendations.push(
            "Run a root-cause review of prior incidents and close the findings".to_string(),
        );
    }

    if gordon_loeb_spend > 0.0 {
        recommendations.push(format!(
            "Budget around {} per year for security, in line with an expected annual loss of {}",
            format_compact_usd(gordon_loeb_spend),
            format_compact_usd(ale)
        ));
    }

    recommendations
}

fn inactive_control_count(controls: &SecurityControls) -> usize {
    [
        controls.security_team,
        controls.incident_response_plan,
        controls.security_automation,
        controls.mfa,
        controls.penetration_testing,
        controls.cyber_insurance,
    ]
    .iter()
    .filter(|active| !**active)
    .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
