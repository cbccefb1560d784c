//! Static reference data for the risk model.
//!
//! Breach-cost baselines and industry medians are derived from published
//! breach-cost research (IBM Cost of a Data Breach, annualized). All tables
//! are immutable and keyed by the closed input enumerations.

use crate::types::{
    DataType, Industry, Region, RevenueBand, SecurityControls, ThreatCategory,
};

// ---------------------------------------------------------------------------
// Industry reference data
// ---------------------------------------------------------------------------

/// Per-industry reference figures
#[derive(Debug, Clone)]
pub struct IndustryProfile {
    pub label: &'static str,
    /// Average cost of a single breach, USD
    pub avg_breach_cost: f64,
    /// Threat event frequency range, events per year
    pub tef_min: f64,
    pub tef_mode: f64,
    pub tef_max: f64,
    /// Median annualized loss expectancy among mid-market peers, USD
    pub median_ale: f64,
}

/// Look up the reference profile for an industry
pub fn industry_profile(industry: &Industry) -> IndustryProfile {
    match industry {
        Industry::Healthcare => IndustryProfile {
            label: "Healthcare",
            avg_breach_cost: 10_930_000.0,
            tef_min: 0.7,
            tef_mode: 1.8,
            tef_max: 4.5,
            median_ale: 1_800_000.0,
        },
        Industry::Financial => IndustryProfile {
            label: "Financial Services",
            avg_breach_cost: 5_900_000.0,
            tef_min: 0.9,
            tef_mode: 2.2,
            tef_max: 5.5,
            median_ale: 1_500_000.0,
        },
        Industry::Pharmaceuticals => IndustryProfile {
            label: "Pharmaceuticals",
            avg_breach_cost: 4_820_000.0,
            tef_min: 0.5,
            tef_mode: 1.3,
            tef_max: 3.4,
            median_ale: 1_050_000.0,
        },
        Industry::Technology => IndustryProfile {
            label: "Technology",
            avg_breach_cost: 4_660_000.0,
            tef_min: 0.6,
            tef_mode: 1.6,
            tef_max: 4.0,
            median_ale: 1_100_000.0,
        },
        Industry::Energy => IndustryProfile {
            label: "Energy",
            avg_breach_cost: 4_780_000.0,
            tef_min: 0.5,
            tef_mode: 1.3,
            tef_max: 3.5,
            median_ale: 1_000_000.0,
        },
        Industry::Industrial => IndustryProfile {
            label: "Industrial",
            avg_breach_cost: 4_730_000.0,
            tef_min: 0.5,
            tef_mode: 1.2,
            tef_max: 3.2,
            median_ale: 950_000.0,
        },
        Industry::ProfessionalServices => IndustryProfile {
            label: "Professional Services",
            avg_breach_cost: 4_470_000.0,
            tef_min: 0.5,
            tef_mode: 1.3,
            tef_max: 3.3,
            median_ale: 900_000.0,
        },
        Industry::Research => IndustryProfile {
            label: "Research",
            avg_breach_cost: 3_630_000.0,
            tef_min: 0.4,
            tef_mode: 1.1,
            tef_max: 2.8,
            median_ale: 680_000.0,
        },
        Industry::Entertainment => IndustryProfile {
            label: "Entertainment",
            avg_breach_cost: 3_620_000.0,
            tef_min: 0.4,
            tef_mode: 1.2,
            tef_max: 3.0,
            median_ale: 700_000.0,
        },
        Industry::Education => IndustryProfile {
            label: "Education",
            avg_breach_cost: 3_650_000.0,
            tef_min: 0.6,
            tef_mode: 1.7,
            tef_max: 4.2,
            median_ale: 850_000.0,
        },
        Industry::Transportation => IndustryProfile {
            label: "Transportation",
            avg_breach_cost: 4_180_000.0,
            tef_min: 0.4,
            tef_mode: 1.1,
            tef_max: 3.0,
            median_ale: 800_000.0,
        },
        Industry::Communications => IndustryProfile {
            label: "Communications",
            avg_breach_cost: 3_900_000.0,
            tef_min: 0.5,
            tef_mode: 1.2,
            tef_max: 3.1,
            median_ale: 780_000.0,
        },
        Industry::Consumer => IndustryProfile {
            label: "Consumer Goods",
            avg_breach_cost: 3_800_000.0,
            tef_min: 0.4,
            tef_mode: 1.1,
            tef_max: 2.9,
            median_ale: 720_000.0,
        },
        Industry::Media => IndustryProfile {
            label: "Media",
            avg_breach_cost: 3_580_000.0,
            tef_min: 0.4,
            tef_mode: 1.2,
            tef_max: 3.0,
            median_ale: 690_000.0,
        },
        Industry::Hospitality => IndustryProfile {
            label: "Hospitality",
            avg_breach_cost: 3_360_000.0,
            tef_min: 0.5,
            tef_mode: 1.4,
            tef_max: 3.6,
            median_ale: 650_000.0,
        },
        Industry::Retail => IndustryProfile {
            label: "Retail",
            avg_breach_cost: 2_960_000.0,
            tef_min: 0.6,
            tef_mode: 1.5,
            tef_max: 3.8,
            median_ale: 620_000.0,
        },
        Industry::PublicSector => IndustryProfile {
            label: "Public Sector",
            avg_breach_cost: 2_600_000.0,
            tef_min: 0.5,
            tef_mode: 1.4,
            tef_max: 3.5,
            median_ale: 450_000.0,
        },
    }
}

// ---------------------------------------------------------------------------
// Threat frequency weights
// ---------------------------------------------------------------------------

/// Weight of an unspecified threat mix. Concern weights are relative to this.
pub const THREAT_BASELINE_WEIGHT: f64 = 1.0;

/// Frequency weight of a threat category relative to the baseline mix
pub fn threat_frequency_weight(threat: &ThreatCategory) -> f64 {
    match threat {
        ThreatCategory::Ransomware => 1.45,
        ThreatCategory::Phishing => 1.30,
        ThreatCategory::StolenCredentials => 1.20,
        ThreatCategory::SupplyChain => 1.10,
        ThreatCategory::CloudMisconfiguration => 1.05,
        ThreatCategory::DenialOfService => 1.00,
        ThreatCategory::InsiderThreat => 0.90,
        ThreatCategory::LostStolenAssets => 0.70,
    }
}

// ---------------------------------------------------------------------------
// Control vulnerability weights
// ---------------------------------------------------------------------------

// Multiplicative reduction per active control. Cyber insurance does not
// reduce vulnerability; it transfers secondary loss instead.
pub const CONTROL_WEIGHT_MFA: f64 = 0.78;
pub const CONTROL_WEIGHT_AUTOMATION: f64 = 0.80;
pub const CONTROL_WEIGHT_SECURITY_TEAM: f64 = 0.85;
pub const CONTROL_WEIGHT_INCIDENT_RESPONSE: f64 = 0.88;
pub const CONTROL_WEIGHT_PEN_TESTING: f64 = 0.90;

/// Vulnerability-reduction weights of the active controls
pub fn active_control_weights(controls: &SecurityControls) -> Vec<f64> {
    let mut weights = Vec::new();
    if controls.mfa {
        weights.push(CONTROL_WEIGHT_MFA);
    }
    if controls.security_automation {
        weights.push(CONTROL_WEIGHT_AUTOMATION);
    }
    if controls.security_team {
        weights.push(CONTROL_WEIGHT_SECURITY_TEAM);
    }
    if controls.incident_response_plan {
        weights.push(CONTROL_WEIGHT_INCIDENT_RESPONSE);
    }
    if controls.penetration_testing {
        weights.push(CONTROL_WEIGHT_PEN_TESTING);
    }
    weights
}

// ---------------------------------------------------------------------------
// Company size and exposure factors
// ---------------------------------------------------------------------------

/// Midpoint revenue of a band, USD. Used for ratio computations.
pub fn revenue_band_midpoint(band: &RevenueBand) -> f64 {
    match band {
        RevenueBand::Under10M => 5_000_000.0,
        RevenueBand::From10MTo50M => 30_000_000.0,
        RevenueBand::From50MTo250M => 150_000_000.0,
        RevenueBand::From250MTo1B => 625_000_000.0,
        RevenueBand::Over1B => 2_500_000_000.0,
    }
}

/// Loss-magnitude scale of a revenue band relative to mid-market
pub fn revenue_band_scale(band: &RevenueBand) -> f64 {
    match band {
        RevenueBand::Under10M => 0.35,
        RevenueBand::From10MTo50M => 0.65,
        RevenueBand::From50MTo250M => 1.0,
        RevenueBand::From250MTo1B => 1.6,
        RevenueBand::Over1B => 2.4,
    }
}

/// Regional breach-cost factor relative to the European baseline
pub fn region_cost_factor(region: &Region) -> f64 {
    match region {
        Region::NorthAmerica => 1.5,
        Region::MiddleEastAfrica => 1.2,
        Region::Europe => 1.0,
        Region::Global => 1.0,
        Region::AsiaPacific => 0.9,
        Region::LatinAmerica => 0.6,
    }
}

/// Loss-magnitude factor for the most sensitive data type held.
/// An empty set yields 1.0.
pub fn data_sensitivity_factor(data_types: &[DataType]) -> f64 {
    data_types
        .iter()
        .map(|data_type| match data_type {
            DataType::PHI => 1.15,
            DataType::PCI => 1.12,
            DataType::FinancialRecords => 1.10,
            DataType::Credentials => 1.08,
            DataType::IntellectualProperty => 1.06,
            DataType::PII => 1.0,
        })
        .fold(1.0, f64::max)
}

/// Maximum primary-loss uplift at 100% cloud infrastructure.
/// IBM-derived bound; the modifier scales linearly from 0% cloud.
pub const CLOUD_EXPOSURE_MAX_UPLIFT: f64 = 0.12;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
