use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input enumerations
// ---------------------------------------------------------------------------

/// Industry sector, keyed to breach-cost and threat-frequency tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Healthcare,
    Financial,
    Pharmaceuticals,
    Technology,
    Energy,
    Industrial,
    ProfessionalServices,
    Research,
    Entertainment,
    Education,
    Transportation,
    Communications,
    Consumer,
    Media,
    Hospitality,
    Retail,
    PublicSector,
}

/// Annual revenue band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueBand {
    /// Under $10M
    Under10M,
    /// $10M to $50M
    From10MTo50M,
    /// $50M to $250M
    From50MTo250M,
    /// $250M to $1B
    From250MTo1B,
    /// Over $1B
    Over1B,
}

/// Employee headcount band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeBand {
    /// Fewer than 50
    Micro,
    /// 50 to 249
    Small,
    /// 250 to 999
    Mid,
    /// 1,000 to 9,999
    Large,
    /// 10,000 or more
    Enterprise,
}

/// Primary operating region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    MiddleEastAfrica,
    Global,
}

/// Categories of sensitive data held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    PII,
    PHI,
    PCI,
    FinancialRecords,
    IntellectualProperty,
    Credentials,
}

/// Threat concern categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatCategory {
    Ransomware,
    Phishing,
    InsiderThreat,
    SupplyChain,
    StolenCredentials,
    CloudMisconfiguration,
    DenialOfService,
    LostStolenAssets,
}

/// Prior security incidents over the last three years
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentHistory {
    None,
    One,
    TwoToFive,
    MoreThanFive,
}

// ---------------------------------------------------------------------------
// Assessment inputs
// ---------------------------------------------------------------------------

/// Organization profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub industry: Industry,
    pub revenue_band: RevenueBand,
    pub employee_band: EmployeeBand,
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

/// Data holdings profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataProfile {
    pub data_types: Vec<DataType>,
    /// Number of sensitive records held. Must be at least 1.
    pub record_count: u64,
    /// Share of infrastructure in the cloud, 0-100
    pub cloud_percentage: f64,
}

/// Security control posture. Each control independently reduces
/// sampled vulnerability except cyber insurance, which transfers
/// secondary loss instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityControls {
    pub security_team: bool,
    pub incident_response_plan: bool,
    /// AI-driven security automation
    pub security_automation: bool,
    pub mfa: bool,
    pub penetration_testing: bool,
    pub cyber_insurance: bool,
}

/// Threat landscape as assessed by the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatProfile {
    /// Up to three selected threat concerns. May be empty.
    pub top_concerns: Vec<ThreatCategory>,
    pub incident_history: IncidentHistory,
}

/// Complete input to a risk simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInputs {
    pub company: CompanyProfile,
    pub data: DataProfile,
    pub controls: SecurityControls,
    pub threats: ThreatProfile,
}

// ---------------------------------------------------------------------------
// Simulation results
// ---------------------------------------------------------------------------

/// Risk classification from the ALE-to-revenue ratio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Moderate,
    High,
    Critical,
}

/// Relative weight of a key risk driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverImpact {
    High,
    Medium,
    Low,
}

/// Summary statistics over the annual loss distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AleSummary {
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    /// Probable maximum loss
    pub p95: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// One bucket of the loss distribution histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub range_label: String,
    pub min_value: f64,
    pub max_value: f64,
    /// Fraction of trials landing in this bucket
    pub probability: f64,
}

/// One point on the loss exceedance curve: P(annual loss >= loss)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceedancePoint {
    pub loss: f64,
    pub probability: f64,
}

/// A factor materially shaping the simulated risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyDriver {
    pub factor: String,
    pub impact: DriverImpact,
    pub description: String,
}

/// Position of the simulated ALE against industry peers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub your_ale: f64,
    pub industry_median: f64,
    /// Share of peers with lower expected loss, 0-100
    pub percentile_rank: f64,
}

/// Full output of one risk simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResults {
    pub ale: AleSummary,
    pub risk_rating: RiskRating,
    /// Gordon-Loeb optimal annual security spend
    pub gordon_loeb_spend: f64,
    /// Mean sampled vulnerability across trials
    pub mean_vulnerability: f64,
    pub industry_benchmark: IndustryBenchmark,
    pub distribution_buckets: Vec<DistributionBucket>,
    pub exceedance_curve: Vec<ExceedancePoint>,
    pub key_drivers: Vec<KeyDriver>,
    pub recommendations: Vec<String>,
    /// Per-trial simulated annual losses, one per iteration. Callers
    /// forwarding results over the wire may strip this field.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub raw_losses: Vec<f64>,
    pub iterations: u32,
}

/// Side-by-side comparison of two simulated scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub baseline_mean_ale: f64,
    pub alternative_mean_ale: f64,
    pub mean_ale_delta: f64,
    /// Delta as a share of the baseline mean; 0 when the baseline is 0
    pub mean_ale_delta_pct: f64,
    pub p95_delta: f64,
    pub spend_delta: f64,
    pub baseline_rating: RiskRating,
    pub alternative_rating: RiskRating,
    pub rating_changed: bool,
}

// ---------------------------------------------------------------------------
// Output envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}
