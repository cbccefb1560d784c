//! Gordon-Loeb optimal security investment.

/// Share of expected loss that security spending can profitably offset
pub const BENEFIT_BOUND: f64 = 0.37;

/// Cap on security spend as a share of annual revenue
pub const REVENUE_CAP_SHARE: f64 = 0.05;

/// Optimal annual security spend under the Gordon-Loeb model:
/// min(0.37 * vulnerability * ale, 0.05 * revenue).
///
/// Returns 0 when vulnerability or ALE is non-positive; a non-positive
/// revenue caps the spend at 0. Stateless and independent of the
/// simulation loop.
pub fn optimal_spend(vulnerability: f64, ale: f64, revenue: f64) -> f64 {
    if !(vulnerability > 0.0) || !(ale > 0.0) {
        return 0.0;
    }
    let benefit_bound = BENEFIT_BOUND * vulnerability * ale;
    let revenue_cap = REVENUE_CAP_SHARE * revenue.max(0.0);
    benefit_bound.min(revenue_cap)
}
