//! Aggregation of raw trial losses into summary statistics, ratings,
//! histogram buckets, and the exceedance curve.

use std::cmp::Ordering;

use crate::error::RiskQuantError;
use crate::types::{AleSummary, DistributionBucket, ExceedancePoint, RiskRating};
use crate::RiskQuantResult;

/// ALE-to-revenue ratio thresholds, lower-inclusive
pub const RATING_MODERATE_RATIO: f64 = 0.01;
pub const RATING_HIGH_RATIO: f64 = 0.03;
pub const RATING_CRITICAL_RATIO: f64 = 0.07;

/// Number of equal-width histogram buckets
pub const DISTRIBUTION_BUCKET_COUNT: usize = 20;

/// Number of thresholds on the exceedance curve
pub const EXCEEDANCE_POINT_COUNT: usize = 50;

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Summarize a raw loss array into its headline statistics
pub fn summarize_ale(losses: &[f64]) -> RiskQuantResult<AleSummary> {
    if losses.is_empty() {
        return Err(RiskQuantError::InsufficientData(
            "Cannot summarize an empty loss array".to_string(),
        ));
    }
    let mut sorted = losses.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(AleSummary {
        mean,
        median: percentile_sorted(&sorted, 50.0),
        p10: percentile_sorted(&sorted, 10.0),
        p90: percentile_sorted(&sorted, 90.0),
        p95: percentile_sorted(&sorted, 95.0),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: variance.sqrt(),
    })
}

/// Linear-interpolated percentile over a pre-sorted slice
pub fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = percentile / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

// ---------------------------------------------------------------------------
// Risk rating
// ---------------------------------------------------------------------------

/// Classify the ALE-to-revenue ratio into a rating band.
///
/// Bands are lower-inclusive: under 1% Low, [1%, 3%) Moderate,
/// [3%, 7%) High, 7% and above Critical.
pub fn compute_risk_rating(ale: f64, revenue: f64) -> RiskQuantResult<RiskRating> {
    if !(revenue > 0.0) {
        return Err(RiskQuantError::DivisionByZero {
            context: "risk rating revenue".to_string(),
        });
    }
    if !(ale >= 0.0) {
        return Err(RiskQuantError::InvalidInput {
            field: "ale".to_string(),
            reason: "Must be a non-negative number".to_string(),
        });
    }

    let ratio = ale / revenue;
    let rating = if ratio >= RATING_CRITICAL_RATIO {
        RiskRating::Critical
    } else if ratio >= RATING_HIGH_RATIO {
        RiskRating::High
    } else if ratio >= RATING_MODERATE_RATIO {
        RiskRating::Moderate
    } else {
        RiskRating::Low
    };
    Ok(rating)
}

// ---------------------------------------------------------------------------
// Distribution buckets
// ---------------------------------------------------------------------------

/// Bin the raw losses into equal-width buckets.
///
/// Bucket probabilities are trial-count fractions and sum to 1 across the
/// histogram. A degenerate all-equal array yields a single full bucket.
pub fn build_distribution_buckets(losses: &[f64]) -> RiskQuantResult<Vec<DistributionBucket>> {
    if losses.is_empty() {
        return Err(RiskQuantError::InsufficientData(
            "Cannot bucket an empty loss array".to_string(),
        ));
    }

    let min = losses.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = losses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return Ok(vec![DistributionBucket {
            range_label: format_range_label(min, max),
            min_value: min,
            max_value: max,
            probability: 1.0,
        }]);
    }

    let width = (max - min) / DISTRIBUTION_BUCKET_COUNT as f64;
    let mut counts = vec![0usize; DISTRIBUTION_BUCKET_COUNT];
    for loss in losses {
        let mut idx = ((loss - min) / width) as usize;
        if idx >= DISTRIBUTION_BUCKET_COUNT {
            idx = DISTRIBUTION_BUCKET_COUNT - 1;
        }
        counts[idx] += 1;
    }

    let total = losses.len() as f64;
    let buckets = counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = min + i as f64 * width;
            let hi = if i == DISTRIBUTION_BUCKET_COUNT - 1 {
                max
            } else {
                lo + width
            };
            DistributionBucket {
                range_label: format_range_label(lo, hi),
                min_value: lo,
                max_value: hi,
                probability: *count as f64 / total,
            }
        })
        .collect();
    Ok(buckets)
}

// ---------------------------------------------------------------------------
// Exceedance curve
// ---------------------------------------------------------------------------

/// Build the loss exceedance curve P(loss >= threshold) over thresholds
/// evenly spanning the observed range.
///
/// Probabilities are monotonically non-increasing in the threshold.
pub fn build_exceedance_curve(losses: &[f64]) -> RiskQuantResult<Vec<ExceedancePoint>> {
    if losses.is_empty() {
        return Err(RiskQuantError::InsufficientData(
            "Cannot build an exceedance curve from an empty loss array".to_string(),
        ));
    }

    let mut sorted = losses.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let n = sorted.len() as f64;
    let step = (max - min) / (EXCEEDANCE_POINT_COUNT - 1) as f64;

    let mut points = Vec::with_capacity(EXCEEDANCE_POINT_COUNT);
    for i in 0..EXCEEDANCE_POINT_COUNT {
        let threshold = min + i as f64 * step;
        let below = sorted.partition_point(|v| *v < threshold);
        points.push(ExceedancePoint {
            loss: threshold,
            probability: (sorted.len() - below) as f64 / n,
        });
    }
    Ok(points)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Compact dollar formatting for labels, e.g. "$850K" or "$1.2M"
pub fn format_compact_usd(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

fn format_range_label(lo: f64, hi: f64) -> String {
    format!("{} - {}", format_compact_usd(lo), format_compact_usd(hi))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64 * 10.0).collect()
    }

    #[test]
    fn test_summarize_preserves_percentile_ordering() {
        let losses = ramp(5_000);
        let summary = summarize_ale(&losses).unwrap();

        assert!(summary.p10 <= summary.median);
        assert!(summary.median <= summary.p90);
        assert!(summary.p90 <= summary.p95);
        assert!(summary.min <= summary.p10);
        assert!(summary.p95 <= summary.max);
        assert!(summary.std_dev > 0.0);
    }

    #[test]
    fn test_summarize_rejects_empty_input() {
        assert!(summarize_ale(&[]).is_err());
    }

    #[test]
    fn test_percentile_interpolates_between_ranks() {
        let sorted = vec![10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile_sorted(&sorted, 0.0), 10.0);
        assert_eq!(percentile_sorted(&sorted, 100.0), 40.0);
        assert_eq!(percentile_sorted(&sorted, 50.0), 25.0);
    }

    #[test]
    fn test_risk_rating_bands() {
        let revenue = 100_000_000.0;
        assert_eq!(compute_risk_rating(100_000.0, revenue).unwrap(), RiskRating::Low);
        assert_eq!(
            compute_risk_rating(2_000_000.0, revenue).unwrap(),
            RiskRating::Moderate
        );
        assert_eq!(compute_risk_rating(5_000_000.0, revenue).unwrap(), RiskRating::High);
        assert_eq!(
            compute_risk_rating(10_000_000.0, revenue).unwrap(),
            RiskRating::Critical
        );
    }

    #[test]
    fn test_risk_rating_boundaries_are_lower_inclusive() {
        let revenue = 100_000_000.0;
        assert_eq!(
            compute_risk_rating(1_000_000.0, revenue).unwrap(),
            RiskRating::Moderate
        );
        assert_eq!(compute_risk_rating(3_000_000.0, revenue).unwrap(), RiskRating::High);
        assert_eq!(
            compute_risk_rating(7_000_000.0, revenue).unwrap(),
            RiskRating::Critical
        );
    }

    #[test]
    fn test_risk_rating_rejects_non_positive_revenue() {
        assert!(compute_risk_rating(1_000_000.0, 0.0).is_err());
        assert!(compute_risk_rating(1_000_000.0, -5.0).is_err());
        assert!(compute_risk_rating(-1.0, 100.0).is_err());
    }

    #[test]
    fn test_buckets_cover_range_and_sum_to_one() {
        let losses = ramp(2_000);
        let buckets = build_distribution_buckets(&losses).unwrap();

        assert_eq!(buckets.len(), DISTRIBUTION_BUCKET_COUNT);
        let total: f64 = buckets.iter().map(|b| b.probability).sum();
        assert!(
            (0.9..=1.1).contains(&total),
            "Bucket probabilities sum to {}, expected ~1",
            total
        );
        assert!((total - 1.0).abs() < 1e-10);

        for window in buckets.windows(2) {
            assert!(window[0].max_value <= window[1].min_value + 1e-9);
            assert!(window[0].min_value < window[0].max_value);
        }
    }

    #[test]
    fn test_buckets_handle_degenerate_input() {
        let losses = vec![500.0; 64];
        let buckets = build_distribution_buckets(&losses).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].probability, 1.0);
    }

    #[test]
    fn test_exceedance_curve_spans_high_to_low() {
        let losses = ramp(2_000);
        let curve = build_exceedance_curve(&losses).unwrap();

        assert_eq!(curve.len(), EXCEEDANCE_POINT_COUNT);
        assert!(
            curve[0].probability > 0.9,
            "First point probability {} should be near 1",
            curve[0].probability
        );
        assert!(
            curve[curve.len() - 1].probability < 0.1,
            "Last point probability {} should be near 0",
            curve[curve.len() - 1].probability
        );

        for window in curve.windows(2) {
            assert!(
                window[1].probability <= window[0].probability,
                "Exceedance probabilities must be non-increasing"
            );
            assert!(window[0].loss < window[1].loss);
        }
    }

    #[test]
    fn test_format_compact_usd() {
        assert_eq!(format_compact_usd(0.0), "$0");
        assert_eq!(format_compact_usd(750.0), "$750");
        assert_eq!(format_compact_usd(850_000.0), "$850K");
        assert_eq!(format_compact_usd(1_200_000.0), "$1.2M");
        assert_eq!(format_compact_usd(2_500_000_000.0), "$2.5B");
    }
}
