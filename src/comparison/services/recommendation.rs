use crate::comparison::domain::{
    CalculationResult, Comparison, Recommendation, RecommendationScore,
};
use crate::comparison::policies::RecommendationWeights;

use super::risk_scorer::clamp_score;

/// Vendors needed before a recommendation is meaningful
pub const MIN_VENDORS_FOR_COMPARISON: usize = 2;

/// RecommendationEngine - multi-criteria ranking of the compared vendors
///
/// Criteria, each scaled to 0-100:
/// - cost: (1 - total / most expensive total) x 100
/// - ROI: ROI percentage / 10, capped at 100; missing ROI scores 0
/// - security: the vendor's security score
/// - deployment: fastest deployment days / this vendor's days x 100
///
/// Ties keep selection order.
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn recommend(
        results: &[CalculationResult],
        weights: &RecommendationWeights,
    ) -> Comparison<Recommendation> {
        if results.len() < MIN_VENDORS_FOR_COMPARISON {
            return Comparison::insufficient(format!(
                "a recommendation needs at least {} vendors (got {})",
                MIN_VENDORS_FOR_COMPARISON,
                results.len()
            ));
        }

        let max_total = results
            .iter()
            .map(|r| r.tco.total)
            .fold(0.0_f64, f64::max);
        let fastest_days = results
            .iter()
            .map(|r| r.timeline.time_to_value_days)
            .min()
            .unwrap_or(0);

        let mut ranking: Vec<RecommendationScore> = results
            .iter()
            .map(|r| {
                let cost = if max_total > 0.0 {
                    (1.0 - r.tco.total / max_total) * 100.0
                } else {
                    100.0
                };
                let roi = r
                    .roi
                    .as_available()
                    .and_then(|roi| roi.percentage.value())
                    .map(|pct| clamp_score(pct / 10.0))
                    .unwrap_or(0.0);
                let security = r.risk.security_score;
                let days = r.timeline.time_to_value_days;
                let deployment = if days == 0 {
                    100.0
                } else {
                    f64::from(fastest_days) / f64::from(days) * 100.0
                };

                RecommendationScore {
                    vendor_id: r.vendor_id.clone(),
                    cost,
                    roi,
                    security,
                    deployment,
                    total: cost * weights.cost
                        + roi * weights.roi
                        + security * weights.security
                        + deployment * weights.deployment,
                }
            })
            .collect();

        ranking.sort_by(|a, b| b.total.total_cmp(&a.total));

        let best = &ranking[0];
        let vendor_name = results
            .iter()
            .find(|r| r.vendor_id == best.vendor_id)
            .map(|r| r.vendor_name.clone())
            .unwrap_or_default();

        tracing::debug!(vendor = %best.vendor_id, score = best.total, "recommended vendor");

        Comparison::Available(Recommendation {
            vendor_id: best.vendor_id.clone(),
            vendor_name,
            ranking,
        })
    }
}
