use crate::comparison::domain::{AnalysisConfiguration, Metric, Payback, RoiMetrics};

/// RoiCalculator - savings of a vendor measured against a baseline cost
///
/// - total_savings = baseline_cost - vendor_cost
/// - annual_savings = total_savings / years
/// - percentage = total_savings / vendor_cost x 100
/// - payback = vendor_cost / (annual_savings / 12) months
///
/// A free vendor has no defined ROI percentage, and non-positive annual
/// savings never pay back.
pub struct RoiCalculator;

impl RoiCalculator {
    pub fn compute(
        vendor_cost: f64,
        config: &AnalysisConfiguration,
        baseline_cost: f64,
    ) -> RoiMetrics {
        let total_savings = baseline_cost - vendor_cost;
        let annual_savings = total_savings / f64::from(config.years());

        let percentage = Metric::ratio(total_savings, vendor_cost).map(|r| r * 100.0);

        let payback = if annual_savings <= 0.0 {
            Payback::NoPayback
        } else {
            Payback::Months(vendor_cost / (annual_savings / 12.0))
        };

        RoiMetrics {
            baseline_cost,
            total_savings,
            annual_savings,
            percentage,
            payback,
        }
    }
}
